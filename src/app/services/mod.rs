//! Core business logic services

pub mod consistency_analyzer;
pub mod pace_projector;
pub mod projection_table;
pub mod race_comparison;
