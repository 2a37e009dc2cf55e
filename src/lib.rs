//! Race Pace Library
//!
//! A Rust library for projecting race results onto other running distances
//! with the Riegel power-law model and comparing how consistent a runner's
//! results are with one another.
//!
//! This library provides tools for:
//! - Parsing race times entered as `mm:ss` or `hh:mm:ss`
//! - Projecting equivalent-effort times and paces per mile or kilometer
//! - Building projection tables across a selection of standard distances
//! - Picking the best and worst relative efforts and classifying their spread
//! - Exporting long-form chart data to CSV or Parquet

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Category, Distance, Observation, ObservationId, Unit};
pub use app::services::consistency_analyzer::ComparisonSummary;
pub use app::services::projection_table::ProjectionTable;
pub use app::services::race_comparison::{RaceComparison, RaceInput, compare_races};
pub use config::PaceConfig;
pub use error::{PaceError, Result};
