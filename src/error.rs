//! Error handling for pace projection and comparison operations.
//!
//! Provides error types with context for time parsing, distance lookup,
//! configuration validation and chart data export failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Invalid race time '{input}': {reason}")]
    InvalidTime { input: String, reason: String },

    #[error("Race {slot}: {source}")]
    InvalidRace {
        slot: usize,
        #[source]
        source: Box<PaceError>,
    },

    #[error("Pace of {seconds} seconds cannot be represented as a chart time")]
    InvalidPace { seconds: f64 },

    #[error("Unknown distance '{name}'. Available distances: {available}")]
    UnknownDistance { name: String, available: String },

    #[error("Unknown unit '{name}' (expected 'mi' or 'km')")]
    UnknownUnit { name: String },

    #[error("At least 2 race results are needed for a comparison, found {found}")]
    InsufficientObservations { found: usize },

    #[error("Reference distance {distance} is not among the selected distances")]
    ReferenceNotSelected { distance: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to load config file: {path} - {reason}")]
    ConfigFile { path: PathBuf, reason: String },
}

impl PaceError {
    /// Create an invalid time error
    pub fn invalid_time(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTime {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Attach the 1-based race slot to an error raised while reading that slot
    pub fn in_race(self, slot: usize) -> Self {
        Self::InvalidRace {
            slot,
            source: Box::new(self),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PaceError>;
