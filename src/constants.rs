//! Application constants for race pace projection
//!
//! This module contains the model constants, default values and limits
//! used throughout the race pace crate.

// =============================================================================
// Projection Model
// =============================================================================

/// Fatigue-scaling exponent of the power-law projection (Riegel)
pub const RIEGEL_EXPONENT: f64 = 1.06;

/// Meters in one kilometer, used to express pace per kilometer
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Kilometers per mile used for the per-mile pace conversion
pub const KILOMETERS_PER_MILE: f64 = 1.609;

// =============================================================================
// Consistency Thresholds
// =============================================================================

/// Relative spread at or above which a comparison is `Medium`
pub const MEDIUM_DIFFERENCE_THRESHOLD: f64 = 0.025;

/// Relative spread at or above which a comparison is `Large`
pub const LARGE_DIFFERENCE_THRESHOLD: f64 = 0.05;

// =============================================================================
// Race Result Limits
// =============================================================================

/// Smallest number of race results a comparison can be configured for
pub const MIN_RACES: usize = 2;

/// Largest number of race results a comparison can be configured for
pub const MAX_RACES: usize = 5;

/// Number of race result slots when nothing else is configured
pub const DEFAULT_NUM_RACES: usize = 3;

// =============================================================================
// Time Formatting
// =============================================================================

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const MINUTES_PER_HOUR: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3600;
pub const SECONDS_PER_DAY: u64 = 86_400;

// =============================================================================
// Configuration Files
// =============================================================================

/// Directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "race-pace";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the output filename for exported chart data
pub fn chart_data_filename(stem: &str, extension: &str) -> String {
    format!("{}.{}", stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_ordered() {
        assert!(MEDIUM_DIFFERENCE_THRESHOLD < LARGE_DIFFERENCE_THRESHOLD);
        assert!(MIN_RACES <= DEFAULT_NUM_RACES && DEFAULT_NUM_RACES <= MAX_RACES);
    }

    #[test]
    fn test_chart_data_filename() {
        assert_eq!(chart_data_filename("paces", "csv"), "paces.csv");
        assert_eq!(chart_data_filename("paces", "parquet"), "paces.parquet");
    }
}
