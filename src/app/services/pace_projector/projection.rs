//! Power-law time projection and pace conversion
//!
//! Projected time follows `t2 = t1 * (d2 / d1) ^ 1.06`. None of these
//! functions validate their inputs: distances and times must be strictly
//! positive, which callers guarantee by construction (catalog distances and
//! parsed race times).

use crate::app::models::Unit;
use crate::constants::{KILOMETERS_PER_MILE, METERS_PER_KILOMETER, RIEGEL_EXPONENT};

/// Project an observed time onto a target distance
///
/// # Arguments
/// * `observed_distance` - Distance of the known race in meters
/// * `observed_time` - Time of the known race in seconds
/// * `target_distance` - Distance to project onto in meters
pub fn project_time(observed_distance: f64, observed_time: f64, target_distance: f64) -> f64 {
    let distance_ratio = target_distance / observed_distance;
    observed_time * distance_ratio.powf(RIEGEL_EXPONENT)
}

/// Convert a time over a distance into seconds per unit distance
pub fn pace_from_time(time_seconds: f64, distance_meters: f64, unit: Unit) -> f64 {
    let per_kilometer = time_seconds / distance_meters * METERS_PER_KILOMETER;
    match unit {
        Unit::Kilometers => per_kilometer,
        Unit::Miles => per_kilometer * KILOMETERS_PER_MILE,
    }
}

/// Project one race onto each target distance and return the paces
///
/// The result has one pace per target, in the same order as `targets`.
pub fn project_pace_series(
    observed_distance: f64,
    observed_time: f64,
    targets: &[f64],
    unit: Unit,
) -> Vec<f64> {
    targets
        .iter()
        .map(|&target| {
            let projected = project_time(observed_distance, observed_time, target);
            pace_from_time(projected, target, unit)
        })
        .collect()
}
