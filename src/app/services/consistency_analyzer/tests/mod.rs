//! Test fixtures for consistency analysis

use crate::app::models::{Distance, Observation, ObservationId, Unit};
use crate::app::services::projection_table::ProjectionTable;

mod analyzer_tests;

pub fn race(slot: usize, distance: Distance, time_seconds: f64) -> Observation {
    Observation::new(ObservationId(slot), distance, time_seconds)
}

/// Build a table over `targets` in miles
pub fn table_of(targets: &[Distance], observations: &[Observation]) -> ProjectionTable {
    ProjectionTable::build(targets, observations, Unit::Miles).unwrap()
}
