//! Test fixtures for projection table testing

use crate::app::models::{Distance, Observation, ObservationId};

mod table_tests;

/// Shorthand for building an observation
pub fn race(slot: usize, distance: Distance, time_seconds: f64) -> Observation {
    Observation::new(ObservationId(slot), distance, time_seconds)
}

/// Mile in 6:00 and 10k in 45:00
pub fn mile_and_ten_k() -> Vec<Observation> {
    vec![
        race(1, Distance::Mile, 360.0),
        race(2, Distance::TenK, 2700.0),
    ]
}
