//! Comparison summary structures

use crate::app::models::{Category, Distance, ObservationId};
use serde::Serialize;

/// A race picked out by the comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceRef {
    pub id: ObservationId,
    /// Display label of the race's table column
    pub label: String,
    /// Projected time at the reference distance in seconds
    pub time_seconds: f64,
}

/// Relative effort consistency across race results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    /// Distance whose projections were compared
    pub reference: Distance,
    /// Race implying the fastest equivalent time
    pub best: RaceRef,
    /// Race implying the slowest equivalent time
    pub worst: RaceRef,
    /// `(worst - best) / best`, never negative
    pub difference: f64,
    pub category: Category,
}

impl ComparisonSummary {
    /// Difference as a percentage
    pub fn difference_percent(&self) -> f64 {
        self.difference * 100.0
    }

    /// Projected time gap between worst and best in seconds
    pub fn time_gap(&self) -> f64 {
        self.worst.time_seconds - self.best.time_seconds
    }
}
