//! Relative effort consistency across race results
//!
//! Picks the race implying the best and the worst equivalent time at a
//! reference distance, and buckets the spread between them into a
//! [`Category`](crate::app::models::Category).
//!
//! - [`analyzer`] - Reference resolution and best/worst selection
//! - [`summary`] - Comparison summary types

pub mod analyzer;
pub mod summary;

#[cfg(test)]
mod tests;

pub use analyzer::{ConsistencyAnalyzer, analyze};
pub use summary::{ComparisonSummary, RaceRef};
