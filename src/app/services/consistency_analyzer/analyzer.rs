//! Best/worst relative effort selection

use super::summary::{ComparisonSummary, RaceRef};
use crate::app::models::{Category, Distance};
use crate::app::services::projection_table::ProjectionTable;
use crate::constants::MIN_RACES;
use crate::error::{PaceError, Result};
use tracing::debug;

/// Compares the races of a projection table at one reference distance
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyAnalyzer {
    reference: Option<Distance>,
}

impl ConsistencyAnalyzer {
    /// Create an analyzer; `None` compares at the table's last distance
    pub fn new(reference: Option<Distance>) -> Self {
        Self { reference }
    }

    /// Resolve the reference distance for a table
    pub fn reference_for(&self, table: &ProjectionTable) -> Result<Distance> {
        match self.reference {
            Some(distance) if table.row(distance).is_some() => Ok(distance),
            Some(distance) => Err(PaceError::ReferenceNotSelected {
                distance: distance.name().to_string(),
            }),
            None => table
                .rows()
                .last()
                .map(|r| r.distance)
                .ok_or_else(|| PaceError::configuration("Projection table has no distances")),
        }
    }

    pub fn analyze(&self, table: &ProjectionTable) -> Result<ComparisonSummary> {
        let reference = self.reference_for(table)?;
        analyze(table, reference)
    }
}

/// Summarise how consistent the races are at `reference`
///
/// Best is the column with the lowest projected time; worst is the highest
/// among the remaining columns. The first column wins ties in both cases.
pub fn analyze(table: &ProjectionTable, reference: Distance) -> Result<ComparisonSummary> {
    let found = table.observation_count();
    if found < MIN_RACES {
        return Err(PaceError::InsufficientObservations { found });
    }

    let row = table
        .row(reference)
        .ok_or_else(|| PaceError::ReferenceNotSelected {
            distance: reference.name().to_string(),
        })?;
    let times = row.times();

    let mut best_index = 0;
    for (index, &time) in times.iter().enumerate().skip(1) {
        if time < times[best_index] {
            best_index = index;
        }
    }

    let mut worst_index: Option<usize> = None;
    for (index, &time) in times.iter().enumerate() {
        if index == best_index {
            continue;
        }
        match worst_index {
            Some(current) if time <= times[current] => {}
            _ => worst_index = Some(index),
        }
    }
    // Two or more columns guarantee a remaining column
    let worst_index = worst_index.ok_or(PaceError::InsufficientObservations { found })?;

    let best_time = times[best_index];
    let worst_time = times[worst_index];
    let difference = (worst_time - best_time) / best_time;
    let category = Category::from_difference(difference);

    let race_ref = |index: usize| {
        let column = &table.columns()[index];
        RaceRef {
            id: column.observation.id,
            label: column.label.clone(),
            time_seconds: times[index],
        }
    };

    debug!(
        "Compared {} races at {}: best {} worst {} difference {:.4} ({})",
        found,
        reference,
        table.columns()[best_index].label,
        table.columns()[worst_index].label,
        difference,
        category
    );

    Ok(ComparisonSummary {
        reference,
        best: race_ref(best_index),
        worst: race_ref(worst_index),
        difference,
        category,
    })
}
