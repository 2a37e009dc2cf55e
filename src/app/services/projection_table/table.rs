//! Projection table construction
//!
//! Rows are target distances in the configured order; columns are race
//! observations keyed by their identity. The table is rebuilt from scratch on
//! every comparison.

use crate::app::models::{Distance, Observation, ObservationId, Unit};
use crate::app::services::pace_projector::{
    format_seconds, pace_chart_value, project_pace_series, project_time,
};
use crate::error::{PaceError, Result};
use chrono::NaiveTime;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Projected time and pace for one (target distance, observation) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionCell {
    /// Equivalent time over the target distance in seconds
    pub time_seconds: f64,
    /// Equivalent pace in seconds per unit distance
    pub pace_seconds: f64,
}

/// Source observation of a table column with its display label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionColumn {
    pub observation: Observation,
    pub label: String,
}

/// All projections onto one target distance, in column order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub distance: Distance,
    pub cells: Vec<ProjectionCell>,
}

impl ProjectionRow {
    /// Projected times in column order
    pub fn times(&self) -> Vec<f64> {
        self.cells.iter().map(|c| c.time_seconds).collect()
    }
}

/// One point of the long-form chart data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRecord {
    pub distance: Distance,
    pub race: String,
    pub pace_seconds: f64,
    pub pace: String,
    /// Pace as a time of day; `None` when the pace does not fit within a day
    pub chart_time: Option<NaiveTime>,
}

/// Projected paces of every observation at every selected distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionTable {
    unit: Unit,
    columns: Vec<ProjectionColumn>,
    rows: Vec<ProjectionRow>,
}

impl ProjectionTable {
    /// Project each observation onto each target distance
    ///
    /// An empty target list or a repeated observation id is rejected. An empty
    /// observation list yields a table with rows but no columns.
    pub fn build(targets: &[Distance], observations: &[Observation], unit: Unit) -> Result<Self> {
        if targets.is_empty() {
            return Err(PaceError::configuration(
                "At least one target distance must be selected",
            ));
        }

        let mut seen = HashSet::new();
        for observation in observations {
            if !seen.insert(observation.id) {
                return Err(PaceError::configuration(format!(
                    "Race {} appears more than once",
                    observation.id
                )));
            }
        }

        let target_meters: Vec<f64> = targets.iter().map(|d| d.meters()).collect();

        // One pace series per observation, transposed into rows below
        let pace_columns: Vec<Vec<f64>> = observations
            .iter()
            .map(|o| {
                project_pace_series(o.distance.meters(), o.time_seconds, &target_meters, unit)
            })
            .collect();

        let rows = targets
            .iter()
            .enumerate()
            .map(|(row_index, &distance)| ProjectionRow {
                distance,
                cells: observations
                    .iter()
                    .zip(&pace_columns)
                    .map(|(o, paces)| ProjectionCell {
                        time_seconds: project_time(
                            o.distance.meters(),
                            o.time_seconds,
                            distance.meters(),
                        ),
                        pace_seconds: paces[row_index],
                    })
                    .collect(),
            })
            .collect();

        let labels = column_labels(observations);
        let columns = observations
            .iter()
            .zip(labels)
            .map(|(&observation, label)| ProjectionColumn { observation, label })
            .collect();

        debug!(
            "Built projection table: {} distances x {} races ({})",
            targets.len(),
            observations.len(),
            unit
        );

        Ok(Self {
            unit,
            columns,
            rows,
        })
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn columns(&self) -> &[ProjectionColumn] {
        &self.columns
    }

    pub fn rows(&self) -> &[ProjectionRow] {
        &self.rows
    }

    /// Target distances in row order
    pub fn distances(&self) -> Vec<Distance> {
        self.rows.iter().map(|r| r.distance).collect()
    }

    pub fn observation_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row(&self, distance: Distance) -> Option<&ProjectionRow> {
        self.rows.iter().find(|r| r.distance == distance)
    }

    /// Index of the column holding an observation
    pub fn column_index(&self, id: ObservationId) -> Option<usize> {
        self.columns.iter().position(|c| c.observation.id == id)
    }

    pub fn cell(&self, distance: Distance, id: ObservationId) -> Option<&ProjectionCell> {
        let index = self.column_index(id)?;
        self.row(distance).and_then(|r| r.cells.get(index))
    }

    /// Long-form records, one per (distance, race), ordered by distance then race
    pub fn chart_records(&self) -> Vec<ChartRecord> {
        let mut records = Vec::with_capacity(self.rows.len() * self.columns.len());
        for row in &self.rows {
            for (column, cell) in self.columns.iter().zip(&row.cells) {
                records.push(ChartRecord {
                    distance: row.distance,
                    race: column.label.clone(),
                    pace_seconds: cell.pace_seconds,
                    pace: format_seconds(cell.pace_seconds, false),
                    chart_time: pace_chart_value(cell.pace_seconds).ok(),
                });
            }
        }
        records
    }
}

/// Label each column by its source distance, adding the race number when two
/// races share a distance
fn column_labels(observations: &[Observation]) -> Vec<String> {
    observations
        .iter()
        .map(|o| {
            let shared = observations
                .iter()
                .filter(|other| other.distance == o.distance)
                .count()
                > 1;
            if shared {
                format!("{} ({})", o.distance.name(), o.id)
            } else {
                o.distance.name().to_string()
            }
        })
        .collect()
}
