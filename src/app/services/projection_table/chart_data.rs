//! Chart data export
//!
//! Flattens a projection table into the long form a time-axis chart consumes
//! (one row per distance and race) and writes it with polars.

use super::table::ProjectionTable;
use crate::error::{PaceError, Result};
use chrono::Timelike;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// File formats chart data can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    #[default]
    Csv,
    Parquet,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Csv => "csv",
            ChartFormat::Parquet => "parquet",
        }
    }

    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(ChartFormat::Csv),
            "parquet" => Some(ChartFormat::Parquet),
            _ => None,
        }
    }
}

/// Build the long-form chart frame
///
/// Columns: `Distance`, `Meters`, `Race`, `PaceSeconds`, `Pace`, `PaceTime`.
/// `PaceTime` is a polars `Time` holding the pace as a time of day, null for
/// paces of a day or more.
pub fn chart_frame(table: &ProjectionTable) -> Result<DataFrame> {
    let records = table.chart_records();

    let distances: Vec<&str> = records.iter().map(|r| r.distance.name()).collect();
    let meters: Vec<f64> = records.iter().map(|r| r.distance.meters()).collect();
    let races: Vec<&str> = records.iter().map(|r| r.race.as_str()).collect();
    let pace_seconds: Vec<f64> = records.iter().map(|r| r.pace_seconds).collect();
    let paces: Vec<&str> = records.iter().map(|r| r.pace.as_str()).collect();
    let pace_nanos: Vec<Option<i64>> = records
        .iter()
        .map(|r| {
            r.chart_time
                .map(|t| i64::from(t.num_seconds_from_midnight()) * NANOS_PER_SECOND)
        })
        .collect();

    let mut df = df!(
        "Distance" => distances,
        "Meters" => meters,
        "Race" => races,
        "PaceSeconds" => pace_seconds,
        "Pace" => paces,
    )?;

    let pace_time = Series::new("PaceTime".into(), pace_nanos).cast(&DataType::Time)?;
    df.with_column(pace_time)?;

    debug!("Chart frame shape: {:?}", df.shape());
    Ok(df)
}

/// Write the chart data for a table, returning the number of rows written
pub fn write_chart_data(table: &ProjectionTable, path: &Path, format: ChartFormat) -> Result<usize> {
    if table.observation_count() == 0 {
        return Err(PaceError::configuration(
            "No race results to export; enter at least one race time",
        ));
    }

    let mut df = chart_frame(table)?;
    let file = std::fs::File::create(path)?;

    match format {
        ChartFormat::Csv => {
            CsvWriter::new(file).include_header(true).finish(&mut df)?;
        }
        ChartFormat::Parquet => {
            ParquetWriter::new(file).finish(&mut df)?;
        }
    }

    info!(
        "Wrote {} chart rows to {} ({})",
        df.height(),
        path.display(),
        format.extension()
    );
    Ok(df.height())
}
