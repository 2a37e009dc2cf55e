//! Projection table of equivalent paces
//!
//! - [`table`] - Table construction, row/column access and long-form records
//! - [`chart_data`] - Polars chart frame and CSV/Parquet export

pub mod chart_data;
pub mod table;

#[cfg(test)]
mod tests;

pub use chart_data::{ChartFormat, chart_frame, write_chart_data};
pub use table::{ChartRecord, ProjectionCell, ProjectionColumn, ProjectionRow, ProjectionTable};
