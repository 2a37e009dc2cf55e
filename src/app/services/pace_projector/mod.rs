//! Equivalent-effort pace projection
//!
//! Converts one race result into equivalent times at other distances with the
//! power-law fatigue model, and moves times between seconds and `mm:ss` /
//! `hh:mm:ss` text.
//!
//! ## Architecture
//!
//! - [`projection`] - Time projection and pace series conversion
//! - [`time_format`] - Race time parsing, formatting and chart time values
//!
//! ## Usage
//!
//! ```rust
//! use race_pace::app::models::Unit;
//! use race_pace::app::services::pace_projector::{format_seconds, parse_time_string, project_time};
//!
//! # fn example() -> race_pace::Result<()> {
//! let five_k = parse_time_string("20:00")?.expect("time present");
//! let ten_k = project_time(5000.0, five_k as f64, 10000.0);
//! println!("10k equivalent: {}", format_seconds(ten_k, false));
//! # Ok(())
//! # }
//! ```

pub mod projection;
pub mod time_format;

#[cfg(test)]
mod tests;

pub use projection::{pace_from_time, project_pace_series, project_time};
pub use time_format::{format_seconds, pace_chart_value, parse_time_string};
