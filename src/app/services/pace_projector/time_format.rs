//! Race time parsing and formatting
//!
//! Race times are entered as `mm:ss` or `hh:mm:ss`. An empty entry means the
//! race slot was left blank and is reported as `None`, separately from a
//! malformed entry which is always an error.

use crate::constants::{MINUTES_PER_HOUR, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::{PaceError, Result};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+):)?(\d+):(\d+)$").expect("valid time pattern"));

/// Parse a race time into whole seconds
///
/// Returns `Ok(None)` for empty input. In `hh:mm:ss` form minutes must be
/// below 60; in `mm:ss` form minutes are unbounded. Seconds are always below 60.
pub fn parse_time_string(text: &str) -> Result<Option<u64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let captures = TIME_PATTERN.captures(trimmed).ok_or_else(|| {
        let fields = trimmed.split(':').count();
        let reason = if fields == 2 || fields == 3 {
            "fields must be whole numbers".to_string()
        } else {
            format!("expected mm:ss or hh:mm:ss, found {} field(s)", fields)
        };
        PaceError::invalid_time(trimmed, reason)
    })?;

    let field = |index: usize| -> Result<u64> {
        captures
            .get(index)
            .map_or(Ok(0), |m| m.as_str().parse::<u64>())
            .map_err(|e| PaceError::invalid_time(trimmed, e.to_string()))
    };

    let has_hours = captures.get(1).is_some();
    let hours = field(1)?;
    let minutes = field(2)?;
    let seconds = field(3)?;

    if seconds >= SECONDS_PER_MINUTE {
        return Err(PaceError::invalid_time(
            trimmed,
            format!("seconds must be below {}, found {}", SECONDS_PER_MINUTE, seconds),
        ));
    }
    if has_hours && minutes >= MINUTES_PER_HOUR {
        return Err(PaceError::invalid_time(
            trimmed,
            format!(
                "minutes must be below {} when hours are given, found {}",
                MINUTES_PER_HOUR, minutes
            ),
        ));
    }

    hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|h| minutes.checked_mul(SECONDS_PER_MINUTE).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .map(Some)
        .ok_or_else(|| PaceError::invalid_time(trimmed, "time is too large"))
}

/// Format a number of seconds as `mm:ss`, or `hh:mm:ss` when hours are present
///
/// Fractional seconds are truncated; negative and non-finite values format as
/// zero.
pub fn format_seconds(total_seconds: f64, force_hours: bool) -> String {
    let whole = if total_seconds.is_finite() {
        total_seconds as u64
    } else {
        0
    };
    let hours = whole / SECONDS_PER_HOUR;
    let minutes = (whole % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = whole % SECONDS_PER_MINUTE;

    if hours > 0 || force_hours {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Express a pace as a time of day so it can sit on a time axis
pub fn pace_chart_value(pace_seconds: f64) -> Result<NaiveTime> {
    if !pace_seconds.is_finite()
        || pace_seconds < 0.0
        || pace_seconds >= SECONDS_PER_DAY as f64
    {
        return Err(PaceError::InvalidPace {
            seconds: pace_seconds,
        });
    }

    NaiveTime::from_num_seconds_from_midnight_opt(pace_seconds as u32, 0).ok_or(
        PaceError::InvalidPace {
            seconds: pace_seconds,
        },
    )
}
