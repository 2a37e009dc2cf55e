//! Core data structures for race pace projection.
//!
//! Defines the distance catalog, pace units, race observations and the
//! severity categories used throughout the library.

use crate::constants::{LARGE_DIFFERENCE_THRESHOLD, MEDIUM_DIFFERENCE_THRESHOLD};
use crate::error::{PaceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard race distances supported by the projector
///
/// Distances are referenced by variant everywhere; the display name is only
/// resolved when presenting results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Distance {
    M1500,
    M1600,
    Mile,
    M3200,
    TwoMile,
    FiveK,
    TenK,
    TenMile,
    HalfMarathon,
    Marathon,
}

impl Distance {
    /// Full catalog ordered by physical length
    pub const ALL: [Distance; 10] = [
        Distance::M1500,
        Distance::M1600,
        Distance::Mile,
        Distance::M3200,
        Distance::TwoMile,
        Distance::FiveK,
        Distance::TenK,
        Distance::TenMile,
        Distance::HalfMarathon,
        Distance::Marathon,
    ];

    /// Distances selected when nothing else is configured
    pub const DEFAULT_SELECTION: [Distance; 5] = [
        Distance::Mile,
        Distance::FiveK,
        Distance::TenK,
        Distance::HalfMarathon,
        Distance::Marathon,
    ];

    /// Length of the distance in meters
    pub fn meters(&self) -> f64 {
        match self {
            Distance::M1500 => 1500.0,
            Distance::M1600 => 1600.0,
            Distance::Mile => 1609.0,
            Distance::M3200 => 3200.0,
            Distance::TwoMile => 3218.0,
            Distance::FiveK => 5000.0,
            Distance::TenK => 10000.0,
            Distance::TenMile => 16090.0,
            Distance::HalfMarathon => 21097.5,
            Distance::Marathon => 42195.0,
        }
    }

    /// Display name shown in tables and summaries
    pub fn name(&self) -> &'static str {
        match self {
            Distance::M1500 => "1500m",
            Distance::M1600 => "1600m",
            Distance::Mile => "Mile",
            Distance::M3200 => "3200m",
            Distance::TwoMile => "2 Mile",
            Distance::FiveK => "5k",
            Distance::TenK => "10k",
            Distance::TenMile => "10 Mile",
            Distance::HalfMarathon => "HM",
            Distance::Marathon => "FM",
        }
    }

    /// Alternative spellings accepted on input
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Distance::M1500 => &["1500"],
            Distance::M1600 => &["1600"],
            Distance::Mile => &["1mi", "1609"],
            Distance::M3200 => &["3200"],
            Distance::TwoMile => &["2mi", "2-mile", "3218"],
            Distance::FiveK => &["5000", "5km"],
            Distance::TenK => &["10000", "10km"],
            Distance::TenMile => &["10mi", "10-mile", "16090"],
            Distance::HalfMarathon => &["half", "half-marathon", "21097.5"],
            Distance::Marathon => &["marathon", "42195"],
        }
    }

    /// Look up a catalog entry by its exact meter value
    pub fn from_meters(meters: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.meters() == meters)
    }

    /// Comma-separated list of display names, for error messages and help
    pub fn catalog_names() -> String {
        Self::ALL
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distance {
    type Err = PaceError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| {
                d.name().eq_ignore_ascii_case(wanted)
                    || d.aliases().iter().any(|a| a.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| PaceError::UnknownDistance {
                name: wanted.to_string(),
                available: Self::catalog_names(),
            })
    }
}

impl TryFrom<String> for Distance {
    type Error = PaceError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Distance> for String {
    fn from(distance: Distance) -> Self {
        distance.name().to_string()
    }
}

/// Unit a pace is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "mi")]
    Miles,
    #[serde(rename = "km")]
    Kilometers,
}

impl Unit {
    /// Short label used after a pace, e.g. `/mi`
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Miles => "mi",
            Unit::Kilometers => "km",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = PaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(Unit::Miles),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(Unit::Kilometers)
            }
            other => Err(PaceError::UnknownUnit {
                name: other.to_string(),
            }),
        }
    }
}

/// Identity of a race result: its 1-based input slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObservationId(pub usize);

impl fmt::Display for ObservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One real race result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub id: ObservationId,
    pub distance: Distance,
    pub time_seconds: f64,
}

impl Observation {
    pub fn new(id: ObservationId, distance: Distance, time_seconds: f64) -> Self {
        Self {
            id,
            distance,
            time_seconds,
        }
    }
}

/// Severity bucket for the spread between best and worst relative efforts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Normal,
    Medium,
    Large,
}

impl Category {
    /// Classify a relative difference; each higher tier includes its lower bound
    pub fn from_difference(difference: f64) -> Self {
        if difference >= LARGE_DIFFERENCE_THRESHOLD {
            Category::Large
        } else if difference >= MEDIUM_DIFFERENCE_THRESHOLD {
            Category::Medium
        } else {
            Category::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Normal => "Normal",
            Category::Medium => "Medium",
            Category::Large => "Large",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
