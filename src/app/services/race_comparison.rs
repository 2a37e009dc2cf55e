//! Race comparison pipeline
//!
//! Turns raw race entries into observations, projects them onto the
//! configured distances and summarises their consistency. Every call rebuilds
//! everything from its inputs.

use crate::app::models::{Distance, Observation, ObservationId};
use crate::app::services::consistency_analyzer::{ComparisonSummary, ConsistencyAnalyzer};
use crate::app::services::pace_projector::parse_time_string;
use crate::app::services::projection_table::ProjectionTable;
use crate::config::PaceConfig;
use crate::constants::MIN_RACES;
use crate::error::{PaceError, Result};
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// One race slot as entered: a distance and a possibly empty time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceInput {
    pub distance: Distance,
    pub time: String,
}

impl RaceInput {
    pub fn new(distance: Distance, time: impl Into<String>) -> Self {
        Self {
            distance,
            time: time.into(),
        }
    }
}

impl FromStr for RaceInput {
    type Err = PaceError;

    /// Parse `DISTANCE=TIME`, e.g. `5k=20:00`; the time may be left empty
    fn from_str(s: &str) -> Result<Self> {
        let (distance, time) = s.split_once('=').ok_or_else(|| {
            PaceError::configuration(format!(
                "Race '{}' must look like DISTANCE=TIME, e.g. 5k=20:00",
                s
            ))
        })?;

        Ok(Self {
            distance: distance.parse()?,
            time: time.trim().to_string(),
        })
    }
}

/// Everything derived from one set of race entries
#[derive(Debug, Clone, Serialize)]
pub struct RaceComparison {
    pub observations: Vec<Observation>,
    pub table: ProjectionTable,
    /// Present when at least two races have times
    pub summary: Option<ComparisonSummary>,
}

/// Parse race entries into observations, skipping blank slots
///
/// Slots are numbered from 1 in input order, so a skipped slot leaves a gap.
pub fn parse_observations(inputs: &[RaceInput]) -> Result<Vec<Observation>> {
    let mut observations = Vec::with_capacity(inputs.len());

    for (index, input) in inputs.iter().enumerate() {
        let slot = index + 1;
        match parse_time_string(&input.time).map_err(|e| e.in_race(slot))? {
            Some(0) => {
                return Err(
                    PaceError::invalid_time(&input.time, "race time must be greater than zero")
                        .in_race(slot),
                );
            }
            Some(seconds) => {
                observations.push(Observation::new(
                    ObservationId(slot),
                    input.distance,
                    seconds as f64,
                ));
            }
            None => warn!("Race {} ({}) has no time, skipping", slot, input.distance),
        }
    }

    Ok(observations)
}

/// Parse, project and compare a set of race entries
pub fn compare_races(config: &PaceConfig, inputs: &[RaceInput]) -> Result<RaceComparison> {
    config.validate()?;

    if inputs.len() > config.num_races {
        return Err(PaceError::configuration(format!(
            "{} races were entered but only {} are configured",
            inputs.len(),
            config.num_races
        )));
    }

    let observations = parse_observations(inputs)?;
    info!(
        "Comparing {} of {} race results over {} distances",
        observations.len(),
        inputs.len(),
        config.distances.len()
    );

    let table = ProjectionTable::build(&config.distances, &observations, config.unit)?;

    let summary = if observations.len() >= MIN_RACES {
        Some(ConsistencyAnalyzer::new(config.reference_distance).analyze(&table)?)
    } else {
        debug!(
            "Only {} race result(s); skipping consistency summary",
            observations.len()
        );
        None
    };

    Ok(RaceComparison {
        observations,
        table,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Category, Unit};

    fn inputs(entries: &[(Distance, &str)]) -> Vec<RaceInput> {
        entries
            .iter()
            .map(|(d, t)| RaceInput::new(*d, *t))
            .collect()
    }

    #[test]
    fn test_race_input_parsing() {
        let input: RaceInput = "5k=20:00".parse().unwrap();
        assert_eq!(input, RaceInput::new(Distance::FiveK, "20:00"));

        let blank: RaceInput = "Mile=".parse().unwrap();
        assert_eq!(blank.time, "");

        assert!("5k 20:00".parse::<RaceInput>().is_err());
        assert!("15k=1:00:00".parse::<RaceInput>().is_err());
    }

    #[test]
    fn test_blank_slots_are_skipped_not_zero_filled() {
        let observations = parse_observations(&inputs(&[
            (Distance::Mile, "6:00"),
            (Distance::FiveK, ""),
            (Distance::TenK, "45:00"),
        ]))
        .unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].id, ObservationId(1));
        assert_eq!(observations[1].id, ObservationId(3));
        assert_eq!(observations[1].time_seconds, 2700.0);
    }

    #[test]
    fn test_malformed_time_names_the_slot() {
        let err = parse_observations(&inputs(&[
            (Distance::Mile, "6:00"),
            (Distance::TenK, "45"),
        ]))
        .unwrap_err();

        assert!(matches!(err, PaceError::InvalidRace { slot: 2, .. }));
        assert!(err.to_string().starts_with("Race 2:"));
    }

    #[test]
    fn test_zero_time_rejected() {
        let err = parse_observations(&inputs(&[(Distance::Mile, "00:00")])).unwrap_err();
        assert!(matches!(err, PaceError::InvalidRace { slot: 1, .. }));
    }

    #[test]
    fn test_compare_races_end_to_end() {
        let comparison = compare_races(
            &PaceConfig::default(),
            &inputs(&[
                (Distance::Mile, "6:00"),
                (Distance::TenK, "45:00"),
                (Distance::FiveK, ""),
            ]),
        )
        .unwrap();

        assert_eq!(comparison.table.observation_count(), 2);
        let summary = comparison.summary.unwrap();
        assert_eq!(summary.reference, Distance::Marathon);
        assert_eq!(summary.best.label, "Mile");
        assert_eq!(summary.worst.label, "10k");
        assert_eq!(summary.category, Category::Large);
    }

    #[test]
    fn test_single_race_has_no_summary() {
        let comparison = compare_races(
            &PaceConfig::default().with_unit(Unit::Kilometers),
            &inputs(&[(Distance::FiveK, "20:00"), (Distance::TenK, "")]),
        )
        .unwrap();

        assert_eq!(comparison.table.observation_count(), 1);
        assert!(comparison.summary.is_none());
    }

    #[test]
    fn test_too_many_races_rejected() {
        let config = PaceConfig::default().with_num_races(2);
        let result = compare_races(
            &config,
            &inputs(&[
                (Distance::Mile, "6:00"),
                (Distance::FiveK, "20:00"),
                (Distance::TenK, "45:00"),
            ]),
        );
        assert!(matches!(result, Err(PaceError::Configuration { .. })));
    }

    #[test]
    fn test_invalid_config_rejected_before_parsing() {
        let config = PaceConfig::default().with_distances(vec![]);
        let result = compare_races(&config, &inputs(&[(Distance::Mile, "garbage")]));
        assert!(matches!(result, Err(PaceError::Configuration { .. })));
    }
}
