//! Project command implementation
//!
//! Shows, for one race result, the equivalent finishing time and pace at
//! each selected distance.

use super::shared::{is_human, load_configuration, print_json, setup_logging};
use crate::app::models::{Distance, Observation, ObservationId, Unit};
use crate::app::services::pace_projector::{format_seconds, parse_time_string};
use crate::app::services::projection_table::ProjectionTable;
use crate::cli::args::ProjectArgs;
use anyhow::{Context, Result, bail};
use colored::*;
use serde::Serialize;
use tracing::info;

/// One line of the projection output
#[derive(Debug, Clone, Serialize)]
pub struct ProjectedRace {
    pub distance: Distance,
    pub time_seconds: f64,
    pub time: String,
    pub pace_seconds: f64,
    pub pace: String,
    pub unit: Unit,
}

/// Project a single race onto the configured distances
pub fn project_race(
    distance: Distance,
    time: &str,
    targets: &[Distance],
    unit: Unit,
) -> Result<Vec<ProjectedRace>> {
    let seconds = match parse_time_string(time)? {
        Some(0) | None => bail!("A race time greater than zero is required"),
        Some(seconds) => seconds,
    };

    let observation = Observation::new(ObservationId(1), distance, seconds as f64);
    let table = ProjectionTable::build(targets, &[observation], unit)?;

    Ok(table
        .rows()
        .iter()
        .map(|row| {
            let cell = row.cells[0];
            ProjectedRace {
                distance: row.distance,
                time_seconds: cell.time_seconds,
                time: format_seconds(cell.time_seconds, false),
                pace_seconds: cell.pace_seconds,
                pace: format_seconds(cell.pace_seconds, false),
                unit,
            }
        })
        .collect())
}

/// Run the project command
pub fn run_project(args: ProjectArgs) -> Result<()> {
    setup_logging(&args.common);
    info!("Projecting {} in {}", args.distance, args.time);

    let config = load_configuration(&args.common, |config| args.selection.apply(config))?;
    let projections = project_race(args.distance, &args.time, &config.distances, config.unit)
        .with_context(|| format!("Failed to project {} in {}", args.distance, args.time))?;

    if !is_human(&args.common) {
        return print_json(&projections);
    }

    println!(
        "{}",
        format!("Equivalent efforts for {} in {}", args.distance, args.time.trim())
            .bright_green()
            .bold()
    );
    println!();
    println!(
        "{}",
        format!("{:<10}{:>12}{:>12}", "Distance", "Time", format!("Pace/{}", config.unit))
            .bright_white()
            .bold()
    );
    for projected in &projections {
        println!(
            "{}{:>12}{:>12}",
            format!("{:<10}", projected.distance.name()).bright_cyan(),
            projected.time,
            projected.pace
        );
    }

    Ok(())
}
