//! Command-line argument definitions for race pace
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::{Distance, Unit};
use crate::app::services::projection_table::ChartFormat;
use crate::app::services::race_comparison::RaceInput;
use crate::config::PaceConfig;
use crate::error::{PaceError, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the race pace calculator
///
/// Projects race results onto other distances and compares how consistent
/// they are with one another.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "race-pace",
    version,
    about = "Compare equivalent-effort race paces across standard running distances",
    long_about = "Projects one or more race results onto standard running distances with the \
                  Riegel formula (t2 = t1 x (d2/d1)^1.06), shows the equivalent pace per mile or \
                  kilometer, and reports which result is the strongest and weakest relative effort."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Equivalent times and paces for a single race result
    Project(ProjectArgs),
    /// Projection table and consistency summary for several race results
    Compare(CompareArgs),
    /// List the supported race distances
    Distances(DistancesArgs),
    /// Write long-form chart data (CSV or Parquet)
    Export(ExportArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file with default distances, unit, number of races
    /// and reference distance. If not specified, looks for
    /// ~/.config/race-pace/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Distance selection and unit overrides
#[derive(Debug, Clone, ClapArgs)]
pub struct SelectionArgs {
    /// Target distances to project onto (comma-separated list)
    ///
    /// Defaults to Mile, 5k, 10k, HM, FM.
    #[arg(
        short = 't',
        long = "targets",
        value_name = "LIST",
        help = "Comma-separated list of target distances"
    )]
    pub targets: Option<DistanceList>,

    /// Unit for paces: mi or km
    #[arg(short = 'u', long = "unit", value_name = "UNIT", help = "Unit for paces (mi or km)")]
    pub unit: Option<Unit>,
}

/// Arguments for the project command
#[derive(Debug, Clone, Parser)]
pub struct ProjectArgs {
    /// Distance of the race that was run
    #[arg(short = 'd', long = "distance", value_name = "DISTANCE")]
    pub distance: Distance,

    /// Finishing time as mm:ss or hh:mm:ss
    #[arg(short = 'T', long = "time", value_name = "TIME")]
    pub time: String,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the compare command
#[derive(Debug, Clone, Parser)]
pub struct CompareArgs {
    /// Race results as DISTANCE=TIME, e.g. `--race 5k=20:00 --race Mile=5:40`
    ///
    /// An empty time (`--race 10k=`) keeps the slot but skips the race.
    #[arg(
        short = 'r',
        long = "race",
        value_name = "DISTANCE=TIME",
        required = true,
        help = "Race result as DISTANCE=TIME (repeat for each race)"
    )]
    pub races: Vec<RaceInput>,

    /// Number of race result slots (2 to 5)
    #[arg(short = 'n', long = "num-races", value_name = "COUNT")]
    pub num_races: Option<usize>,

    /// Distance the consistency summary compares at
    ///
    /// Defaults to the last selected target distance.
    #[arg(long = "reference", value_name = "DISTANCE")]
    pub reference: Option<Distance>,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the distances command
#[derive(Debug, Clone, Parser)]
pub struct DistancesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Race results as DISTANCE=TIME
    #[arg(
        short = 'r',
        long = "race",
        value_name = "DISTANCE=TIME",
        required = true,
        help = "Race result as DISTANCE=TIME (repeat for each race)"
    )]
    pub races: Vec<RaceInput>,

    /// Output file for chart data
    ///
    /// Defaults to ./paces.csv (or ./paces.parquet with --format parquet).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// File format; inferred from the output extension when omitted
    #[arg(long = "format", value_enum)]
    pub format: Option<ExportFormat>,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Chart data file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Parquet,
}

impl From<ExportFormat> for ChartFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Csv => ChartFormat::Csv,
            ExportFormat::Parquet => ChartFormat::Parquet,
        }
    }
}

/// Wrapper for parsing comma-separated distance lists
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceList {
    pub distances: Vec<Distance>,
}

impl FromStr for DistanceList {
    type Err = PaceError;

    fn from_str(s: &str) -> Result<Self> {
        let distances = s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Distance::from_str)
            .collect::<Result<Vec<_>>>()?;

        if distances.is_empty() {
            return Err(PaceError::configuration("Distance list cannot be empty"));
        }

        Ok(DistanceList { distances })
    }
}

impl CommonArgs {
    /// Get log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl SelectionArgs {
    /// Apply command-line overrides on top of file/default configuration
    pub fn apply(&self, mut config: PaceConfig) -> PaceConfig {
        if let Some(targets) = &self.targets {
            config.distances = targets.distances.clone();
        }
        if let Some(unit) = self.unit {
            config.unit = unit;
        }
        config
    }
}

impl CompareArgs {
    /// Apply compare-specific overrides on top of the selection overrides
    pub fn apply(&self, config: PaceConfig) -> PaceConfig {
        let mut config = self.selection.apply(config);
        if let Some(num_races) = self.num_races {
            config.num_races = num_races;
        }
        if let Some(reference) = self.reference {
            config.reference_distance = Some(reference);
        }
        config
    }
}

impl ExportArgs {
    /// Resolve the output path and file format
    pub fn resolve_output(&self) -> Result<(PathBuf, ChartFormat)> {
        use crate::constants::chart_data_filename;

        let explicit = self.format.map(ChartFormat::from);
        match &self.output_path {
            Some(path) => {
                let format = match explicit.or_else(|| ChartFormat::from_path(path)) {
                    Some(format) => format,
                    None => {
                        return Err(PaceError::configuration(format!(
                            "Cannot infer chart format from {}; pass --format csv or --format parquet",
                            path.display()
                        )));
                    }
                };
                Ok((path.clone(), format))
            }
            None => {
                let format = explicit.unwrap_or_default();
                Ok((
                    PathBuf::from(chart_data_filename("paces", format.extension())),
                    format,
                ))
            }
        }
    }
}
