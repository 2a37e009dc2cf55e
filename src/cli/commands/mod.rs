//! Command implementations for the race pace CLI
//!
//! Each command is implemented in its own module:
//! - `project`: Equivalent times and paces for one race
//! - `compare`: Projection table and consistency summary
//! - `distances`: Distance catalog listing
//! - `export`: Chart data export

pub mod compare;
pub mod distances;
pub mod export;
pub mod project;
pub mod shared;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Main command runner for the race pace CLI
///
/// Dispatches to the subcommand handler. Callers must check that a command
/// is present; `main` shows the help overview otherwise.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Project(project_args)) => project::run_project(project_args),
        Some(Commands::Compare(compare_args)) => compare::run_compare(compare_args),
        Some(Commands::Distances(distances_args)) => distances::run_distances(distances_args),
        Some(Commands::Export(export_args)) => export::run_export(export_args),
        None => anyhow::bail!("No command given; run with --help for usage"),
    }
}
