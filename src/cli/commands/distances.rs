//! Distances command implementation

use super::shared::{is_human, print_json, setup_logging};
use crate::app::models::Distance;
use crate::cli::args::DistancesArgs;
use anyhow::Result;
use colored::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CatalogEntry {
    name: &'static str,
    meters: f64,
    default: bool,
}

/// Run the distances command
pub fn run_distances(args: DistancesArgs) -> Result<()> {
    setup_logging(&args.common);

    let entries: Vec<CatalogEntry> = Distance::ALL
        .iter()
        .map(|d| CatalogEntry {
            name: d.name(),
            meters: d.meters(),
            default: Distance::DEFAULT_SELECTION.contains(d),
        })
        .collect();

    if !is_human(&args.common) {
        return print_json(&entries);
    }

    println!("{}", "Supported distances:".bright_green().bold());
    println!();
    for entry in &entries {
        let marker = if entry.default { "*" } else { " " };
        println!(
            "  {} {} {}",
            marker.bright_yellow().bold(),
            format!("{:<10}", entry.name).bright_cyan(),
            format!("{} m", entry.meters).bright_black()
        );
    }
    println!();
    println!("{}", "* selected by default".bright_black());

    Ok(())
}
