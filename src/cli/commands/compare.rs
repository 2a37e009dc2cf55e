//! Compare command implementation

use super::shared::{
    is_human, load_configuration, print_json, print_projection_table, print_summary,
    setup_logging,
};
use crate::app::services::race_comparison::compare_races;
use crate::cli::args::CompareArgs;
use anyhow::{Context, Result};
use colored::*;
use tracing::info;

/// Run the compare command
pub fn run_compare(args: CompareArgs) -> Result<()> {
    setup_logging(&args.common);
    info!("Starting race comparison");

    let config = load_configuration(&args.common, |config| args.apply(config))?;
    let comparison = compare_races(&config, &args.races).context("Race comparison failed")?;

    if !is_human(&args.common) {
        return print_json(&comparison);
    }

    print_projection_table(&comparison.table);
    match &comparison.summary {
        Some(summary) => print_summary(summary),
        None => {
            println!();
            println!(
                "{}",
                "Enter at least two race times to compare efforts.".yellow()
            );
        }
    }

    Ok(())
}
