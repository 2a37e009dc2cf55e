//! Export command implementation

use super::shared::{is_human, load_configuration, print_json, setup_logging};
use crate::app::services::projection_table::write_chart_data;
use crate::app::services::race_comparison::compare_races;
use crate::cli::args::ExportArgs;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Serialize)]
struct ExportReport {
    path: PathBuf,
    format: &'static str,
    rows: usize,
}

/// Run the export command
pub fn run_export(args: ExportArgs) -> Result<()> {
    setup_logging(&args.common);

    let (path, format) = args.resolve_output()?;
    let config = load_configuration(&args.common, |config| {
        // Every entered race is exported, up to the maximum slot count
        let config = args.selection.apply(config);
        let num_races = config.num_races.max(args.races.len());
        config.with_num_races(num_races)
    })?;

    let comparison = compare_races(&config, &args.races).context("Race comparison failed")?;
    let rows = write_chart_data(&comparison.table, &path, format)
        .with_context(|| format!("Failed to write chart data to {}", path.display()))?;
    info!("Exported {} chart rows", rows);

    let report = ExportReport {
        path,
        format: format.extension(),
        rows,
    };

    if !is_human(&args.common) {
        return print_json(&report);
    }

    println!(
        "{} {} {}",
        "Wrote".bright_green().bold(),
        format!("{} rows", report.rows).bright_white(),
        format!("to {}", report.path.display()).bright_cyan()
    );
    Ok(())
}
