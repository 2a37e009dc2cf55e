//! Shared utilities for CLI commands
//!
//! Logging setup, configuration layering and the human/JSON renderers used
//! by more than one command.

use crate::app::models::Category;
use crate::app::services::consistency_analyzer::ComparisonSummary;
use crate::app::services::pace_projector::format_seconds;
use crate::app::services::projection_table::ProjectionTable;
use crate::cli::args::{CommonArgs, OutputFormat};
use crate::config::PaceConfig;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use tracing::debug;

/// Width of the distance column in human tables
const DISTANCE_COLUMN_WIDTH: usize = 10;

/// Width of each race column in human tables
const RACE_COLUMN_WIDTH: usize = 12;

/// Set up structured logging on stderr
pub fn setup_logging(common: &CommonArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = common.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("race_pace={}", log_level)));

    let initialized = if common.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration using layered approach (file -> args)
pub fn load_configuration(
    common: &CommonArgs,
    overrides: impl FnOnce(PaceConfig) -> PaceConfig,
) -> Result<PaceConfig> {
    let file_config = PaceConfig::load(common.config_file.as_deref())
        .context("Failed to load configuration")?;

    let config = overrides(file_config);
    config.validate().context("Invalid configuration")?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Print any serializable result as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

/// Whether results should be rendered for a terminal
pub fn is_human(common: &CommonArgs) -> bool {
    common.output_format == OutputFormat::Human
}

/// Print the projection table as distance rows by race columns
pub fn print_projection_table(table: &ProjectionTable) {
    println!(
        "{}",
        format!("Equivalent paces (per {})", table.unit())
            .bright_green()
            .bold()
    );
    println!();

    let mut header = format!("{:<width$}", "Distance", width = DISTANCE_COLUMN_WIDTH);
    for column in table.columns() {
        header.push_str(&format!("{:>width$}", column.label, width = RACE_COLUMN_WIDTH));
    }
    println!("{}", header.bright_white().bold());

    for row in table.rows() {
        let mut line = format!(
            "{}",
            format!("{:<width$}", row.distance.name(), width = DISTANCE_COLUMN_WIDTH)
                .bright_cyan()
        );
        for cell in &row.cells {
            line.push_str(&format!(
                "{:>width$}",
                format_seconds(cell.pace_seconds, false),
                width = RACE_COLUMN_WIDTH
            ));
        }
        println!("{}", line);
    }
}

/// Print the consistency summary
pub fn print_summary(summary: &ComparisonSummary) {
    println!();
    println!(
        "{}",
        format!("Consistency at {}", summary.reference)
            .bright_green()
            .bold()
    );
    println!(
        "  Best:       {} {}",
        summary.best.label.bright_cyan(),
        format!("({})", format_seconds(summary.best.time_seconds, false)).bright_black()
    );
    println!(
        "  Worst:      {} {}",
        summary.worst.label.bright_cyan(),
        format!("({})", format_seconds(summary.worst.time_seconds, false)).bright_black()
    );
    println!(
        "  Difference: {:.2}% {}",
        summary.difference_percent(),
        colored_category(summary.category)
    );
}

fn colored_category(category: Category) -> ColoredString {
    match category {
        Category::Normal => category.as_str().green().bold(),
        Category::Medium => category.as_str().yellow().bold(),
        Category::Large => category.as_str().red().bold(),
    }
}
