//! Shared components for CLI commands
//!
//! This module contains logging setup, data file resolution and the
//! load/save helpers used by every command.

use crate::app::adapters::data_file::{ensure_data_file, locate_data_file};
use crate::app::services::station::{LoadStats, SaveStats, Station};
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::TIMESTAMP_FORMAT;
use crate::{Error, Result};
use colored::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Set up structured logging
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weather_station={}", log_level)));

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
        .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Data file from the configuration, or the discovered default
pub fn resolve_data_file(config: &Config) -> Result<PathBuf> {
    match &config.data_file {
        Some(path) => Ok(path.clone()),
        None => locate_data_file().map_err(|e| Error::configuration(format!("{:#}", e))),
    }
}

/// Open the configured data file and load it into a fresh station
///
/// A missing data file is created empty first.
pub fn open_station(config: &Config) -> Result<(Station, PathBuf)> {
    let path = resolve_data_file(config)?;
    ensure_data_file(&path)?;

    let mut station = config.new_station();
    let stats = station.load_from_file(&path)?;
    report_degraded(&path, &stats);

    Ok((station, path))
}

/// Save the station back to its data file
pub fn persist(station: &Station, path: &Path) -> Result<SaveStats> {
    let stats = station.save_to_file(path)?;
    info!("{}", stats.summary());
    Ok(stats)
}

/// Warn on stderr about lines that were loaded with defaulted fields
pub fn report_degraded(path: &Path, stats: &LoadStats) {
    if !stats.has_degraded() {
        return;
    }

    eprintln!(
        "{} {} line(s) in {} could not be fully read; defaults were used:",
        "warning:".yellow().bold(),
        stats.degraded_count(),
        path.display()
    );
    for line in &stats.degraded {
        let fields: Vec<String> = line.issues.iter().map(ToString::to_string).collect();
        eprintln!("   • line {}: {}", line.line_number, fields.join(", "));
    }
}

/// Current local time in the data file's timestamp format
pub fn current_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Horizontal rule used by the human-readable listings
pub fn rule(ch: char) -> String {
    ch.to_string().repeat(60)
}
