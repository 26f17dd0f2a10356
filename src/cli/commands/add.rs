//! Add command implementation

use super::shared::{current_timestamp, open_station, persist};
use crate::Result;
use crate::app::models::Measurement;
use crate::cli::args::AddArgs;
use crate::config::Config;
use colored::*;
use tracing::{info, warn};

/// Build the measurement described by the add arguments
pub fn measurement_from_args(args: &AddArgs) -> Measurement {
    let timestamp = match args.timestamp.as_deref().map(str::trim) {
        Some(timestamp) if !timestamp.is_empty() => timestamp.to_string(),
        _ => current_timestamp(),
    };

    Measurement::new(
        args.temperature,
        args.humidity,
        args.wind_speed,
        args.wind_direction.trim(),
        timestamp,
    )
}

/// Append a measurement to the data file
pub fn run_add(config: &Config, args: &AddArgs) -> Result<()> {
    let measurement = measurement_from_args(args);
    if config.validate_input {
        measurement.validate()?;
    }
    if !args.is_compass_point() {
        warn!(
            "Wind direction '{}' is not a standard compass point",
            args.wind_direction
        );
    }

    let (mut station, path) = open_station(config)?;
    station.add_measurement(measurement);
    persist(&station, &path)?;

    info!("Measurement added to {}", path.display());
    println!("{}", "Measurement added.".green());
    println!("Total: {} measurement(s).", station.count());
    Ok(())
}
