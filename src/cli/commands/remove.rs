//! Remove command implementation

use super::shared::{open_station, persist};
use crate::cli::args::RemoveArgs;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use tracing::info;

/// Remove the measurement with the given listing number and save
pub fn run_remove(config: &Config, args: &RemoveArgs) -> Result<()> {
    let (mut station, path) = open_station(config)?;

    if station.is_empty() {
        println!("No measurements to remove.");
        return Ok(());
    }

    let removed = args
        .index()
        .and_then(|index| station.take_measurement(index));
    if removed.is_none() {
        return Err(Error::data_validation(format!(
            "Invalid measurement number {}: expected 1 to {}",
            args.number,
            station.count()
        )));
    }

    persist(&station, &path)?;
    info!("Removed measurement #{} from {}", args.number, path.display());
    println!("{}", "Measurement removed.".green());
    println!("Total: {} measurement(s) remaining.", station.count());
    Ok(())
}
