//! Clear command implementation

use super::shared::{open_station, persist};
use crate::cli::args::ClearArgs;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use tracing::info;

/// Delete every measurement from the data file (requires `--yes`)
pub fn run_clear(config: &Config, args: &ClearArgs) -> Result<()> {
    if !args.yes {
        return Err(Error::data_validation(
            "Refusing to delete all measurements without --yes",
        ));
    }

    let (mut station, path) = open_station(config)?;
    let removed = station.count();
    station.clear();
    persist(&station, &path)?;

    info!("Cleared {} measurements from {}", removed, path.display());
    println!("{}", format!("All data deleted ({} measurement(s)).", removed).yellow());
    Ok(())
}
