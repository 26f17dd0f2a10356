//! Command implementations for the weather station CLI
//!
//! Each command loads the data file, applies its change or report, and saves
//! the store back when it was modified. Commands are implemented in their own
//! modules.

pub mod add;
pub mod analyze;
pub mod clear;
pub mod list;
pub mod remove;
pub mod shared;
pub mod transfer;

use crate::Result;
use crate::cli::args::{Args, Commands};
use tracing::debug;

/// Main command runner for the weather station
///
/// Dispatches to the subcommand handler; returns immediately when no
/// subcommand was given.
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;
    let config = args.to_config()?;
    debug!("Resolved configuration: {:?}", config);

    let Some(command) = args.command else {
        return Ok(());
    };

    match command {
        Commands::Add(add_args) => add::run_add(&config, &add_args),
        Commands::List => list::run_list(&config),
        Commands::Remove(remove_args) => remove::run_remove(&config, &remove_args),
        Commands::Analyze(analyze_args) => analyze::run_analyze(&config, &analyze_args),
        Commands::Clear(clear_args) => clear::run_clear(&config, &clear_args),
        Commands::Import(transfer_args) => transfer::run_import(&config, &transfer_args),
        Commands::Export(transfer_args) => transfer::run_export(&config, &transfer_args),
    }
}
