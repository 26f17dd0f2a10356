//! Analyze command implementation

use super::shared::open_station;
use crate::Result;
use crate::app::models::Trend;
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::Config;
use colored::*;

/// Print statistics and the temperature trend for the stored measurements
pub fn run_analyze(config: &Config, args: &AnalyzeArgs) -> Result<()> {
    let (station, _path) = open_station(config)?;
    let summary = config.analyzer()?.summarize(station.measurements());

    match args.output_format {
        OutputFormat::Json => println!("{}", summary.to_json()?),
        OutputFormat::Human => {
            if summary.is_empty() {
                println!("No measurements available for analysis.");
                return Ok(());
            }
            print!("{}", summary.render());
            let trend = match summary.trend {
                Trend::Rising => summary.trend.to_string().red(),
                Trend::Falling => summary.trend.to_string().blue(),
                Trend::Stable => summary.trend.to_string().green(),
                Trend::InsufficientData => summary.trend.to_string().dimmed(),
            };
            println!("{} {}", "Temperature trend:".bold(), trend);
        }
    }
    Ok(())
}
