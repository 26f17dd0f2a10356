//! List command implementation

use super::shared::{open_station, rule};
use crate::Result;
use crate::app::models::Measurement;
use crate::config::Config;
use colored::*;

/// Render the numbered listing shown to users (numbers start at 1)
pub fn render_listing(measurements: &[Measurement]) -> String {
    if measurements.is_empty() {
        return "  No measurements stored.\n".to_string();
    }

    let mut out = format!(
        "{}\n  ALL MEASUREMENTS ({} total)\n{}\n",
        rule('='),
        measurements.len(),
        rule('=')
    );
    for (index, measurement) in measurements.iter().enumerate() {
        out.push_str(&format!("\n  [Measurement #{}]\n{}\n", index + 1, measurement));
    }
    out.push_str(&format!("\n{}\n", rule('=')));
    out
}

/// Print every stored measurement
pub fn run_list(config: &Config) -> Result<()> {
    let (station, path) = open_station(config)?;

    println!("{} {}", "Data file:".bold(), path.display());
    print!("{}", render_listing(station.measurements()));
    Ok(())
}
