//! Analysis summary for reporting
//!
//! Bundles the aggregates and the trend so presentation layers can render
//! them as text or JSON without recomputing anything.

use super::Analyzer;
use crate::app::models::{Measurement, Trend};
use crate::{Error, Result};
use serde::Serialize;
use std::fmt::{self, Write};

/// Aggregates and trend of a measurement sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSummary {
    /// Number of measurements analysed
    pub count: usize,
    pub average_temperature: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub average_humidity: f64,
    pub average_wind_speed: f64,
    /// Trend of the last three temperatures
    pub trend: Trend,
}

impl WeatherSummary {
    /// Summarize with the default trend threshold
    pub fn from_measurements(measurements: &[Measurement]) -> Self {
        Analyzer::new().summarize(measurements)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Human-readable report with two decimals
    pub fn render(&self) -> String {
        let rule = "=".repeat(60);
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_report(&mut out, &rule);
        out
    }

    fn write_report(&self, out: &mut String, rule: &str) -> fmt::Result {
        writeln!(out, "{rule}")?;
        writeln!(out, "  WEATHER STATISTICS ({} measurements)", self.count)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "\n  TEMPERATURE:")?;
        writeln!(out, "      - Average: {:.2} C", self.average_temperature)?;
        writeln!(out, "      - Minimum: {:.2} C", self.min_temperature)?;
        writeln!(out, "      - Maximum: {:.2} C", self.max_temperature)?;
        writeln!(out, "      - Trend (last 3): {}", self.trend)?;
        writeln!(out, "\n  HUMIDITY:")?;
        writeln!(out, "      - Average: {:.2}%", self.average_humidity)?;
        writeln!(out, "\n  WIND:")?;
        writeln!(
            out,
            "      - Average speed: {:.2} km/h",
            self.average_wind_speed
        )?;
        writeln!(out, "\n{rule}")
    }

    /// Pretty-printed JSON report
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::serialization("Failed to serialize weather summary", e))
    }
}
