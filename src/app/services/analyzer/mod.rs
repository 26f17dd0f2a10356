//! Statistical analysis of measurement sequences
//!
//! This module provides aggregate statistics (mean, minimum, maximum) and the
//! three-point temperature trend. All functions are pure and accept any
//! slice, including an empty one.

use crate::app::models::{Measurement, Trend};
use crate::constants::TREND_EPSILON;
use crate::{Error, Result};

pub mod report;
pub mod stats;
pub mod trend;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for convenience
pub use report::WeatherSummary;
pub use stats::{
    average_humidity, average_temperature, average_wind_speed, max_temperature, min_temperature,
};
pub use trend::{detect_temperature_trend, detect_trend_with_threshold};

/// Analyzer carrying the trend threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analyzer {
    trend_threshold: f64,
}

impl Analyzer {
    /// Create an analyzer using the default trend threshold
    pub fn new() -> Self {
        Self {
            trend_threshold: TREND_EPSILON,
        }
    }

    /// Create an analyzer with a custom trend threshold
    pub fn with_trend_threshold(trend_threshold: f64) -> Result<Self> {
        if !trend_threshold.is_finite() || trend_threshold < 0.0 {
            return Err(Error::configuration(format!(
                "Trend threshold must be a non-negative number, got {}",
                trend_threshold
            )));
        }
        Ok(Self { trend_threshold })
    }

    pub fn trend_threshold(&self) -> f64 {
        self.trend_threshold
    }

    pub fn detect_temperature_trend(&self, measurements: &[Measurement]) -> Trend {
        detect_trend_with_threshold(measurements, self.trend_threshold)
    }

    /// Compute every aggregate and the trend
    pub fn summarize(&self, measurements: &[Measurement]) -> WeatherSummary {
        WeatherSummary {
            count: measurements.len(),
            average_temperature: average_temperature(measurements),
            min_temperature: min_temperature(measurements),
            max_temperature: max_temperature(measurements),
            average_humidity: average_humidity(measurements),
            average_wind_speed: average_wind_speed(measurements),
            trend: self.detect_temperature_trend(measurements),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
