//! Configuration management and validation.
//!
//! Provides the configuration structure shared by the CLI commands: where
//! the data lives, which record format it uses, and analysis settings.

use crate::app::services::analyzer::Analyzer;
use crate::app::services::measurement_codec::RecordFormat;
use crate::app::services::station::Station;
use crate::constants::TREND_EPSILON;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Weather station configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Explicit data file; discovered automatically when unset
    pub data_file: Option<PathBuf>,

    /// Record format of the data file
    pub format: RecordFormat,

    /// Minimum change between readings for the trend to call a direction
    pub trend_threshold: f64,

    /// Reject interactive input outside the accepted reading ranges
    pub validate_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            format: RecordFormat::default(),
            trend_threshold: TREND_EPSILON,
            validate_input: true,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = Some(data_file.into());
        self
    }

    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_trend_threshold(mut self, trend_threshold: f64) -> Self {
        self.trend_threshold = trend_threshold;
        self
    }

    pub fn with_validate_input(mut self, validate_input: bool) -> Self {
        self.validate_input = validate_input;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.trend_threshold.is_finite() || self.trend_threshold < 0.0 {
            return Err(Error::configuration(format!(
                "trend_threshold must be a non-negative number, got {}",
                self.trend_threshold
            )));
        }

        if let Some(path) = &self.data_file {
            if path.as_os_str().is_empty() {
                return Err(Error::configuration("data_file cannot be empty"));
            }
            if path.is_dir() {
                return Err(Error::configuration(format!(
                    "data_file {} is a directory",
                    path.display()
                )));
            }
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }

    /// Empty station using the configured record format
    pub fn new_station(&self) -> Station {
        Station::with_format(self.format)
    }

    /// Analyzer using the configured trend threshold
    pub fn analyzer(&self) -> Result<Analyzer> {
        Analyzer::with_trend_threshold(self.trend_threshold)
    }
}
