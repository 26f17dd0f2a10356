//! Weather Station Library
//!
//! A Rust library for recording discrete weather observations, persisting them
//! as line-oriented text, and deriving summary statistics from them.
//!
//! This library provides tools for:
//! - Encoding and decoding measurement records in the pipe-delimited text format
//!   (and an optional JSON-lines format)
//! - Keeping an ordered in-memory store of measurements with bulk load/save
//! - Computing aggregate statistics and a three-point temperature trend
//! - Locating and preparing the default data file

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analyzer;
        pub mod measurement_codec;
        pub mod station;
    }
    pub mod adapters {
        pub mod data_file;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DecodedLine, FieldIssue, Measurement, Trend};
pub use app::services::analyzer::{Analyzer, WeatherSummary};
pub use app::services::measurement_codec::RecordFormat;
pub use app::services::station::{LoadStats, SaveStats, Station};
pub use config::Config;

/// Result type alias for the weather station
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for weather station operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File could not be found or opened
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input validation error (collaborator-side checks only)
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Report or record serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
