//! Command-line argument definitions for the weather station
//!
//! This module defines the CLI interface using the clap derive API.

use crate::Result;
use crate::app::services::measurement_codec::RecordFormat;
use crate::config::Config;
use crate::constants::{COMPASS_POINTS, DEFAULT_LOG_LEVEL, TREND_EPSILON};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the weather station
///
/// Records weather observations in a line-oriented data file and reports
/// summary statistics and the recent temperature trend.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "weather-station",
    version,
    about = "Record weather observations and analyse temperature trends",
    long_about = "Keeps an ordered log of weather observations (temperature, humidity, wind \
                  speed, wind direction, timestamp) in a pipe-delimited text file and reports \
                  averages, extremes and a three-point temperature trend."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to read and write
    ///
    /// If not specified, the first existing of ./data/measurements.txt,
    /// ./src/data/measurements.txt, <exe dir>/data/measurements.txt,
    /// <exe dir>/../data/measurements.txt, ../data/measurements.txt and
    /// <user data dir>/weather-station/measurements.txt is used.
    #[arg(
        short = 'f',
        long = "data-file",
        value_name = "FILE",
        global = true,
        help = "Data file to read and write"
    )]
    pub data_file: Option<PathBuf>,

    /// Record format of the data file
    #[arg(
        long = "format",
        value_enum,
        default_value = "pipe",
        global = true,
        help = "Record format of the data file"
    )]
    pub format: RecordFormat,

    /// Minimum change between readings for the trend to call a direction
    #[arg(
        long = "trend-threshold",
        value_name = "CELSIUS",
        default_value_t = TREND_EPSILON,
        global = true,
        help = "Minimum temperature change for a rising/falling trend"
    )]
    pub trend_threshold: f64,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Add a new measurement
    Add(AddArgs),
    /// List all stored measurements
    List,
    /// Remove a measurement by its number in the listing
    Remove(RemoveArgs),
    /// Show statistics and the temperature trend
    Analyze(AnalyzeArgs),
    /// Delete every stored measurement
    Clear(ClearArgs),
    /// Append the records of another file to the data file
    Import(TransferArgs),
    /// Write the stored measurements to another file
    Export(TransferArgs),
}

/// Arguments for the add command
#[derive(Debug, Clone, Parser)]
pub struct AddArgs {
    /// Temperature in degrees Celsius
    #[arg(short = 't', long = "temperature", allow_negative_numbers = true)]
    pub temperature: f64,

    /// Relative humidity in percent
    #[arg(short = 'u', long = "humidity")]
    pub humidity: f64,

    /// Wind speed in km/h
    #[arg(short = 'w', long = "wind-speed")]
    pub wind_speed: f64,

    /// Wind direction (N, NE, E, SE, S, SW, W, NW)
    #[arg(short = 'd', long = "wind-direction", default_value = "N")]
    pub wind_direction: String,

    /// Observation time; defaults to the current local time (YYYY-MM-DD HH:MM)
    #[arg(short = 's', long = "timestamp")]
    pub timestamp: Option<String>,

    /// Accept readings outside the usual ranges
    #[arg(long = "no-validate", help = "Accept readings outside the usual ranges")]
    pub no_validate: bool,
}

/// Arguments for the remove command
#[derive(Debug, Clone, Parser)]
pub struct RemoveArgs {
    /// Measurement number as shown by `list` (starting at 1)
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub number: i64,
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the clear command
#[derive(Debug, Clone, Parser)]
pub struct ClearArgs {
    /// Confirm deletion of every measurement
    #[arg(short = 'y', long = "yes", help = "Confirm deletion of every measurement")]
    pub yes: bool,
}

/// Arguments for the import and export commands
#[derive(Debug, Clone, Parser)]
pub struct TransferArgs {
    /// File to read from (import) or write to (export)
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Record format of PATH; defaults to the data file format
    #[arg(long = "file-format", value_enum)]
    pub file_format: Option<RecordFormat>,
}

/// Output format options for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the log level string based on verbosity
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build and validate the configuration from global options
    pub fn to_config(&self) -> Result<Config> {
        let mut config = Config::new()
            .with_format(self.format)
            .with_trend_threshold(self.trend_threshold);
        if let Some(path) = &self.data_file {
            config = config.with_data_file(path);
        }
        if let Some(Commands::Add(add)) = &self.command {
            config = config.with_validate_input(!add.no_validate);
        }
        config.validate()?;
        Ok(config)
    }
}

impl AddArgs {
    /// True when the direction is one of the offered compass points
    pub fn is_compass_point(&self) -> bool {
        COMPASS_POINTS
            .iter()
            .any(|point| point.eq_ignore_ascii_case(self.wind_direction.trim()))
    }
}

impl RemoveArgs {
    /// Zero-based store index for the 1-based number, if representable
    pub fn index(&self) -> Option<usize> {
        self.number
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_command() {
        let args = Args::try_parse_from([
            "weather-station",
            "add",
            "-t",
            "-3.5",
            "-u",
            "80",
            "-w",
            "12",
            "-d",
            "NE",
            "-s",
            "2025-01-01 14:30",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Add(add)) => {
                assert_eq!(add.temperature, -3.5);
                assert_eq!(add.humidity, 80.0);
                assert_eq!(add.wind_speed, 12.0);
                assert_eq!(add.wind_direction, "NE");
                assert_eq!(add.timestamp.as_deref(), Some("2025-01-01 14:30"));
                assert!(add.is_compass_point());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "weather-station",
            "list",
            "--data-file",
            "/tmp/m.txt",
            "--format",
            "json-lines",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.data_file, Some(PathBuf::from("/tmp/m.txt")));
        assert_eq!(args.format, RecordFormat::JsonLines);
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_log_level() {
        let mut args = Args::try_parse_from(["weather-station"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 5;
        assert_eq!(args.get_log_level(), "trace");
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_remove_index_conversion() {
        assert_eq!(RemoveArgs { number: 1 }.index(), Some(0));
        assert_eq!(RemoveArgs { number: 4 }.index(), Some(3));
        assert_eq!(RemoveArgs { number: 0 }.index(), None);
        assert_eq!(RemoveArgs { number: -2 }.index(), None);
    }

    #[test]
    fn test_to_config() {
        let args = Args::try_parse_from([
            "weather-station",
            "--trend-threshold",
            "1.5",
            "add",
            "-t",
            "1",
            "-u",
            "2",
            "-w",
            "3",
            "--no-validate",
        ])
        .unwrap();

        let config = args.to_config().unwrap();
        assert_eq!(config.trend_threshold, 1.5);
        assert!(!config.validate_input);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_to_config_rejects_negative_threshold() {
        let args =
            Args::try_parse_from(["weather-station", "--trend-threshold=-1", "list"]).unwrap();
        assert!(args.to_config().is_err());
    }
}
