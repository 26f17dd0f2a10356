//! Application constants for the weather station
//!
//! This module contains the record format constants, analysis thresholds,
//! default values and file locations used throughout the application.

// =============================================================================
// Record Format
// =============================================================================

/// Field delimiter of the pipe record format
pub const FIELD_DELIMITER: char = '|';

/// Lines starting with this character are comments
pub const COMMENT_PREFIX: char = '#';

/// Decimal digits written for numeric fields in the persisted format
pub const SERIALIZED_PRECISION: usize = 2;

/// Decimal digits used by the human-readable rendering
pub const DISPLAY_PRECISION: usize = 1;

// =============================================================================
// Measurement Defaults
// =============================================================================

/// Default wind direction token for new and degraded records
pub const DEFAULT_WIND_DIRECTION: &str = "N";

/// Default timestamp for new and degraded records
pub const DEFAULT_TIMESTAMP: &str = "";

/// Format used when the caller omits a timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

// =============================================================================
// Analysis Constants
// =============================================================================

/// Minimum temperature change between consecutive readings to count as a direction
pub const TREND_EPSILON: f64 = 0.5;

/// Number of trailing readings inspected by the trend detector
pub const TREND_WINDOW: usize = 3;

// =============================================================================
// Input Limits
// =============================================================================

/// Accepted reading ranges for interactive input. The store itself never
/// enforces these.
pub mod limits {
    /// Temperature range in degrees Celsius
    pub const MIN_TEMPERATURE: f64 = -50.0;
    pub const MAX_TEMPERATURE: f64 = 100.0;

    /// Relative humidity range in percent
    pub const MIN_HUMIDITY: f64 = 0.0;
    pub const MAX_HUMIDITY: f64 = 100.0;

    /// Wind speed range in km/h
    pub const MIN_WIND_SPEED: f64 = 0.0;
    pub const MAX_WIND_SPEED: f64 = 500.0;
}

/// Wind direction tokens offered to users. Any token is accepted by the store.
pub const COMPASS_POINTS: &[&str] = &["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

// =============================================================================
// Data File Locations
// =============================================================================

/// Directory holding the data file, relative to the search roots
pub const DATA_DIR_NAME: &str = "data";

/// Name of the default data file
pub const DATA_FILE_NAME: &str = "measurements.txt";

/// Application directory under the user data directory
pub const APP_DIR_NAME: &str = "weather-station";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither -v nor -q is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
