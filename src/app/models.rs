//! Data models for weather station processing
//!
//! This module contains the core data structures for representing a single
//! weather observation, the outcome of decoding one line of a data file, and
//! the temperature trend classification.

use crate::app::services::measurement_codec::pipe;
use crate::constants::{
    DEFAULT_TIMESTAMP, DEFAULT_WIND_DIRECTION, DISPLAY_PRECISION, FIELD_DELIMITER, limits,
};
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

// =============================================================================
// Measurement Record Structure
// =============================================================================

/// A single weather observation
///
/// Numeric fields are stored as-is: humidity is expected in 0-100 and wind
/// speed is expected to be non-negative, but neither is clamped or enforced.
/// The timestamp is free-form text and is never parsed as a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Air temperature in degrees Celsius
    temperature: f64,

    /// Relative humidity in percent
    humidity: f64,

    /// Wind speed in km/h
    wind_speed: f64,

    /// Wind direction token (e.g. "N", "SW")
    wind_direction: String,

    /// Observation time as entered by the user
    timestamp: String,
}

impl Measurement {
    /// Create a new measurement from explicit values
    pub fn new(
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        wind_direction: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            temperature,
            humidity,
            wind_speed,
            wind_direction: wind_direction.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn wind_direction(&self) -> &str {
        &self.wind_direction
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    pub fn set_humidity(&mut self, humidity: f64) {
        self.humidity = humidity;
    }

    pub fn set_wind_speed(&mut self, wind_speed: f64) {
        self.wind_speed = wind_speed;
    }

    pub fn set_wind_direction(&mut self, wind_direction: impl Into<String>) {
        self.wind_direction = wind_direction.into();
    }

    pub fn set_timestamp(&mut self, timestamp: impl Into<String>) {
        self.timestamp = timestamp.into();
    }

    /// Encode as one line of the pipe format: `temperature|humidity|windSpeed|windDirection|timestamp`
    ///
    /// Numerics carry exactly two decimals. `|` inside the text fields is not
    /// escaped, so such records do not survive a round trip.
    pub fn serialize(&self) -> String {
        pipe::encode(self)
    }

    /// Decode one line of the pipe format
    ///
    /// Never fails. Blank and comment lines yield the default measurement and
    /// malformed fields fall back to their defaults one by one. Use
    /// [`pipe::decode_line`] to find out which of these happened.
    pub fn deserialize(line: &str) -> Self {
        pipe::decode_line(line)
            .into_measurement()
            .unwrap_or_default()
    }

    /// Check readings against the accepted input ranges
    ///
    /// Used by input collaborators before a record is built from user
    /// input. The store accepts any measurement regardless of the outcome.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (
                "temperature",
                self.temperature,
                limits::MIN_TEMPERATURE,
                limits::MAX_TEMPERATURE,
            ),
            (
                "humidity",
                self.humidity,
                limits::MIN_HUMIDITY,
                limits::MAX_HUMIDITY,
            ),
            (
                "wind speed",
                self.wind_speed,
                limits::MIN_WIND_SPEED,
                limits::MAX_WIND_SPEED,
            ),
        ];

        for (name, value, min, max) in checks {
            if !value.is_finite() || !(min..=max).contains(&value) {
                return Err(Error::data_validation(format!(
                    "Invalid {} {}: must be between {} and {}",
                    name, value, min, max
                )));
            }
        }

        if self.wind_direction.trim().is_empty() {
            return Err(Error::data_validation(
                "Wind direction cannot be empty".to_string(),
            ));
        }

        for (name, text) in [
            ("wind direction", &self.wind_direction),
            ("timestamp", &self.timestamp),
        ] {
            if text.contains(FIELD_DELIMITER) || text.contains('\n') {
                return Err(Error::data_validation(format!(
                    "Invalid {} '{}': must not contain '{}' or line breaks",
                    name, text, FIELD_DELIMITER
                )));
            }
        }

        Ok(())
    }
}

impl Default for Measurement {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, DEFAULT_WIND_DIRECTION, DEFAULT_TIMESTAMP)
    }
}

/// Human-readable multi-line rendering, one decimal place. Display only.
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = DISPLAY_PRECISION;
        writeln!(f, "  Date/Time: {}", self.timestamp)?;
        writeln!(f, "  Temperature: {:.p$} C", self.temperature)?;
        writeln!(f, "  Humidity: {:.p$}%", self.humidity)?;
        writeln!(f, "  Wind speed: {:.p$} km/h", self.wind_speed)?;
        write!(f, "  Wind direction: {}", self.wind_direction)
    }
}

// =============================================================================
// Line Decoding Outcome
// =============================================================================

/// A field that fell back to its default while decoding a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldIssue {
    Temperature,
    Humidity,
    WindSpeed,
    /// Wind direction and timestamp were both absent
    TrailingFields,
    /// Wind direction present but no timestamp delimiter followed it
    Timestamp,
    /// The line could not be read as a record at all
    Record,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::WindSpeed => "wind speed",
            Self::TrailingFields => "wind direction/timestamp",
            Self::Timestamp => "timestamp",
            Self::Record => "record",
        };
        f.write_str(name)
    }
}

/// Tagged outcome of decoding one line of a data file
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedLine {
    /// Empty or whitespace-only line
    Blank,
    /// Line starting with `#`
    Comment,
    /// Every field decoded cleanly
    Record(Measurement),
    /// Some fields fell back to defaults; the measurement is still usable
    Degraded {
        measurement: Measurement,
        issues: Vec<FieldIssue>,
    },
}

impl DecodedLine {
    /// Wrap a decoded measurement, tagging it degraded when any issue was recorded
    pub fn from_parts(measurement: Measurement, issues: Vec<FieldIssue>) -> Self {
        if issues.is_empty() {
            Self::Record(measurement)
        } else {
            Self::Degraded {
                measurement,
                issues,
            }
        }
    }

    /// The measurement carried by this line, if it is a data line
    pub fn measurement(&self) -> Option<&Measurement> {
        match self {
            Self::Record(m) | Self::Degraded { measurement: m, .. } => Some(m),
            Self::Blank | Self::Comment => None,
        }
    }

    pub fn into_measurement(self) -> Option<Measurement> {
        match self {
            Self::Record(m) | Self::Degraded { measurement: m, .. } => Some(m),
            Self::Blank | Self::Comment => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Fields that fell back to defaults (empty for clean and skipped lines)
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            Self::Degraded { issues, .. } => issues,
            _ => &[],
        }
    }
}

// =============================================================================
// Temperature Trend
// =============================================================================

/// Direction of the most recent temperature readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
    InsufficientData,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Stable => "stable",
            Self::InsufficientData => "insufficient-data",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Measurement {
        Measurement::new(12.5, 65.0, 14.2, "SW", "2025-01-01 14:30")
    }

    #[test]
    fn test_measurement_default() {
        let m = Measurement::default();
        assert_eq!(m.temperature(), 0.0);
        assert_eq!(m.humidity(), 0.0);
        assert_eq!(m.wind_speed(), 0.0);
        assert_eq!(m.wind_direction(), "N");
        assert_eq!(m.timestamp(), "");
    }

    #[test]
    fn test_measurement_setters() {
        let mut m = sample();
        m.set_temperature(-3.0);
        m.set_humidity(99.5);
        m.set_wind_speed(0.0);
        m.set_wind_direction("E");
        m.set_timestamp("2025-02-02 08:00");

        assert_eq!(m, Measurement::new(-3.0, 99.5, 0.0, "E", "2025-02-02 08:00"));
    }

    #[test]
    fn test_display_uses_one_decimal() {
        let rendered = sample().to_string();

        assert!(rendered.contains("Date/Time: 2025-01-01 14:30"));
        assert!(rendered.contains("Temperature: 12.5 C"));
        assert!(rendered.contains("Humidity: 65.0%"));
        assert!(rendered.contains("Wind speed: 14.2 km/h"));
        assert!(rendered.contains("Wind direction: SW"));
        assert_eq!(rendered.lines().count(), 5);
    }

    #[test]
    fn test_validate_accepts_typical_reading() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut m = sample();
        m.set_humidity(120.0);
        assert!(m.validate().is_err());

        let mut m = sample();
        m.set_wind_speed(-1.0);
        assert!(m.validate().is_err());

        let mut m = sample();
        m.set_temperature(f64::NAN);
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_delimiter_in_text() {
        let mut m = sample();
        m.set_timestamp("2025|01");
        assert!(matches!(m.validate(), Err(Error::DataValidation { .. })));

        let mut m = sample();
        m.set_wind_direction("  ");
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_decoded_line_accessors() {
        let clean = DecodedLine::from_parts(sample(), vec![]);
        assert!(!clean.is_degraded());
        assert_eq!(clean.measurement(), Some(&sample()));
        assert!(clean.issues().is_empty());

        let degraded = DecodedLine::from_parts(Measurement::default(), vec![FieldIssue::Humidity]);
        assert!(degraded.is_degraded());
        assert_eq!(degraded.issues(), &[FieldIssue::Humidity]);

        assert_eq!(DecodedLine::Comment.measurement(), None);
        assert_eq!(DecodedLine::Blank.into_measurement(), None);
    }

    #[test]
    fn test_trend_display() {
        assert_eq!(Trend::Rising.to_string(), "rising");
        assert_eq!(Trend::Falling.to_string(), "falling");
        assert_eq!(Trend::Stable.to_string(), "stable");
        assert_eq!(Trend::InsufficientData.to_string(), "insufficient-data");
        assert_eq!(
            serde_json::to_string(&Trend::InsufficientData).unwrap(),
            "\"insufficient-data\""
        );
    }
}
