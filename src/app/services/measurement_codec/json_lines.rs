//! JSON-lines record format
//!
//! One JSON object per line with the same field names as [`Measurement`].
//! Missing fields fall back to the measurement defaults and are reported as
//! issues; a line that is not a JSON object degrades to a default record.

use super::skipped_line;
use crate::app::models::{DecodedLine, FieldIssue, Measurement};
use crate::constants::{DEFAULT_TIMESTAMP, DEFAULT_WIND_DIRECTION};
use crate::{Error, Result};
use serde::Deserialize;

/// Field-optional mirror of [`Measurement`] used while decoding
#[derive(Debug, Deserialize)]
struct JsonRecord {
    temperature: Option<f64>,
    humidity: Option<f64>,
    wind_speed: Option<f64>,
    wind_direction: Option<String>,
    timestamp: Option<String>,
}

/// Encode a measurement as one JSON object
pub fn encode(measurement: &Measurement) -> Result<String> {
    serde_json::to_string(measurement)
        .map_err(|e| Error::serialization("Failed to encode measurement as JSON", e))
}

/// Decode one JSON-lines line
pub fn decode_line(line: &str) -> DecodedLine {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if let Some(skipped) = skipped_line(line) {
        return skipped;
    }

    let record: JsonRecord = match serde_json::from_str(line) {
        Ok(record) => record,
        Err(_) => {
            return DecodedLine::from_parts(Measurement::default(), vec![FieldIssue::Record]);
        }
    };

    let mut issues = Vec::new();
    let mut numeric = |value: Option<f64>, issue: FieldIssue| match value {
        Some(v) if v.is_finite() => v,
        _ => {
            issues.push(issue);
            0.0
        }
    };
    let temperature = numeric(record.temperature, FieldIssue::Temperature);
    let humidity = numeric(record.humidity, FieldIssue::Humidity);
    let wind_speed = numeric(record.wind_speed, FieldIssue::WindSpeed);

    let (wind_direction, timestamp) = match (record.wind_direction, record.timestamp) {
        (Some(direction), Some(timestamp)) => (direction, timestamp),
        (Some(direction), None) => {
            issues.push(FieldIssue::Timestamp);
            (direction, DEFAULT_TIMESTAMP.to_string())
        }
        (None, timestamp) => {
            issues.push(FieldIssue::TrailingFields);
            (
                DEFAULT_WIND_DIRECTION.to_string(),
                timestamp.unwrap_or_else(|| DEFAULT_TIMESTAMP.to_string()),
            )
        }
    };

    DecodedLine::from_parts(
        Measurement::new(temperature, humidity, wind_speed, wind_direction, timestamp),
        issues,
    )
}
