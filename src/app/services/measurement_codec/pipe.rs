//! Pipe-delimited record format
//!
//! Layout: `temperature|humidity|windSpeed|windDirection|timestamp`, numerics
//! with exactly two decimals, no header and no escaping.

use super::skipped_line;
use crate::app::models::{DecodedLine, FieldIssue, Measurement};
use crate::constants::{
    DEFAULT_TIMESTAMP, DEFAULT_WIND_DIRECTION, FIELD_DELIMITER, SERIALIZED_PRECISION,
};

/// Encode a measurement as one pipe-format line
pub fn encode(measurement: &Measurement) -> String {
    let p = SERIALIZED_PRECISION;
    format!(
        "{:.p$}{d}{:.p$}{d}{:.p$}{d}{}{d}{}",
        measurement.temperature(),
        measurement.humidity(),
        measurement.wind_speed(),
        measurement.wind_direction(),
        measurement.timestamp(),
        d = FIELD_DELIMITER,
    )
}

/// Decode one pipe-format line
///
/// The three numeric fields are read in order, each defaulting to 0.0 when
/// it is missing or unparsable. Whatever follows the third delimiter is
/// split at the next delimiter into wind direction and timestamp; when
/// nothing follows, those fall back to `"N"` and `""`.
pub fn decode_line(line: &str) -> DecodedLine {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if let Some(skipped) = skipped_line(line) {
        return skipped;
    }

    let mut issues = Vec::new();
    let mut fields = line.splitn(4, FIELD_DELIMITER);

    let mut numeric = |issue: FieldIssue| match fields.next().and_then(parse_number) {
        Some(value) => value,
        None => {
            issues.push(issue);
            0.0
        }
    };
    let temperature = numeric(FieldIssue::Temperature);
    let humidity = numeric(FieldIssue::Humidity);
    let wind_speed = numeric(FieldIssue::WindSpeed);

    let (wind_direction, timestamp) = match fields.next() {
        Some(rest) => match rest.split_once(FIELD_DELIMITER) {
            Some((direction, timestamp)) => (direction, timestamp),
            None => {
                issues.push(FieldIssue::Timestamp);
                (rest, DEFAULT_TIMESTAMP)
            }
        },
        None => {
            issues.push(FieldIssue::TrailingFields);
            (DEFAULT_WIND_DIRECTION, DEFAULT_TIMESTAMP)
        }
    };

    DecodedLine::from_parts(
        Measurement::new(temperature, humidity, wind_speed, wind_direction, timestamp),
        issues,
    )
}

fn parse_number(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
