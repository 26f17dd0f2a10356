//! Tests for the JSON-lines record format

use super::*;
use crate::app::models::{DecodedLine, FieldIssue};
use crate::app::services::measurement_codec::{RecordFormat, json_lines};

#[test]
fn test_encode_uses_measurement_field_names() {
    let line = json_lines::encode(&create_test_measurement()).unwrap();

    assert!(line.contains("\"temperature\":12.5"));
    assert!(line.contains("\"wind_speed\":14.25"));
    assert!(line.contains("\"wind_direction\":\"SW\""));
    assert!(!line.contains('\n'));
}

#[test]
fn test_round_trip_preserves_pipe_in_text_fields() {
    let original = Measurement::new(1.0, 2.0, 3.0, "N|E", "12:00 | cloudy");
    let line = RecordFormat::JsonLines.encode(&original).unwrap();

    assert_eq!(
        RecordFormat::JsonLines.decode(&line),
        DecodedLine::Record(original)
    );
}

#[test]
fn test_skipped_lines() {
    assert_eq!(json_lines::decode_line(""), DecodedLine::Blank);
    assert_eq!(json_lines::decode_line("# exported"), DecodedLine::Comment);
    assert!(json_lines::decode_line("  ").is_degraded());
}

#[test]
fn test_missing_fields_are_degraded() {
    let decoded = json_lines::decode_line(r#"{"temperature": 21.0, "wind_direction": "S"}"#);

    assert_eq!(
        decoded.issues(),
        &[
            FieldIssue::Humidity,
            FieldIssue::WindSpeed,
            FieldIssue::Timestamp
        ]
    );
    let m = decoded.measurement().unwrap();
    assert_eq!(m.temperature(), 21.0);
    assert_eq!(m.humidity(), 0.0);
    assert_eq!(m.wind_direction(), "S");
    assert_eq!(m.timestamp(), "");
}

#[test]
fn test_missing_direction_keeps_timestamp() {
    let decoded = json_lines::decode_line(
        r#"{"temperature": 1, "humidity": 2, "wind_speed": 3, "timestamp": "dawn"}"#,
    );

    assert_eq!(decoded.issues(), &[FieldIssue::TrailingFields]);
    let m = decoded.measurement().unwrap();
    assert_eq!(m.wind_direction(), "N");
    assert_eq!(m.timestamp(), "dawn");
}

#[test]
fn test_unreadable_line_degrades_to_default_record() {
    let decoded = json_lines::decode_line("{not json");

    assert_eq!(decoded.issues(), &[FieldIssue::Record]);
    assert_eq!(decoded.into_measurement(), Some(Measurement::default()));
}
