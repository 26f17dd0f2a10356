//! Integration tests for the station store, codec and analyzer together
//!
//! These tests exercise the public API the way a presentation layer would:
//! mutate a station, persist it, reload it, and report on it.

use std::fs;
use tempfile::TempDir;
use weather_station::app::services::analyzer::{
    average_temperature, detect_temperature_trend, max_temperature, min_temperature,
};
use weather_station::{Measurement, RecordFormat, Station, Trend, WeatherSummary};

fn reading(temperature: f64, timestamp: &str) -> Measurement {
    Measurement::new(temperature, 70.0, 8.5, "W", timestamp)
}

/// Purpose: Validate a full session of entering, saving, reloading and analysing data
#[test]
fn test_session_round_trip_and_analysis() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("measurements.txt");

    let mut station = Station::new();
    for (i, t) in [10.0, 10.0, 10.2, 12.0, 13.0].iter().enumerate() {
        station.add_measurement(reading(*t, &format!("2025-06-0{} 09:00", i + 1)));
    }
    assert!(station.save(&path));

    let mut reloaded = Station::new();
    assert!(reloaded.load(&path));
    assert_eq!(reloaded.measurements(), station.measurements());

    let measurements = reloaded.measurements();
    assert_eq!(detect_temperature_trend(measurements), Trend::Rising);
    assert_eq!(min_temperature(measurements), 10.0);
    assert_eq!(max_temperature(measurements), 13.0);
    assert!((average_temperature(measurements) - 11.04).abs() < 1e-9);

    let summary = WeatherSummary::from_measurements(measurements);
    assert_eq!(summary.count, 5);
    assert_eq!(summary.trend, Trend::Rising);
}

/// Purpose: Removing by position keeps the remaining order and changes the trend input
#[test]
fn test_removal_changes_trend_window() {
    let mut station = Station::new();
    for t in [20.0, 18.0, 15.0, 30.0] {
        station.add_measurement(reading(t, ""));
    }
    assert_eq!(detect_temperature_trend(station.measurements()), Trend::Stable);

    assert!(station.remove_measurement(3));
    assert!(!station.remove_measurement(3));
    assert_eq!(station.count(), 3);
    assert_eq!(detect_temperature_trend(station.measurements()), Trend::Falling);
}

/// Purpose: A hand-edited file with comments, blanks and a broken line still loads
#[test]
fn test_hand_edited_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("measurements.txt");
    fs::write(
        &path,
        "# station log\n\n20.00|65.00|5.00|N|2025-01-01 08:00\n20.30|64.00|5.50|NE|2025-01-01 09:00\nbroken\n19.90|66.00|4.00|E|2025-01-01 10:00\n",
    )
    .unwrap();

    let mut station = Station::new();
    let stats = station.load_from_file(&path).unwrap();

    assert_eq!(stats.lines_read, 6);
    assert_eq!(stats.records_loaded, 4);
    assert_eq!(stats.degraded_count(), 1);
    assert_eq!(stats.degraded[0].line_number, 5);
    assert_eq!(station.measurements()[2], Measurement::default());
}

/// Purpose: Empty stores never produce NaN or infinities
#[test]
fn test_empty_store_reports_zeroes() {
    let station = Station::new();
    let summary = WeatherSummary::from_measurements(station.measurements());

    assert_eq!(summary.average_temperature, 0.0);
    assert_eq!(summary.average_humidity, 0.0);
    assert_eq!(summary.average_wind_speed, 0.0);
    assert_eq!(summary.min_temperature, 0.0);
    assert_eq!(summary.max_temperature, 0.0);
    assert_eq!(summary.trend, Trend::InsufficientData);
}

/// Purpose: Text fields containing the delimiter survive only in JSON lines
#[test]
fn test_json_lines_preserve_delimiters() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("measurements.jsonl");
    let original = Measurement::new(5.0, 40.0, 2.0, "N|NE", "08:00 | gusty");

    let mut station = Station::with_format(RecordFormat::JsonLines);
    station.add_measurement(original.clone());
    station.save_to_file(&path).unwrap();

    let mut reloaded = Station::with_format(RecordFormat::JsonLines);
    reloaded.load_from_file(&path).unwrap();
    assert_eq!(reloaded.measurements(), &[original]);
}
