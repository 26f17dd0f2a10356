//! Shared test utilities and fixtures for station tests

use crate::app::models::Measurement;
use crate::app::services::station::Station;
use std::fs;
use std::path::{Path, PathBuf};


/// Create a test measurement with the given temperature and a derived timestamp
pub fn create_test_measurement(temperature: f64, hour: u32) -> Measurement {
    Measurement::new(
        temperature,
        50.0 + hour as f64,
        10.0,
        "NW",
        format!("2025-01-01 {:02}:00", hour),
    )
}

/// Create a station holding one measurement per temperature, in order
pub fn create_test_station(temperatures: &[f64]) -> Station {
    let mut station = Station::new();
    for (hour, &temperature) in temperatures.iter().enumerate() {
        station.add_measurement(create_test_measurement(temperature, hour as u32));
    }
    station
}

/// Write a data file with the given lines, newline-terminated
pub fn create_test_data_file(dir: &Path, filename: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(filename);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

/// Temperatures of the station in store order
pub fn temperatures(station: &Station) -> Vec<f64> {
    station
        .measurements()
        .iter()
        .map(|m| m.temperature())
        .collect()
}
