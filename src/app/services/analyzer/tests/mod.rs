//! Shared test utilities and fixtures for analyzer tests

use crate::app::models::Measurement;


/// Create measurements with the given temperatures and fixed other readings
pub fn create_measurements(temperatures: &[f64]) -> Vec<Measurement> {
    temperatures
        .iter()
        .map(|&t| Measurement::new(t, 60.0, 12.0, "N", "2025-01-01 12:00"))
        .collect()
}

/// Create measurements with explicit (temperature, humidity, wind speed) readings
pub fn create_readings(readings: &[(f64, f64, f64)]) -> Vec<Measurement> {
    readings
        .iter()
        .map(|&(t, h, w)| Measurement::new(t, h, w, "N", ""))
        .collect()
}
