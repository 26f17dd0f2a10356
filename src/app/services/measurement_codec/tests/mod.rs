//! Shared test utilities and fixtures for measurement codec tests

use crate::app::models::Measurement;

pub mod json_lines_tests;

/// Create a test measurement with typical values
pub fn create_test_measurement() -> Measurement {
    Measurement::new(12.5, 65.0, 14.25, "SW", "2025-01-01 14:30")
}

/// Assert two measurements agree to the two decimals persisted on disk
pub fn assert_same_to_two_decimals(left: &Measurement, right: &Measurement) {
    let close = |a: f64, b: f64| (a - b).abs() < 0.005 + f64::EPSILON;
    assert!(close(left.temperature(), right.temperature()));
    assert!(close(left.humidity(), right.humidity()));
    assert!(close(left.wind_speed(), right.wind_speed()));
    assert_eq!(left.wind_direction(), right.wind_direction());
    assert_eq!(left.timestamp(), right.timestamp());
}
