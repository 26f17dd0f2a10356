//! Aggregate statistics over measurement sequences
//!
//! Every function is total: an empty slice yields 0.0 rather than NaN or an
//! infinity.

use crate::app::models::Measurement;

fn mean_of(measurements: &[Measurement], field: impl Fn(&Measurement) -> f64) -> f64 {
    if measurements.is_empty() {
        return 0.0;
    }
    let sum: f64 = measurements.iter().map(field).sum();
    sum / measurements.len() as f64
}

pub fn average_temperature(measurements: &[Measurement]) -> f64 {
    mean_of(measurements, Measurement::temperature)
}

pub fn average_humidity(measurements: &[Measurement]) -> f64 {
    mean_of(measurements, Measurement::humidity)
}

pub fn average_wind_speed(measurements: &[Measurement]) -> f64 {
    mean_of(measurements, Measurement::wind_speed)
}

/// Lowest temperature, or 0.0 for an empty slice
pub fn min_temperature(measurements: &[Measurement]) -> f64 {
    measurements
        .iter()
        .map(Measurement::temperature)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Highest temperature, or 0.0 for an empty slice
pub fn max_temperature(measurements: &[Measurement]) -> f64 {
    measurements
        .iter()
        .map(Measurement::temperature)
        .reduce(f64::max)
        .unwrap_or(0.0)
}
