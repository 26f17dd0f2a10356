//! Three-point temperature trend detection
//!
//! Looks only at the last three readings in store order (not re-sorted by
//! timestamp). A direction is called only when both consecutive changes
//! exceed the threshold in the same direction.

use crate::app::models::{Measurement, Trend};
use crate::constants::{TREND_EPSILON, TREND_WINDOW};

/// Classify the trend of the last three temperatures with the default threshold
pub fn detect_temperature_trend(measurements: &[Measurement]) -> Trend {
    detect_trend_with_threshold(measurements, TREND_EPSILON)
}

/// Classify the trend of the last three temperatures
pub fn detect_trend_with_threshold(measurements: &[Measurement], epsilon: f64) -> Trend {
    if measurements.len() < TREND_WINDOW {
        return Trend::InsufficientData;
    }

    let tail = &measurements[measurements.len() - TREND_WINDOW..];
    let (t1, t2, t3) = (
        tail[0].temperature(),
        tail[1].temperature(),
        tail[2].temperature(),
    );
    let change1 = t2 - t1;
    let change2 = t3 - t2;

    if change1 > epsilon && change2 > epsilon {
        Trend::Rising
    } else if change1 < -epsilon && change2 < -epsilon {
        Trend::Falling
    } else {
        Trend::Stable
    }
}
