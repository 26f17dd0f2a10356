//! Ordered measurement store
//!
//! A station owns a single sequence of measurements in the order they were
//! entered. The sequence is not re-sorted and may hold duplicates; position
//! in the sequence is the only identity a record has.

use crate::app::models::Measurement;
use crate::app::services::measurement_codec::RecordFormat;
use tracing::debug;

pub mod metadata;
pub mod persistence;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::{DegradedLine, LoadStats, SaveStats};

/// In-memory store of measurements with bulk load/save
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Station {
    /// Measurements in entry order
    pub(crate) measurements: Vec<Measurement>,

    /// Record format used by load and save
    pub(crate) format: RecordFormat,
}

impl Station {
    /// Create a new empty station using the pipe format
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty station persisting in the given format
    pub fn with_format(format: RecordFormat) -> Self {
        Self {
            measurements: Vec::new(),
            format,
        }
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// Append a measurement to the end of the sequence
    pub fn add_measurement(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
        debug!("Added measurement, count now {}", self.measurements.len());
    }

    /// Remove the measurement at `index`, shifting later ones down
    ///
    /// Returns false and leaves the sequence untouched when `index` is negative
    /// or past the end.
    pub fn remove_measurement(&mut self, index: isize) -> bool {
        match usize::try_from(index) {
            Ok(index) => self.take_measurement(index).is_some(),
            Err(_) => {
                debug!("Ignoring removal at negative index {}", index);
                false
            }
        }
    }

    /// Remove and return the measurement at `index`
    pub fn take_measurement(&mut self, index: usize) -> Option<Measurement> {
        if index >= self.measurements.len() {
            debug!(
                "Ignoring removal at index {} (count {})",
                index,
                self.measurements.len()
            );
            return None;
        }
        Some(self.measurements.remove(index))
    }

    /// Current measurements in store order
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn count(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Drop every measurement
    pub fn clear(&mut self) {
        debug!("Clearing {} measurements", self.measurements.len());
        self.measurements.clear();
    }
}

impl Extend<Measurement> for Station {
    fn extend<I: IntoIterator<Item = Measurement>>(&mut self, iter: I) {
        self.measurements.extend(iter);
    }
}
