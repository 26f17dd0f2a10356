//! Load and save statistics
//!
//! This module defines the data structures reporting what a bulk load or
//! save did, including the lines that decoded with defaulted fields.

use crate::app::models::FieldIssue;
use std::time::Duration;

/// A data line whose record was stored with one or more defaulted fields
#[derive(Debug, Clone, PartialEq)]
pub struct DegradedLine {
    /// 1-based line number in the source file
    pub line_number: usize,

    /// Fields that fell back to defaults
    pub issues: Vec<FieldIssue>,
}

/// Statistics about a bulk load
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Number of lines read from the file
    pub lines_read: usize,

    /// Number of measurements appended to the station
    pub records_loaded: usize,

    /// Number of blank lines skipped
    pub blank_lines: usize,

    /// Number of comment lines skipped
    pub comment_lines: usize,

    /// Lines stored with defaulted fields
    pub degraded: Vec<DegradedLine>,

    /// Time taken to read and decode the file
    pub load_duration: Duration,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self::default()
    }

    pub fn degraded_count(&self) -> usize {
        self.degraded.len()
    }

    pub fn has_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} measurements from {} lines ({} blank, {} comments, {} degraded) in {:.3}s",
            self.records_loaded,
            self.lines_read,
            self.blank_lines,
            self.comment_lines,
            self.degraded_count(),
            self.load_duration.as_secs_f64()
        )
    }
}

/// Statistics about a bulk save
#[derive(Debug, Clone, Default)]
pub struct SaveStats {
    /// Number of measurements written
    pub records_written: usize,

    /// Number of bytes written including newlines
    pub bytes_written: usize,

    /// Time taken to encode and write the file
    pub save_duration: Duration,
}

impl SaveStats {
    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Saved {} measurements ({} bytes) in {:.3}s",
            self.records_written,
            self.bytes_written,
            self.save_duration.as_secs_f64()
        )
    }
}
