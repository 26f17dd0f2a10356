//! Station persistence
//!
//! Whole-file load and save. A load reads the entire file before touching the
//! station, so a read failure leaves the sequence as it was. A save encodes
//! every record before truncating the target, but the write itself is not
//! atomic: an interruption mid-write can leave a truncated file.

use super::Station;
use super::metadata::{DegradedLine, LoadStats, SaveStats};
use crate::app::models::DecodedLine;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

impl Station {
    /// Append every record in `path` to the station
    ///
    /// Blank and comment lines are skipped. Lines with malformed fields are
    /// still appended, with defaults in place of the unreadable fields, and
    /// are listed in the returned statistics. Records are appended after any
    /// existing ones; call [`Station::clear`] first to replace the contents.
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if `path` does not exist
    /// * Returns `Error::Io` if the file cannot be opened or read
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<LoadStats> {
        let path = path.as_ref();
        let start_time = Instant::now();

        let mut file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
            _ => Error::io(format!("Failed to open {}", path.display()), e),
        })?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
        let content = String::from_utf8_lossy(&bytes);

        let mut stats = LoadStats::new();
        let mut loaded = Vec::new();

        for (index, line) in content.lines().enumerate() {
            stats.lines_read += 1;
            match self.format.decode(line) {
                DecodedLine::Blank => stats.blank_lines += 1,
                DecodedLine::Comment => stats.comment_lines += 1,
                DecodedLine::Record(measurement) => loaded.push(measurement),
                DecodedLine::Degraded {
                    measurement,
                    issues,
                } => {
                    debug!(
                        "Line {} of {} decoded with defaults for: {:?}",
                        index + 1,
                        path.display(),
                        issues
                    );
                    stats.degraded.push(DegradedLine {
                        line_number: index + 1,
                        issues,
                    });
                    loaded.push(measurement);
                }
            }
        }

        stats.records_loaded = loaded.len();
        self.measurements.extend(loaded);
        stats.load_duration = start_time.elapsed();

        if stats.has_degraded() {
            debug!(
                "{} line(s) in {} had unreadable fields and were loaded with defaults",
                stats.degraded_count(),
                path.display()
            );
        }
        info!("{} from {}", stats.summary(), path.display());

        Ok(stats)
    }

    /// Write every record to `path`, one per line, truncating the file
    ///
    /// # Errors
    /// * Returns `Error::Serialization` if a record cannot be encoded (nothing is written)
    /// * Returns `Error::Io` if the file cannot be created or written
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<SaveStats> {
        let path = path.as_ref();
        let start_time = Instant::now();

        let mut buffer = String::new();
        for measurement in &self.measurements {
            buffer.push_str(&self.format.encode(measurement)?);
            buffer.push('\n');
        }

        let file = File::create(path)
            .map_err(|e| Error::io(format!("Failed to open {} for writing", path.display()), e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(buffer.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

        let stats = SaveStats {
            records_written: self.measurements.len(),
            bytes_written: buffer.len(),
            save_duration: start_time.elapsed(),
        };
        info!("{} to {}", stats.summary(), path.display());

        Ok(stats)
    }

    /// Load, reporting only whether the file could be opened
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.load_from_file(path) {
            Ok(_) => true,
            Err(e) => {
                warn!("Could not load {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Save, reporting only whether the file could be written
    pub fn save(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.save_to_file(path) {
            Ok(_) => true,
            Err(e) => {
                warn!("Could not save {}: {}", path.display(), e);
                false
            }
        }
    }
}
