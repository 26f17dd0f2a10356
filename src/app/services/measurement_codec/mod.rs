//! Measurement record codecs
//!
//! This module converts measurements to and from single lines of text. The
//! pipe format is the canonical on-disk representation; JSON lines carry the
//! same field set for text fields that may contain the pipe delimiter.
//!
//! Both decoders follow the same policy: decoding never fails. Blank and
//! comment lines are reported as such, and unreadable fields fall back to
//! their defaults with the affected fields listed in the result.

use crate::Result;
use crate::app::models::{DecodedLine, Measurement};
use crate::constants::COMMENT_PREFIX;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod json_lines;
pub mod pipe;

#[cfg(test)]
pub mod tests;

/// On-disk record format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RecordFormat {
    /// `temperature|humidity|windSpeed|windDirection|timestamp`
    #[default]
    Pipe,
    /// One JSON object per line
    JsonLines,
}

impl RecordFormat {
    /// Encode a measurement as a single line (without the trailing newline)
    pub fn encode(&self, measurement: &Measurement) -> Result<String> {
        match self {
            Self::Pipe => Ok(pipe::encode(measurement)),
            Self::JsonLines => json_lines::encode(measurement),
        }
    }

    /// Decode a single line
    pub fn decode(&self, line: &str) -> DecodedLine {
        match self {
            Self::Pipe => pipe::decode_line(line),
            Self::JsonLines => json_lines::decode_line(line),
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipe => f.write_str("pipe"),
            Self::JsonLines => f.write_str("json-lines"),
        }
    }
}

/// Classify lines that carry no record, shared by all formats
///
/// Only a truly empty line is blank; whitespace-only lines decode as data.
pub(crate) fn skipped_line(line: &str) -> Option<DecodedLine> {
    if line.is_empty() {
        Some(DecodedLine::Blank)
    } else if line.starts_with(COMMENT_PREFIX) {
        Some(DecodedLine::Comment)
    } else {
        None
    }
}
