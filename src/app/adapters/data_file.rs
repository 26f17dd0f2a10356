//! Data file discovery and preparation
//!
//! Finds the measurements file by probing the working directory, the
//! executable's directory and the user data directory, and makes sure the
//! chosen file exists before the store tries to read it.

use crate::constants::{APP_DIR_NAME, DATA_DIR_NAME, DATA_FILE_NAME};
use crate::{Error, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Candidate data file locations in probe order
pub fn candidate_paths(
    current_dir: &Path,
    exe_path: Option<&Path>,
    user_data_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let mut candidates = vec![
        current_dir.join(DATA_DIR_NAME).join(DATA_FILE_NAME),
        current_dir
            .join("src")
            .join(DATA_DIR_NAME)
            .join(DATA_FILE_NAME),
    ];

    if let Some(exe_dir) = exe_path.and_then(Path::parent) {
        candidates.push(exe_dir.join(DATA_DIR_NAME).join(DATA_FILE_NAME));
        if let Some(parent) = exe_dir.parent() {
            candidates.push(parent.join(DATA_DIR_NAME).join(DATA_FILE_NAME));
        }
    }

    if let Some(parent) = current_dir.parent() {
        candidates.push(parent.join(DATA_DIR_NAME).join(DATA_FILE_NAME));
    }

    if let Some(data_dir) = user_data_dir {
        candidates.push(data_dir.join(APP_DIR_NAME).join(DATA_FILE_NAME));
    }

    candidates
}

/// Pick the first existing candidate, or the working-directory default
pub fn select_data_file(candidates: &[PathBuf]) -> PathBuf {
    candidates
        .iter()
        .find(|path| path.exists())
        .cloned()
        .unwrap_or_else(|| Path::new(DATA_DIR_NAME).join(DATA_FILE_NAME))
}

/// Locate the data file for the current process
pub fn locate_data_file() -> anyhow::Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Could not determine working directory")?;
    let exe_path = std::env::current_exe().ok();
    let user_data_dir = dirs::data_dir();

    let candidates = candidate_paths(&current_dir, exe_path.as_deref(), user_data_dir.as_deref());
    debug!("Data file candidates: {:?}", candidates);

    let selected = select_data_file(&candidates);
    info!("Using data file: {}", selected.display());
    Ok(selected)
}

/// Create the data file (and its parent directories) when it does not exist
pub fn ensure_data_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| {
            Error::io(format!("Failed to create directory {}", dir.display()), e)
        })?;
    }

    fs::File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    info!("Created empty data file: {}", path.display());
    Ok(())
}
