//! File system helpers for the command-line front end.
//!
//! Covers validating input paths, reading the grid file and writing the word
//! list. Failures are logged through the verbose macros of the parent `app`
//! module before being returned.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `path` exists and is a regular file.
///
/// # Arguments
/// * `path` - The file to check.
/// * `role` - What the file is for, used in error messages ("grid", "word list").
/// * `quiet_mode` - Suppresses verbose logging if true.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or not a file.
pub fn validate_input_file(path: &Path, role: &str, quiet_mode: bool) -> Result<(), AppError> {
    if !path.exists() {
        let error_msg = format!("{} file not found: {}", role, path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !path.is_file() {
        let error_msg = format!("{} path is not a file: {}", role, path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Reads the whole grid file into a string.
pub fn read_grid_file(path: &Path, quiet_mode: bool) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|e| {
        verbose_eprintln!(quiet_mode, "Failed to read grid {}: {}", path.display(), e);
        AppError::Io(e)
    })
}

/// Writes string content to a specified file, creating or overwriting it.
///
/// The content goes through a `BufWriter` that is flushed before returning,
/// so the caller sees the complete file on success.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}
