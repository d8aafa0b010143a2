//! Provides utility functions for file system operations critical to the application.
//!
//! This includes validating the map file path and writing the result file.
//! It uses the crate's verbose logging macros.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use crate::verbose_eprintln;

/// Checks that the given map path exists and points to a file.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is not found or is not a file.
pub fn validate_map_file(map_file_path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !map_file_path.exists() {
        let error_msg = format!("File not found: {}", map_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !map_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", map_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Writes string content to a specified file, creating or overwriting it.
///
/// # Errors
/// Returns an `IoError` if any file operation (opening, writing, flushing) fails.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?; // Callers read the file right after we return.
    Ok(())
}
