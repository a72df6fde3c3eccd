/*!
 * Error types for the srtstrip application.
 *
 * This module contains custom error types for the different failure points
 * of the application, using the thiserror crate for ergonomic error
 * definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Processing was requested before any file was selected
    #[error("No subtitle file selected")]
    NoSelection,

    /// The selected file no longer exists at processing time
    #[error("Selected file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Error from a file operation (open, read, write, encoding)
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility conversions so `?` works across the processing path
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        // Alternate formatting keeps the whole context chain, so the
        // user-facing message still names the root cause
        Self::Unknown(format!("{:#}", error))
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
