//! Error types for the logger

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures inside the logging path
///
/// None of these reach callers of the emit methods; they are reported to
/// stderr (open) or to the configured error handler (write, rotate).
#[derive(Debug, Error)]
pub enum LogError {
    /// Destination could not be opened for appending
    #[error("Failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Appending a line to the destination failed
    #[error("Failed to write to log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reopening the destination at the rotated path failed
    #[error("Failed to rotate log file to {}: {source}", path.display())]
    Rotate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LogError>;
