//! Logging engine for logmate
//!
//! Provides a leveled, thread-safe logger that writes to a file and the console,
//! with single-generation size-based rotation.

mod error;
mod level;
mod line;
mod logger;
mod rotation;

pub use error::{LogError, Result};
pub use level::{level_name, Severity, UNKNOWN_LEVEL_NAME};
pub use line::{format_timestamp, render_line, TIMESTAMP_FORMAT};
pub use logger::{ErrorHandler, Logger};
pub use rotation::ROTATED_LOG_FILE;
