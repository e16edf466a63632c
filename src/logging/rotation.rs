//! Size-triggered log rotation
//!
//! Rotation is single-generation: the destination is swapped for a fresh,
//! truncated file at a fixed path, and every later rotation overwrites it.

use std::fs::{File, OpenOptions};
use std::path::Path;

use super::error::{LogError, Result};

/// Path the destination is rotated to, relative to the current working directory
pub const ROTATED_LOG_FILE: &str = "log_rotated.txt";

/// Whether a destination of `size` bytes has reached the threshold
///
/// A threshold of 0 means rotation is disabled.
pub fn should_rotate(size: u64, threshold: u64) -> bool {
    threshold > 0 && size >= threshold
}

/// Open the rotated file, discarding anything a previous rotation left there
pub fn open_rotated(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| LogError::Rotate {
            path: path.to_path_buf(),
            source,
        })
}
