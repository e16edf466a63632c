//! The logging engine
//!
//! A [`Logger`] filters messages by severity, renders them with a local
//! timestamp and writes each line to its destination file and then to the
//! console. The destination is rotated to [`ROTATED_LOG_FILE`] once it grows
//! past the configured threshold.

use std::cell::Cell;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use crate::config::LoggerConfig;

use super::error::{LogError, Result};
use super::level::{level_name, Severity};
use super::line::render_line;
use super::rotation::{open_rotated, should_rotate, ROTATED_LOG_FILE};

thread_local! {
    /// Set while this thread is reporting a failure
    static REPORTING: Cell<bool> = const { Cell::new(false) };
}

/// Clears [`REPORTING`] when dropped, including on handler panic
struct ReportingGuard;

impl ReportingGuard {
    /// Returns `None` if this thread is already reporting
    fn enter() -> Option<Self> {
        if REPORTING.with(|r| r.replace(true)) {
            None
        } else {
            Some(ReportingGuard)
        }
    }
}

impl Drop for ReportingGuard {
    fn drop(&mut self) {
        REPORTING.with(|r| r.set(false));
    }
}

/// Callback receiving a description of a failed destination write or rotation
pub type ErrorHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// State touched while a line is being written
struct WriteState {
    /// Destination file; `None` when opening or reopening it failed
    destination: Option<File>,
    /// Path the destination was opened from
    destination_path: PathBuf,
    console: Box<dyn Write + Send>,
    /// Rotation threshold in bytes, 0 = disabled
    rotation_threshold: u64,
}

impl WriteState {
    /// Append a record to the destination and rotate if it reached the threshold
    fn append(&mut self, record: &str, rotated_path: &Path) -> Option<LogError> {
        let file = self.destination.as_mut()?;

        if let Err(source) = file.write_all(record.as_bytes()) {
            return Some(LogError::Write {
                path: self.destination_path.clone(),
                source,
            });
        }

        let size = match file.metadata() {
            Ok(metadata) => metadata.len(),
            Err(source) => {
                return Some(LogError::Write {
                    path: self.destination_path.clone(),
                    source,
                })
            }
        };

        if should_rotate(size, self.rotation_threshold) {
            return self.rotate(rotated_path).err();
        }
        None
    }

    fn rotate(&mut self, rotated_path: &Path) -> Result<()> {
        // Close first: the destination may already be the rotated file.
        self.destination = None;
        let previous = std::mem::replace(&mut self.destination_path, rotated_path.to_path_buf());
        self.destination = Some(open_rotated(rotated_path)?);

        tracing::debug!(
            "Rotated log file {} to {}",
            previous.display(),
            rotated_path.display()
        );
        Ok(())
    }

    /// Console output is best-effort; its failures are not reported.
    fn write_console(&mut self, record: &str) {
        let _ = self.console.write_all(record.as_bytes());
        let _ = self.console.flush();
    }
}

/// Thread-safe leveled logger writing to a file and the console
pub struct Logger {
    /// Minimum severity ordinal; read without taking the write lock
    min_level: AtomicU8,
    /// Stored but not applied to rendered lines
    format: RwLock<String>,
    error_handler: RwLock<Option<ErrorHandler>>,
    state: Mutex<WriteState>,
    rotated_path: PathBuf,
}

/// Open a destination for appending, creating it if absent
fn open_destination(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })
}

impl Logger {
    /// Create a logger appending to `path` and echoing to stdout
    ///
    /// If the file cannot be opened the failure is printed to stderr and the
    /// logger keeps running with console output only.
    pub fn new(path: impl AsRef<Path>, level: Severity) -> Self {
        Self::with_console(path, level, io::stdout())
    }

    /// Like [`Logger::new`], with `console` in place of stdout
    pub fn with_console<W>(path: impl AsRef<Path>, level: Severity, console: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let path = path.as_ref();
        let destination = match open_destination(path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("{}", e);
                None
            }
        };
        Self::build(path, destination, level, Box::new(console))
    }

    /// Create a logger, failing if the destination cannot be opened
    pub fn try_new(path: impl AsRef<Path>, level: Severity) -> Result<Self> {
        let path = path.as_ref();
        let file = open_destination(path)?;
        Ok(Self::build(path, Some(file), level, Box::new(io::stdout())))
    }

    /// Create a logger from loaded configuration
    pub fn from_config(config: &LoggerConfig) -> Self {
        let logger = Self::new(&config.destination, config.level);
        logger.enable_log_rotation(config.rotation_max_bytes);
        logger.set_format(config.format.clone());
        logger
    }

    fn build(
        path: &Path,
        destination: Option<File>,
        level: Severity,
        console: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            min_level: AtomicU8::new(level.ordinal()),
            format: RwLock::new(String::new()),
            error_handler: RwLock::new(None),
            state: Mutex::new(WriteState {
                destination,
                destination_path: path.to_path_buf(),
                console,
                rotation_threshold: 0,
            }),
            rotated_path: PathBuf::from(ROTATED_LOG_FILE),
        }
    }

    pub fn debug(&self, message: &str) {
        self.emit(Severity::Debug.ordinal(), message);
    }

    pub fn info(&self, message: &str) {
        self.emit(Severity::Info.ordinal(), message);
    }

    pub fn warning(&self, message: &str) {
        self.emit(Severity::Warning.ordinal(), message);
    }

    pub fn error(&self, message: &str) {
        self.emit(Severity::Error.ordinal(), message);
    }

    pub fn critical(&self, message: &str) {
        self.emit(Severity::Critical.ordinal(), message);
    }

    /// Log at a raw severity ordinal
    ///
    /// Ordinals past [`Severity::Critical`] pass any filter and render as `UNKNOWN`.
    pub fn log_raw(&self, ordinal: u8, message: &str) {
        self.emit(ordinal, message);
    }

    /// Set the minimum severity; applies from the next emit
    pub fn set_log_level(&self, level: Severity) {
        self.min_level.store(level.ordinal(), Ordering::Relaxed);
    }

    /// Current minimum severity
    pub fn log_level(&self) -> Severity {
        Severity::from_ordinal(self.min_level.load(Ordering::Relaxed)).unwrap_or(Severity::Critical)
    }

    /// Store a format template. Rendered lines do not use it.
    pub fn set_format(&self, format: impl Into<String>) {
        *self.format.write().unwrap_or_else(|e| e.into_inner()) = format.into();
    }

    /// Stored format template
    pub fn format(&self) -> String {
        self.format.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Rotate once the destination reaches `max_size_bytes`; 0 disables rotation
    pub fn enable_log_rotation(&self, max_size_bytes: u64) {
        self.lock_state().rotation_threshold = max_size_bytes;
    }

    /// Current rotation threshold in bytes
    pub fn rotation_threshold(&self) -> u64 {
        self.lock_state().rotation_threshold
    }

    /// Install a callback for destination write and rotation failures
    pub fn set_error_handler<F>(&self, handler: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        *self.error_handler.write().unwrap_or_else(|e| e.into_inner()) = Some(Arc::new(handler));
    }

    /// Whether a destination file is currently open
    pub fn has_destination(&self) -> bool {
        self.lock_state().destination.is_some()
    }

    fn lock_state(&self) -> MutexGuard<'_, WriteState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, ordinal: u8, message: &str) {
        if ordinal < self.min_level.load(Ordering::Relaxed) {
            return;
        }

        let failure = {
            let mut state = self.lock_state();

            let mut record = render_line(level_name(ordinal), message);
            record.push('\n');

            let failure = state.append(&record, &self.rotated_path);
            state.write_console(&record);
            failure
        };

        // Outside the lock so a handler may log through this logger. Failures
        // raised by that nested logging are dropped.
        if let Some(error) = failure {
            self.report(error);
        }
    }

    fn report(&self, error: LogError) {
        let Some(_guard) = ReportingGuard::enter() else {
            return;
        };
        tracing::warn!("{}", error);

        let handler = self
            .error_handler
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(handler) = handler {
            handler(&error.to_string());
        }
    }
}
