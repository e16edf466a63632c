//! logmate - a minimal leveled file and console logger
//!
//! This library provides the logging engine and its configuration.

pub mod config;
pub mod logging;

pub use logging::{LogError, Logger, Severity};
