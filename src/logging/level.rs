//! Message severity
//!
//! Severities are ordered by urgency; filtering compares ordinals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::LogError;

/// Name rendered for an ordinal that maps to no known severity
pub const UNKNOWN_LEVEL_NAME: &str = "UNKNOWN";

/// Severity of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
}

impl Severity {
    /// All severities, least urgent first
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Get the rendered name for this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Ordinal position of this severity
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Map an ordinal back to a severity, if it names one
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

/// Rendered name for a raw ordinal; unknown ordinals render as `UNKNOWN`
pub fn level_name(ordinal: u8) -> &'static str {
    Severity::from_ordinal(ordinal)
        .map(|s| s.as_str())
        .unwrap_or(UNKNOWN_LEVEL_NAME)
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            other => Err(LogError::Config(format!("unknown severity '{}'", other))),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = LogError;

    fn try_from(value: String) -> Result<Self, <Severity as TryFrom<String>>::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn test_severity_names() {
        let names: Vec<&str> = Severity::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]);
    }

    #[test]
    fn test_level_name_unknown_ordinal() {
        assert_eq!(level_name(3), "ERROR");
        assert_eq!(level_name(5), "UNKNOWN");
        assert_eq!(level_name(u8::MAX), "UNKNOWN");
    }

    #[test]
    fn test_from_ordinal() {
        for s in Severity::ALL {
            assert_eq!(Severity::from_ordinal(s.ordinal()), Some(s));
        }
        assert_eq!(Severity::from_ordinal(5), None);
    }

    #[test]
    fn test_parse_severity() {
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(" critical ".parse::<Severity>().unwrap(), Severity::Critical);
        assert!("verbose".parse::<Severity>().is_err());
    }
}
