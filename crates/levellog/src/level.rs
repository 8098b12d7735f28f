//! Severity levels and the enable rule

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Log levels, ordered from least to most verbose
///
/// A threshold enables every severity at or below it, so `Critical`
/// enables info, error and critical, and `Debug` enables everything.
/// `None` enables nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "RawLevel")]
pub enum Level {
    #[default]
    None = 0,
    Info = 1,
    Error = 2,
    Critical = 3,
    Debug = 4,
}

impl Level {
    /// Severities that own a log file, in the order their sinks are opened
    pub const SEVERITIES: [Level; 4] = [Level::Debug, Level::Critical, Level::Error, Level::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Info => "info",
            Level::Error => "error",
            Level::Critical => "critical",
            Level::Debug => "debug",
        }
    }

    /// Line prefix written before every entry of this severity.
    /// Critical entries share the error prefix.
    pub fn prefix(&self) -> &'static str {
        match self {
            Level::None => "",
            Level::Info => "INFO: ",
            Level::Error => "ERROR: ",
            Level::Critical => "ERROR: ",
            Level::Debug => "DEBUG: ",
        }
    }

    /// File name of this severity's log, `None` for `Level::None`
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            Level::None => None,
            Level::Info => Some("info.log"),
            Level::Error => Some("error.log"),
            Level::Critical => Some("critical.log"),
            Level::Debug => Some("debug.log"),
        }
    }

    /// Whether a logger configured with this threshold writes `severity`
    pub fn enables(self, severity: Level) -> bool {
        severity != Level::None && self >= severity
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<i64> for Level {
    /// Out-of-range values clamp to the nearest end of the scale
    fn from(value: i64) -> Self {
        match value {
            i64::MIN..=0 => Level::None,
            1 => Level::Info,
            2 => Level::Error,
            3 => Level::Critical,
            _ => Level::Debug,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Level::from(n));
        }
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(Level::None),
            "info" => Ok(Level::Info),
            "error" => Ok(Level::Error),
            "critical" | "fatal" => Ok(Level::Critical),
            "debug" => Ok(Level::Debug),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// Levels may be written as names or integers in config files
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Number(i64),
    Name(String),
}

impl TryFrom<RawLevel> for Level {
    type Error = String;

    fn try_from(raw: RawLevel) -> Result<Self, String> {
        match raw {
            RawLevel::Number(n) => Ok(Level::from(n)),
            RawLevel::Name(name) => name.parse(),
        }
    }
}
