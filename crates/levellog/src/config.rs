//! Logger configuration
//!
//! A configuration is a directory plus a verbosity threshold. It can be built
//! in code, read from `LEVELLOG_DIR` / `LEVELLOG_LEVEL`, or loaded from a YAML
//! or JSON file:
//!
//! ```yaml
//! dir: /var/log/myapp
//! level: error
//! ```

use std::fs;
use std::path::{self, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, LoggerResult};
use crate::level::Level;

/// Directory used when none is configured
pub const DEFAULT_LOG_DIR: &str = "./_log/";

/// Environment variable overriding the output directory
pub const ENV_LOG_DIR: &str = "LEVELLOG_DIR";

/// Environment variable overriding the threshold
pub const ENV_LOG_LEVEL: &str = "LEVELLOG_LEVEL";

/// Output directory and verbosity threshold
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Directory holding the severity log files
    #[serde(default)]
    pub dir: String,

    /// Most verbose severity that gets its own file
    #[serde(default)]
    pub level: Level,
}

impl LoggerConfig {
    pub fn new(dir: impl Into<String>, level: Level) -> Self {
        Self {
            dir: dir.into(),
            level,
        }
    }

    /// Same directory, different threshold
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Substitute the default directory when empty and make sure the
    /// directory ends with a path separator.
    pub fn normalized(mut self) -> Self {
        if self.dir.is_empty() {
            self.dir = DEFAULT_LOG_DIR.to_string();
        }
        if !self.dir.ends_with(path::is_separator) {
            self.dir.push(path::MAIN_SEPARATOR);
        }
        self
    }

    pub fn dir_path(&self) -> &Path {
        Path::new(&self.dir)
    }

    /// Path of the log file for `severity`, if that severity has one
    pub fn log_path(&self, severity: Level) -> Option<PathBuf> {
        severity.file_name().map(|name| self.dir_path().join(name))
    }

    /// Read the configuration from the environment.
    ///
    /// Unset variables keep their defaults, and so does an unparsable level.
    pub fn from_env() -> Self {
        let dir = std::env::var(ENV_LOG_DIR).unwrap_or_default();
        let level = std::env::var(ENV_LOG_LEVEL)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self { dir, level }
    }

    pub fn from_yaml_str(content: &str) -> LoggerResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| LoggerError::Config(format!("Failed to parse YAML: {}", e)))
    }

    pub fn from_json_str(content: &str) -> LoggerResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| LoggerError::Config(format!("Failed to parse JSON: {}", e)))
    }

    /// Load a configuration file, choosing the format by extension
    pub fn load(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Err(LoggerError::Config(format!(
                "Unsupported config format: {}",
                path.display()
            ))),
        }
    }
}
