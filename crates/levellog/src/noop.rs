//! No-op logger implementation

use std::fmt::Display;

use super::traits::Logger;

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed. Unlike `LevelLogger`,
/// `critical` never terminates the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn println(&self, _args: &[&dyn Display]) {}
    fn info(&self, _args: &[&dyn Display]) {}
    fn error(&self, _args: &[&dyn Display]) {}
    fn critical(&self, _args: &[&dyn Display]) {}
    fn debug(&self, _args: &[&dyn Display]) {}
}
