//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up a logger
#[derive(Error, Debug)]
pub enum LoggerError {
    /// The output directory could not be created
    #[error("log directory error: {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A severity log file could not be opened
    #[error("log file error: {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A process-wide logger was already installed
    #[error("Global logger already installed")]
    AlreadyInstalled,
}

impl LoggerError {
    /// Create a directory creation error
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a file open error
    pub fn open_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenFile {
            path: path.into(),
            source,
        }
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;
