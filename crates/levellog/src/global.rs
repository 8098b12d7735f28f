//! Process-wide logger
//!
//! One [`LevelLogger`] can be installed for the whole process. The free
//! functions here route to it and do nothing until one is installed.
//! An installed logger lives until the process exits; its files are closed
//! by the OS at that point.

use std::fmt::Display;

use once_cell::sync::OnceCell;

use crate::config::LoggerConfig;
use crate::error::{LoggerError, LoggerResult};
use crate::level_logger::LevelLogger;

/// Global logger instance
static LOGGER: OnceCell<LevelLogger> = OnceCell::new();

/// Install `logger` as the process-wide logger
pub fn install(logger: LevelLogger) -> LoggerResult<&'static LevelLogger> {
    LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInstalled)?;
    LOGGER.get().ok_or(LoggerError::AlreadyInstalled)
}

/// Build a logger from `config` and install it
pub fn init(config: LoggerConfig) -> LoggerResult<&'static LevelLogger> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInstalled);
    }
    install(LevelLogger::new(config)?)
}

/// Build a logger from `LEVELLOG_DIR` / `LEVELLOG_LEVEL` and install it
pub fn init_from_env() -> LoggerResult<&'static LevelLogger> {
    init(LoggerConfig::from_env())
}

/// The installed logger, if any
pub fn get() -> Option<&'static LevelLogger> {
    LOGGER.get()
}

pub fn println(args: &[&dyn Display]) {
    if let Some(logger) = get() {
        logger.println(args);
    }
}

pub fn info(args: &[&dyn Display]) {
    if let Some(logger) = get() {
        logger.info(args);
    }
}

pub fn error(args: &[&dyn Display]) {
    if let Some(logger) = get() {
        logger.error(args);
    }
}

/// Terminates the process through the installed logger's terminator
pub fn critical(args: &[&dyn Display]) {
    if let Some(logger) = get() {
        logger.critical(args);
    }
}

pub fn debug(args: &[&dyn Display]) {
    if let Some(logger) = get() {
        logger.debug(args);
    }
}
