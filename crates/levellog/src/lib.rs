//! levellog
//!
//! A leveled file logger. Given an output directory and a verbosity
//! threshold, it opens one append-mode file per enabled severity and routes
//! each call to the matching file.
//!
//! ## Levels
//!
//! `None < Info < Error < Critical < Debug`. A threshold enables every
//! severity at or below it. Calls for a severity without a file cascade to
//! the next more severe entry point, ending at `critical`, which logs and
//! then terminates the process. With `Debug` enabled, every info, error and
//! critical message is mirrored to `debug.log` together with a stack trace.
//!
//! ```rust,no_run
//! use levellog::{log_info, Level, LevelLogger, LoggerConfig};
//!
//! let logger = LevelLogger::new(LoggerConfig::new("./_log", Level::Debug))?;
//!
//! logger.info(&[&"listening on", &8080]);
//! log_info!(logger, "worker", 3, "ready");
//!
//! logger.close();
//! # Ok::<(), levellog::LoggerError>(())
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod global;
pub mod level;
mod level_logger;
mod noop;
mod sink;
pub mod terminate;
mod traits;

pub use config::{LoggerConfig, DEFAULT_LOG_DIR, ENV_LOG_DIR, ENV_LOG_LEVEL};
pub use console::{MemoryConsole, SharedWriter};
pub use error::{LoggerError, LoggerResult};
pub use level::Level;
pub use level_logger::{LevelLogger, LoggerBuilder};
pub use noop::NoOpLogger;
pub use sink::{format_line, join_args, TIMESTAMP_FORMAT};
pub use terminate::{ProcessExit, RecordingTerminator, Terminate, FATAL_EXIT_CODE};
pub use traits::{BoxedLogger, Logger, LoggerExt, SharedLogger};
