//! Logger trait definition

use std::fmt::{self, Display};
use std::sync::Arc;

/// Leveled logging entry points
///
/// Every entry point takes a list of displayable values that are joined
/// with single spaces into one line.
///
/// Implementations:
/// - `LevelLogger`: per-severity files with cascade and debug mirroring
/// - `NoOpLogger`: Silent logger for testing
pub trait Logger: Send + Sync {
    /// Write to the console, then log as an error
    fn println(&self, args: &[&dyn Display]);

    /// Log an info message
    fn info(&self, args: &[&dyn Display]);

    /// Log an error message
    fn error(&self, args: &[&dyn Display]);

    /// Log a critical message and terminate the process
    fn critical(&self, args: &[&dyn Display]);

    /// Log a debug message followed by a stack trace
    fn debug(&self, args: &[&dyn Display]);
}

macro_rules! forward_logger {
    ($($wrapper:ty),*) => {
        $(
            impl<T: Logger + ?Sized> Logger for $wrapper {
                fn println(&self, args: &[&dyn Display]) {
                    (**self).println(args)
                }

                fn info(&self, args: &[&dyn Display]) {
                    (**self).info(args)
                }

                fn error(&self, args: &[&dyn Display]) {
                    (**self).error(args)
                }

                fn critical(&self, args: &[&dyn Display]) {
                    (**self).critical(args)
                }

                fn debug(&self, args: &[&dyn Display]) {
                    (**self).debug(args)
                }
            }
        )*
    };
}

forward_logger!(&T, Box<T>, Arc<T>);

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    fn println_fmt(&self, args: fmt::Arguments<'_>) {
        self.println(&[&args]);
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.info(&[&args]);
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.error(&[&args]);
    }

    fn critical_fmt(&self, args: fmt::Arguments<'_>) {
        self.critical(&[&args]);
    }

    /// Log a debug message with format arguments
    fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.debug(&[&args]);
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros: a logger followed by any number of displayable values
///
/// ```
/// use levellog::{log_info, NoOpLogger};
///
/// let logger = NoOpLogger::new();
/// log_info!(logger, "disk", 3, "is", 97.5, "% full");
/// ```
#[macro_export]
macro_rules! log_println {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::println(&$logger, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::info(&$logger, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::error(&$logger, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::critical(&$logger, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::debug(&$logger, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
