//! Per-severity file logger
//!
//! A [`LevelLogger`] opens one append-mode file per enabled severity under
//! its output directory (`info.log`, `error.log`, `critical.log`,
//! `debug.log`) and routes each call to the matching file. When a
//! severity has no file, the call cascades to the next more severe entry
//! point: info falls to error, error falls to critical, and critical
//! always terminates the process. When `debug.log` is open, every info,
//! error and critical message is also mirrored there with a stack trace.

use std::backtrace::Backtrace;
use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LoggerConfig;
use crate::console::{self, SharedWriter};
use crate::error::{LoggerError, LoggerResult};
use crate::level::Level;
use crate::sink::Sink;
use crate::terminate::{ProcessExit, Terminate, FATAL_EXIT_CODE};
use crate::traits::Logger;

/// Builder for [`LevelLogger`] with injectable collaborators
///
/// # Example
///
/// ```no_run
/// use levellog::{Level, LoggerBuilder, LoggerConfig, MemoryConsole};
///
/// let console = MemoryConsole::new();
/// let logger = LoggerBuilder::new(LoggerConfig::new("/tmp/app-logs", Level::Error))
///     .with_console(console.clone())
///     .build()?;
/// logger.info(&[&"service", &"started"]);
/// logger.close();
/// # Ok::<(), levellog::LoggerError>(())
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console: Option<SharedWriter>,
    terminator: Option<Box<dyn Terminate>>,
}

impl LoggerBuilder {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            console: None,
            terminator: None,
        }
    }

    /// Console used by the unprefixed default sink (stderr if unset)
    pub fn with_console(mut self, writer: impl std::io::Write + Send + 'static) -> Self {
        self.console = Some(console::shared(writer));
        self
    }

    /// Share an existing console writer
    pub fn with_shared_console(mut self, writer: SharedWriter) -> Self {
        self.console = Some(writer);
        self
    }

    /// Exit capability called after a critical entry ([`ProcessExit`] if unset)
    pub fn with_terminator(mut self, terminator: impl Terminate + 'static) -> Self {
        self.terminator = Some(Box::new(terminator));
        self
    }

    /// Normalize the configuration, create the directory and open the
    /// severity files. Nothing is returned on failure; files opened before
    /// the failing one are closed when their sinks drop.
    pub fn build(self) -> LoggerResult<LevelLogger> {
        let config = self.config.normalized();
        let console = self.console.unwrap_or_else(console::stderr);
        let terminator = self
            .terminator
            .unwrap_or_else(|| Box::new(ProcessExit));

        fs::create_dir_all(config.dir_path())
            .map_err(|e| LoggerError::create_dir(config.dir_path(), e))?;

        let mut sinks = SeveritySinks::default();
        for severity in Level::SEVERITIES {
            if !config.level.enables(severity) {
                continue;
            }
            if let Some(path) = config.log_path(severity) {
                let sink = Sink::open(&path, severity.prefix(), &console)?;
                sinks.set(severity, sink);
            }
        }

        Ok(LevelLogger {
            console: Sink::console(&console, Level::None.prefix()),
            sinks,
            config,
            terminator,
        })
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("console", &self.console.is_some())
            .field("terminator", &self.terminator.is_some())
            .finish()
    }
}

#[derive(Debug, Default)]
struct SeveritySinks {
    info: Option<Sink>,
    error: Option<Sink>,
    critical: Option<Sink>,
    debug: Option<Sink>,
}

impl SeveritySinks {
    fn set(&mut self, severity: Level, sink: Sink) {
        match severity {
            Level::Info => self.info = Some(sink),
            Level::Error => self.error = Some(sink),
            Level::Critical => self.critical = Some(sink),
            Level::Debug => self.debug = Some(sink),
            Level::None => {}
        }
    }

    fn get(&self, severity: Level) -> Option<&Sink> {
        match severity {
            Level::Info => self.info.as_ref(),
            Level::Error => self.error.as_ref(),
            Level::Critical => self.critical.as_ref(),
            Level::Debug => self.debug.as_ref(),
            Level::None => None,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Sink> {
        [&self.debug, &self.critical, &self.error, &self.info]
            .into_iter()
            .flatten()
    }
}

/// Leveled logger writing one file per enabled severity
///
/// Construct with [`LevelLogger::new`] or [`LoggerBuilder`], and release the
/// files with [`LevelLogger::close`] when done.
pub struct LevelLogger {
    console: Sink,
    sinks: SeveritySinks,
    config: LoggerConfig,
    terminator: Box<dyn Terminate>,
}

impl LevelLogger {
    /// Create a logger writing its console output to stderr and exiting
    /// the process on critical entries
    pub fn new(config: LoggerConfig) -> LoggerResult<Self> {
        LoggerBuilder::new(config).build()
    }

    pub fn builder(config: LoggerConfig) -> LoggerBuilder {
        LoggerBuilder::new(config)
    }

    /// Normalized configuration the logger was built from
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Whether `severity` has its own file
    pub fn is_enabled(&self, severity: Level) -> bool {
        self.sinks.get(severity).is_some()
    }

    /// Paths of the files this logger opened
    pub fn log_files(&self) -> Vec<PathBuf> {
        self.sinks
            .iter()
            .filter_map(Sink::path)
            .map(Path::to_path_buf)
            .collect()
    }

    /// Write to the console, then log as an error
    pub fn println(&self, args: &[&dyn Display]) {
        self.console.write_line(args);
        self.error(args);
    }

    /// Write to `info.log`, or cascade to [`LevelLogger::error`]
    pub fn info(&self, args: &[&dyn Display]) {
        match &self.sinks.info {
            Some(sink) => sink.write_line(args),
            None => self.error(args),
        }
        self.debug(args);
    }

    /// Write to `error.log`, or cascade to [`LevelLogger::critical`].
    ///
    /// With no error file this terminates the process.
    pub fn error(&self, args: &[&dyn Display]) {
        match &self.sinks.error {
            Some(sink) => sink.write_line(args),
            None => self.critical(args),
        }
        self.debug(args);
    }

    /// Log the message with [`LevelLogger::log_critical`], then terminate.
    ///
    /// With the default terminator this never returns.
    pub fn critical(&self, args: &[&dyn Display]) {
        self.log_critical(args);
        self.terminator.terminate(FATAL_EXIT_CODE);
    }

    /// The logging half of a critical entry: `critical.log` if open, the
    /// debug mirror, and a final line on the console.
    pub fn log_critical(&self, args: &[&dyn Display]) {
        if let Some(sink) = &self.sinks.critical {
            sink.write_line(args);
        }
        self.debug(args);
        self.console.write_line(args);
    }

    /// Write the message and a stack trace to `debug.log`, if open
    pub fn debug(&self, args: &[&dyn Display]) {
        if let Some(sink) = &self.sinks.debug {
            sink.write_line(args);
            sink.write_line(&[&Backtrace::force_capture()]);
        }
    }

    /// Flush and close every log file. The console stays open.
    pub fn close(self) {
        for sink in self.sinks.iter() {
            sink.flush();
        }
    }
}

impl Logger for LevelLogger {
    fn println(&self, args: &[&dyn Display]) {
        LevelLogger::println(self, args)
    }

    fn info(&self, args: &[&dyn Display]) {
        LevelLogger::info(self, args)
    }

    fn error(&self, args: &[&dyn Display]) {
        LevelLogger::error(self, args)
    }

    fn critical(&self, args: &[&dyn Display]) {
        LevelLogger::critical(self, args)
    }

    fn debug(&self, args: &[&dyn Display]) {
        LevelLogger::debug(self, args)
    }
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelLogger")
            .field("config", &self.config)
            .field("sinks", &self.sinks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use crate::terminate::RecordingTerminator;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    struct Harness {
        dir: TempDir,
        console: MemoryConsole,
        terminator: RecordingTerminator,
        logger: LevelLogger,
    }

    impl Harness {
        fn new(level: Level) -> Self {
            let dir = tempdir().unwrap();
            let console = MemoryConsole::new();
            let terminator = RecordingTerminator::new();
            let logger = LoggerBuilder::new(LoggerConfig::new(
                dir.path().join("logs").to_string_lossy(),
                level,
            ))
            .with_console(console.clone())
            .with_terminator(terminator.clone())
            .build()
            .unwrap();

            Self {
                dir,
                console,
                terminator,
                logger,
            }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join("logs").join(name)
        }

        fn read(&self, name: &str) -> String {
            fs::read_to_string(self.path(name)).unwrap_or_default()
        }
    }

    fn message_lines(content: &str, prefix: &str) -> usize {
        content.lines().filter(|l| l.starts_with(prefix)).count()
    }

    #[test]
    fn test_level_none_creates_no_files() {
        let h = Harness::new(Level::None);

        assert!(h.path("").is_dir());
        for name in ["info.log", "error.log", "critical.log", "debug.log"] {
            assert!(!h.path(name).exists(), "{} should not exist", name);
        }
        assert!(h.logger.log_files().is_empty());
    }

    #[test]
    fn test_level_none_info_escalates_to_terminate() {
        let h = Harness::new(Level::None);

        h.logger.info(&[&"nowhere", &"to", &"go"]);

        assert_eq!(h.terminator.calls(), 1);
        assert_eq!(h.terminator.last_status(), Some(FATAL_EXIT_CODE));
        let lines = h.console.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" nowhere to go"));
        assert!(fs::read_dir(h.path("")).unwrap().next().is_none());
    }

    #[test]
    fn test_level_debug_opens_every_file() {
        let h = Harness::new(Level::Debug);

        for severity in Level::SEVERITIES {
            assert!(h.logger.is_enabled(severity));
            let name = severity.file_name().unwrap();
            assert!(h.path(name).is_file(), "{} missing", name);
        }
        assert_eq!(h.logger.log_files().len(), 4);
    }

    #[test]
    fn test_info_is_mirrored_to_debug() {
        let h = Harness::new(Level::Debug);

        h.logger.info(&[&"cache", &"warm"]);

        let info = h.read("info.log");
        assert_eq!(info.lines().count(), 1);
        assert!(info.starts_with("INFO: "));
        assert!(info.trim_end().ends_with(" cache warm"));

        // Message line plus a stack trace entry
        let debug = h.read("debug.log");
        assert_eq!(message_lines(&debug, "DEBUG: "), 2);
        assert!(debug.lines().next().unwrap().ends_with(" cache warm"));
        // The trace entry carries frames past its first line
        assert!(debug.lines().count() > 2);
        assert!(debug.contains("level_logger"));

        assert!(h.read("error.log").is_empty());
        assert_eq!(h.terminator.calls(), 0);
        assert!(h.console.is_empty());
    }

    #[test]
    fn test_error_and_critical_mirror_to_debug() {
        let h = Harness::new(Level::Debug);

        h.logger.error(&[&"disk", &"full"]);
        h.logger.critical(&[&"giving", &"up"]);

        assert!(h.read("error.log").starts_with("ERROR: "));
        let critical = h.read("critical.log");
        assert!(critical.starts_with("ERROR: "));
        assert!(critical.trim_end().ends_with(" giving up"));

        let debug = h.read("debug.log");
        assert_eq!(message_lines(&debug, "DEBUG: "), 4);
        assert!(debug.lines().count() > 4);

        assert_eq!(h.terminator.calls(), 1);
        assert!(h.console.contents().trim_end().ends_with(" giving up"));
    }

    #[test]
    fn test_error_without_error_file_escalates() {
        let h = Harness::new(Level::Info);

        h.logger.info(&[&"fine"]);
        assert_eq!(h.terminator.calls(), 0);

        h.logger.error(&[&"not", &"fine"]);
        assert_eq!(h.terminator.calls(), 1);
        assert!(!h.path("error.log").exists());
        assert!(!h.path("critical.log").exists());
        assert!(h.console.contents().contains(" not fine"));
    }

    #[test]
    fn test_critical_threshold_does_not_mirror() {
        let h = Harness::new(Level::Critical);

        assert!(!h.logger.is_enabled(Level::Debug));
        h.logger.error(&[&"recorded"]);
        h.logger.debug(&[&"dropped"]);

        assert!(h.read("error.log").contains("recorded"));
        assert!(!h.path("debug.log").exists());
        assert_eq!(h.terminator.calls(), 0);
    }

    #[test]
    fn test_println_writes_console_then_error() {
        let h = Harness::new(Level::Error);

        h.logger.println(&[&"hello", &7]);

        let console = h.console.lines();
        assert_eq!(console.len(), 1);
        assert!(console[0].ends_with(" hello 7"));
        // No prefix on the console line: it starts with the date
        assert!(console[0].chars().next().unwrap().is_ascii_digit());

        assert!(h.read("error.log").trim_end().ends_with(" hello 7"));
        assert_eq!(h.terminator.calls(), 0);
    }

    #[test]
    fn test_loggers_share_one_console() {
        let dir = tempdir().unwrap();
        let memory = MemoryConsole::new();
        let shared = console::shared(memory.clone());

        let first = LevelLogger::builder(LoggerConfig::new(
            dir.path().join("first").to_string_lossy(),
            Level::Error,
        ))
        .with_shared_console(shared.clone())
        .build()
        .unwrap();
        let second = LevelLogger::builder(LoggerConfig::new(
            dir.path().join("second").to_string_lossy(),
            Level::Error,
        ))
        .with_shared_console(shared)
        .build()
        .unwrap();

        first.println(&[&"from", &"first"]);
        second.println(&[&"from", &"second"]);

        let lines = memory.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" from first"));
        assert!(lines[1].ends_with(" from second"));
    }

    #[test]
    fn test_debug_without_sink_is_noop() {
        let h = Harness::new(Level::Error);
        h.logger.debug(&[&"ignored"]);
        assert!(!h.path("debug.log").exists());
        assert!(h.console.is_empty());
    }

    #[test]
    fn test_append_across_reopen() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig::new(dir.path().to_string_lossy(), Level::Info);

        let logger = LevelLogger::builder(config.clone())
            .with_console(MemoryConsole::new())
            .build()
            .unwrap();
        logger.info(&[&"A"]);
        logger.close();

        let logger = LevelLogger::builder(config)
            .with_console(MemoryConsole::new())
            .build()
            .unwrap();
        logger.info(&[&"B"]);
        logger.close();

        let content = fs::read_to_string(dir.path().join("info.log")).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" A"));
        assert!(lines[1].ends_with(" B"));
    }

    #[test]
    fn test_config_is_normalized() {
        let h = Harness::new(Level::Error);
        let config = h.logger.config();
        assert!(config.dir.ends_with(std::path::is_separator));
        assert_eq!(config.level, Level::Error);
    }

    #[test]
    fn test_directory_creation_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let result = LevelLogger::new(LoggerConfig::new(
            blocker.join("logs").to_string_lossy(),
            Level::Debug,
        ));
        assert!(matches!(result, Err(LoggerError::CreateDir { .. })));
    }

    #[test]
    fn test_file_open_failure_aborts_construction() {
        let dir = tempdir().unwrap();
        // A directory where error.log should be makes the open fail
        fs::create_dir(dir.path().join("error.log")).unwrap();

        let result = LoggerBuilder::new(LoggerConfig::new(
            dir.path().to_string_lossy(),
            Level::Debug,
        ))
        .with_console(MemoryConsole::new())
        .build();

        let err = result.unwrap_err();
        assert!(matches!(err, LoggerError::OpenFile { .. }));
        assert!(err.to_string().starts_with("log file error: "));
    }

    #[test]
    fn test_logger_trait_object() {
        let h = Harness::new(Level::Debug);
        let logger: &dyn Logger = &h.logger;

        logger.info(&[&"via", &"trait"]);
        crate::log_error!(logger, "via", "macro", 1);

        assert!(h.read("info.log").contains("via trait"));
        assert!(h.read("error.log").contains("via macro 1"));
    }
}
