//! Sinks: a writer plus the prefix stamped on every line

use std::fmt::{self, Display, Write as _};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use parking_lot::Mutex;

use crate::console::SharedWriter;
use crate::error::{LoggerError, LoggerResult};

/// Date and time, second precision: `2024/01/31 17:05:09`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

pub(crate) struct Sink {
    out: SharedWriter,
    prefix: &'static str,
    /// Set when the sink owns a log file
    path: Option<PathBuf>,
}

impl Sink {
    /// A sink writing to the console
    pub(crate) fn console(console: &SharedWriter, prefix: &'static str) -> Self {
        Self {
            out: Arc::clone(console),
            prefix,
            path: None,
        }
    }

    /// Open `path` for appending, creating it if needed. An empty path
    /// binds the sink to the console instead.
    pub(crate) fn open(
        path: &Path,
        prefix: &'static str,
        console: &SharedWriter,
    ) -> LoggerResult<Self> {
        if path.as_os_str().is_empty() {
            return Ok(Self::console(console, prefix));
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::open_file(path, e))?;

        let writer: Box<dyn Write + Send> = Box::new(file);
        Ok(Self {
            out: Arc::new(Mutex::new(writer)),
            prefix,
            path: Some(path.to_path_buf()),
        })
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the space-joined arguments as one line
    pub(crate) fn write_line(&self, args: &[&dyn Display]) {
        self.write_str(&join_args(args));
    }

    pub(crate) fn write_str(&self, message: &str) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = format_line(self.prefix, &timestamp, message);

        let mut out = self.out.lock();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }

    pub(crate) fn flush(&self) {
        let _ = self.out.lock().flush();
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("prefix", &self.prefix)
            .field("path", &self.path)
            .finish()
    }
}

/// Join display values with single spaces
pub fn join_args(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
    }
    out
}

/// `<prefix><timestamp> <message>`, newline-terminated exactly once
pub fn format_line(prefix: &str, timestamp: &str, message: &str) -> String {
    let mut line = String::with_capacity(prefix.len() + timestamp.len() + message.len() + 2);
    line.push_str(prefix);
    line.push_str(timestamp);
    line.push(' ');
    line.push_str(message);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}
