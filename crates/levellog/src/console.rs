//! Process console writer
//!
//! The unprefixed default sink and any sink built without a file path write
//! here. It is injected into the logger instead of reaching for a global
//! stream, so tests can capture it with [`MemoryConsole`].

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// A writer shared by every sink bound to the console
pub type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Wrap any writer so several sinks can share it
pub fn shared(writer: impl Write + Send + 'static) -> SharedWriter {
    let writer: Box<dyn Write + Send> = Box::new(writer);
    Arc::new(Mutex::new(writer))
}

/// The process's standard error stream (the default console)
pub fn stderr() -> SharedWriter {
    shared(io::stderr())
}

/// The process's standard output stream
pub fn stdout() -> SharedWriter {
    shared(io::stdout())
}

/// An in-memory console for capturing output
///
/// Clones share the same buffer: hand one clone to the logger and keep the
/// other to read what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }
}

impl Write for MemoryConsole {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
