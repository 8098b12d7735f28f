//! Process termination after a critical entry
//!
//! Logging a critical message and ending the process are separate steps.
//! The logger calls a [`Terminate`] implementation for the second one, so
//! tests can swap in a [`RecordingTerminator`] and keep the runner alive.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Exit status used after a critical entry
pub const FATAL_EXIT_CODE: i32 = 1;

/// Capability to end the process
pub trait Terminate: Send + Sync {
    /// End the process with `status`. Implementations other than
    /// [`ProcessExit`] may return.
    fn terminate(&self, status: i32);
}

/// Exits the real process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    fn terminate(&self, status: i32) {
        std::process::exit(status);
    }
}

/// Records termination requests instead of exiting
///
/// Clones share their record, like [`crate::console::MemoryConsole`].
#[derive(Debug, Clone, Default)]
pub struct RecordingTerminator {
    calls: Arc<AtomicUsize>,
    last_status: Arc<Mutex<Option<i32>>>,
}

impl RecordingTerminator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times termination was requested
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_status(&self) -> Option<i32> {
        *self.last_status.lock()
    }
}

impl Terminate for RecordingTerminator {
    fn terminate(&self, status: i32) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_status.lock() = Some(status);
    }
}
