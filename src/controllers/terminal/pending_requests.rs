use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Requests raised asynchronously (signal handlers) and consumed by the
/// controller at the start of a tick. Raising only stores a flag.
#[derive(Debug, Clone, Default)]
pub struct PendingRequests {
    resize: Arc<AtomicBool>,
    pause_toggle: Arc<AtomicBool>,
    interrupt: Arc<AtomicBool>,
}

/// Snapshot of what was pending when the controller drained the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Drained {
    pub resize: bool,
    pub pause_toggle: bool,
    pub interrupt: bool,
}

impl PendingRequests {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_resize(&self) {
        self.resize.store(true, Ordering::Release);
    }

    pub fn request_pause_toggle(&self) {
        self.pause_toggle.store(true, Ordering::Release);
    }

    pub fn request_interrupt(&self) {
        self.interrupt.store(true, Ordering::Release);
    }

    /// Clears every flag and reports which were set.
    pub fn drain(&self) -> Drained {
        Drained {
            resize: self.resize.swap(false, Ordering::AcqRel),
            pause_toggle: self.pause_toggle.swap(false, Ordering::AcqRel),
            interrupt: self.interrupt.swap(false, Ordering::AcqRel),
        }
    }

    pub(crate) fn resize_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.resize)
    }

    pub(crate) fn pause_toggle_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.pause_toggle)
    }

    pub(crate) fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }
}
