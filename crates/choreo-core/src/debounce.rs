//! Trailing-edge debouncing over an explicit timer handle.
//!
//! The front-end implements [`Scheduler`] with browser timeouts; tests use a
//! manual clock.

/// Something that can run a callback after a delay and cancel it again.
pub trait Scheduler {
    type Handle: Copy + PartialEq;

    fn schedule(&mut self, delay_ms: u32) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Coalesces bursts of triggers into one run `delay_ms` after the last.
#[derive(Debug)]
pub struct Debouncer<H> {
    delay_ms: u32,
    pending: Option<H>,
}

impl<H: Copy + PartialEq> Debouncer<H> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    #[inline]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel any scheduled-but-unrun task and schedule a fresh one.
    pub fn trigger<S: Scheduler<Handle = H>>(&mut self, scheduler: &mut S) -> H {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        let handle = scheduler.schedule(self.delay_ms);
        self.pending = Some(handle);
        handle
    }

    /// Called when a scheduled task runs. Returns `true` only for the latest
    /// handle; stale handles (cancel raced with expiry) are ignored.
    pub fn fire(&mut self, handle: H) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
