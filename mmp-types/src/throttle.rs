//! Call coalescing over a fixed time window.
//!
//! `Throttle` never reads a clock itself: callers pass `now`, which keeps it
//! usable from any event loop and lets tests drive it with synthetic instants.

use std::time::{Duration, Instant};

/// Coalesces calls within `window`: the first call in a quiet period passes
/// straight through, later calls inside the window collapse into one trailing
/// call carrying the latest value, released once the window has elapsed.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    window: Duration,
    window_start: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            window_start: None,
            pending: None,
        }
    }

    /// Offer a value. Returns it immediately when no window is open or the
    /// open one has elapsed (superseding anything still pending); otherwise
    /// it replaces any pending value and `None` is returned.
    pub fn call(&mut self, now: Instant, value: T) -> Option<T> {
        let open = self
            .window_start
            .is_some_and(|start| now.saturating_duration_since(start) < self.window);
        if open {
            self.pending = Some(value);
            return None;
        }
        self.pending = None;
        self.window_start = Some(now);
        Some(value)
    }

    /// Release the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let start = self.window_start?;
        if now.saturating_duration_since(start) < self.window {
            return None;
        }
        match self.pending.take() {
            Some(value) => {
                self.window_start = Some(now);
                Some(value)
            }
            None => {
                self.window_start = None;
                None
            }
        }
    }

    /// When the open window closes, if one is open.
    pub fn deadline(&self) -> Option<Instant> {
        self.window_start.map(|start| start + self.window)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
