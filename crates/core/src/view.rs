//! Generation tokens for discarding stale responses.
//!
//! Navigating away before a pending call resolves must not apply a late
//! response to the now-unmounted view. Each view load takes a generation
//! number; the response is applied only if the generation is still
//! current when it arrives.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic generation counter for one view slot.
#[derive(Debug, Default)]
pub struct ViewGeneration {
    counter: AtomicU64,
}

impl ViewGeneration {
    /// Creates a fresh generation counter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Starts a new load and returns its generation number, invalidating
    /// all earlier ones.
    pub fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns true if `generation` is still the latest load.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == generation
    }
}
