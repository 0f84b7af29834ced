//! Latest-wins ordering for overlapping search requests.
//!
//! Rapid re-queries (keystrokes, category switches) can leave several
//! responses in flight at once; without ordering, a slow early response can
//! overwrite a fast later one. Each request is tagged with a monotonically
//! increasing generation, and a response is applied only if its generation
//! is still the latest issued.

use std::sync::atomic::{AtomicU64, Ordering};

/// A tag identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Issues generations and decides which responses are still current.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next generation, superseding all earlier ones.
    pub fn issue(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns `true` if a response tagged with `generation` may still be
    /// applied — i.e. no newer request has been issued since.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.load(Ordering::SeqCst) == generation.0
    }
}
