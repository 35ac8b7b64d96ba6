use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Token identifying one load issued through a [`RequestSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Monotonic request counter owned by a view instance.
///
/// Each load calls [`begin`](Self::begin) and only applies its result if the token
/// is still [`current`](Self::is_current) when the response arrives. Starting a
/// newer load, or [`invalidate`](Self::invalidate) on teardown, makes every earlier
/// token stale.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding all earlier ones.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` belongs to the newest load.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Mark every outstanding token stale without starting a new load.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}
