//! Caller-supplied cancellation and deadline for client calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cancellation flag plus optional deadline shared by every call made
/// through one client.
///
/// Clones share the flag, so cancelling any clone cancels them all. Both the
/// flag and the deadline are honoured while a call is in flight: the call
/// returns as soon as either trips.
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose calls must finish within `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().deadline_in(timeout)
    }

    /// Derive a context with a deadline `timeout` from now, sharing the
    /// cancellation flag.
    pub fn deadline_in(&self, timeout: Duration) -> Self {
        Self {
            cancelled: Arc::clone(&self.cancelled),
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Time left before the deadline; `None` when there is no deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Reason a call must not start or continue, if any.
    pub(crate) fn check(&self) -> Option<&'static str> {
        if self.is_cancelled() {
            return Some("context canceled");
        }
        match self.remaining() {
            Some(left) if left.is_zero() => Some("context deadline exceeded"),
            _ => None,
        }
    }
}
