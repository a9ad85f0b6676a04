//! Stop flag shared between the polling loop and whoever ends it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Inter-thread stop flag for the polling loop. Clone it to hand it to a
/// signal handler or another thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    canceled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Token that has not been canceled
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the state of the token to canceled
    #[inline]
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Release);
    }

    /// Checks if the token has been canceled
    #[inline]
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Acquire)
    }
}
