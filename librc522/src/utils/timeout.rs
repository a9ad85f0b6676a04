//! Timeout helpers used across the crate.
//!
//! Bounded waits are expressed as a [`Deadline`] computed from the
//! monotonic [`Clock`], never as an iteration count.

use std::time::Duration;

use crate::utils::clock::Clock;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Point in monotonic time after which a bounded wait gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at_ms: u64,
}

impl Deadline {
    /// Deadline `timeout_ms` from now on `clock`.
    pub fn after(clock: &dyn Clock, timeout_ms: u64) -> Self {
        Self {
            at_ms: clock.now_ms().saturating_add(timeout_ms),
        }
    }

    /// True once `clock` has reached the deadline
    pub fn expired(&self, clock: &dyn Clock) -> bool {
        clock.now_ms() >= self.at_ms
    }

    /// Milliseconds left, zero once expired
    pub fn remaining_ms(&self, clock: &dyn Clock) -> u64 {
        self.at_ms.saturating_sub(clock.now_ms())
    }
}
