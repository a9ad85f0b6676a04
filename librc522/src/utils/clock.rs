//! Time source for every wait in the driver.
//!
//! The protocol engine only ever sleeps for fixed settle windows or polls
//! against a deadline, so a millisecond clock with a blocking sleep is all
//! it needs. Tests swap in [`MockClock`] so timeouts and the dedup window
//! can be driven without real delays.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use super::timeout::ms as millis;

/// Monotonic millisecond clock with a blocking sleep.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Never goes backwards.
    fn now_ms(&self) -> u64;

    /// Block the calling thread for `ms` milliseconds.
    fn sleep_ms(&self, ms: u64);
}

/// Wall-time clock backed by `Instant`; zero is the moment it was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Zero is now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(millis(ms));
    }
}

/// Manually driven clock. Clones share the same counter and `sleep_ms`
/// advances it instantly.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now: Rc<Cell<u64>>,
    slept: Rc<Cell<u64>>,
}

impl MockClock {
    /// Clock at 0 ms
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock at `ms`
    pub fn starting_at(ms: u64) -> Self {
        let clock = Self::new();
        clock.set_ms(ms);
        clock
    }

    /// Jump to `ms`
    pub fn set_ms(&self, ms: u64) {
        self.now.set(ms);
    }

    /// Move forward by `ms` without counting it as sleep
    pub fn advance_ms(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    /// Total time spent in `sleep_ms` so far
    pub fn slept_ms(&self) -> u64 {
        self.slept.get()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&self, ms: u64) {
        self.slept.set(self.slept.get() + ms);
        self.advance_ms(ms);
    }
}
