//! Utilities for librc522: small, reusable helpers used across the crate.
//!
//! Hex rendering for UIDs, the clock abstraction every wait goes through,
//! deadlines for bounded polling and the stop flag for the presence loop.

pub mod cancel;
pub mod clock;
pub mod hex;
pub mod timeout;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex_colon(...)` etc if they prefer.
pub use cancel::CancellationToken;
pub use clock::{Clock, MockClock, SystemClock};
pub use hex::*;
pub use timeout::*;
