// rc522-rs/librc522/src/lib.rs

//! librc522
//!
//! Pure Rust driver for MFRC522 contactless readers on SPI: chip bring-up,
//! REQA/anticollision with BCC validation, and a debounced presence loop
//! that turns raw reads into scan events.

#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod presence;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
