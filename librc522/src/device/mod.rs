// rc522-rs/librc522/src/device/mod.rs
//! Reader handle, its builder and the chip sequences it runs.

pub mod anticollision;
pub mod bring_up;
pub mod builder;
pub mod handle;

pub use anticollision::AcquireState;
pub use builder::ReaderBuilder;
pub use handle::{Initialized, Reader, Uninitialized};
