// rc522-rs/librc522/src/transport/mod.rs
//! Bus access: the `Transport` seam, its backends and the register layer on
//! top of it.

pub mod hal;
pub mod mock;
pub mod register;
#[cfg(feature = "rpi")]
pub mod rpi;
pub mod traits;

pub use hal::HalTransport;
pub use mock::MockTransport;
pub use register::RegisterTransport;
#[cfg(feature = "rpi")]
pub use rpi::RppalTransport;
pub use traits::Transport;
