// rc522-rs/librc522/src/protocol/mod.rs
//! Register map, command codes and the UID check byte.

pub mod checksum;
pub mod command;
pub mod register;

pub use checksum::{bcc, verify_bcc};
pub use command::{PcdCommand, PiccCommand};
pub use register::{Register, read_address, write_address};
