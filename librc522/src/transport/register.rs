// rc522-rs/librc522/src/transport/register.rs
//! Register reads and writes over a `Transport`.

use log::trace;

use crate::config::BusConfig;
use crate::constants::{READ_DUMMY, TRANSACTION_LEN};
use crate::error::TransportError;
use crate::protocol::register::{Register, read_address, write_address};
use crate::transport::traits::Transport;
use crate::types::PinLevel;

/// Single-register access over the bus. Owns the bus for its whole life;
/// nothing else in the crate touches the lines.
pub struct RegisterTransport {
    bus: Box<dyn Transport>,
}

impl RegisterTransport {
    /// Take ownership of the bus
    pub fn new(bus: Box<dyn Transport>) -> Self {
        Self { bus }
    }

    /// Open the underlying bus
    pub fn open(&mut self, config: &BusConfig) -> Result<(), TransportError> {
        trace!("open bus at {} Hz", config.clock_hz);
        self.bus.open(config)
    }

    /// Drive the reset line
    pub fn set_reset(&mut self, level: PinLevel) -> Result<(), TransportError> {
        trace!("reset line {:?}", level);
        self.bus.set_reset(level)
    }

    /// Write one register in one two-byte transaction.
    pub fn write(&mut self, reg: Register, value: u8) -> Result<(), TransportError> {
        trace!("write {:?} <- {:#04x}", reg, value);
        self.bus.write(&[write_address(reg), value])
    }

    /// Read one register in one two-byte transaction.
    pub fn read(&mut self, reg: Register) -> Result<u8, TransportError> {
        let rx = self.bus.transfer(&[read_address(reg), READ_DUMMY])?;
        if rx.len() < TRANSACTION_LEN {
            return Err(TransportError::ShortTransfer {
                expected: TRANSACTION_LEN,
                actual: rx.len(),
            });
        }
        // The chip answers one byte late: the first byte clocked in is
        // undefined, the register value arrives with the dummy byte.
        let value = rx[1];
        trace!("read {:?} -> {:#04x}", reg, value);
        Ok(value)
    }

    /// Read-modify-write; returns the value written.
    pub fn modify(
        &mut self,
        reg: Register,
        func: impl FnOnce(u8) -> u8,
    ) -> Result<u8, TransportError> {
        let value = func(self.read(reg)?);
        self.write(reg, value)?;
        Ok(value)
    }

    /// Set `mask` bits of `reg`
    pub fn set_bits(&mut self, reg: Register, mask: u8) -> Result<u8, TransportError> {
        self.modify(reg, |v| v | mask)
    }

    /// Clear `mask` bits of `reg`
    pub fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<u8, TransportError> {
        self.modify(reg, |v| v & !mask)
    }
}
