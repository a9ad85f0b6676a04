// rc522-rs/librc522/src/transport/traits.rs
//! The bus seam every backend implements.

use crate::config::BusConfig;
use crate::error::TransportError;
use crate::types::PinLevel;

/// Transport trait abstracts the physical bus lines away from register and
/// protocol logic.
pub trait Transport {
    /// Configure and open the serial bus
    fn open(&mut self, config: &BusConfig) -> Result<(), TransportError>;

    /// Drive the chip's reset line
    fn set_reset(&mut self, level: PinLevel) -> Result<(), TransportError>;

    /// Full-duplex transfer: clock out `tx` and return the bytes clocked in
    /// during the same transaction (same length as `tx`).
    fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>, TransportError>;

    /// Write-only transaction. Default implementation falls back to
    /// `transfer` and drops the received bytes.
    fn write(&mut self, tx: &[u8]) -> Result<(), TransportError> {
        self.transfer(tx).map(|_| ())
    }
}
