// rc522-rs/librc522/src/transport/hal.rs
//! `embedded-hal` 1.0 backend.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use log::{debug, trace};

use crate::config::BusConfig;
use crate::error::TransportError;
use crate::transport::traits::Transport;
use crate::types::PinLevel;
use crate::utils::bytes_to_hex;

/// Transport over any `embedded-hal` 1.0 SPI device plus an output pin for
/// the chip's reset line.
///
/// The SPI device arrives already configured by its HAL (clock, mode, chip
/// select), so `open` only records the bus parameters and unlocks the bus.
pub struct HalTransport<SPI, RST> {
    spi: SPI,
    reset: RST,
    opened: Option<BusConfig>,
}

impl<SPI, RST> HalTransport<SPI, RST> {
    /// Wrap an SPI device and a reset pin.
    pub fn new(spi: SPI, reset: RST) -> Self {
        Self {
            spi,
            reset,
            opened: None,
        }
    }

    /// Bus parameters passed to the last `open`, if any
    pub fn bus_config(&self) -> Option<&BusConfig> {
        self.opened.as_ref()
    }

    /// Give the SPI device and the reset pin back.
    pub fn release(self) -> (SPI, RST) {
        (self.spi, self.reset)
    }

    fn ensure_open(&self) -> Result<(), TransportError> {
        match self.opened {
            Some(_) => Ok(()),
            None => Err(TransportError::NotOpen),
        }
    }
}

fn spi_error<E: embedded_hal::spi::Error>(e: E) -> TransportError {
    TransportError::Bus(format!("{:?}", embedded_hal::spi::Error::kind(&e)))
}

fn pin_error<E: embedded_hal::digital::Error>(e: E) -> TransportError {
    TransportError::Gpio(format!("{:?}", embedded_hal::digital::Error::kind(&e)))
}

impl<SPI, RST> Transport for HalTransport<SPI, RST>
where
    SPI: SpiDevice,
    RST: OutputPin,
{
    fn open(&mut self, config: &BusConfig) -> Result<(), TransportError> {
        debug!("hal bus ready, requested {} Hz", config.clock_hz);
        self.opened = Some(*config);
        Ok(())
    }

    fn set_reset(&mut self, level: PinLevel) -> Result<(), TransportError> {
        let result = match level {
            PinLevel::Low => self.reset.set_low(),
            PinLevel::High => self.reset.set_high(),
        };
        result.map_err(pin_error)
    }

    fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.ensure_open()?;
        let mut rx = vec![0u8; tx.len()];
        self.spi.transfer(&mut rx, tx).map_err(spi_error)?;
        trace!("spi {} -> {}", bytes_to_hex(tx), bytes_to_hex(&rx));
        Ok(rx)
    }

    fn write(&mut self, tx: &[u8]) -> Result<(), TransportError> {
        self.ensure_open()?;
        self.spi.write(tx).map_err(spi_error)
    }
}
