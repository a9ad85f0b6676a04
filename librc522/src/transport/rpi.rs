// rc522-rs/librc522/src/transport/rpi.rs
//! Raspberry Pi wiring via rppal.

#![cfg(feature = "rpi")]

use log::debug;
use rppal::gpio::{Gpio, OutputPin};
use rppal::spi::{Bus, Mode, SimpleHalSpiDevice, SlaveSelect, Spi};

use crate::config::BusConfig;
use crate::error::TransportError;
use crate::transport::hal::HalTransport;

/// Raspberry Pi backend: spidev through rppal's `embedded-hal` adapter plus
/// one GPIO output for the chip's reset line. Feature-gated behind
/// `--features rpi`.
pub type RppalTransport = HalTransport<SimpleHalSpiDevice, OutputPin>;

impl HalTransport<SimpleHalSpiDevice, OutputPin> {
    /// Open `bus`/`slave` in SPI mode 0 at `config.clock_hz` and claim the
    /// reset pin (BCM numbering).
    pub fn rppal(
        bus: Bus,
        slave: SlaveSelect,
        reset_bcm: u8,
        config: &BusConfig,
    ) -> Result<Self, TransportError> {
        let mut reset = Gpio::new()?.get(reset_bcm)?.into_output();
        // Leave the chip in whatever state we put it in when the process exits
        reset.set_reset_on_drop(false);

        debug!("opening {:?}/{:?} at {} Hz", bus, slave, config.clock_hz);
        let spi = Spi::new(bus, slave, config.clock_hz, Mode::Mode0)?;
        Ok(HalTransport::new(SimpleHalSpiDevice::new(spi), reset))
    }

    /// SPI0 / CE0 with the given reset pin, the usual RC522 hat wiring.
    pub fn with_reset_pin(reset_bcm: u8, config: &BusConfig) -> Result<Self, TransportError> {
        Self::rppal(Bus::Spi0, SlaveSelect::Ss0, reset_bcm, config)
    }
}
