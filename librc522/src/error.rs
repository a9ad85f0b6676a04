// rc522-rs/librc522/src/error.rs
//! Error types, one enum per layer plus the crate-wide `Error`.

use thiserror::Error;

/// Bus-level failure. Never retried by the register layer.
#[derive(Error, Debug)]
pub enum TransportError {
    /// `open` has not been called yet
    #[error("bus not open")]
    NotOpen,

    /// The bus returned fewer bytes than were clocked out
    #[error("short transfer: expected {expected} bytes, got {actual}")]
    ShortTransfer {
        /// Bytes sent
        expected: usize,
        /// Bytes received
        actual: usize,
    },

    // rppal 実装は optional dependency なので feature で切り替える
    /// rppal SPI failure
    #[cfg(feature = "rpi")]
    #[error("spi error: {0}")]
    Spi(#[from] rppal::spi::Error),

    /// rppal GPIO failure
    #[cfg(feature = "rpi")]
    #[error("gpio error: {0}")]
    Pin(#[from] rppal::gpio::Error),

    /// Any other SPI failure, e.g. from an `embedded-hal` device
    #[error("bus error: {0}")]
    Bus(String),

    /// Any other reset-pin failure
    #[error("gpio error: {0}")]
    Gpio(String),
}

/// Bring-up failures. Both chip-level variants are fatal to the sequence.
#[derive(Error, Debug)]
pub enum InitError {
    /// Self-test read-back differs from what was written
    #[error("transport unresponsive: wrote {wrote:#04x}, read back {read:#04x}")]
    TransportUnresponsive {
        /// Value written to TModeReg
        wrote: u8,
        /// Value read back
        read: u8,
    },

    /// VersionReg read 0x00 or 0xFF
    #[error("chip not detected: version register reads {version:#04x}")]
    ChipNotDetected {
        /// Raw VersionReg content
        version: u8,
    },

    /// Rejected by `ReaderConfig::validate`
    #[error("invalid reader configuration: {0}")]
    InvalidConfig(String),

    /// Bus failure underneath
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Per-cycle acquisition failures. Polling continues after any of these.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// ErrorReg flagged a protocol, parity or buffer error
    #[error("frame error: error register {error:#04x}")]
    FrameError {
        /// Raw ErrorReg content
        error: u8,
    },

    /// Fewer than five bytes in the FIFO
    #[error("short frame: {available} bytes in FIFO, need 5")]
    ShortFrame {
        /// FIFOLevelReg content
        available: u8,
    },

    /// BCC byte does not match the XOR of the UID
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// XOR of the four UID bytes
        expected: u8,
        /// BCC byte the card sent
        actual: u8,
    },

    /// Timer IRQ or deadline before any answer
    #[error("card did not answer anticollision in time")]
    Timeout,

    /// Bus failure underneath
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Outcome of handing a scan event to a reporter.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The receiving end is gone
    #[error("reporter disconnected")]
    Disconnected,

    /// The sink refused the scan
    #[error("report rejected: {0}")]
    Rejected(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// Bus failure underneath
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Bring-up failure
    #[error(transparent)]
    Init(#[from] InitError),

    /// Acquisition failure
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Reporter failure
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
