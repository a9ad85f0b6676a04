// rc522-rs/librc522/src/protocol/command.rs
//! Command codes and the bit masks used while running them.

/// Commands executed by the reader chip itself (written to `CommandReg`).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcdCommand {
    /// Cancel the running command
    Idle = 0x00,
    /// Run the CRC coprocessor
    CalcCrc = 0x03,
    /// Send the FIFO
    Transmit = 0x04,
    /// Activate the receiver
    Receive = 0x08,
    /// Send the FIFO, then receive the answer into it
    Transceive = 0x0C,
    /// Reset the chip
    SoftReset = 0x0F,
}

impl From<PcdCommand> for u8 {
    fn from(cmd: PcdCommand) -> u8 {
        cmd as u8
    }
}

/// Commands sent over the air to the card.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiccCommand {
    /// REQuest command, Type A (7-bit short frame)
    ReqA = 0x26,
    /// Anticollision / Select, cascade level 1
    SelCl1 = 0x93,
}

impl From<PiccCommand> for u8 {
    fn from(cmd: PiccCommand) -> u8 {
        cmd as u8
    }
}

/// NVB byte for an anticollision request with no known UID bits
pub const ANTICOLLISION_NVB: u8 = 0x20;

/// ComIrqReg bits
pub mod irq {
    /// Writing this clears every interrupt request bit (Set1 = 0)
    pub const CLEAR_ALL: u8 = 0x7F;
    /// RxIRq: end of a valid data stream
    pub const RX: u8 = 0x20;
    /// TimerIRq: timer reached zero
    pub const TIMER: u8 = 0x01;
}

/// ErrorReg bits that invalidate a received frame:
/// BufferOvfl | ParityErr | ProtocolErr
pub const ERROR_MASK: u8 = 0x13;

/// FIFOLevelReg flush bit
pub const FIFO_FLUSH: u8 = 0x80;

/// BitFramingReg values
pub mod framing {
    /// Transmit only 7 bits of the last byte (short frame)
    pub const SHORT_FRAME: u8 = 0x07;
    /// Full bytes
    pub const FULL_FRAME: u8 = 0x00;
    /// StartSend bit
    pub const START_SEND: u8 = 0x80;
}
