// rc522-rs/librc522/src/protocol/register.rs
//! Register map and SPI address-byte framing.

use crate::constants::{ADDRESS_INDEX_MASK, ADDRESS_READ_BIT, REGISTER_MAX};

/// MFRC522 register map (page 0 through page 3).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Starts and stops command execution
    Command = 0x01,
    /// Interrupt request enables
    ComIEn = 0x02,
    /// Interrupt request enables, second set
    DivIEn = 0x03,
    /// Interrupt request bits
    ComIrq = 0x04,
    /// Interrupt request bits, second set
    DivIrq = 0x05,
    /// Error bits of the last command
    Error = 0x06,
    /// Communication status
    Status1 = 0x07,
    /// Receiver and transmitter status
    Status2 = 0x08,
    /// FIFO input and output
    FifoData = 0x09,
    /// Bytes stored in the FIFO, bit 7 flushes
    FifoLevel = 0x0A,
    /// FIFO underflow and overflow warning level
    WaterLevel = 0x0B,
    /// Miscellaneous control
    Control = 0x0C,
    /// Bit-oriented frame adjustments
    BitFraming = 0x0D,
    /// First bit collision detected
    Coll = 0x0E,
    /// General transmit and receive modes
    Mode = 0x11,
    /// Transmission data rate and framing
    TxMode = 0x12,
    /// Reception data rate and framing
    RxMode = 0x13,
    /// Antenna driver pins TX1 and TX2
    TxControl = 0x14,
    /// Transmit modulation
    TxAsk = 0x15,
    /// Antenna driver source
    TxSel = 0x16,
    /// Internal receiver settings
    RxSel = 0x17,
    /// Bit decoder thresholds
    RxThreshold = 0x18,
    /// Demodulator settings
    Demod = 0x19,
    /// MIFARE transmit parameters
    MfTx = 0x1C,
    /// MIFARE receive parameters
    MfRx = 0x1D,
    /// UART speed
    SerialSpeed = 0x1F,
    /// CRC result, high byte
    CrcResultH = 0x21,
    /// CRC result, low byte
    CrcResultL = 0x22,
    /// Modulation width
    ModWidth = 0x24,
    /// Receiver gain
    RfCfg = 0x26,
    /// n-driver conductance
    GsN = 0x27,
    /// p-driver conductance, no modulation
    CwGsP = 0x28,
    /// p-driver conductance, during modulation
    ModGsP = 0x29,
    /// Timer settings
    TMode = 0x2A,
    /// Timer prescaler, low bits
    TPrescaler = 0x2B,
    /// Timer reload, high byte
    TReloadH = 0x2C,
    /// Timer reload, low byte
    TReloadL = 0x2D,
    /// Timer value, high byte
    TCounterValueH = 0x2E,
    /// Timer value, low byte
    TCounterValueL = 0x2F,
    /// Test signal configuration
    TestSel1 = 0x31,
    /// Test signal configuration and PRBS control
    TestSel2 = 0x32,
    /// Test bus pin output enables
    TestPinEn = 0x33,
    /// Test bus pin values
    TestPinValue = 0x34,
    /// Internal test bus status
    TestBus = 0x35,
    /// Digital self-test
    AutoTest = 0x36,
    /// Chip version
    Version = 0x37,
    /// AUX1 and AUX2 pins
    AnalogTest = 0x38,
    /// TestDAC1 value
    TestDac1 = 0x39,
    /// TestDAC2 value
    TestDac2 = 0x3A,
    /// ADC I and Q channel values
    TestAdc = 0x3B,
}

impl Register {
    /// Raw 6-bit register index
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up a register by its raw index. Reserved indices return `None`.
    pub fn from_index(index: u8) -> Option<Self> {
        if index > REGISTER_MAX {
            return None;
        }
        ALL.iter().copied().find(|r| r.index() == index)
    }
}

const ALL: [Register; 50] = [
    Register::Command,
    Register::ComIEn,
    Register::DivIEn,
    Register::ComIrq,
    Register::DivIrq,
    Register::Error,
    Register::Status1,
    Register::Status2,
    Register::FifoData,
    Register::FifoLevel,
    Register::WaterLevel,
    Register::Control,
    Register::BitFraming,
    Register::Coll,
    Register::Mode,
    Register::TxMode,
    Register::RxMode,
    Register::TxControl,
    Register::TxAsk,
    Register::TxSel,
    Register::RxSel,
    Register::RxThreshold,
    Register::Demod,
    Register::MfTx,
    Register::MfRx,
    Register::SerialSpeed,
    Register::CrcResultH,
    Register::CrcResultL,
    Register::ModWidth,
    Register::RfCfg,
    Register::GsN,
    Register::CwGsP,
    Register::ModGsP,
    Register::TMode,
    Register::TPrescaler,
    Register::TReloadH,
    Register::TReloadL,
    Register::TCounterValueH,
    Register::TCounterValueL,
    Register::TestSel1,
    Register::TestSel2,
    Register::TestPinEn,
    Register::TestPinValue,
    Register::TestBus,
    Register::AutoTest,
    Register::Version,
    Register::AnalogTest,
    Register::TestDac1,
    Register::TestDac2,
    Register::TestAdc,
];

/// Address byte for writing `reg`: index shifted left, bit 7 and bit 0 clear.
pub fn write_address(reg: Register) -> u8 {
    (reg.index() << 1) & ADDRESS_INDEX_MASK
}

/// Address byte for reading `reg`: as for a write, with bit 7 set.
pub fn read_address(reg: Register) -> u8 {
    write_address(reg) | ADDRESS_READ_BIT
}

/// Split an address byte back into (register index, is_read).
pub fn decode_address(byte: u8) -> (u8, bool) {
    ((byte & ADDRESS_INDEX_MASK) >> 1, byte & ADDRESS_READ_BIT != 0)
}
