// rc522-rs/librc522/src/constants.rs
//! Raw protocol numbers and timings shared across the crate

/// Highest valid register index (6-bit address space)
pub const REGISTER_MAX: u8 = 0x3F;

/// Address byte: bit 7 selects read, bits 6..1 hold the register index
pub const ADDRESS_READ_BIT: u8 = 0x80;
/// Bits 6..1 of the address byte
pub const ADDRESS_INDEX_MASK: u8 = 0x7E;

/// Dummy byte clocked out while the chip answers a read
pub const READ_DUMMY: u8 = 0x00;

/// Every register transaction is exactly two bytes on the wire
pub const TRANSACTION_LEN: usize = 2;

/// Value used by the bring-up read-back self-test (also the operating TModeReg value)
pub const SELF_TEST_VALUE: u8 = 0x8D;

/// Operating configuration programmed after the version check
/// Timer starts automatically after each transmission
pub const TMODE_VALUE: u8 = 0x8D;
/// Timer prescaler low byte
pub const TPRESCALER_VALUE: u8 = 0x3E;
/// Timer reload, low byte
pub const TRELOAD_LOW_VALUE: u8 = 30;
/// Timer reload, high byte
pub const TRELOAD_HIGH_VALUE: u8 = 0x00;
/// Force 100% ASK modulation
pub const TXASK_VALUE: u8 = 0x40;
/// TxWaitRF, CRC preset 0x6363
pub const MODE_VALUE: u8 = 0x3D;
/// Tx1RFEn | Tx2RFEn
pub const ANTENNA_ON_BITS: u8 = 0x03;

/// Version register value of a bus with nothing answering
pub const VERSION_ABSENT_LOW: u8 = 0x00;
/// Version register value of a floating bus
pub const VERSION_ABSENT_HIGH: u8 = 0xFF;

/// Number of UID bytes at cascade level 1
pub const UID_LEN: usize = 4;
/// UID plus the BCC byte
pub const ANTICOLLISION_FRAME_LEN: u8 = 5;

/// Reset line held low (ms)
pub const RESET_LOW_MS: u64 = 100;
/// Wait after releasing reset (ms)
pub const RESET_SETTLE_MS: u64 = 50;
/// Wait between the self-test write and read-back (ms)
pub const SELF_TEST_SETTLE_MS: u64 = 10;
/// Wait after SoftReset (ms)
pub const SOFT_RESET_SETTLE_MS: u64 = 50;

/// Wait between starting REQA and reading ComIrqReg (ms)
pub const PRESENCE_SETTLE_MS: u64 = 25;
/// Anticollision answer deadline (ms)
pub const ANTICOLLISION_TIMEOUT_MS: u64 = 100;
/// ComIrqReg poll interval while waiting for the answer (ms)
pub const ANTICOLLISION_POLL_MS: u64 = 1;

/// Presence loop period (ms)
pub const POLL_INTERVAL_MS: u64 = 500;
/// Same-UID suppression window (ms)
pub const DEDUP_WINDOW_MS: u64 = 5000;

/// Default SPI clock
pub const DEFAULT_CLOCK_HZ: u32 = 500_000;
/// Fastest SPI clock accepted by `ReaderConfig::validate`
pub const MAX_CLOCK_HZ: u32 = 1_000_000;

/// Label sent alongside every scan event unless configured otherwise
pub const DEFAULT_DEVICE_LABEL: &str = "rc522-reader";
