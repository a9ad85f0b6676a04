// rc522-rs/librc522/src/types.rs
//! Newtypes and small value types shared across the crate.

use crate::constants::{UID_LEN, VERSION_ABSENT_HIGH, VERSION_ABSENT_LOW};
use std::fmt;
use std::str::FromStr;

/// Cascade-level-1 card UID - Newtype Pattern (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From, derive_more::Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    /// Wrap four raw UID bytes
    pub fn from_bytes(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw UID bytes
    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }

    /// XOR of the four UID bytes, as the card sends it after the UID
    pub fn bcc(&self) -> u8 {
        crate::protocol::bcc(&self.0)
    }

    /// Canonical rendering, e.g. `04:A3:9F:1B`
    pub fn to_canonical(&self) -> String {
        crate::utils::bytes_to_hex_colon(&self.0)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

impl FromStr for Uid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::utils::parse_hex_colon(s)?;
        let arr: [u8; UID_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| format!("expected {} bytes, got {}", UID_LEN, bytes.len()))?;
        Ok(Self(arr))
    }
}

/// Content of VersionReg
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From, derive_more::Into, derive_more::Display)]
#[display(fmt = "{:#04x}", _0)]
pub struct ChipVersion(u8);

impl ChipVersion {
    /// Wrap a raw VersionReg value
    pub fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Raw VersionReg value
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// 0x00 and 0xFF mean the bus is floating or the chip is unpowered
    pub fn is_present(&self) -> bool {
        self.0 != VERSION_ABSENT_LOW && self.0 != VERSION_ABSENT_HIGH
    }

    /// Known chip name for this version, or `"unknown"`
    pub fn describe(&self) -> &'static str {
        match self.0 {
            0x88 | 0xB2 => "FM17522 clone",
            0x91 => "MFRC522 v1.0",
            0x92 => "MFRC522 v2.0",
            _ => "unknown",
        }
    }
}

/// Card presence as seen by the polling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum Presence {
    /// No card in the field
    #[default]
    #[display(fmt = "ABSENT")]
    Absent,
    /// A card answered REQA
    #[display(fmt = "PRESENT")]
    Present,
}

/// Logic level for the reset line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    /// Chip held in reset
    Low,
    /// Chip running
    High,
}

/// One reportable card scan
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanEvent {
    /// Canonical UID string
    pub uid: String,
    /// Monotonic milliseconds
    pub timestamp_ms: u64,
}

impl ScanEvent {
    /// Event for `uid` seen at `timestamp_ms`
    pub fn new(uid: &Uid, timestamp_ms: u64) -> Self {
        Self {
            uid: uid.to_canonical(),
            timestamp_ms,
        }
    }
}
