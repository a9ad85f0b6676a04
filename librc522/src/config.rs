// rc522-rs/librc522/src/config.rs
//! Reader and polling-loop configuration. Defaults carry the documented
//! operating values from `constants`.

use crate::constants::*;
use crate::error::InitError;

/// SPI parameters handed to `Transport::open`. The bus always runs in SPI
/// mode 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// Bus clock, at most 1 MHz
    pub clock_hz: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            clock_hz: DEFAULT_CLOCK_HZ,
        }
    }
}

/// Bring-up sequencing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Bus parameters
    pub bus: BusConfig,
    /// How long the reset line is held low
    pub reset_low_ms: u64,
    /// Oscillator settle time after the reset line goes high
    pub reset_settle_ms: u64,
    /// Wait after the SoftReset command
    pub soft_reset_settle_ms: u64,
    /// Whole-sequence attempts; 1 means fail on the first error
    pub init_attempts: usize,
    /// Backoff before attempt n is `n * init_backoff_ms`
    pub init_backoff_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            bus: BusConfig::default(),
            reset_low_ms: RESET_LOW_MS,
            reset_settle_ms: RESET_SETTLE_MS,
            soft_reset_settle_ms: SOFT_RESET_SETTLE_MS,
            init_attempts: 1,
            init_backoff_ms: 1000,
        }
    }
}

impl ReaderConfig {
    /// Reject settings the chip cannot work with before the bus is touched.
    pub fn validate(&self) -> Result<(), InitError> {
        if self.bus.clock_hz == 0 || self.bus.clock_hz > MAX_CLOCK_HZ {
            return Err(InitError::InvalidConfig(format!(
                "bus clock {} Hz outside 1..={} Hz",
                self.bus.clock_hz, MAX_CLOCK_HZ
            )));
        }
        if self.init_attempts == 0 {
            return Err(InitError::InvalidConfig("init_attempts must be >= 1".into()));
        }
        if self.reset_low_ms < RESET_LOW_MS || self.reset_settle_ms < RESET_SETTLE_MS {
            return Err(InitError::InvalidConfig(format!(
                "reset timings below {}ms low / {}ms settle",
                RESET_LOW_MS, RESET_SETTLE_MS
            )));
        }
        Ok(())
    }
}

/// Presence loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Pause between two presence checks
    pub poll_interval_ms: u64,
    /// Same-UID suppression window
    pub dedup_window_ms: u64,
    /// Passed to the reporter with every scan
    pub device_label: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: POLL_INTERVAL_MS,
            dedup_window_ms: DEDUP_WINDOW_MS,
            device_label: DEFAULT_DEVICE_LABEL.to_string(),
        }
    }
}
