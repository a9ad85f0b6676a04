// rc522-rs/librc522/src/presence/reporter.rs
//! Where emitted scans go.

use std::sync::mpsc::Sender;

use log::info;

use crate::error::ReportError;

/// Consumer of scan events. Called synchronously from the polling loop, so
/// implementations must not block for long.
pub trait EventReporter {
    /// Deliver one scan
    fn report(&mut self, uid: &str, device_label: &str, timestamp_ms: u64)
    -> Result<(), ReportError>;
}

impl<F> EventReporter for F
where
    F: FnMut(&str, &str, u64) -> Result<(), ReportError>,
{
    fn report(
        &mut self,
        uid: &str,
        device_label: &str,
        timestamp_ms: u64,
    ) -> Result<(), ReportError> {
        self(uid, device_label, timestamp_ms)
    }
}

/// Writes every scan to the log at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl EventReporter for LogReporter {
    fn report(
        &mut self,
        uid: &str,
        device_label: &str,
        timestamp_ms: u64,
    ) -> Result<(), ReportError> {
        info!("scan {} on {} at {}ms", uid, device_label, timestamp_ms);
        Ok(())
    }
}

/// Owned copy of one report, as sent over a channel or serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanReport {
    /// Canonical UID
    #[cfg_attr(feature = "serde", serde(rename = "keyfob_key"))]
    pub uid: String,
    /// Reader label from `MonitorConfig`
    #[cfg_attr(feature = "serde", serde(rename = "device"))]
    pub device_label: String,
    /// Reader clock at acquisition (ms)
    #[cfg_attr(feature = "serde", serde(rename = "timestamp"))]
    pub timestamp_ms: u64,
}

/// Hands reports to another thread. `send` never blocks; a dropped
/// receiver surfaces as `ReportError::Disconnected`.
#[derive(Debug, Clone)]
pub struct ChannelReporter {
    tx: Sender<ScanReport>,
}

impl ChannelReporter {
    /// Send reports into `tx`
    pub fn new(tx: Sender<ScanReport>) -> Self {
        Self { tx }
    }
}

impl EventReporter for ChannelReporter {
    fn report(
        &mut self,
        uid: &str,
        device_label: &str,
        timestamp_ms: u64,
    ) -> Result<(), ReportError> {
        self.tx
            .send(ScanReport {
                uid: uid.to_string(),
                device_label: device_label.to_string(),
                timestamp_ms,
            })
            .map_err(|_| ReportError::Disconnected)
    }
}
