// rc522-rs/librc522/src/presence/mod.rs
//! Presence tracking and duplicate suppression on top of the anticollision
//! engine. One `poll_once` call is one cycle of the steady-state loop.

pub mod reporter;

use log::{debug, info, warn};

use crate::config::MonitorConfig;
use crate::device::{Initialized, Reader};
use crate::error::{ProtocolError, TransportError};
use crate::types::{Presence, ScanEvent};
use crate::utils::CancellationToken;

pub use reporter::{ChannelReporter, EventReporter, LogReporter, ScanReport};

/// UID + time dedup window. Pure bookkeeping, the caller supplies `now_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    window_ms: u64,
    last_uid: Option<String>,
    last_report_ms: Option<u64>,
}

impl Debouncer {
    /// Empty memory with the given window
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_uid: None,
            last_report_ms: None,
        }
    }

    /// True for a UID other than the last reported one, or once the window
    /// has fully elapsed since the last report.
    pub fn should_emit(&self, uid: &str, now_ms: u64) -> bool {
        match (&self.last_uid, self.last_report_ms) {
            (Some(last), Some(at)) if last == uid => now_ms.saturating_sub(at) >= self.window_ms,
            _ => true,
        }
    }

    /// Remember `uid` as reported at `now_ms`
    pub fn record(&mut self, uid: &str, now_ms: u64) {
        self.last_uid = Some(uid.to_string());
        self.last_report_ms = Some(now_ms);
    }

    /// Last reported UID
    pub fn last_uid(&self) -> Option<&str> {
        self.last_uid.as_deref()
    }

    /// When the last report went out
    pub fn last_report_ms(&self) -> Option<u64> {
        self.last_report_ms
    }

    /// Suppression window
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}

/// Result of one polling cycle
#[derive(Debug)]
pub enum PollOutcome {
    /// No edge this cycle
    NoChange,
    /// New card (or same card after the window); forward it
    Reported(ScanEvent),
    /// Card arrived but was reported too recently
    Suppressed {
        /// Canonical UID of the suppressed card
        uid: String,
    },
    /// Card arrived but its UID could not be read; it stays PRESENT
    ReadFailed(ProtocolError),
    /// Card left the field
    Removed,
}

/// Owns the presence flag and the dedup memory for one reader.
#[derive(Debug)]
pub struct PresenceMonitor {
    config: MonitorConfig,
    presence: Presence,
    debouncer: Debouncer,
}

impl PresenceMonitor {
    /// Start ABSENT with empty dedup memory
    pub fn new(config: MonitorConfig) -> Self {
        let debouncer = Debouncer::new(config.dedup_window_ms);
        Self {
            config,
            presence: Presence::Absent,
            debouncer,
        }
    }

    /// Current presence flag
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Dedup memory
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Loop configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Check the field once and act on the edge. A bus failure during the check leaves
    /// the presence state untouched.
    pub fn poll_once(
        &mut self,
        reader: &mut Reader<Initialized>,
    ) -> Result<PollOutcome, TransportError> {
        let detected = reader.detect_presence()?;

        match (self.presence, detected) {
            (Presence::Absent, true) => {
                debug!("presence: ABSENT -> PRESENT");
                self.presence = Presence::Present;
                let uid = match reader.acquire_uid() {
                    Ok((uid, _)) => uid.to_canonical(),
                    Err(ProtocolError::Transport(e)) => return Err(e),
                    Err(e) => return Ok(PollOutcome::ReadFailed(e)),
                };
                let now = reader.now_ms();
                if self.debouncer.should_emit(&uid, now) {
                    self.debouncer.record(&uid, now);
                    Ok(PollOutcome::Reported(ScanEvent {
                        uid,
                        timestamp_ms: now,
                    }))
                } else {
                    Ok(PollOutcome::Suppressed { uid })
                }
            }
            (Presence::Present, false) => {
                debug!("presence: PRESENT -> ABSENT");
                self.presence = Presence::Absent;
                Ok(PollOutcome::Removed)
            }
            _ => Ok(PollOutcome::NoChange),
        }
    }

    /// Poll until `cancel` fires, forwarding emitted scans to `reporter`.
    /// Errors are logged and polling continues. Returns the number of scans
    /// emitted.
    pub fn run(
        &mut self,
        reader: &mut Reader<Initialized>,
        reporter: &mut dyn EventReporter,
        cancel: &CancellationToken,
    ) -> usize {
        let mut emitted = 0;
        info!(
            "polling every {}ms as {}",
            self.config.poll_interval_ms, self.config.device_label
        );

        while !cancel.is_canceled() {
            match self.poll_once(reader) {
                Ok(PollOutcome::Reported(event)) => {
                    info!("card {} at {}ms", event.uid, event.timestamp_ms);
                    emitted += 1;
                    if let Err(e) =
                        reporter.report(&event.uid, &self.config.device_label, event.timestamp_ms)
                    {
                        warn!("report for {} failed: {}", event.uid, e);
                    }
                }
                Ok(PollOutcome::Suppressed { uid }) => {
                    debug!("card {} inside dedup window, not reported", uid)
                }
                Ok(PollOutcome::ReadFailed(e)) => warn!("card present, UID read failed: {}", e),
                Ok(PollOutcome::Removed) => debug!("card removed"),
                Ok(PollOutcome::NoChange) => {}
                Err(e) => warn!("presence check failed: {}", e),
            }

            if cancel.is_canceled() {
                break;
            }
            reader.sleep_ms(self.config.poll_interval_ms);
        }

        info!("polling stopped after {} scans", emitted);
        emitted
    }
}
