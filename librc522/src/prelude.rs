// rc522-rs/librc522/src/prelude.rs
//! `use librc522::prelude::*;` for the everyday types.

pub use crate::config::{BusConfig, MonitorConfig, ReaderConfig};
pub use crate::device::{Initialized, Reader, ReaderBuilder, Uninitialized};
pub use crate::presence::{
    ChannelReporter, Debouncer, EventReporter, LogReporter, PollOutcome, PresenceMonitor,
};
pub use crate::transport::{RegisterTransport, Transport};
pub use crate::{
    ChipVersion, Error, InitError, Presence, ProtocolError, ReportError, Result, ScanEvent,
    TransportError, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{CancellationToken, Clock, SystemClock, bytes_to_hex_colon};
