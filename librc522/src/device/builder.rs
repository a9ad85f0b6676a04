// rc522-rs/librc522/src/device/builder.rs
//! Builder for `Reader`

use crate::config::ReaderConfig;
use crate::device::handle::{Reader, Uninitialized};
use crate::error::InitError;
use crate::transport::Transport;
use crate::utils::{Clock, SystemClock};

/// Helper to construct a Reader with optional configuration.
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    clock: Option<Box<dyn Clock>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    /// Empty builder with the default configuration
    pub fn new() -> Self {
        Self {
            transport: None,
            clock: None,
            config: ReaderConfig::default(),
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the system clock (tests use `MockClock`)
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// SPI clock for `open`
    pub fn clock_hz(mut self, hz: u32) -> Self {
        self.config.bus.clock_hz = hz;
        self
    }

    /// Bring-up attempts and the backoff step between them
    pub fn init_attempts(mut self, attempts: usize, backoff_ms: u64) -> Self {
        self.config.init_attempts = attempts;
        self.config.init_backoff_ms = backoff_ms;
        self
    }

    /// Consume the builder and return an uninitialized Reader.
    /// Requires a transport to be provided.
    pub fn build_uninitialized(self) -> Result<Reader<Uninitialized>, InitError> {
        let transport = self
            .transport
            .ok_or_else(|| InitError::InvalidConfig("no transport provided".into()))?;
        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(SystemClock::new()));
        Ok(Reader::from_parts(transport, clock, self.config))
    }
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
