// rc522-rs/librc522/src/device/handle.rs
//! Type-state reader handle.

use std::marker::PhantomData;

use log::warn;

use crate::config::ReaderConfig;
use crate::device::{anticollision, bring_up};
use crate::error::{InitError, ProtocolError, TransportError};
use crate::transport::{RegisterTransport, Transport};
use crate::types::{ChipVersion, PinLevel, Uid};
use crate::utils::{Clock, SystemClock};

/// Type-state marker: chip not brought up yet
pub struct Uninitialized;
/// Type-state marker: bring-up passed, antenna on
pub struct Initialized;

/// Reader handle that enforces bring-up at compile time: the card methods
/// only exist on `Reader<Initialized>`.
pub struct Reader<State = Uninitialized> {
    regs: RegisterTransport,
    clock: Box<dyn Clock>,
    config: ReaderConfig,
    version: ChipVersion,
    _state: PhantomData<State>,
}

impl Reader<Uninitialized> {
    /// Create a Reader from an existing Transport instance with the system
    /// clock and default configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::from_parts(
            transport,
            Box::new(SystemClock::new()),
            ReaderConfig::default(),
        )
    }

    pub(crate) fn from_parts(
        transport: Box<dyn Transport>,
        clock: Box<dyn Clock>,
        config: ReaderConfig,
    ) -> Self {
        Self {
            regs: RegisterTransport::new(transport),
            clock,
            config,
            version: ChipVersion::new(0),
            _state: PhantomData,
        }
    }

    /// Run the bring-up sequence, repeating it up to
    /// `config.init_attempts` times with linear backoff. The last error is
    /// returned when every attempt fails.
    pub fn initialize(self) -> Result<Reader<Initialized>, InitError> {
        let mut this = self;
        this.config.validate()?;

        let attempts = this.config.init_attempts;
        let mut attempt = 1;
        let version = loop {
            match bring_up::run(&mut this.regs, &*this.clock, &this.config) {
                Ok(version) => break version,
                Err(e) if attempt < attempts => {
                    let backoff = this.config.init_backoff_ms * attempt as u64;
                    warn!(
                        "bring-up attempt {}/{} failed: {}; retrying in {}ms",
                        attempt, attempts, e, backoff
                    );
                    this.clock.sleep_ms(backoff);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        };

        Ok(Reader {
            regs: this.regs,
            clock: this.clock,
            config: this.config,
            version,
            _state: PhantomData,
        })
    }
}

impl Reader<Initialized> {
    /// Send REQA; true when a card answered.
    pub fn detect_presence(&mut self) -> Result<bool, TransportError> {
        anticollision::detect_presence(&mut self.regs, &*self.clock)
    }

    /// Level-1 anticollision; the UID is only returned when its BCC matched.
    pub fn acquire_uid(&mut self) -> Result<(Uid, u8), ProtocolError> {
        anticollision::acquire_uid(&mut self.regs, &*self.clock)
    }

    /// Version register content read during bring-up
    pub fn version(&self) -> ChipVersion {
        self.version
    }

    /// Direct register access for diagnostics
    pub fn registers(&mut self) -> &mut RegisterTransport {
        &mut self.regs
    }

    /// Hold the chip in reset and release the handle.
    pub fn shutdown(mut self) -> Result<(), TransportError> {
        self.regs.set_reset(PinLevel::Low)
    }
}

impl<State> Reader<State> {
    /// Configuration the reader was built with
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Clock used for settle waits and timestamps
    pub fn clock(&self) -> &dyn Clock {
        &*self.clock
    }

    /// Milliseconds on the reader clock
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Sleep on the reader clock
    pub fn sleep_ms(&self, ms: u64) {
        self.clock.sleep_ms(ms)
    }
}
