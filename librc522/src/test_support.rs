//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{BusConfig, ReaderConfig};
use crate::device::{Initialized, Reader, ReaderBuilder};
use crate::error::{InitError, TransportError};
use crate::protocol::command::irq;
use crate::protocol::register::Register;
use crate::protocol::bcc;
use crate::transport::mock::MockTransport;
use crate::transport::traits::Transport;
use crate::types::PinLevel;
use crate::utils::MockClock;

/// Transport handle sharing one MockTransport with the test body, so the
/// test can seed and inspect the mock after the reader took ownership.
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl Transport for SharedTransport {
    fn open(&mut self, config: &BusConfig) -> Result<(), TransportError> {
        self.inner.borrow_mut().open(config)
    }

    fn set_reset(&mut self, level: PinLevel) -> Result<(), TransportError> {
        self.inner.borrow_mut().set_reset(level)
    }

    fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.inner.borrow_mut().transfer(tx)
    }
}

/// A fresh MockTransport plus a boxed Transport that drives it.
#[doc(hidden)]
pub fn shared_mock() -> (Rc<RefCell<MockTransport>>, Box<dyn Transport>) {
    let inner = Rc::new(RefCell::new(MockTransport::new()));
    let bus = SharedTransport {
        inner: Rc::clone(&inner),
    };
    (inner, Box::new(bus))
}

/// Script one anticollision answer: RxIRq, five bytes in the FIFO, then the
/// UID and the given check byte.
#[doc(hidden)]
pub fn seed_anticollision(mock: &mut MockTransport, uid: [u8; 4], check: u8) {
    mock.script_reads(Register::ComIrq, &[irq::RX]);
    mock.script_reads(Register::FifoLevel, &[5]);
    mock.script_reads(Register::FifoData, &uid);
    mock.script_reads(Register::FifoData, &[check]);
}

/// Script a card in the field for one detect + acquire round.
#[doc(hidden)]
pub fn seed_card(mock: &mut MockTransport, uid: [u8; 4]) {
    mock.script_reads(Register::ComIrq, &[irq::RX]);
    seed_anticollision(mock, uid, bcc(&uid));
}

/// Convenience: create and initialize a Reader<Initialized> backed by a
/// shared MockTransport and the given clock.
#[doc(hidden)]
pub fn initialized_mock_reader(
    clock: &MockClock,
) -> Result<(Rc<RefCell<MockTransport>>, Reader<Initialized>), InitError> {
    let (mock, bus) = shared_mock();
    let reader = ReaderBuilder::new()
        .with_transport(bus)
        .with_clock(Box::new(clock.clone()))
        .with_config(ReaderConfig::default())
        .build_uninitialized()?
        .initialize()?;
    Ok((mock, reader))
}
