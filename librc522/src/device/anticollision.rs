// rc522-rs/librc522/src/device/anticollision.rs
//! REQA presence check and cascade-level-1 anticollision.
//!
//! `detect_presence` is a fixed-delay check: it sends REQA as a 7-bit short
//! frame, waits for the settle window and looks at RxIRq once.
//! `acquire_uid` runs the anticollision exchange and only hands out a UID
//! whose BCC byte matches:
//!
//! ```text
//! Idle -> SentRequest -> Received -> Validating -> Valid
//!                     \-> TimedOut              \-> Invalid
//! ```

use log::debug;

use crate::constants::*;
use crate::error::{ProtocolError, TransportError};
use crate::protocol::checksum::bcc;
use crate::protocol::command::{
    ANTICOLLISION_NVB, ERROR_MASK, FIFO_FLUSH, PcdCommand, PiccCommand, framing, irq,
};
use crate::protocol::register::Register;
use crate::transport::RegisterTransport;
use crate::types::Uid;
use crate::utils::{Clock, Deadline};

/// FIFOLevelReg bits 6..0 hold the byte count
const FIFO_LEVEL_MASK: u8 = 0x7F;

/// Progress of one `acquire_uid` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireState {
    /// Nothing sent yet
    Idle,
    /// SEL CL1 + NVB 0x20 is on the air
    SentRequest,
    /// RxIRq seen
    Received,
    /// Timer IRQ or deadline first
    TimedOut,
    /// Frame read, checks running
    Validating,
    /// UID accepted
    Valid,
    /// Frame error, short frame or BCC mismatch
    Invalid,
}

impl AcquireState {
    /// Whether `self -> next` is a legal step
    pub fn allows(self, next: AcquireState) -> bool {
        use AcquireState::*;
        matches!(
            (self, next),
            (Idle, SentRequest)
                | (SentRequest, Received)
                | (SentRequest, TimedOut)
                | (Received, Validating)
                | (Validating, Valid)
                | (Validating, Invalid)
        )
    }

    /// No step leaves this state
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            AcquireState::TimedOut | AcquireState::Valid | AcquireState::Invalid
        )
    }
}

struct Acquisition {
    state: AcquireState,
}

impl Acquisition {
    fn new() -> Self {
        Self {
            state: AcquireState::Idle,
        }
    }

    fn enter(&mut self, next: AcquireState) {
        debug_assert!(
            self.state.allows(next),
            "{:?} -> {:?}",
            self.state,
            next
        );
        debug!("anticollision: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn fail(&mut self, err: ProtocolError) -> ProtocolError {
        self.enter(AcquireState::Invalid);
        err
    }
}

/// How the wait for the anticollision answer ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WaitOutcome {
    Received,
    ChipTimer,
    Deadline,
}

/// Send REQA and report whether any card answered within the settle window.
/// The chip is back in Idle afterwards.
pub fn detect_presence(
    regs: &mut RegisterTransport,
    clock: &dyn Clock,
) -> Result<bool, TransportError> {
    regs.write(Register::ComIrq, irq::CLEAR_ALL)?;
    // Stale ATQA bytes from the previous exchange would be sent along with REQA
    regs.write(Register::FifoLevel, FIFO_FLUSH)?;
    regs.write(Register::BitFraming, framing::SHORT_FRAME)?;
    regs.write(Register::FifoData, PiccCommand::ReqA.into())?;
    regs.write(Register::Command, PcdCommand::Transceive.into())?;
    regs.write(
        Register::BitFraming,
        framing::SHORT_FRAME | framing::START_SEND,
    )?;

    clock.sleep_ms(PRESENCE_SETTLE_MS);

    let irq_bits = regs.read(Register::ComIrq);
    let idle = regs.write(Register::Command, PcdCommand::Idle.into());
    let irq_bits = irq_bits?;
    idle?;

    Ok(irq_bits & irq::RX != 0)
}

/// Run the level-1 anticollision exchange and return the UID with the BCC
/// byte the card sent.
pub fn acquire_uid(
    regs: &mut RegisterTransport,
    clock: &dyn Clock,
) -> Result<(Uid, u8), ProtocolError> {
    let mut acq = Acquisition::new();

    regs.write(Register::ComIrq, irq::CLEAR_ALL)?;
    regs.write(Register::FifoLevel, FIFO_FLUSH)?;
    regs.write(Register::BitFraming, framing::FULL_FRAME)?;
    regs.write(Register::FifoData, PiccCommand::SelCl1.into())?;
    regs.write(Register::FifoData, ANTICOLLISION_NVB)?;
    regs.write(Register::Command, PcdCommand::Transceive.into())?;
    regs.write(
        Register::BitFraming,
        framing::FULL_FRAME | framing::START_SEND,
    )?;
    acq.enter(AcquireState::SentRequest);

    let outcome = wait_for_answer(regs, clock);
    // Back to Idle on every path; a bus error while waiting wins
    let idle = regs.write(Register::Command, PcdCommand::Idle.into());
    let outcome = outcome?;
    idle?;

    if outcome != WaitOutcome::Received {
        debug!("anticollision wait ended by {:?}", outcome);
        acq.enter(AcquireState::TimedOut);
        return Err(ProtocolError::Timeout);
    }
    acq.enter(AcquireState::Received);
    acq.enter(AcquireState::Validating);

    let error = regs.read(Register::Error)? & ERROR_MASK;
    if error != 0 {
        return Err(acq.fail(ProtocolError::FrameError { error }));
    }

    let available = regs.read(Register::FifoLevel)? & FIFO_LEVEL_MASK;
    if available < ANTICOLLISION_FRAME_LEN {
        return Err(acq.fail(ProtocolError::ShortFrame { available }));
    }

    // Each read of FIFODataReg pops the next byte
    let mut uid = [0u8; UID_LEN];
    for byte in uid.iter_mut() {
        *byte = regs.read(Register::FifoData)?;
    }
    let received = regs.read(Register::FifoData)?;

    let expected = bcc(&uid);
    if expected != received {
        return Err(acq.fail(ProtocolError::ChecksumMismatch {
            expected,
            actual: received,
        }));
    }

    acq.enter(AcquireState::Valid);
    Ok((Uid::from_bytes(uid), received))
}

fn wait_for_answer(
    regs: &mut RegisterTransport,
    clock: &dyn Clock,
) -> Result<WaitOutcome, TransportError> {
    let deadline = Deadline::after(clock, ANTICOLLISION_TIMEOUT_MS);
    loop {
        let irq_bits = regs.read(Register::ComIrq)?;
        if irq_bits & irq::RX != 0 {
            return Ok(WaitOutcome::Received);
        }
        if irq_bits & irq::TIMER != 0 {
            return Ok(WaitOutcome::ChipTimer);
        }
        if deadline.expired(clock) {
            return Ok(WaitOutcome::Deadline);
        }
        clock.sleep_ms(ANTICOLLISION_POLL_MS);
    }
}
