// rc522-rs/librc522/src/device/bring_up.rs
//! Power-on sequence for the reader chip. Each step gates the next and none
//! of them retries; retry policy lives with the caller.

use log::{debug, info};

use crate::config::ReaderConfig;
use crate::constants::*;
use crate::error::InitError;
use crate::protocol::command::PcdCommand;
use crate::protocol::register::Register;
use crate::transport::RegisterTransport;
use crate::types::{ChipVersion, PinLevel};
use crate::utils::Clock;

/// Run the whole sequence once and return the chip version on success.
pub fn run(
    regs: &mut RegisterTransport,
    clock: &dyn Clock,
    config: &ReaderConfig,
) -> Result<ChipVersion, InitError> {
    hard_reset(regs, clock, config)?;
    regs.open(&config.bus)?;
    self_test(regs, clock)?;
    soft_reset(regs, clock, config)?;
    let version = check_version(regs)?;
    configure(regs)?;
    enable_antenna(regs)?;
    info!(
        "reader up: version {} ({}), antenna on",
        version,
        version.describe()
    );
    Ok(version)
}

/// Pull the reset line low, release it and let the oscillator settle.
pub fn hard_reset(
    regs: &mut RegisterTransport,
    clock: &dyn Clock,
    config: &ReaderConfig,
) -> Result<(), InitError> {
    debug!("hard reset");
    regs.set_reset(PinLevel::Low)?;
    clock.sleep_ms(config.reset_low_ms);
    regs.set_reset(PinLevel::High)?;
    clock.sleep_ms(config.reset_settle_ms);
    Ok(())
}

/// Write a known value to TModeReg and read it back. Catches wiring and
/// power faults before anything else is attempted.
pub fn self_test(regs: &mut RegisterTransport, clock: &dyn Clock) -> Result<(), InitError> {
    regs.write(Register::TMode, SELF_TEST_VALUE)?;
    clock.sleep_ms(SELF_TEST_SETTLE_MS);
    let read = regs.read(Register::TMode)?;
    debug!(
        "self-test: wrote {:#04x}, read back {:#04x}",
        SELF_TEST_VALUE, read
    );
    if read != SELF_TEST_VALUE {
        return Err(InitError::TransportUnresponsive {
            wrote: SELF_TEST_VALUE,
            read,
        });
    }
    Ok(())
}

/// Issue SoftReset and wait for the chip to come back.
pub fn soft_reset(
    regs: &mut RegisterTransport,
    clock: &dyn Clock,
    config: &ReaderConfig,
) -> Result<(), InitError> {
    regs.write(Register::Command, PcdCommand::SoftReset.into())?;
    clock.sleep_ms(config.soft_reset_settle_ms);
    Ok(())
}

/// Read VersionReg; 0x00 and 0xFF stop the sequence here.
pub fn check_version(regs: &mut RegisterTransport) -> Result<ChipVersion, InitError> {
    let version = ChipVersion::new(regs.read(Register::Version)?);
    if !version.is_present() {
        return Err(InitError::ChipNotDetected {
            version: version.as_u8(),
        });
    }
    Ok(version)
}

/// Timer, modulation and mode registers for ISO 14443A operation.
pub fn configure(regs: &mut RegisterTransport) -> Result<(), InitError> {
    // TAuto=1, prescaler 0xD3E -> ~2kHz timer tick
    regs.write(Register::TMode, TMODE_VALUE)?;
    regs.write(Register::TPrescaler, TPRESCALER_VALUE)?;
    // 30 ticks reload, ~15ms chip-side timeout
    regs.write(Register::TReloadL, TRELOAD_LOW_VALUE)?;
    regs.write(Register::TReloadH, TRELOAD_HIGH_VALUE)?;
    regs.write(Register::TxAsk, TXASK_VALUE)?;
    regs.write(Register::Mode, MODE_VALUE)?;
    Ok(())
}

/// Turn on TX1/TX2 without touching the other TxControlReg bits.
pub fn enable_antenna(regs: &mut RegisterTransport) -> Result<(), InitError> {
    let tx_control = regs.set_bits(Register::TxControl, ANTENNA_ON_BITS)?;
    debug!("TxControlReg = {:#04x}", tx_control);
    Ok(())
}
