// rc522-rs/librc522/src/transport/mock.rs
//! In-memory chip for tests and benches.

use std::collections::{HashMap, VecDeque};

use crate::config::BusConfig;
use crate::error::TransportError;
use crate::protocol::command::{FIFO_FLUSH, PcdCommand};
use crate::protocol::register::{Register, decode_address};
use crate::transport::traits::Transport;
use crate::types::PinLevel;

const REGISTER_COUNT: usize = 64;

/// Mock transport for unit tests. It behaves like a register file on the
/// far side of the bus: writes land in the file (with the chip's
/// set/clear semantics for ComIrqReg and FIFO flush), reads return either a
/// queued scripted value or the current file content.
#[derive(Debug)]
pub struct MockTransport {
    /// Every raw frame clocked out, in order
    pub sent: Vec<Vec<u8>>,
    /// Decoded register writes: (register index, value)
    pub writes: Vec<(u8, u8)>,
    /// Decoded register reads: register index
    pub reads: Vec<u8>,
    /// Bytes written to FIFODataReg since the last flush
    pub fifo: Vec<u8>,
    /// Reset line history
    pub reset_levels: Vec<PinLevel>,
    /// Last configuration passed to `open`
    pub opened: Option<BusConfig>,
    /// Testing hook: number of subsequent transfers that fail with a bus error
    pub transfer_failures: usize,
    /// Number of transfers that failed because of `transfer_failures`
    pub failed_transfers: usize,
    registers: [u8; REGISTER_COUNT],
    scripted: HashMap<u8, VecDeque<u8>>,
    lead_byte: u8,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// A powered MFRC522 v2.0 with register reset values for the registers
    /// the driver reads.
    pub fn new() -> Self {
        let mut registers = [0u8; REGISTER_COUNT];
        registers[Register::Version.index() as usize] = 0x92;
        registers[Register::TxControl.index() as usize] = 0x80;
        registers[Register::TMode.index() as usize] = 0x00;
        registers[Register::ComIrq.index() as usize] = 0x14;
        Self {
            sent: Vec::new(),
            writes: Vec::new(),
            reads: Vec::new(),
            fifo: Vec::new(),
            reset_levels: Vec::new(),
            opened: None,
            transfer_failures: 0,
            failed_transfers: 0,
            registers,
            scripted: HashMap::new(),
            lead_byte: 0x00,
        }
    }

    /// Overwrite one register in the file
    pub fn set_register(&mut self, reg: Register, value: u8) {
        self.registers[reg.index() as usize] = value;
    }

    /// Current register file content
    pub fn register(&self, reg: Register) -> u8 {
        self.registers[reg.index() as usize]
    }

    /// Queue values returned by the next reads of `reg`, ahead of the
    /// register file content.
    pub fn script_reads(&mut self, reg: Register, values: &[u8]) {
        self.scripted
            .entry(reg.index())
            .or_default()
            .extend(values.iter().copied());
    }

    /// Scripted values for `reg` not yet consumed
    pub fn pending_reads(&self, reg: Register) -> usize {
        self.scripted.get(&reg.index()).map_or(0, |q| q.len())
    }

    /// Byte returned in the first slot of every transaction (the slot a
    /// real chip leaves undefined).
    pub fn set_lead_byte(&mut self, byte: u8) {
        self.lead_byte = byte;
    }

    /// Set how many subsequent transfers should fail (for tests).
    pub fn set_transfer_failures(&mut self, n: usize) {
        self.transfer_failures = n;
    }

    /// Values written to `reg`, in order
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(idx, _)| *idx == reg.index())
            .map(|(_, v)| *v)
            .collect()
    }

    /// How many times `reg` was read
    pub fn read_count(&self, reg: Register) -> usize {
        self.reads.iter().filter(|idx| **idx == reg.index()).count()
    }

    /// Number of transceive commands issued
    pub fn transceive_count(&self) -> usize {
        self.writes_to(Register::Command)
            .iter()
            .filter(|v| **v == u8::from(PcdCommand::Transceive))
            .count()
    }

    fn read_register(&mut self, idx: u8) -> u8 {
        self.reads.push(idx);
        if let Some(v) = self.scripted.get_mut(&idx).and_then(|q| q.pop_front()) {
            return v;
        }
        self.registers[idx as usize]
    }

    fn write_register(&mut self, idx: u8, value: u8) {
        self.writes.push((idx, value));
        match Register::from_index(idx) {
            Some(Register::ComIrq) => {
                // Set1 (bit 7) selects whether marked bits are set or cleared
                let marked = value & 0x7F;
                if value & 0x80 != 0 {
                    self.registers[idx as usize] |= marked;
                } else {
                    self.registers[idx as usize] &= !marked;
                }
            }
            Some(Register::FifoLevel) => {
                if value & FIFO_FLUSH != 0 {
                    self.fifo.clear();
                    self.registers[idx as usize] = 0;
                }
            }
            Some(Register::FifoData) => {
                self.fifo.push(value);
                self.registers[Register::FifoLevel.index() as usize] = self.fifo.len() as u8;
            }
            _ => self.registers[idx as usize] = value,
        }
    }
}

impl Transport for MockTransport {
    fn open(&mut self, config: &BusConfig) -> Result<(), TransportError> {
        self.opened = Some(*config);
        Ok(())
    }

    fn set_reset(&mut self, level: PinLevel) -> Result<(), TransportError> {
        self.reset_levels.push(level);
        Ok(())
    }

    fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>, TransportError> {
        if self.transfer_failures > 0 {
            self.transfer_failures -= 1;
            self.failed_transfers += 1;
            return Err(TransportError::Bus("simulated transfer failure".into()));
        }
        if tx.len() < 2 {
            return Err(TransportError::ShortTransfer {
                expected: 2,
                actual: tx.len(),
            });
        }
        self.sent.push(tx.to_vec());

        let (idx, is_read) = decode_address(tx[0]);
        let value = if is_read {
            self.read_register(idx)
        } else {
            self.write_register(idx, tx[1]);
            0x00
        };
        Ok(vec![self.lead_byte, value])
    }
}
