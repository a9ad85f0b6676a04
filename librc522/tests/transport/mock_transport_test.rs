#[path = "../common/mod.rs"]
mod common;

use librc522::protocol::Register;
use librc522::transport::mock::MockTransport;
use librc522::transport::{RegisterTransport, Transport};

#[test]
fn register_read_takes_second_byte() {
    let mut m = MockTransport::new();
    // Whatever the chip clocks out first is not the register value
    m.set_lead_byte(0xAA);
    let mut regs = RegisterTransport::new(Box::new(m));
    assert_eq!(regs.read(Register::Version).unwrap(), 0x92);
}

#[test]
fn every_transaction_is_two_bytes() {
    let (mock, bus) = common::shared_mock();
    let mut regs = RegisterTransport::new(bus);
    regs.write(Register::Mode, 0x3D).unwrap();
    regs.read(Register::Mode).unwrap();
    regs.set_bits(Register::TxControl, 0x03).unwrap();

    let m = mock.borrow();
    assert_eq!(m.sent.len(), 4);
    assert!(m.sent.iter().all(|tx| tx.len() == 2));
    assert_eq!(m.sent[0], vec![0x22, 0x3D]);
    assert_eq!(m.sent[1], vec![0xA2, 0x00]);
}

#[test]
fn clear_bits_keeps_the_rest() {
    let (mock, bus) = common::shared_mock();
    mock.borrow_mut().set_register(Register::TxControl, 0x83);
    let mut regs = RegisterTransport::new(bus);
    assert_eq!(regs.clear_bits(Register::TxControl, 0x03).unwrap(), 0x80);
    assert_eq!(mock.borrow().register(Register::TxControl), 0x80);
}

#[test]
fn write_default_goes_through_transfer() {
    let mut m = MockTransport::new();
    m.write(&[0x54, 0x8D]).unwrap();
    assert_eq!(m.register(Register::TMode), 0x8D);
    assert_eq!(m.writes, vec![(Register::TMode.index(), 0x8D)]);
}
