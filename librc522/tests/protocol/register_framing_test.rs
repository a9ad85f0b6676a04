use librc522::protocol::register::decode_address;
use librc522::protocol::{Register, read_address, write_address};

#[test]
fn address_byte_layout() {
    // Bit 7 = read, bits 6..1 = register, bit 0 = 0
    assert_eq!(write_address(Register::Command), 0x02);
    assert_eq!(read_address(Register::ComIrq), 0x88);
    assert_eq!(write_address(Register::BitFraming), 0x1A);
    assert_eq!(read_address(Register::TestAdc), 0xF6);
    assert_eq!(write_address(Register::TestAdc) & 0x01, 0);
}

#[test]
fn decode_recovers_register() {
    let (idx, is_read) = decode_address(read_address(Register::FifoLevel));
    assert_eq!(Register::from_index(idx), Some(Register::FifoLevel));
    assert!(is_read);
}

#[test]
fn reserved_indices_are_not_registers() {
    assert_eq!(Register::from_index(0x00), None);
    assert_eq!(Register::from_index(0x10), None);
    assert_eq!(Register::from_index(0x40), None);
}
