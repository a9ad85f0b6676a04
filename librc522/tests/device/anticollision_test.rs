#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{UID_A, UID_A_BCC, uid_a_bytes};
use librc522::protocol::Register;
use librc522::utils::{Clock, MockClock};
use librc522::{ProtocolError, TransportError};

#[test]
fn reader_detects_and_reads_card() {
    let clock = MockClock::new();
    let (mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    common::seed_card(&mut mock.borrow_mut(), uid_a_bytes());

    assert!(reader.detect_presence().unwrap());
    let (uid, check) = reader.acquire_uid().unwrap();
    assert_eq!(uid.to_string(), UID_A);
    assert_eq!(check, UID_A_BCC);
    assert_eq!(mock.borrow().pending_reads(Register::FifoData), 0);
}

#[test]
fn empty_field_is_absent() {
    let clock = MockClock::new();
    let (_mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    assert!(!reader.detect_presence().unwrap());
}

#[test]
fn corrupted_check_byte_never_yields_uid() {
    let clock = MockClock::new();
    let (mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    common::seed_anticollision(&mut mock.borrow_mut(), uid_a_bytes(), UID_A_BCC ^ 0x01);

    match reader.acquire_uid() {
        Err(ProtocolError::ChecksumMismatch { expected, actual }) => {
            assert_eq!(expected, UID_A_BCC);
            assert_eq!(actual, UID_A_BCC ^ 0x01);
        }
        other => panic!("expected checksum mismatch, got {:?}", other),
    }
}

#[test]
fn bus_failure_surfaces_as_transport() {
    let clock = MockClock::new();
    let (mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    mock.borrow_mut().set_transfer_failures(1);

    assert!(matches!(
        reader.acquire_uid(),
        Err(ProtocolError::Transport(TransportError::Bus(_)))
    ));
}

#[test]
fn detect_propagates_bus_failure() {
    let clock = MockClock::new();
    let (mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    mock.borrow_mut().set_transfer_failures(1);
    assert!(reader.detect_presence().is_err());
}

#[test]
fn silent_card_times_out_after_deadline() {
    let clock = MockClock::new();
    let (_mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    let start = clock.now_ms();

    assert!(matches!(reader.acquire_uid(), Err(ProtocolError::Timeout)));
    assert_eq!(clock.now_ms() - start, 100);
}
