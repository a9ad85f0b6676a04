#[path = "../common/mod.rs"]
mod common;

use librc522::config::ReaderConfig;
use librc522::device::bring_up;
use librc522::protocol::Register;
use librc522::transport::RegisterTransport;
use librc522::types::PinLevel;
use librc522::utils::MockClock;
use librc522::InitError;

#[test]
fn register_writes_follow_bring_up_order() {
    let (mock, bus) = common::shared_mock();
    let mut regs = RegisterTransport::new(bus);
    bring_up::run(&mut regs, &MockClock::new(), &ReaderConfig::default()).unwrap();

    let m = mock.borrow();
    let expected = vec![
        (Register::TMode.index(), 0x8D),
        (Register::Command.index(), 0x0F),
        (Register::TMode.index(), 0x8D),
        (Register::TPrescaler.index(), 0x3E),
        (Register::TReloadL.index(), 30),
        (Register::TReloadH.index(), 0),
        (Register::TxAsk.index(), 0x40),
        (Register::Mode.index(), 0x3D),
        (Register::TxControl.index(), 0x83),
    ];
    assert_eq!(m.writes, expected);
    assert_eq!(
        m.reads,
        vec![
            Register::TMode.index(),
            Register::Version.index(),
            Register::TxControl.index()
        ]
    );
    assert_eq!(m.reset_levels, vec![PinLevel::Low, PinLevel::High]);
}

#[test]
fn dead_bus_stops_at_self_test() {
    let (mock, bus) = common::shared_mock();
    // Every read comes back 0x00 on a disconnected MISO line
    mock.borrow_mut().script_reads(Register::TMode, &[0x00]);
    let mut regs = RegisterTransport::new(bus);

    let err = bring_up::run(&mut regs, &MockClock::new(), &ReaderConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        InitError::TransportUnresponsive {
            wrote: 0x8D,
            read: 0x00
        }
    ));
    // Nothing past the self-test was attempted
    assert!(mock.borrow().writes_to(Register::Command).is_empty());
    assert_eq!(mock.borrow().register(Register::TxControl), 0x80);
}

#[test]
fn absent_version_stops_before_configuration() {
    for version in [0x00, 0xFF] {
        let (mock, bus) = common::shared_mock();
        mock.borrow_mut().set_register(Register::Version, version);
        let mut regs = RegisterTransport::new(bus);

        let err =
            bring_up::run(&mut regs, &MockClock::new(), &ReaderConfig::default()).unwrap_err();
        assert!(matches!(err, InitError::ChipNotDetected { version: v } if v == version));

        let m = mock.borrow();
        // Self-test write, then the soft reset, then nothing
        assert_eq!(
            m.writes,
            vec![
                (Register::TMode.index(), 0x8D),
                (Register::Command.index(), 0x0F)
            ]
        );
        for reg in [
            Register::TPrescaler,
            Register::TReloadL,
            Register::TxAsk,
            Register::Mode,
            Register::TxControl,
        ] {
            assert!(m.writes_to(reg).is_empty(), "{:?} written", reg);
        }
        assert_eq!(m.register(Register::TxControl), 0x80);
    }
}

#[test]
fn clone_chip_is_accepted() {
    let (mock, bus) = common::shared_mock();
    mock.borrow_mut().set_register(Register::Version, 0x88);
    let mut regs = RegisterTransport::new(bus);

    let version = bring_up::run(&mut regs, &MockClock::new(), &ReaderConfig::default()).unwrap();
    assert_eq!(version.describe(), "FM17522 clone");
}

#[test]
fn bus_failure_during_bring_up_is_transport_error() {
    let (mock, bus) = common::shared_mock();
    mock.borrow_mut().set_transfer_failures(1);
    let mut regs = RegisterTransport::new(bus);

    assert!(matches!(
        bring_up::run(&mut regs, &MockClock::new(), &ReaderConfig::default()),
        Err(InitError::Transport(_))
    ));
}
