#[path = "../common/mod.rs"]
mod common;

use std::sync::mpsc::channel;

use common::fixtures::{UID_A, UID_B, uid_a_bytes, uid_b_bytes};
use librc522::config::MonitorConfig;
use librc522::presence::{ChannelReporter, PollOutcome, PresenceMonitor};
use librc522::protocol::Register;
use librc522::protocol::command::irq;
use librc522::utils::{CancellationToken, MockClock};
use librc522::{Presence, ReportError};

fn monitor() -> PresenceMonitor {
    PresenceMonitor::new(MonitorConfig::default())
}

#[test]
fn held_card_is_read_once() {
    let clock = MockClock::new();
    let (mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    let mut mon = monitor();

    common::seed_card(&mut mock.borrow_mut(), uid_a_bytes());
    assert!(matches!(
        mon.poll_once(&mut reader).unwrap(),
        PollOutcome::Reported(_)
    ));
    let after_first = mock.borrow().transceive_count();

    for _ in 0..5 {
        mock.borrow_mut().script_reads(Register::ComIrq, &[irq::RX]);
        assert!(matches!(
            mon.poll_once(&mut reader).unwrap(),
            PollOutcome::NoChange
        ));
    }
    // One REQA per cycle, no anticollision
    assert_eq!(mock.borrow().transceive_count(), after_first + 5);
    assert_eq!(mon.presence(), Presence::Present);
}

#[test]
fn removal_keeps_dedup_memory() {
    let clock = MockClock::new();
    let (mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    let mut mon = monitor();

    common::seed_card(&mut mock.borrow_mut(), uid_a_bytes());
    mon.poll_once(&mut reader).unwrap();

    // Card pulled: no RX on the next poll
    assert!(matches!(
        mon.poll_once(&mut reader).unwrap(),
        PollOutcome::Removed
    ));
    assert_eq!(mon.presence(), Presence::Absent);
    assert_eq!(mon.debouncer().last_uid(), Some(UID_A));

    // Tapped again within the window
    common::seed_card(&mut mock.borrow_mut(), uid_a_bytes());
    match mon.poll_once(&mut reader).unwrap() {
        PollOutcome::Suppressed { uid } => assert_eq!(uid, UID_A),
        other => panic!("expected Suppressed, got {:?}", other),
    }
}

#[test]
fn same_card_after_window_reports_again() {
    let clock = MockClock::new();
    let (mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    let mut mon = monitor();

    common::seed_card(&mut mock.borrow_mut(), uid_a_bytes());
    mon.poll_once(&mut reader).unwrap();
    mon.poll_once(&mut reader).unwrap();

    clock.advance_ms(5_000);
    common::seed_card(&mut mock.borrow_mut(), uid_a_bytes());
    match mon.poll_once(&mut reader).unwrap() {
        PollOutcome::Reported(ev) => assert_eq!(ev.uid, UID_A),
        other => panic!("expected Reported, got {:?}", other),
    }
}

#[test]
fn second_card_reports_immediately() {
    let clock = MockClock::new();
    let (mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    let mut mon = monitor();

    common::seed_card(&mut mock.borrow_mut(), uid_a_bytes());
    mon.poll_once(&mut reader).unwrap();
    mon.poll_once(&mut reader).unwrap();

    common::seed_card(&mut mock.borrow_mut(), uid_b_bytes());
    match mon.poll_once(&mut reader).unwrap() {
        PollOutcome::Reported(ev) => assert_eq!(ev.uid, UID_B),
        other => panic!("expected Reported, got {:?}", other),
    }
}

#[test]
fn failed_acquisition_waits_for_next_entry() {
    let clock = MockClock::new();
    let (mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    let mut mon = monitor();

    // Card answers REQA but never the anticollision
    mock.borrow_mut().script_reads(Register::ComIrq, &[irq::RX]);
    assert!(matches!(
        mon.poll_once(&mut reader).unwrap(),
        PollOutcome::ReadFailed(_)
    ));
    assert_eq!(mon.presence(), Presence::Present);
    assert_eq!(mon.debouncer().last_uid(), None);

    // Leaves, comes back, reads fine
    mon.poll_once(&mut reader).unwrap();
    common::seed_card(&mut mock.borrow_mut(), uid_a_bytes());
    assert!(matches!(
        mon.poll_once(&mut reader).unwrap(),
        PollOutcome::Reported(_)
    ));
}

#[test]
fn run_forwards_to_channel_until_cancelled() {
    let _ = env_logger::builder().is_test(true).try_init();

    let clock = MockClock::new();
    let (mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    common::seed_card(&mut mock.borrow_mut(), uid_a_bytes());

    let (tx, rx) = channel();
    let mut channel_reporter = ChannelReporter::new(tx);
    let cancel = CancellationToken::new();
    let stop = cancel.clone();
    let mut polls = 0;
    let mut reporter = |uid: &str, label: &str, ts: u64| {
        polls += 1;
        stop.cancel();
        librc522::presence::EventReporter::report(&mut channel_reporter, uid, label, ts)
    };

    let mut mon = PresenceMonitor::new(MonitorConfig {
        device_label: "door-1".into(),
        ..MonitorConfig::default()
    });
    let emitted = mon.run(&mut reader, &mut reporter, &cancel);

    assert_eq!(emitted, 1);
    assert_eq!(polls, 1);
    let report = rx.try_recv().unwrap();
    assert_eq!(report.uid, UID_A);
    assert_eq!(report.device_label, "door-1");
}

#[test]
fn reporter_failure_does_not_stop_polling() {
    let clock = MockClock::new();
    let (mock, mut reader) = common::initialized_mock_reader(&clock).unwrap();
    {
        let mut m = mock.borrow_mut();
        common::seed_card(&mut m, uid_a_bytes());
        // One empty poll between the two taps
        m.script_reads(Register::ComIrq, &[0x00]);
        common::seed_card(&mut m, uid_b_bytes());
    }

    let cancel = CancellationToken::new();
    let stop = cancel.clone();
    let mut seen = Vec::new();
    let mut reporter = |uid: &str, _: &str, _: u64| {
        seen.push(uid.to_string());
        if seen.len() == 2 {
            stop.cancel();
        }
        Err::<(), ReportError>(ReportError::Rejected("offline".into()))
    };

    let mut mon = monitor();
    assert_eq!(mon.run(&mut reader, &mut reporter, &cancel), 2);
    assert_eq!(seen, vec![UID_A.to_string(), UID_B.to_string()]);
    // Two sleeps between three cycles
    assert!(clock.slept_ms() >= 210 + 2 * 500);
}
