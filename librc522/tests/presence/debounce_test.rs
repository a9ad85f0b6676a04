#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{UID_A, UID_B};
use librc522::presence::Debouncer;

const T: u64 = 20_000;

#[test]
fn same_uid_inside_window_is_suppressed() {
    let mut d = Debouncer::new(5000);
    assert!(d.should_emit(UID_A, T));
    d.record(UID_A, T);

    assert!(!d.should_emit(UID_A, T + 4999));
    assert!(d.should_emit(UID_A, T + 5001));
}

#[test]
fn distinct_uid_always_emits() {
    let mut d = Debouncer::new(5000);
    d.record(UID_A, T);
    assert!(d.should_emit(UID_B, T + 10));
}

#[test]
fn exact_window_boundary_emits() {
    let mut d = Debouncer::new(5000);
    d.record(UID_A, T);
    assert!(d.should_emit(UID_A, T + 5000));
}

#[test]
fn record_replaces_last_report() {
    let mut d = Debouncer::new(5000);
    d.record(UID_A, T);
    d.record(UID_B, T + 10);
    assert_eq!(d.last_uid(), Some(UID_B));
    assert_eq!(d.last_report_ms(), Some(T + 10));
    // A is no longer the last reported UID
    assert!(d.should_emit(UID_A, T + 20));
}
