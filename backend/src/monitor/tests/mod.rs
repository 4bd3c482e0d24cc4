//! Engine scenario tests covering lifecycle edges that the public
//! integration tests exercise end to end.

use crate::monitor::{Monitor, MonitorConfig, MonitorError, MonitorState};

fn monitor_with_seed(seed: u64) -> Monitor {
    Monitor::new(MonitorConfig {
        rng_seed: seed,
        ..MonitorConfig::default()
    })
    .unwrap()
}

#[test]
fn test_initial_state_is_stopped() {
    let monitor = monitor_with_seed(1);
    assert_eq!(monitor.state(), MonitorState::Stopped);
    assert!(!monitor.is_active());
    assert!(monitor.log().is_empty());
}

#[test]
fn test_no_emission_before_first_full_period() {
    let mut monitor = monitor_with_seed(1);
    monitor.start();

    assert_eq!(monitor.advance(2999), 0);
    assert!(monitor.log().is_empty());
    assert_eq!(monitor.advance(1), 1);
    assert_eq!(monitor.log().len(), 1);
}

#[test]
fn test_stop_discards_partial_period() {
    let mut monitor = monitor_with_seed(2);
    monitor.start();
    monitor.advance(2999);
    monitor.stop();

    // Time keeps moving, nothing fires.
    assert_eq!(monitor.advance(100_000), 0);
    assert!(monitor.log().is_empty());

    // Restart waits a full period again.
    monitor.start();
    assert_eq!(monitor.advance(2999), 0);
    assert_eq!(monitor.advance(1), 1);
}

#[test]
fn test_start_stop_idempotent() {
    let mut monitor = monitor_with_seed(3);

    monitor.stop(); // already stopped: no-op
    monitor.start();
    monitor.start(); // already running: must not reset the in-progress period

    monitor.advance(1500);
    monitor.start(); // still must not reset the carry
    assert_eq!(monitor.advance(1500), 1);
}

#[test]
fn test_time_advances_while_stopped() {
    let mut monitor = monitor_with_seed(4);
    assert_eq!(monitor.advance(5000), 0);
    assert_eq!(monitor.now_ms(), 5000);

    monitor.start();
    monitor.advance(3000);
    let event = monitor.log().latest().unwrap();
    assert_eq!(event.timestamp_ms, 8000);
}

#[test]
fn test_events_stamped_at_period_boundaries() {
    let mut monitor = monitor_with_seed(5);
    monitor.start();
    monitor.advance(9000);

    let stamps: Vec<u64> = monitor.log().iter().map(|e| e.timestamp_ms).collect();
    // Newest-first: boundaries at 9000, 6000, 3000
    assert_eq!(stamps, vec![9000, 6000, 3000]);
}

#[test]
fn test_invalid_configs_rejected() {
    let zero_period = MonitorConfig {
        period_ms: 0,
        ..MonitorConfig::default()
    };
    assert_eq!(
        Monitor::new(zero_period).unwrap_err(),
        MonitorError::InvalidConfig("period_ms must be positive".to_string())
    );

    let zero_capacity = MonitorConfig {
        capacity: 0,
        ..MonitorConfig::default()
    };
    assert!(matches!(
        Monitor::new(zero_capacity).unwrap_err(),
        MonitorError::InvalidConfig(_)
    ));

    let no_accounts = MonitorConfig {
        accounts: Vec::new(),
        ..MonitorConfig::default()
    };
    assert!(matches!(
        Monitor::new(no_accounts).unwrap_err(),
        MonitorError::InvalidConfig(_)
    ));

    let blank_account = MonitorConfig {
        accounts: vec!["@ok".to_string(), "  ".to_string()],
        ..MonitorConfig::default()
    };
    assert_eq!(
        Monitor::new(blank_account).unwrap_err(),
        MonitorError::InvalidConfig("blank account handle at index 1".to_string())
    );
}

#[test]
fn test_manual_tick_emits_at_current_instant() {
    let mut monitor = monitor_with_seed(6);
    monitor.advance(1234);
    monitor.tick();

    assert_eq!(monitor.log().len(), 1);
    assert_eq!(monitor.log().latest().unwrap().timestamp_ms, 1234);
    assert_eq!(monitor.total_generated(), 1);
}
