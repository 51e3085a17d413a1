//! Integration tests for log entry rotation and bounding.
//!
//! Verifies that the log stays bounded by the configured capacity, newest
//! entries appear at the back, and filter activity produces valid entries.

use gaze_dashboard::tui::app::{LogEntry, LogLevel, LOG_ENTRIES_CAP};
use gaze_dashboard::DashboardConfig;

fn entry(i: usize) -> LogEntry {
    LogEntry {
        timestamp: format!("00:00:{:02}", i % 60),
        level: LogLevel::Info,
        message: format!("msg-{i}"),
        fields: String::new(),
    }
}

#[test]
fn test_log_stays_bounded_under_heavy_filter_activity() {
    let mut app = crate::app();
    for _ in 0..1000 {
        app.cycle_zone(true);
    }
    assert!(
        app.log_entries.len() <= LOG_ENTRIES_CAP,
        "Log entries exceeded cap: {} > {}",
        app.log_entries.len(),
        LOG_ENTRIES_CAP
    );
}

#[test]
fn test_configured_capacity_is_respected() {
    let mut config = DashboardConfig::default();
    config.display.log_capacity = 5;
    let mut app = crate::app_with(config);
    for i in 0..20 {
        app.push_log(entry(i));
    }
    assert_eq!(app.log_entries.len(), 5);
    assert_eq!(
        app.log_entries.front().map(|e| e.message.as_str()),
        Some("msg-15")
    );
}

#[test]
fn test_oldest_evicted_first() {
    let mut app = crate::app();
    app.log_entries.clear();

    for i in 0..LOG_ENTRIES_CAP {
        app.push_log(entry(i));
    }
    assert_eq!(app.log_entries.len(), LOG_ENTRIES_CAP);

    app.push_log(LogEntry {
        timestamp: "new".into(),
        level: LogLevel::Warn,
        message: "newest".into(),
        fields: String::new(),
    });

    assert_eq!(app.log_entries.len(), LOG_ENTRIES_CAP);
    assert_eq!(
        app.log_entries.front().map(|e| e.message.as_str()),
        Some("msg-1")
    );
    assert_eq!(
        app.log_entries.back().map(|e| e.message.as_str()),
        Some("newest")
    );
}

#[test]
fn test_filter_entries_have_timestamps_and_messages() {
    let mut app = crate::app();
    for _ in 0..20 {
        app.cycle_parameter(true);
    }
    for entry in &app.log_entries {
        assert_eq!(entry.timestamp.len(), 8, "timestamp {:?}", entry.timestamp);
        assert!(!entry.message.is_empty());
    }
}

#[test]
fn test_filter_change_entry_carries_filter() {
    let mut app = crate::app();
    app.cycle_zone(true);
    let last = app.log_entries.back().expect("test: entry");
    assert_eq!(last.level, LogLevel::Info);
    assert!(last.fields.contains("zone=tete"), "{}", last.fields);
}

#[test]
fn test_scroll_offset_survives_rotation() {
    let mut app = crate::app();
    for i in 0..LOG_ENTRIES_CAP * 2 {
        app.push_log(entry(i));
    }
    for _ in 0..(LOG_ENTRIES_CAP * 3) {
        app.scroll_log_up();
    }
    assert_eq!(app.log_scroll_offset, LOG_ENTRIES_CAP - 1);
}
