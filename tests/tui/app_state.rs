//! Integration tests for App state transitions driven by key events.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gaze_dashboard::charts::Artifact;
use gaze_dashboard::mascot::{Mouth, Page};
use gaze_dashboard::tui::app::{LogLevel, Overlay};
use gaze_dashboard::tui::events::{apply_event, translate_key, InputEvent};
use gaze_dashboard::{DashboardConfig, FaceId, Parameter, Zone};

fn press(app: &mut gaze_dashboard::tui::app::App, c: char) {
    let event = translate_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    apply_event(app, event);
}

#[test]
fn test_initial_render_fills_every_panel() {
    let app = crate::app();
    assert_eq!(app.sync.renderer_count(), 8);
    assert_eq!(app.sync.live_artifacts(), 8);
    assert!(!app.should_quit);
    assert!(app.overlay.is_none());
}

#[test]
fn test_key_sequence_reaches_final_filter() {
    let mut app = crate::app();
    press(&mut app, 'y');
    press(&mut app, 'p'); // tf -> nbf
    press(&mut app, 'P'); // back to tf
    press(&mut app, '1');

    assert_eq!(app.filter().face, FaceId(1));
    assert_eq!(app.filter().zone, Zone::Yeux);
    assert_eq!(app.filter().parameter, Parameter::Tf);

    match app.artifact("bar") {
        Some(Artifact::Bar(chart)) => {
            assert!(chart.title.contains("Yeux"), "{}", chart.title);
            assert!(chart.is_significant());
        }
        other => panic!("expected bar chart, got {other:?}"),
    }
    match app.artifact("highlight") {
        Some(Artifact::ZoneHighlight(h)) => assert_eq!(h.zone, Zone::Yeux),
        other => panic!("expected highlight, got {other:?}"),
    }
}

#[test]
fn test_ttt_off_screen_empties_exact_views_only() {
    let mut app = crate::app();
    assert!(app.select_parameter(Parameter::Ttt));
    press(&mut app, 'b');

    assert!(app.artifact("bar").is_none());
    assert!(app.artifact("silhouette").is_none());
    assert!(app.artifact("highlight").is_some());
    assert!(app.artifact("attention").is_some());
}

#[test]
fn test_rejected_face_logs_warning_and_keeps_state() {
    let mut app = crate::app();
    let passes = app.sync.render_passes();
    press(&mut app, '9');

    assert_eq!(app.filter().face, FaceId(1));
    assert_eq!(app.sync.render_passes(), passes);
    let last = app.log_entries.back().expect("test: log entry");
    assert_eq!(last.level, LogLevel::Warn);
    assert!(last.fields.contains("face=9"), "{}", last.fields);
}

#[test]
fn test_reset_restores_configured_filter() {
    let mut config = DashboardConfig::default();
    config.filters.zone = Zone::Bouche;
    config.filters.parameter = Parameter::Nbe;
    let mut app = crate::app_with(config);

    press(&mut app, 'f');
    press(&mut app, 'y');
    press(&mut app, 'p');
    press(&mut app, 'r');

    assert_eq!(app.filter().face, FaceId(1));
    assert_eq!(app.filter().zone, Zone::Bouche);
    assert_eq!(app.filter().parameter, Parameter::Nbe);
}

#[test]
fn test_overlays_toggle_and_escape() {
    let mut app = crate::app();
    press(&mut app, 'h');
    assert_eq!(app.overlay, Some(Overlay::Help));
    press(&mut app, 'i');
    assert_eq!(app.overlay, Some(Overlay::Explanation));
    apply_event(&mut app, InputEvent::Escape);
    assert!(app.overlay.is_none());
    assert!(!app.should_quit);
}

#[test]
fn test_quit_key() {
    let mut app = crate::app();
    press(&mut app, 'q');
    assert!(app.should_quit);
}

#[test]
fn test_mascot_speaks_after_intro_and_animates() {
    let mut config = DashboardConfig::default();
    config.mascot.page = Page::Index;
    config.mascot.intro_delay_ms = 100;
    let mut app = crate::app_with(config);

    app.on_tick(Duration::from_millis(50));
    let mascot = app.mascot.as_ref().expect("test: mascot enabled");
    assert!(mascot.bubble().is_none());

    // intro at 100ms, bubble at 400ms
    app.on_tick(Duration::from_millis(360));
    let mascot = app.mascot.as_ref().expect("test: mascot enabled");
    assert!(mascot.bubble().is_some());
    assert_eq!(mascot.spoken(), 1);
    assert!(mascot.is_talking());

    app.on_tick(Duration::from_secs(5));
    let mascot = app.mascot.as_ref().expect("test: mascot enabled");
    assert!(!mascot.is_talking());
    assert_eq!(mascot.mouth(), Mouth::Closed);
}

#[test]
fn test_mascot_section_keys_move_cursor() {
    let mut app = crate::app();
    press(&mut app, 'n');
    press(&mut app, 'n');
    assert_eq!(app.mascot.as_ref().map(|m| m.cursor()), Some(2));
    press(&mut app, 'N');
    assert_eq!(app.mascot.as_ref().map(|m| m.cursor()), Some(1));
}

#[test]
fn test_tick_count_advances() {
    let mut app = crate::app();
    for _ in 0..10 {
        app.on_tick(Duration::from_millis(100));
    }
    assert_eq!(app.tick_count, 10);
}
