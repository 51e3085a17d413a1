//! Full-frame rendering tests on an in-memory backend.
//!
//! Draws the whole dashboard at several sizes and filter states and checks
//! the buffer for the text each panel is expected to show.

use gaze_dashboard::tui::app::{App, Overlay, MIN_COLS, MIN_ROWS};
use gaze_dashboard::tui::events::{apply_event, InputEvent};
use gaze_dashboard::tui::ui;
use gaze_dashboard::tui::widgets::{fill_bar, log::truncate_with_ellipsis};
use gaze_dashboard::{Parameter, Zone};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test: terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("test: draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_dashboard_renders_every_panel_title() {
    let app = crate::app();
    let screen = render(&app, 160, 50);
    for needle in [
        "Filtres",
        "Professeur Bluestein",
        "Rapidité de Réaction",
        "Temps d'Attention par Zone",
        "Engagement Comparé",
        "Analyse Combinée",
        "Répartition DT",
        "JOURNAL",
    ] {
        assert!(screen.contains(needle), "missing {needle:?}");
    }
}

#[test]
fn test_minimum_size_renders_without_panic() {
    let app = crate::app();
    let screen = render(&app, MIN_COLS, MIN_ROWS);
    assert!(screen.contains("Filtres"));
}

#[test]
fn test_too_small_terminal_shows_warning() {
    let app = crate::app();
    let screen = render(&app, 80, 24);
    assert!(screen.contains("Terminal trop petit"));
}

#[test]
fn test_missing_measurement_shows_placeholder() {
    let mut app = crate::app();
    assert!(app.select_parameter(Parameter::Ttt));
    assert!(app.select_zone(Zone::Yeux));
    let screen = render(&app, 160, 50);
    assert!(screen.contains("Aucune donnée"));
}

#[test]
fn test_help_overlay_is_drawn() {
    let mut app = crate::app();
    apply_event(&mut app, InputEvent::Help);
    let screen = render(&app, 160, 50);
    assert!(screen.contains("Aide"));
    assert!(screen.contains("Réinitialiser les filtres"));
}

#[test]
fn test_explanation_overlay_names_active_parameter() {
    let mut app = crate::app();
    app.toggle_overlay(Overlay::Explanation);
    let screen = render(&app, 160, 50);
    assert!(screen.contains("Temps de Fixation (TF)"));
    assert!(screen.contains("Définition"));
}

#[test]
fn test_every_filter_combination_renders() {
    let mut app = crate::app();
    for face in 1..=3u8 {
        app.select_face(face);
        for zone in Zone::ALL {
            app.select_zone(zone);
            for parameter in Parameter::ALL {
                app.select_parameter(parameter);
                let screen = render(&app, MIN_COLS, MIN_ROWS);
                assert!(!screen.is_empty());
            }
        }
    }
}

#[test]
fn test_fill_bar_widths_match() {
    for ratio in [0.0, 0.25, 0.5, 0.85, 1.0] {
        assert_eq!(fill_bar(ratio, 12).chars().count(), 12);
    }
}

#[test]
fn test_truncate_keeps_accents_intact() {
    let out = truncate_with_ellipsis("Répartition DT - Visage 1", 12);
    assert_eq!(out.chars().count(), 12);
    assert!(out.starts_with("Répartition"));
}
