//! # Module: TUI Event Handling
//!
//! ## Responsibility
//! Polls crossterm events and translates keyboard input into app state
//! mutations: filter selection, overlays, log scrolling and mascot sections.
//!
//! ## Guarantees
//! - Non-blocking event polling with configurable timeout
//! - No panics on any key combination
//! - Ctrl+C always triggers quit

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Overlay};
use crate::filter::Zone;

/// Result of polling for a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed quit (q or Ctrl+C).
    Quit,
    /// Esc: closes an overlay, quits otherwise.
    Escape,
    /// Toggle the help overlay.
    Help,
    /// Toggle the parameter explanation overlay.
    Explain,
    /// Select face n (digit keys).
    SelectFace(u8),
    /// Next face.
    NextFace,
    /// Previous face.
    PrevFace,
    /// Select a zone directly.
    SelectZone(Zone),
    /// Next zone.
    NextZone,
    /// Previous zone.
    PrevZone,
    /// Next parameter.
    NextParameter,
    /// Previous parameter.
    PrevParameter,
    /// Restore the configured filters.
    Reset,
    /// User pressed up arrow to scroll log.
    ScrollUp,
    /// User pressed down arrow to scroll log.
    ScrollDown,
    /// Next mascot section.
    MascotNext,
    /// Previous mascot section.
    MascotPrev,
    /// A terminal resize occurred.
    Resize(u16, u16),
    /// No actionable event within the poll window.
    None,
}

/// Polls for a single input event with the given timeout.
///
/// Any crossterm polling error maps to [`InputEvent::None`].
pub fn poll_event(timeout: Duration) -> InputEvent {
    let available = match event::poll(timeout) {
        Ok(v) => v,
        Err(_) => return InputEvent::None,
    };
    if !available {
        return InputEvent::None;
    }

    match event::read() {
        Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => translate_key(key),
        Ok(Event::Resize(w, h)) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Applies an input event to the app state.
pub fn apply_event(app: &mut App, event: InputEvent) {
    match event {
        InputEvent::Quit => app.should_quit = true,
        InputEvent::Escape => {
            if !app.close_overlay() {
                app.should_quit = true;
            }
        }
        InputEvent::Help => app.toggle_overlay(Overlay::Help),
        InputEvent::Explain => app.toggle_overlay(Overlay::Explanation),
        InputEvent::SelectFace(n) => {
            app.select_face(n);
        }
        InputEvent::NextFace => {
            app.cycle_face(true);
        }
        InputEvent::PrevFace => {
            app.cycle_face(false);
        }
        InputEvent::SelectZone(zone) => {
            app.select_zone(zone);
        }
        InputEvent::NextZone => {
            app.cycle_zone(true);
        }
        InputEvent::PrevZone => {
            app.cycle_zone(false);
        }
        InputEvent::NextParameter => {
            app.cycle_parameter(true);
        }
        InputEvent::PrevParameter => {
            app.cycle_parameter(false);
        }
        InputEvent::Reset => app.reset_filters(),
        InputEvent::ScrollUp => app.scroll_log_up(),
        InputEvent::ScrollDown => app.scroll_log_down(),
        InputEvent::MascotNext => app.mascot_section(true),
        InputEvent::MascotPrev => app.mascot_section(false),
        InputEvent::Resize(_, _) | InputEvent::None => {}
    }
}

/// Translates a crossterm key event to an `InputEvent`.
pub fn translate_key(key: KeyEvent) -> InputEvent {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputEvent::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::Quit,
        KeyCode::Esc => InputEvent::Escape,
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => InputEvent::Help,
        KeyCode::Char('i') | KeyCode::Char('I') => InputEvent::Explain,
        KeyCode::Char(c @ '1'..='9') => InputEvent::SelectFace(c as u8 - b'0'),
        KeyCode::Char('f') => InputEvent::NextFace,
        KeyCode::Char('F') => InputEvent::PrevFace,
        KeyCode::Char('z') => InputEvent::NextZone,
        KeyCode::Char('Z') => InputEvent::PrevZone,
        KeyCode::Char('e') | KeyCode::Char('E') => InputEvent::SelectZone(Zone::Ecran),
        KeyCode::Char('t') | KeyCode::Char('T') => InputEvent::SelectZone(Zone::Tete),
        KeyCode::Char('y') | KeyCode::Char('Y') => InputEvent::SelectZone(Zone::Yeux),
        KeyCode::Char('b') | KeyCode::Char('B') => InputEvent::SelectZone(Zone::Bouche),
        KeyCode::Char('p') => InputEvent::NextParameter,
        KeyCode::Char('P') => InputEvent::PrevParameter,
        KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::Reset,
        KeyCode::Char('n') | KeyCode::PageDown => InputEvent::MascotNext,
        KeyCode::Char('N') | KeyCode::PageUp => InputEvent::MascotPrev,
        KeyCode::Up => InputEvent::ScrollUp,
        KeyCode::Down => InputEvent::ScrollDown,
        _ => InputEvent::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dataset::StaticDataset;
    use crate::filter::{FaceId, Parameter};
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let config = DashboardConfig::default();
        let ds = Arc::new(StaticDataset::builtin().expect("test: builtin dataset"));
        let sync = crate::build_synchronizer(&config, ds);
        App::new(&config, sync)
    }

    #[test]
    fn test_translate_key_q_quits() {
        assert_eq!(translate_key(key(KeyCode::Char('q'))), InputEvent::Quit);
        assert_eq!(translate_key(key(KeyCode::Char('Q'))), InputEvent::Quit);
    }

    #[test]
    fn test_translate_key_ctrl_c_quits() {
        let k = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate_key(k), InputEvent::Quit);
    }

    #[test]
    fn test_translate_key_esc_is_escape() {
        assert_eq!(translate_key(key(KeyCode::Esc)), InputEvent::Escape);
    }

    #[test]
    fn test_translate_key_digits_select_face() {
        assert_eq!(translate_key(key(KeyCode::Char('1'))), InputEvent::SelectFace(1));
        assert_eq!(translate_key(key(KeyCode::Char('9'))), InputEvent::SelectFace(9));
        assert_eq!(translate_key(key(KeyCode::Char('0'))), InputEvent::None);
    }

    #[test]
    fn test_translate_key_case_selects_direction() {
        assert_eq!(translate_key(key(KeyCode::Char('f'))), InputEvent::NextFace);
        assert_eq!(translate_key(key(KeyCode::Char('F'))), InputEvent::PrevFace);
        assert_eq!(translate_key(key(KeyCode::Char('z'))), InputEvent::NextZone);
        assert_eq!(translate_key(key(KeyCode::Char('Z'))), InputEvent::PrevZone);
        assert_eq!(translate_key(key(KeyCode::Char('p'))), InputEvent::NextParameter);
        assert_eq!(translate_key(key(KeyCode::Char('P'))), InputEvent::PrevParameter);
    }

    #[test]
    fn test_translate_key_zone_shortcuts() {
        assert_eq!(
            translate_key(key(KeyCode::Char('e'))),
            InputEvent::SelectZone(Zone::Ecran)
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('t'))),
            InputEvent::SelectZone(Zone::Tete)
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('y'))),
            InputEvent::SelectZone(Zone::Yeux)
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('b'))),
            InputEvent::SelectZone(Zone::Bouche)
        );
    }

    #[test]
    fn test_translate_key_mascot_navigation() {
        assert_eq!(translate_key(key(KeyCode::PageDown)), InputEvent::MascotNext);
        assert_eq!(translate_key(key(KeyCode::Char('n'))), InputEvent::MascotNext);
        assert_eq!(translate_key(key(KeyCode::PageUp)), InputEvent::MascotPrev);
    }

    #[test]
    fn test_translate_key_scroll() {
        assert_eq!(translate_key(key(KeyCode::Up)), InputEvent::ScrollUp);
        assert_eq!(translate_key(key(KeyCode::Down)), InputEvent::ScrollDown);
    }

    #[test]
    fn test_translate_key_unknown_returns_none() {
        assert_eq!(translate_key(key(KeyCode::Char('x'))), InputEvent::None);
    }

    #[test]
    fn test_apply_event_escape_closes_overlay_first() {
        let mut app = app();
        apply_event(&mut app, InputEvent::Help);
        apply_event(&mut app, InputEvent::Escape);
        assert!(app.overlay.is_none());
        assert!(!app.should_quit);
        apply_event(&mut app, InputEvent::Escape);
        assert!(app.should_quit);
    }

    #[test]
    fn test_apply_event_select_face_and_zone() {
        let mut app = app();
        apply_event(&mut app, InputEvent::SelectFace(2));
        apply_event(&mut app, InputEvent::SelectZone(Zone::Yeux));
        assert_eq!(app.filter().face, FaceId(2));
        assert_eq!(app.filter().zone, Zone::Yeux);
    }

    #[test]
    fn test_apply_event_unknown_face_is_ignored() {
        let mut app = app();
        let passes = app.sync.render_passes();
        apply_event(&mut app, InputEvent::SelectFace(7));
        assert_eq!(app.filter().face, FaceId(1));
        assert_eq!(app.sync.render_passes(), passes);
    }

    #[test]
    fn test_apply_event_parameter_cycle_round_trip() {
        let mut app = app();
        apply_event(&mut app, InputEvent::NextParameter);
        apply_event(&mut app, InputEvent::PrevParameter);
        assert_eq!(app.filter().parameter, Parameter::Tf);
    }

    #[test]
    fn test_apply_event_explain_toggles() {
        let mut app = app();
        apply_event(&mut app, InputEvent::Explain);
        assert_eq!(app.overlay, Some(Overlay::Explanation));
        apply_event(&mut app, InputEvent::Explain);
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_apply_event_resize_is_noop() {
        let mut app = app();
        let passes = app.sync.render_passes();
        apply_event(&mut app, InputEvent::Resize(200, 60));
        assert!(!app.should_quit);
        assert_eq!(app.sync.render_passes(), passes);
    }

    #[test]
    fn test_apply_event_scroll_down_at_zero() {
        let mut app = app();
        apply_event(&mut app, InputEvent::ScrollDown);
        assert_eq!(app.log_scroll_offset, 0);
    }
}
