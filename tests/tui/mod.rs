//! Integration tests for the TUI dashboard module.
//!
//! These tests verify cross-module interactions: key events flowing through
//! the synchronizer into app state, log rotation bounds, and full-frame
//! rendering of every panel on an in-memory backend.

#[cfg(feature = "tui")]
mod app_state;
#[cfg(feature = "tui")]
mod log_rotation;
#[cfg(feature = "tui")]
mod widget_tests;

#[cfg(feature = "tui")]
pub(crate) fn app() -> gaze_dashboard::tui::app::App {
    app_with(gaze_dashboard::DashboardConfig::default())
}

#[cfg(feature = "tui")]
pub(crate) fn app_with(config: gaze_dashboard::DashboardConfig) -> gaze_dashboard::tui::app::App {
    let dataset = std::sync::Arc::new(
        gaze_dashboard::StaticDataset::builtin().expect("test: builtin dataset"),
    );
    let sync = gaze_dashboard::build_synchronizer(&config, dataset);
    gaze_dashboard::tui::app::App::new(&config, sync)
}
