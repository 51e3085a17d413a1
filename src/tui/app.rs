//! # Module: TUI App State
//!
//! ## Responsibility
//! Owns the synchronizer, the mascot, the overlays and the log tail. Every key
//! press lands here as a method call; widgets only read.
//!
//! ## Guarantees
//! - The log tail is bounded and never grows past its capacity
//! - Rejected filter values leave the filter untouched and are logged at WARN
//! - No method panics

use std::collections::VecDeque;
use std::time::Duration;

use crate::charts::Artifact;
use crate::config::DashboardConfig;
use crate::filter::{FaceId, FilterField, FilterState, Parameter, Zone};
use crate::mascot::Mascot;
use crate::sync::Synchronizer;

/// Default number of log entries retained for display.
pub const LOG_ENTRIES_CAP: usize = 50;

/// Minimum terminal width for the dashboard to render.
pub const MIN_COLS: u16 = 100;

/// Minimum terminal height for the dashboard to render.
pub const MIN_ROWS: u16 = 40;

/// Modal panel drawn over the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Key bindings.
    Help,
    /// Definition of the active parameter.
    Explanation,
}

/// Primary application state for the TUI dashboard.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Visible overlay, if any.
    pub overlay: Option<Overlay>,
    /// Monotonic tick counter.
    pub tick_count: u64,
    /// Header title.
    pub title: String,
    /// Filter state and rendered artifacts.
    pub sync: Synchronizer,
    /// Guide character, absent when disabled.
    pub mascot: Option<Mascot>,
    /// Target of a filter reset.
    pub defaults: FilterState,
    /// Rolling log entries, newest at the back.
    pub log_entries: VecDeque<LogEntry>,
    /// Maximum number of log entries kept.
    pub log_capacity: usize,
    /// How many entries the log view is scrolled back from the newest.
    pub log_scroll_offset: usize,
    /// Redraw interval.
    pub tick_rate: Duration,
}

/// A single log entry for the log tail widget.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Formatted timestamp string, e.g. "14:32:01".
    pub timestamp: String,
    /// Severity level.
    pub level: LogLevel,
    /// Primary log message.
    pub message: String,
    /// Structured fields as a formatted string.
    pub fields: String,
}

impl LogEntry {
    /// An entry stamped with the local wall-clock time.
    pub fn now(level: LogLevel, message: impl Into<String>, fields: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            level,
            message: message.into(),
            fields: fields.into(),
        }
    }
}

/// Log severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message.
    Info,
    /// Warning condition.
    Warn,
    /// Error condition.
    Error,
    /// Debug-level message.
    Debug,
}

impl LogLevel {
    /// Returns the display label for this log level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
        }
    }
}

impl App {
    /// Creates the app around an already-rendered synchronizer.
    pub fn new(config: &DashboardConfig, sync: Synchronizer) -> Self {
        let mascot = config
            .mascot
            .enabled
            .then(|| Mascot::new(config.mascot.page, config.mascot.intro_delay()));
        let capacity = config.display.log_capacity.max(1);
        let mut app = Self {
            should_quit: false,
            overlay: None,
            tick_count: 0,
            title: config.dashboard.title.clone(),
            defaults: config.initial_filter(),
            sync,
            mascot,
            log_entries: VecDeque::with_capacity(capacity),
            log_capacity: capacity,
            log_scroll_offset: 0,
            tick_rate: config.display.tick_rate(),
        };
        let filter = app.sync.filter().to_string();
        app.push_log(LogEntry::now(LogLevel::Info, "dashboard ready", filter));
        app
    }

    /// The active filter.
    pub fn filter(&self) -> &FilterState {
        self.sync.filter()
    }

    /// The live artifact of renderer `name`.
    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.sync.artifact(name)
    }

    /// Forwards a raw control value to the synchronizer and logs the outcome.
    pub fn set_filter(&mut self, field: FilterField, raw: &str) -> bool {
        let accepted = self.sync.set_filter(field, raw);
        if accepted {
            let filter = self.sync.filter().to_string();
            self.push_log(LogEntry::now(LogLevel::Info, "filter changed", filter));
        } else {
            self.push_log(LogEntry::now(
                LogLevel::Warn,
                "value ignored",
                format!("{field}={raw}"),
            ));
        }
        accepted
    }

    /// Selects face `n` (1-based).
    pub fn select_face(&mut self, n: u8) -> bool {
        self.set_filter(FilterField::Face, &n.to_string())
    }

    /// Moves to the next or previous face in the dataset, wrapping around.
    pub fn cycle_face(&mut self, forward: bool) -> bool {
        let faces: Vec<FaceId> = self.sync.dataset().faces().to_vec();
        if faces.is_empty() {
            return false;
        }
        let current = faces
            .iter()
            .position(|f| *f == self.filter().face)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % faces.len()
        } else {
            (current + faces.len() - 1) % faces.len()
        };
        self.select_face(faces[next].get())
    }

    /// Selects `zone`.
    pub fn select_zone(&mut self, zone: Zone) -> bool {
        self.set_filter(FilterField::Zone, zone.key())
    }

    /// Moves to the next or previous zone, wrapping around.
    pub fn cycle_zone(&mut self, forward: bool) -> bool {
        let zone = self.filter().zone;
        self.select_zone(if forward { zone.next() } else { zone.prev() })
    }

    /// Selects `parameter`.
    pub fn select_parameter(&mut self, parameter: Parameter) -> bool {
        self.set_filter(FilterField::Parameter, parameter.key())
    }

    /// Moves to the next or previous parameter, wrapping around.
    pub fn cycle_parameter(&mut self, forward: bool) -> bool {
        let p = self.filter().parameter;
        self.select_parameter(if forward { p.next() } else { p.prev() })
    }

    /// Restores the configured initial filter.
    pub fn reset_filters(&mut self) {
        if self.sync.reset(self.defaults) {
            let filter = self.sync.filter().to_string();
            self.push_log(LogEntry::now(LogLevel::Info, "filters reset", filter));
        } else {
            let face = self.defaults.face.to_string();
            self.push_log(LogEntry::now(
                LogLevel::Warn,
                "reset ignored",
                format!("face={face} not in dataset"),
            ));
        }
    }

    /// Shows or hides `overlay`.
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == Some(overlay) {
            None
        } else {
            Some(overlay)
        };
    }

    /// Closes the visible overlay. Returns whether one was open.
    pub fn close_overlay(&mut self) -> bool {
        self.overlay.take().is_some()
    }

    /// Moves the mascot to the next or previous section of its script.
    pub fn mascot_section(&mut self, forward: bool) {
        let Some(mascot) = self.mascot.as_mut() else {
            return;
        };
        let moved = if forward {
            mascot.next_section()
        } else {
            mascot.prev_section()
        };
        if moved {
            let cursor = mascot.cursor();
            self.push_log(LogEntry::now(
                LogLevel::Debug,
                "mascot section",
                format!("index={cursor}"),
            ));
        }
    }

    /// Advances time by `dt`.
    pub fn on_tick(&mut self, dt: Duration) {
        self.tick_count += 1;
        if let Some(mascot) = self.mascot.as_mut() {
            mascot.advance(dt);
        }
    }

    /// Pushes a log entry, evicting the oldest if at capacity.
    pub fn push_log(&mut self, entry: LogEntry) {
        while self.log_entries.len() >= self.log_capacity {
            self.log_entries.pop_front();
        }
        self.log_entries.push_back(entry);
    }

    /// Scrolls the log one entry towards older entries.
    pub fn scroll_log_up(&mut self) {
        let max = self.log_entries.len().saturating_sub(1);
        self.log_scroll_offset = (self.log_scroll_offset + 1).min(max);
    }

    /// Scrolls the log one entry towards the newest entry.
    pub fn scroll_log_down(&mut self) {
        self.log_scroll_offset = self.log_scroll_offset.saturating_sub(1);
    }
}
