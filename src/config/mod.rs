//! # Module: Dashboard Configuration
//!
//! ## Responsibility
//! Parse and validate the TOML file that tunes the dashboard: initial
//! filters, significance threshold, refresh rate, mascot behaviour, dataset
//! location and log format.
//! ```text
//! gaze-dashboard --config dashboard.toml
//! ```
//!
//! ## Guarantees
//! - Deterministic: same TOML input always produces the same `DashboardConfig`
//! - Every section is optional; an empty file yields [`DashboardConfig::default`]
//! - Validated: range checks run before a config is accepted
//! - Schema-exportable: JSON Schema output enables IDE autocomplete
//!
//! ## NOT Responsible For
//! - Loading the dataset itself (that belongs to `dataset`)
//! - Checking the initial face against the dataset (the synchronizer does)

pub mod loader;
pub mod validation;

use std::path::PathBuf;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dataset::DEFAULT_SIGNIFICANCE_THRESHOLD;
use crate::filter::{FaceId, FilterState, Parameter, Zone};
use crate::mascot::Page;

// ── Default value functions ──────────────────────────────────────────────

fn default_title() -> String {
    "Regards d'enfants : DT vs TSA".to_string()
}

fn default_face() -> FaceId {
    FaceId(1)
}

fn default_zone() -> Zone {
    Zone::Ecran
}

fn default_parameter() -> Parameter {
    Parameter::Tf
}

fn default_threshold() -> f64 {
    DEFAULT_SIGNIFICANCE_THRESHOLD
}

/// Default TUI refresh period: 100ms.
fn default_tick_rate_ms() -> u64 {
    100
}

/// Default log tail capacity: 50 entries.
fn default_log_capacity() -> usize {
    50
}

/// Default mascot intro delay: 2000ms.
fn default_intro_delay_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

// ── Top-level config ─────────────────────────────────────────────────────

/// Root configuration of the dashboard.
///
/// # Example
///
/// ```toml
/// [filters]
/// face = 2
/// zone = "yeux"
/// parameter = "tp"
///
/// [significance]
/// threshold = 0.01
///
/// [mascot]
/// page = "soutenance"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Title bar settings.
    pub dashboard: DashboardSection,
    /// Initial filter selection, also the target of a reset.
    pub filters: FiltersConfig,
    /// Statistical significance settings.
    pub significance: SignificanceConfig,
    /// Terminal refresh and log tail settings.
    pub display: DisplayConfig,
    /// Guide character settings.
    pub mascot: MascotConfig,
    /// Where measurements come from.
    pub dataset: DatasetConfig,
    /// Logging.
    pub observability: ObservabilityConfig,
}

impl DashboardConfig {
    /// The configured initial filter.
    pub fn initial_filter(&self) -> FilterState {
        FilterState {
            face: self.filters.face,
            zone: self.filters.zone,
            parameter: self.filters.parameter,
        }
    }
}

/// Title bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct DashboardSection {
    /// Title shown in the header.
    pub title: String,
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Initial filter selection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FiltersConfig {
    /// Face stimulus, 1-based.
    #[serde(default = "default_face")]
    pub face: FaceId,
    /// Zone of interest.
    #[serde(default = "default_zone")]
    pub zone: Zone,
    /// Gaze metric.
    #[serde(default = "default_parameter")]
    pub parameter: Parameter,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            face: default_face(),
            zone: default_zone(),
            parameter: default_parameter(),
        }
    }
}

/// Statistical significance settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SignificanceConfig {
    /// A p-value strictly below this is significant.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

/// Terminal refresh and log tail settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DisplayConfig {
    /// Event poll timeout and redraw period in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Maximum number of entries kept in the log tail.
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

impl DisplayConfig {
    /// Tick rate as a [`Duration`].
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            log_capacity: default_log_capacity(),
        }
    }
}

/// Guide character settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MascotConfig {
    /// Whether the mascot panel is shown.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Script to follow.
    #[serde(default)]
    pub page: Page,
    /// Delay before the first message, in milliseconds.
    #[serde(default = "default_intro_delay_ms")]
    pub intro_delay_ms: u64,
}

impl MascotConfig {
    /// Intro delay as a [`Duration`].
    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }
}

impl Default for MascotConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            page: Page::default(),
            intro_delay_ms: default_intro_delay_ms(),
        }
    }
}

/// Where measurements come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DatasetConfig {
    /// TOML measurement table. `None` uses the built-in study data.
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ObservabilityConfig {
    /// Output format of report-mode logs. `None` defers to `LOG_FORMAT`.
    pub log_format: Option<LogFormat>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// The `LOG_FORMAT` value selecting this format.
    pub fn as_env_value(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

/// Export the JSON Schema of [`DashboardConfig`] as a pretty-printed string.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialization fails, which does not
/// happen for the derived schema.
pub fn export_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(DashboardConfig);
    serde_json::to_string_pretty(&schema)
}
