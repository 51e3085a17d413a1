//! # gaze-dashboard
//!
//! Interactive comparison of eye-tracking measurements between typically
//! developing children (DT) and children with autism spectrum disorder (TSA).
//!
//! ## Architecture
//!
//! One filter state, many views:
//! ```text
//! key press → FilterUpdate → Synchronizer ─┬─ dispose all ─┬─ BarRenderer
//!                                          │               ├─ LineRenderer
//!                 DatasetAccessor ─────────┴─ render all ──┼─ ...
//!                                                          └─ HighlightRenderer
//! ```
//! Artifacts are plain chart models; the `tui` feature draws them with
//! ratatui and `report` prints them.

// ── Lint policy ───────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(missing_docs)]

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub mod charts;
pub mod config;
pub mod dataset;
pub mod filter;
pub mod mascot;
pub mod report;
pub mod sync;

#[cfg(feature = "tui")]
pub mod tui;

pub use charts::{default_renderers, Artifact, ArtifactId};
pub use config::DashboardConfig;
pub use dataset::{DatasetAccessor, MeasurementRecord, Significance, StaticDataset};
pub use filter::{FaceId, FilterField, FilterState, FilterUpdate, Parameter, Zone};
pub use sync::{RenderContext, Renderer, Synchronizer};

/// Initialise the global tracing subscriber.
///
/// Reads the `LOG_FORMAT` environment variable to choose output format:
/// - `"json"` for one JSON object per event
/// - anything else (including unset) for human-readable pretty output
///
/// Filter level is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).
///
/// # Errors
///
/// Returns [`DashboardError::Other`] if the global subscriber has already
/// been set (e.g. by a previous call or a test harness).
///
/// # Example
///
/// ```no_run
/// # use gaze_dashboard::{init_tracing, DashboardError};
/// # fn example() -> Result<(), DashboardError> {
/// init_tracing()?;
/// # Ok(()) }
/// ```
pub fn init_tracing() -> Result<(), DashboardError> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    init_tracing_with_format(&format)
}

/// Like [`init_tracing`], with the format given explicitly (`"json"` or
/// anything else for pretty).
///
/// # Errors
///
/// Returns [`DashboardError::Other`] if a global subscriber is already set.
pub fn init_tracing_with_format(format: &str) -> Result<(), DashboardError> {
    let result = match format {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| DashboardError::Other(format!("tracing init failed: {e}")))
}

/// Top-level dashboard errors.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] config::validation::ConfigError),

    /// The measurement table could not be loaded.
    #[error(transparent)]
    Dataset(#[from] dataset::DatasetError),

    /// Terminal or stdout I/O failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for errors that do not fit a specific variant.
    #[error("{0}")]
    Other(String),
}

/// Loads the dataset named by `config`, or the built-in one.
///
/// # Errors
///
/// Returns [`DashboardError::Dataset`] when the file is unreadable or invalid.
pub fn load_dataset(config: &DashboardConfig) -> Result<StaticDataset, DashboardError> {
    let dataset = match &config.dataset.path {
        Some(path) => StaticDataset::from_file(path)?,
        None => StaticDataset::builtin()?,
    };
    Ok(dataset)
}

/// Builds a synchronizer over `dataset` with every default renderer
/// registered and one render pass done.
pub fn build_synchronizer(
    config: &DashboardConfig,
    dataset: std::sync::Arc<dyn DatasetAccessor>,
) -> Synchronizer {
    let mut sync = Synchronizer::new(
        dataset,
        config.initial_filter(),
        Significance::new(config.significance.threshold),
    );
    for renderer in default_renderers() {
        sync.register_renderer(renderer);
    }
    sync.render();
    sync
}
