//! Configuration validation.
//!
//! ## Responsibility
//! Range checks on a parsed [`DashboardConfig`] that serde cannot express.
//!
//! ## Guarantees
//! - Every validation rule has at least one test that triggers it
//! - Validation collects *all* errors before returning (no short-circuit)
//! - Error messages include the field path and the invalid value
//!
//! ## NOT Responsible For
//! - Parsing TOML (that belongs to `loader`)
//! - Checking the initial face against the loaded dataset

use super::DashboardConfig;

/// Longest accepted refresh period.
const MAX_TICK_RATE_MS: u64 = 10_000;
/// Longest accepted mascot intro delay.
const MAX_INTRO_DELAY_MS: u64 = 60_000;

/// Errors arising from configuration parsing, validation, or I/O.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parsing failed.
    #[error("Parse error in {file}: {source}")]
    Parse {
        /// Path of the file that failed to parse.
        file: String,
        /// Underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// One or more validation rules failed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A specific field has an out-of-range value.
    #[error("Field '{field}' has invalid value {value}: {reason}")]
    InvalidField {
        /// Dot-separated field path (e.g., "significance.threshold").
        field: String,
        /// String representation of the invalid value.
        value: String,
        /// Human-readable explanation of the constraint.
        reason: String,
    },

    /// File I/O error.
    #[error("IO error reading {file}: {source}")]
    Io {
        /// Path of the file that could not be read.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Validate every constraint on a [`DashboardConfig`].
///
/// # Errors
///
/// Returns every violation found.
pub fn validate(config: &DashboardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // ── Filters ──────────────────────────────────────────────────────
    if config.filters.face.get() == 0 {
        errors.push(ConfigError::InvalidField {
            field: "filters.face".into(),
            value: "0".into(),
            reason: "faces are numbered from 1".into(),
        });
    }

    // ── Significance ─────────────────────────────────────────────────
    let threshold = config.significance.threshold;
    if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
        errors.push(ConfigError::InvalidField {
            field: "significance.threshold".into(),
            value: threshold.to_string(),
            reason: "must be in (0.0, 1.0]".into(),
        });
    }

    // ── Display ──────────────────────────────────────────────────────
    if config.display.tick_rate_ms == 0 || config.display.tick_rate_ms > MAX_TICK_RATE_MS {
        errors.push(ConfigError::InvalidField {
            field: "display.tick_rate_ms".into(),
            value: config.display.tick_rate_ms.to_string(),
            reason: format!("must be between 1 and {MAX_TICK_RATE_MS}"),
        });
    }

    if config.display.log_capacity == 0 {
        errors.push(ConfigError::InvalidField {
            field: "display.log_capacity".into(),
            value: "0".into(),
            reason: "log tail must hold at least 1 entry".into(),
        });
    }

    // ── Mascot ───────────────────────────────────────────────────────
    if config.mascot.intro_delay_ms > MAX_INTRO_DELAY_MS {
        errors.push(ConfigError::InvalidField {
            field: "mascot.intro_delay_ms".into(),
            value: config.mascot.intro_delay_ms.to_string(),
            reason: format!("must be at most {MAX_INTRO_DELAY_MS}"),
        });
    }

    // ── Dashboard title ──────────────────────────────────────────────
    if config.dashboard.title.trim().is_empty() {
        errors.push(ConfigError::InvalidField {
            field: "dashboard.title".into(),
            value: String::new(),
            reason: "title must not be empty".into(),
        });
    }

    // ── Dataset path ─────────────────────────────────────────────────
    if let Some(path) = &config.dataset.path {
        if path.as_os_str().is_empty() {
            errors.push(ConfigError::InvalidField {
                field: "dataset.path".into(),
                value: String::new(),
                reason: "omit the key to use the built-in dataset".into(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
