//! # Module: Dataset Accessor
//!
//! ## Responsibility
//! Lookup of comparative measurements keyed by `(face, zone, parameter)`, plus the
//! two aggregate views the charts need (across faces, across zones). Also owns the
//! value-presentation helpers shared by every renderer (percentage scaling, axis
//! labels) and the significance predicate.
//!
//! ## Guarantees
//! - A lookup either returns a record or [`LookupError::MissingMeasurement`]
//! - Aggregates are ordered (faces ascending, zones in display order) and skip
//!   missing entries rather than failing
//! - No lookup panics on any key
//!
//! ## NOT Responsible For
//! - Choosing which triple is active (that belongs to `filter` / `sync`)
//! - Drawing anything (that belongs to `charts` and `tui`)

pub mod explanations;
pub mod significance;
pub mod table;

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::filter::{FaceId, Parameter, Zone};

pub use significance::{Significance, DEFAULT_SIGNIFICANCE_THRESHOLD};
pub use table::{DatasetError, StaticDataset};

/// Unit a measurement is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Unit {
    /// Fraction of time, stored in `[0, 1]` and shown as a percentage.
    #[serde(rename = "%")]
    Percent,
    /// Seconds.
    #[serde(rename = "s")]
    Seconds,
    /// Count of fixations.
    #[serde(rename = "fixations")]
    Fixations,
    /// Count of zone entries.
    #[serde(rename = "entrées")]
    Entries,
}

impl Unit {
    /// Short unit suffix as printed next to values.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Seconds => "s",
            Self::Fixations => "fixations",
            Self::Entries => "entrées",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One of the two compared cohorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Typical development.
    Dt,
    /// Autism spectrum.
    Tsa,
}

impl Group {
    /// Both groups, DT first.
    pub const ALL: [Group; 2] = [Group::Dt, Group::Tsa];

    /// Short label ("DT" / "TSA").
    pub fn label(self) -> &'static str {
        match self {
            Self::Dt => "DT",
            Self::Tsa => "TSA",
        }
    }

    /// Long label used on the bar chart's x-axis.
    pub fn long_label(self) -> &'static str {
        match self {
            Self::Dt => "DT (Développement Typique)",
            Self::Tsa => "TSA (Troubles du Spectre de l'Autisme)",
        }
    }

    /// Series colour as an RGB triple.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Dt => (0x00, 0x9D, 0xC1),
            Self::Tsa => (0xFF, 0x58, 0x52),
        }
    }
}

/// Colour of the cross-group average series.
pub const AVERAGE_RGB: (u8, u8, u8) = (0xF4, 0xD3, 0x5E);

/// A single comparative measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MeasurementRecord {
    /// Value for the DT cohort.
    pub dt: f64,
    /// Value for the TSA cohort.
    pub tsa: f64,
    /// Unit both values are expressed in.
    pub unit: Unit,
    /// p-value of the between-group comparison.
    pub p_value: f64,
}

impl MeasurementRecord {
    /// Raw value for one group.
    pub fn value(&self, group: Group) -> f64 {
        match group {
            Group::Dt => self.dt,
            Group::Tsa => self.tsa,
        }
    }

    /// Value for one group, scaled for display.
    pub fn display_value(&self, group: Group) -> f64 {
        format_value(self.value(group), self.unit)
    }

    /// Mean of the two groups (raw scale).
    pub fn average(&self) -> f64 {
        (self.dt + self.tsa) / 2.0
    }
}

/// The only in-scope failure: no record for the requested triple.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The dataset has no measurement for this key.
    #[error("no measurement for face {face}, zone {zone}, parameter {parameter}")]
    MissingMeasurement {
        /// Requested face.
        face: FaceId,
        /// Requested zone.
        zone: Zone,
        /// Requested parameter.
        parameter: Parameter,
    },
}

/// Read access to the comparative dataset.
///
/// Implementors only provide [`faces`](Self::faces) and [`lookup`](Self::lookup);
/// the aggregate views are derived from them.
pub trait DatasetAccessor {
    /// Faces present in the dataset, ascending.
    fn faces(&self) -> &[FaceId];

    /// Exact lookup of one triple.
    ///
    /// # Errors
    /// Returns [`LookupError::MissingMeasurement`] when no record exists.
    fn lookup(
        &self,
        face: FaceId,
        zone: Zone,
        parameter: Parameter,
    ) -> Result<MeasurementRecord, LookupError>;

    /// Whether `face` is one of the dataset's faces.
    fn has_face(&self, face: FaceId) -> bool {
        self.faces().contains(&face)
    }

    /// The record for `(zone, parameter)` on every face that has one, ordered by face.
    fn lookup_across_faces(&self, zone: Zone, parameter: Parameter) -> Vec<(FaceId, MeasurementRecord)> {
        self.faces()
            .iter()
            .filter_map(|&face| {
                self.lookup(face, zone, parameter)
                    .ok()
                    .map(|record| (face, record))
            })
            .collect()
    }

    /// The record for `(face, parameter)` on every zone that has one, in zone order.
    fn lookup_zone_distribution(
        &self,
        face: FaceId,
        parameter: Parameter,
    ) -> Vec<(Zone, MeasurementRecord)> {
        Zone::ALL
            .into_iter()
            .filter_map(|zone| {
                self.lookup(face, zone, parameter)
                    .ok()
                    .map(|record| (zone, record))
            })
            .collect()
    }
}

/// Scales a stored value for display: fractions become percentages.
pub fn format_value(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Percent => value * 100.0,
        _ => value,
    }
}

/// Descriptive y-axis label for a parameter in a given unit.
pub fn y_axis_label(parameter: Parameter, unit: Unit) -> String {
    let label = parameter.label();
    match unit {
        Unit::Percent => format!("{label} (% du temps)"),
        Unit::Seconds => format!("{label} (secondes)"),
        Unit::Fixations | Unit::Entries => format!("{label} (nombre)"),
    }
}

/// Formats a display value with its unit, e.g. "27.0%" or "3.6 s".
pub fn format_with_unit(value: f64, unit: Unit) -> String {
    format_display(format_value(value, unit), unit)
}

/// Formats a value that has already been through [`format_value`].
pub fn format_display(display: f64, unit: Unit) -> String {
    match unit {
        Unit::Percent => format!("{display:.1}%"),
        Unit::Seconds => format!("{display:.2} s"),
        Unit::Fixations | Unit::Entries => format!("{display:.0} {}", unit.symbol()),
    }
}
