//! # Module: Filter State
//!
//! ## Responsibility
//! Defines the enumerated filter domains (face, zone, parameter) and the single
//! [`FilterState`] record that every renderer reads. Parsing from the raw strings
//! used by the control surface lives here so that an invalid value can never
//! reach a renderer.
//!
//! ## Guarantees
//! - A `FilterState` only ever holds values from the enumerated domains
//! - Parsing is case-insensitive and never panics
//! - Cycling helpers (`next`/`prev`) wrap around and stay in-domain
//!
//! ## NOT Responsible For
//! - Knowing which faces exist (that belongs to the dataset)
//! - Triggering re-renders (that belongs to `sync`)

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Error returned when a raw control-surface value is outside a field's domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {field}")]
pub struct ParseFilterError {
    /// Field the value was meant for.
    pub field: FilterField,
    /// The rejected raw value.
    pub value: String,
}

/// Identifier of a face stimulus (1-based, as shown on the face cards).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct FaceId(pub u8);

impl FaceId {
    /// Returns the raw face number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Display label used on chart axes, e.g. "Visage 2".
    pub fn label(self) -> String {
        format!("Visage {}", self.0)
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FaceId {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(n) if n >= 1 => Ok(FaceId(n)),
            _ => Err(ParseFilterError {
                field: FilterField::Face,
                value: s.to_string(),
            }),
        }
    }
}

/// Region of interest on the face stimulus.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// The whole screen.
    Ecran,
    /// The head.
    Tete,
    /// The eyes.
    Yeux,
    /// The mouth.
    Bouche,
}

impl Zone {
    /// Every zone, in display order.
    pub const ALL: [Zone; 4] = [Zone::Ecran, Zone::Tete, Zone::Yeux, Zone::Bouche];

    /// Key used by the control surface and the dataset file.
    pub fn key(self) -> &'static str {
        match self {
            Self::Ecran => "ecran",
            Self::Tete => "tete",
            Self::Yeux => "yeux",
            Self::Bouche => "bouche",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ecran => "Écran",
            Self::Tete => "Tête",
            Self::Yeux => "Yeux",
            Self::Bouche => "Bouche",
        }
    }

    /// Hex colour of the zone overlay and pie slice.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Ecran => "#3D5A80",
            Self::Tete => "#98C1D9",
            Self::Yeux => "#009DC1",
            Self::Bouche => "#EE6C4D",
        }
    }

    /// The zone after this one, wrapping around.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// The zone before this one, wrapping around.
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Zone {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|z| z.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseFilterError {
                field: FilterField::Zone,
                value: s.to_string(),
            })
    }
}

/// Gaze-tracking metric.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    /// Total tracked time over the whole experiment.
    Ttt,
    /// Time spent on a zone.
    Tp,
    /// Cumulative fixation time on a zone.
    Tf,
    /// Number of fixations on a zone.
    Nbf,
    /// Number of entries into a zone.
    Nbe,
    /// Delay before the first fixation on a zone.
    Latence,
}

impl Parameter {
    /// Every parameter, in selector order.
    pub const ALL: [Parameter; 6] = [
        Parameter::Ttt,
        Parameter::Tp,
        Parameter::Tf,
        Parameter::Nbf,
        Parameter::Nbe,
        Parameter::Latence,
    ];

    /// Key used by the control surface and the dataset file.
    pub fn key(self) -> &'static str {
        match self {
            Self::Ttt => "ttt",
            Self::Tp => "tp",
            Self::Tf => "tf",
            Self::Nbf => "nbf",
            Self::Nbe => "nbe",
            Self::Latence => "latence",
        }
    }

    /// Human-readable label used in chart titles and axes.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ttt => "Temps Total Tracké",
            Self::Tp => "Temps Passé",
            Self::Tf => "Temps de Fixation",
            Self::Nbf => "Nombre de Fixations",
            Self::Nbe => "Nombre d'Entrées",
            Self::Latence => "Latence",
        }
    }

    /// Short abbreviation shown on the selector.
    pub fn abbr(self) -> &'static str {
        match self {
            Self::Ttt => "TTT",
            Self::Tp => "TP",
            Self::Tf => "TF",
            Self::Nbf => "NBF",
            Self::Nbe => "NBE",
            Self::Latence => "Lat",
        }
    }

    /// The parameter after this one, wrapping around.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// The parameter before this one, wrapping around.
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Parameter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseFilterError {
                field: FilterField::Parameter,
                value: s.to_string(),
            })
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

/// Which part of the filter a control addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Face stimulus selector.
    Face,
    /// Zone buttons.
    Zone,
    /// Parameter drop-down.
    Parameter,
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Face => "face",
            Self::Zone => "zone",
            Self::Parameter => "parameter",
        })
    }
}

/// A typed, already-parsed filter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterUpdate {
    /// Select a face.
    Face(FaceId),
    /// Select a zone.
    Zone(Zone),
    /// Select a parameter.
    Parameter(Parameter),
}

impl FilterUpdate {
    /// Parses a raw control value for `field`.
    ///
    /// # Errors
    /// Returns [`ParseFilterError`] when the value is outside the field's domain.
    pub fn parse(field: FilterField, raw: &str) -> Result<Self, ParseFilterError> {
        Ok(match field {
            FilterField::Face => Self::Face(raw.parse()?),
            FilterField::Zone => Self::Zone(raw.parse()?),
            FilterField::Parameter => Self::Parameter(raw.parse()?),
        })
    }

    /// The field this update targets.
    pub fn field(&self) -> FilterField {
        match self {
            Self::Face(_) => FilterField::Face,
            Self::Zone(_) => FilterField::Zone,
            Self::Parameter(_) => FilterField::Parameter,
        }
    }
}

/// The currently selected face, zone and parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct FilterState {
    /// Selected face stimulus.
    pub face: FaceId,
    /// Selected zone of interest.
    pub zone: Zone,
    /// Selected gaze parameter.
    pub parameter: Parameter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            face: FaceId(1),
            zone: Zone::Ecran,
            parameter: Parameter::Tf,
        }
    }
}

impl FilterState {
    /// Applies a typed update in place.
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Face(face) => self.face = face,
            FilterUpdate::Zone(zone) => self.zone = zone,
            FilterUpdate::Parameter(parameter) => self.parameter = parameter,
        }
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "face={} zone={} parameter={}",
            self.face, self.zone, self.parameter
        )
    }
}
