//! Static, in-memory measurement table.
//!
//! ## Responsibility
//! Parse the comparative dataset from TOML (either the copy embedded in the
//! binary or a user-supplied file), validate it, and serve exact lookups.
//!
//! ## Guarantees
//! - Keys are unique per `(face, zone, parameter)` triple
//! - Every value is finite and non-negative; every p-value is within `[0, 1]`
//! - Loading collects the first structural error and names the offending row
//!
//! ## NOT Responsible For
//! - Aggregate views (provided by [`DatasetAccessor`])

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::{DatasetAccessor, LookupError, MeasurementRecord, Unit};
use crate::filter::{FaceId, Parameter, Zone};

/// The dataset shipped with the binary.
const BUILTIN_DATASET: &str = include_str!("../../data/measurements.toml");

/// Errors raised while loading a dataset file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("IO error reading dataset {file}: {source}")]
    Io {
        /// Path of the file.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML was malformed or did not match the schema.
    #[error("Parse error in dataset {file}: {source}")]
    Parse {
        /// Source name.
        file: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Two rows share the same key.
    #[error("duplicate measurement for face {face}, zone {zone}, parameter {parameter}")]
    DuplicateKey {
        /// Face of the duplicated row.
        face: FaceId,
        /// Zone of the duplicated row.
        zone: Zone,
        /// Parameter of the duplicated row.
        parameter: Parameter,
    },

    /// A row carries a value outside its valid range.
    #[error("invalid {field} in row {row}: {value}")]
    InvalidValue {
        /// Zero-based row index.
        row: usize,
        /// Offending column.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The file contained no measurements at all.
    #[error("dataset {0} contains no measurements")]
    Empty(String),
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    measurements: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Row {
    face: FaceId,
    zone: Zone,
    parameter: Parameter,
    dt: f64,
    tsa: f64,
    unit: Unit,
    p_value: f64,
}

/// Lookup table keyed by `(face, zone, parameter)`.
#[derive(Debug, Clone)]
pub struct StaticDataset {
    records: BTreeMap<(FaceId, Zone, Parameter), MeasurementRecord>,
    faces: Vec<FaceId>,
}

impl StaticDataset {
    /// Loads the dataset embedded in the binary.
    ///
    /// # Errors
    /// Only fails if the embedded file is malformed, which the test suite guards.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_toml_str(BUILTIN_DATASET, "builtin")
    }

    /// Loads a dataset from a TOML file on disk.
    ///
    /// # Errors
    /// Returns [`DatasetError::Io`] if the file is unreadable, or any parse or
    /// validation error from [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
            file: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Parses and validates a dataset from TOML text.
    ///
    /// # Errors
    /// Returns [`DatasetError::Parse`] for malformed TOML,
    /// [`DatasetError::DuplicateKey`] for repeated triples,
    /// [`DatasetError::InvalidValue`] for out-of-range numbers and
    /// [`DatasetError::Empty`] when no rows are present.
    pub fn from_toml_str(content: &str, source_name: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = toml::from_str(content).map_err(|e| DatasetError::Parse {
            file: source_name.to_string(),
            source: e,
        })?;
        Self::from_rows(file.measurements, source_name)
    }

    /// Builds a dataset from already-typed records. Used by tests and embedders.
    ///
    /// # Errors
    /// Same validation as [`from_toml_str`](Self::from_toml_str).
    pub fn from_records<I>(records: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = ((FaceId, Zone, Parameter), MeasurementRecord)>,
    {
        let rows = records
            .into_iter()
            .map(|((face, zone, parameter), r)| Row {
                face,
                zone,
                parameter,
                dt: r.dt,
                tsa: r.tsa,
                unit: r.unit,
                p_value: r.p_value,
            })
            .collect();
        Self::from_rows(rows, "records")
    }

    fn from_rows(rows: Vec<Row>, source_name: &str) -> Result<Self, DatasetError> {
        if rows.is_empty() {
            return Err(DatasetError::Empty(source_name.to_string()));
        }

        let mut records = BTreeMap::new();
        for (idx, row) in rows.into_iter().enumerate() {
            for (field, value) in [("dt", row.dt), ("tsa", row.tsa)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(DatasetError::InvalidValue {
                        row: idx,
                        field,
                        value,
                    });
                }
            }
            if !(0.0..=1.0).contains(&row.p_value) {
                return Err(DatasetError::InvalidValue {
                    row: idx,
                    field: "p_value",
                    value: row.p_value,
                });
            }
            if row.face.get() == 0 {
                return Err(DatasetError::InvalidValue {
                    row: idx,
                    field: "face",
                    value: 0.0,
                });
            }

            let key = (row.face, row.zone, row.parameter);
            let record = MeasurementRecord {
                dt: row.dt,
                tsa: row.tsa,
                unit: row.unit,
                p_value: row.p_value,
            };
            if records.insert(key, record).is_some() {
                return Err(DatasetError::DuplicateKey {
                    face: row.face,
                    zone: row.zone,
                    parameter: row.parameter,
                });
            }
        }

        let mut faces: Vec<FaceId> = records.keys().map(|(face, _, _)| *face).collect();
        faces.dedup();

        tracing::debug!(
            source = source_name,
            records = records.len(),
            faces = faces.len(),
            "dataset loaded"
        );

        Ok(Self { records, faces })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty (never true for a loaded dataset).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DatasetAccessor for StaticDataset {
    fn faces(&self) -> &[FaceId] {
        &self.faces
    }

    fn lookup(
        &self,
        face: FaceId,
        zone: Zone,
        parameter: Parameter,
    ) -> Result<MeasurementRecord, LookupError> {
        self.records
            .get(&(face, zone, parameter))
            .copied()
            .ok_or(LookupError::MissingMeasurement {
                face,
                zone,
                parameter,
            })
    }
}
