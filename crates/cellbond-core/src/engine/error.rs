use super::config::ConfigError;
use crate::core::io::entries::EntriesError;
use crate::core::io::etot::EtotError;
use crate::core::io::tokens::RowError;
use crate::core::models::code::CodeError;
use crate::core::models::lattice::LatticeError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of the pure geometry engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Structure code '{code}' does not match the structure: {reason}")]
    InconsistentStructureCode { code: String, reason: String },

    #[error("Invalid lattice: {0}")]
    Lattice(#[from] LatticeError),

    #[error("Invalid geometry configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Input file '{path}' is missing or unreadable: {source}", path = path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed row {row} in '{path}': {source}", row = source.row(), path = path.display())]
    MalformedRow {
        path: PathBuf,
        #[source]
        source: RowError,
    },

    #[error("Invalid structure code: {0}")]
    StructureCode(#[from] CodeError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("'{path}' contains no samples", path = path.display())]
    EmptyInput { path: PathBuf },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write summary '{path}': {source}", path = path.display())]
    Summary {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl EngineError {
    pub fn missing_input(path: &Path, source: io::Error) -> Self {
        EngineError::MissingInput {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed_row(path: &Path, source: RowError) -> Self {
        EngineError::MalformedRow {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn from_etot(path: &Path, error: EtotError) -> Self {
        match error {
            EtotError::Io(e) => Self::missing_input(path, e),
            EtotError::Row(e) => Self::malformed_row(path, e),
        }
    }

    pub fn from_entries(path: &Path, error: EntriesError) -> Self {
        match error {
            EntriesError::Io(e) => Self::missing_input(path, e),
            EntriesError::Row(e) => Self::malformed_row(path, e),
        }
    }
}
