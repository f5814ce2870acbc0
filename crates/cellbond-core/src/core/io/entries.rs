use super::tokens::{RowError, TokenRows};
use super::traits::SimulationFile;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntriesError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed row: {0}")]
    Row(#[from] RowError),
}

/// One cell requested for the report: its structure code and the degeneracy of the
/// configuration, both kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEntry {
    pub code: String,
    pub degeneracy: String,
}

/// Reader for the batch entry list (`CODE DEGENERACY` per line).
pub struct EntriesFile;

impl EntriesFile {
    pub fn decode(rows: &TokenRows) -> Result<Vec<CellEntry>, RowError> {
        (0..rows.len())
            .map(|row| {
                Ok(CellEntry {
                    code: rows.field(row, 0, "structure code")?.to_string(),
                    degeneracy: rows.field(row, 1, "degeneracy")?.to_string(),
                })
            })
            .collect()
    }
}

impl SimulationFile for EntriesFile {
    type Output = Vec<CellEntry>;
    type Error = EntriesError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let rows = TokenRows::read_from(reader)?;
        Ok(Self::decode(&rows)?)
    }
}
