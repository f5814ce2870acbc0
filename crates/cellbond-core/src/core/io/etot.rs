use super::tokens::{RowError, TokenRows};
use super::traits::SimulationFile;
use crate::core::models::convergence::{ConvergenceLog, EnergySample};
use std::io::{self, BufRead};
use thiserror::Error;

/// Column holding the sampled lattice parameter, kept verbatim.
pub const PARAMETER_COLUMN: usize = 0;
/// Column holding the total energy of the sample.
pub const ENERGY_COLUMN: usize = 5;

#[derive(Debug, Error)]
pub enum EtotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed row: {0}")]
    Row(#[from] RowError),
}

/// Reader for the total-energy logs written during lattice-parameter convergence runs.
pub struct EtotFile;

impl EtotFile {
    pub fn decode(rows: &TokenRows) -> Result<ConvergenceLog, RowError> {
        let samples = (0..rows.len())
            .map(|row| {
                Ok(EnergySample {
                    parameter: rows.field(row, PARAMETER_COLUMN, "lattice parameter")?.to_string(),
                    energy: rows.float(row, ENERGY_COLUMN, "total energy")?,
                })
            })
            .collect::<Result<Vec<_>, RowError>>()?;
        Ok(ConvergenceLog::new(samples))
    }
}

impl SimulationFile for EtotFile {
    type Output = ConvergenceLog;
    type Error = EtotError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let rows = TokenRows::read_from(reader)?;
        Ok(Self::decode(&rows)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LOG: &str = "\
2.50 F= -.40400908E+02 E0= -40.400908 -40.400908 0.0 1
2.52 F= -.40408000E+02 E0= -40.408000 -40.408000 0.0 1

2.54 F= -.40410485E+02 E0= -40.410485 -40.410485 0.0 1
";

    #[test]
    fn reads_parameter_labels_and_energies() {
        let log = EtotFile::read_from(&mut Cursor::new(LOG)).unwrap();
        assert_eq!(log.len(), 3);
        assert_eq!(log.samples()[0].parameter, "2.50");
        assert_eq!(log.samples()[0].energy, -40.400908);
        assert_eq!(log.samples()[2].parameter, "2.54");
        assert_eq!(log.energies(), vec![-40.400908, -40.408, -40.410485]);
    }

    #[test]
    fn parameter_label_is_preserved_verbatim() {
        let log = EtotFile::read_from(&mut Cursor::new("2.500 a b c d -1.0\n")).unwrap();
        assert_eq!(log.samples()[0].parameter, "2.500");
    }

    #[test]
    fn short_row_is_rejected_with_row_index() {
        let text = format!("{LOG}2.56 F= -1.0\n");
        let err = EtotFile::read_from(&mut Cursor::new(text)).unwrap_err();
        assert!(matches!(
            err,
            EtotError::Row(RowError::TooFewTokens { row: 3, .. })
        ));
    }

    #[test]
    fn non_numeric_energy_is_rejected() {
        let err = EtotFile::read_from(&mut Cursor::new("2.5 a b c d energy\n")).unwrap_err();
        assert!(matches!(
            err,
            EtotError::Row(RowError::InvalidNumber { column: 5, .. })
        ));
    }

    #[test]
    fn empty_file_yields_empty_log() {
        let log = EtotFile::read_from(&mut Cursor::new("\n\n")).unwrap();
        assert!(log.is_empty());
    }
}
