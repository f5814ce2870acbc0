//! Decoding of converged structure files (VASP `POSCAR`/`CONTCAR` in direct coordinates).
//!
//! The files are addressed by fixed non-blank row offsets rather than by their keywords.
//! All offsets live in [`PoscarLayout`], so the decoder never does index arithmetic of
//! its own.

use super::tokens::{RowError, TokenRows};
use nalgebra::Vector3;

/// Number of carbon sites in every cell of the family.
pub const DEFAULT_BASE_SITES: usize = 4;

/// Named row offsets of the structure file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoscarLayout {
    pub lattice_parameter_row: usize,
    pub first_vector_row: usize,
    pub counts_row: usize,
    pub first_atom_row: usize,
    pub base_sites: usize,
}

impl Default for PoscarLayout {
    fn default() -> Self {
        Self {
            lattice_parameter_row: 1,
            first_vector_row: 2,
            counts_row: 6,
            first_atom_row: 9,
            base_sites: DEFAULT_BASE_SITES,
        }
    }
}

/// The raw content of one structure file, before any geometric interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureRecord {
    pub lattice_parameter: f64,
    /// Reduced basis vectors, one per row of the file.
    pub lattice_vectors: [Vector3<f64>; 3],
    /// Substituent count declared by the species-count row.
    pub substituent_count: usize,
    /// Fractional coordinates, base sites first, then substituents in file order.
    pub fractional: Vec<Vector3<f64>>,
}

impl PoscarLayout {
    pub fn with_base_sites(base_sites: usize) -> Self {
        Self {
            base_sites,
            ..Self::default()
        }
    }

    pub fn decode(&self, rows: &TokenRows) -> Result<StructureRecord, RowError> {
        let lattice_parameter = rows.float(self.lattice_parameter_row, 0, "lattice parameter")?;

        let mut lattice_vectors = [Vector3::zeros(); 3];
        for (k, vector) in lattice_vectors.iter_mut().enumerate() {
            let row = self.first_vector_row + k;
            rows.require_exact(row, 3, "lattice vector")?;
            *vector = read_vector(rows, row, "lattice vector")?;
        }

        let counts = rows.require(self.counts_row, 1, "species counts")?;
        let substituent_count = if counts.len() == 1 {
            0
        } else {
            rows.integer(self.counts_row, 1, "substituent count")?
        };

        let atom_count = self
            .base_sites
            .checked_add(substituent_count)
            .ok_or_else(|| RowError::InvalidNumber {
                row: self.counts_row,
                column: 1,
                field: "substituent count",
                value: counts[1].clone(),
            })?;
        let fractional = (0..atom_count)
            .map(|i| read_vector(rows, self.first_atom_row + i, "fractional coordinates"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StructureRecord {
            lattice_parameter,
            lattice_vectors,
            substituent_count,
            fractional,
        })
    }
}

fn read_vector(rows: &TokenRows, row: usize, field: &'static str) -> Result<Vector3<f64>, RowError> {
    rows.require(row, 3, field)?;
    Ok(Vector3::new(
        rows.float(row, 0, field)?,
        rows.float(row, 1, field)?,
        rows.float(row, 2, field)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> Result<StructureRecord, RowError> {
        PoscarLayout::default().decode(&TokenRows::parse(text))
    }

    const GRAPHENE: &str = "\
graphene
2.46
  2.0 0.0 0.0
  0.5 0.8660254037844386 0.0
  0.0 0.0 6.0
C
4
Selective dynamics
Direct
  1.0 0.0 0.5 T T T
  0.5 0.0 0.5 T T T
  0.6666666666666666 -0.6666666666666666 0.5 T T T
  0.1666666666666667 -0.6666666666666666 0.5 T T T
";

    const GRAPHANE_ONE_H: &str = "\
graphane 1000

2.46
  2.0 0.0 0.0
  0.5 0.8660254037844386 0.0
  0.0 0.0 6.0
C H
4 1
Selective dynamics
Direct
  1.0 0.0 0.5 T T T
  0.5 0.0 0.5 T T T
  0.6666666666666666 -0.6666666666666666 0.5 T T T
  0.1666666666666667 -0.6666666666666666 0.5 T T T

  0.0 0.0 0.6 T T T
";

    #[test]
    fn decodes_bare_cell() {
        let record = decode(GRAPHENE).unwrap();
        assert_eq!(record.lattice_parameter, 2.46);
        assert_eq!(record.lattice_vectors[0], Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(record.lattice_vectors[2], Vector3::new(0.0, 0.0, 6.0));
        assert_eq!(record.substituent_count, 0);
        assert_eq!(record.fractional.len(), 4);
        assert_eq!(record.fractional[0], Vector3::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn decodes_substituent_rows_after_blank_lines() {
        let record = decode(GRAPHANE_ONE_H).unwrap();
        assert_eq!(record.substituent_count, 1);
        assert_eq!(record.fractional.len(), 5);
        assert_eq!(record.fractional[4], Vector3::new(0.0, 0.0, 0.6));
    }

    #[test]
    fn ignores_rows_past_the_declared_atoms() {
        let text = format!("{GRAPHENE}  0.3 0.3 0.3\n");
        let record = decode(&text).unwrap();
        assert_eq!(record.fractional.len(), 4);
    }

    #[test]
    fn missing_substituent_row_is_reported_with_its_index() {
        let text = GRAPHENE.replacen("\n4\n", "\n4 1\n", 1);
        let err = decode(&text).unwrap_err();
        assert_eq!(err.row(), 13);
        assert!(matches!(err, RowError::MissingRow { .. }));
    }

    #[test]
    fn short_lattice_vector_row_is_rejected() {
        let text = GRAPHENE.replacen("  0.0 0.0 6.0\n", "  0.0 6.0\n", 1);
        let err = decode(&text).unwrap_err();
        assert!(matches!(err, RowError::TooFewTokens { row: 4, .. }));
    }

    #[test]
    fn non_numeric_coordinate_is_rejected() {
        let text = GRAPHENE.replacen("  0.5 0.0 0.5 T T T", "  0.5 x 0.5 T T T", 1);
        let err = decode(&text).unwrap_err();
        assert!(matches!(
            err,
            RowError::InvalidNumber {
                row: 10,
                column: 1,
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_substituent_count_is_rejected() {
        let text = GRAPHANE_ONE_H.replacen("4 1", "4 one", 1);
        assert!(decode(&text).is_err());
    }

    #[test]
    fn oversized_substituent_count_is_an_error() {
        let text = GRAPHANE_ONE_H.replacen("4 1", "4 18446744073709551615", 1);
        assert!(matches!(
            decode(&text).unwrap_err(),
            RowError::InvalidNumber {
                row: 6,
                column: 1,
                ..
            }
        ));
    }

    #[test]
    fn lattice_vector_row_with_extra_tokens_is_rejected() {
        let text = GRAPHENE.replacen("  0.0 0.0 6.0\n", "  0.0 0.0 6.0 1.0\n", 1);
        assert!(matches!(
            decode(&text).unwrap_err(),
            RowError::UnexpectedTokenCount {
                row: 4,
                expected: 3,
                found: 4,
                ..
            }
        ));
    }

    #[test]
    fn atom_rows_keep_their_trailing_flags() {
        let record = decode(GRAPHENE).unwrap();
        assert_eq!(record.fractional[1], Vector3::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn custom_base_site_count_reads_more_rows() {
        let rows = TokenRows::parse(GRAPHENE);
        let err = PoscarLayout::with_base_sites(5).decode(&rows).unwrap_err();
        assert_eq!(err.row(), 13);
    }
}
