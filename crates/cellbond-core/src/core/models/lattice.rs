use nalgebra::{Matrix3, Vector3};
use thiserror::Error;

/// Smallest |det| of the reduced basis accepted as a proper cell.
pub const MIN_BASIS_DETERMINANT: f64 = 1e-12;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LatticeError {
    #[error("Lattice parameter must be a positive finite number, got {0}")]
    InvalidParameter(f64),
    #[error("Lattice vectors are degenerate (determinant {determinant:e})")]
    Degenerate { determinant: f64 },
}

/// A periodic cell: a uniform length scale applied to three reduced basis vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    parameter: f64,
    vectors: [Vector3<f64>; 3],
}

impl Lattice {
    pub fn new(parameter: f64, vectors: [Vector3<f64>; 3]) -> Result<Self, LatticeError> {
        if !(parameter.is_finite() && parameter > 0.0) {
            return Err(LatticeError::InvalidParameter(parameter));
        }
        let determinant = Matrix3::from_columns(&vectors).determinant();
        if !determinant.is_finite() || determinant.abs() < MIN_BASIS_DETERMINANT {
            return Err(LatticeError::Degenerate { determinant });
        }
        Ok(Self { parameter, vectors })
    }

    pub fn parameter(&self) -> f64 {
        self.parameter
    }

    pub fn vectors(&self) -> &[Vector3<f64>; 3] {
        &self.vectors
    }

    pub fn vector(&self, k: usize) -> &Vector3<f64> {
        &self.vectors[k]
    }

    /// Extent of basis vector `axis` along its own Cartesian axis.
    pub fn own_axis_extent(&self, axis: usize) -> f64 {
        self.vectors[axis][axis]
    }

    /// Basis vectors as matrix columns, so that `basis() * fractional` is the reduced
    /// Cartesian position.
    pub fn basis(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&self.vectors)
    }
}
