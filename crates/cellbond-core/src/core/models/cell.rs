use super::code::StructureCode;
use super::lattice::Lattice;
use nalgebra::{Point3, Vector3};

/// Number of bonds measured between base sites, independent of the structure code.
pub const BASE_BOND_COUNT: usize = 4;

/// One atom of the cell after the periodic corrections.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    /// Fractional coordinates after folding components above the wrap tolerance.
    pub fractional: Vector3<f64>,
    /// Cartesian position in physical units.
    pub position: Point3<f64>,
}

/// The ordered bond lengths of a cell: the four base bonds first, then one bond per
/// substituent in structure-code order.
#[derive(Debug, Clone, PartialEq)]
pub struct BondLengths {
    values: Vec<f64>,
}

impl BondLengths {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        debug_assert!(values.len() >= BASE_BOND_COUNT);
        Self { values }
    }

    pub fn all(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn base(&self) -> &[f64] {
        &self.values[..BASE_BOND_COUNT]
    }

    pub fn substituent(&self) -> &[f64] {
        &self.values[BASE_BOND_COUNT..]
    }

    pub fn substituent_count(&self) -> usize {
        self.values.len() - BASE_BOND_COUNT
    }

    pub fn mean_base(&self) -> f64 {
        mean(self.base()).unwrap_or(f64::NAN)
    }

    /// `None` when the cell carries no substituent.
    pub fn mean_substituent(&self) -> Option<f64> {
        mean(self.substituent())
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// A fully reconstructed cell. Built once by [`crate::engine::geometry::build_cell`]
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    code: StructureCode,
    lattice: Lattice,
    base_sites: usize,
    sites: Vec<Site>,
    references: [Point3<f64>; 2],
    bonds: BondLengths,
}

impl Cell {
    pub(crate) fn from_parts(
        code: StructureCode,
        lattice: Lattice,
        base_sites: usize,
        sites: Vec<Site>,
        references: [Point3<f64>; 2],
        bonds: BondLengths,
    ) -> Self {
        Self {
            code,
            lattice,
            base_sites,
            sites,
            references,
            bonds,
        }
    }

    pub fn code(&self) -> &StructureCode {
        &self.code
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// All sites: base sites first, then substituents in file order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn base_sites(&self) -> &[Site] {
        &self.sites[..self.base_sites]
    }

    pub fn substituent_sites(&self) -> &[Site] {
        &self.sites[self.base_sites..]
    }

    /// Periodic images of base sites 2 and 3 used for the cross-boundary bonds.
    pub fn references(&self) -> &[Point3<f64>; 2] {
        &self.references
    }

    pub fn bond_lengths(&self) -> &BondLengths {
        &self.bonds
    }

    pub fn substituent_count(&self) -> usize {
        self.sites.len() - self.base_sites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_lengths_split_base_and_substituent_bonds() {
        let bonds = BondLengths::new(vec![1.5, 1.5, 1.6, 1.6, 1.1, 1.2]);
        assert_eq!(bonds.len(), 6);
        assert_eq!(bonds.base(), [1.5, 1.5, 1.6, 1.6]);
        assert_eq!(bonds.substituent(), [1.1, 1.2]);
        assert_eq!(bonds.substituent_count(), 2);
        assert!((bonds.mean_base() - 1.55).abs() < 1e-12);
        assert!((bonds.mean_substituent().unwrap() - 1.15).abs() < 1e-12);
    }

    #[test]
    fn mean_substituent_is_none_without_substituents() {
        let bonds = BondLengths::new(vec![1.42; 4]);
        assert!(bonds.substituent().is_empty());
        assert_eq!(bonds.substituent_count(), 0);
        assert_eq!(bonds.mean_substituent(), None);
    }
}
