use super::config::GeometryConfig;
use super::error::GeometryError;
use crate::core::io::poscar::StructureRecord;
use crate::core::models::cell::{BASE_BOND_COUNT, BondLengths, Cell, Site};
use crate::core::models::code::StructureCode;
use crate::core::models::lattice::Lattice;
use crate::core::utils::geometry::{
    distance, periodic_references, project_to_cartesian, recenter_and_scale, wrap_fractional,
};
use nalgebra::Vector3;
use tracing::{debug, instrument};

/// Reconstructs a cell and measures its bonds.
///
/// `fractional` lists the base sites first and then the substituents in file order;
/// the `k`-th substituent is bonded to the `k`-th base site whose code digit is
/// nonzero. The returned bond list holds, in order: (0, 3), (1, 2), (0, image of 2),
/// (1, image of 3), then one bond per substituent.
///
/// # Errors
///
/// Returns [`GeometryError::InconsistentStructureCode`] when the code length differs
/// from the configured base-site count or the number of atoms differs from the base
/// sites plus the code's substituents.
#[instrument(level = "debug", skip_all, fields(code = %code))]
pub fn build_cell(
    code: &StructureCode,
    lattice: Lattice,
    fractional: &[Vector3<f64>],
    config: &GeometryConfig,
) -> Result<Cell, GeometryError> {
    config.validate()?;
    let base_sites = config.base_sites;
    let tolerance = config.wrap_tolerance;

    if code.len() != base_sites {
        return Err(inconsistent(
            code,
            format!(
                "it has {} digit(s) but the cell has {} base sites",
                code.len(),
                base_sites
            ),
        ));
    }
    let substituents = code.substituent_count();
    if fractional.len() != base_sites + substituents {
        return Err(inconsistent(
            code,
            format!(
                "it attaches {} substituent(s), so {} atoms are required, but {} were given",
                substituents,
                base_sites + substituents,
                fractional.len()
            ),
        ));
    }

    let sites: Vec<Site> = fractional
        .iter()
        .map(|f| {
            let wrapped = wrap_fractional(f, tolerance);
            let reduced = project_to_cartesian(&lattice, &wrapped);
            Site {
                fractional: wrapped,
                position: recenter_and_scale(&lattice, &reduced, tolerance),
            }
        })
        .collect();

    let references = periodic_references(&lattice, &sites[2].position, &sites[3].position);

    let mut bonds = Vec::with_capacity(BASE_BOND_COUNT + substituents);
    bonds.push(distance(&sites[0].position, &sites[3].position));
    bonds.push(distance(&sites[1].position, &sites[2].position));
    bonds.push(distance(&sites[0].position, &references[0]));
    bonds.push(distance(&sites[1].position, &references[1]));
    for (k, site) in code.attached_sites().enumerate() {
        bonds.push(distance(
            &sites[site].position,
            &sites[base_sites + k].position,
        ));
    }
    debug!(bonds = ?bonds, "Bond lengths computed.");

    Ok(Cell::from_parts(
        code.clone(),
        lattice,
        base_sites,
        sites,
        references,
        BondLengths::new(bonds),
    ))
}

/// Builds a cell from a decoded structure file, checking the declared substituent
/// count against the structure code first.
pub fn build_cell_from_record(
    code: &StructureCode,
    record: &StructureRecord,
    config: &GeometryConfig,
) -> Result<Cell, GeometryError> {
    if record.substituent_count != code.substituent_count() {
        return Err(inconsistent(
            code,
            format!(
                "it has {} nonzero digit(s) but the file declares {} substituent(s)",
                code.substituent_count(),
                record.substituent_count
            ),
        ));
    }
    let lattice = Lattice::new(record.lattice_parameter, record.lattice_vectors)?;
    build_cell(code, lattice, &record.fractional, config)
}

fn inconsistent(code: &StructureCode, reason: String) -> GeometryError {
    GeometryError::InconsistentStructureCode {
        code: code.to_string(),
        reason,
    }
}
