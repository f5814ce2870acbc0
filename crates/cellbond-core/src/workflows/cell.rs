use crate::core::io::entries::CellEntry;
use crate::core::io::etot::EtotFile;
use crate::core::io::poscar::PoscarLayout;
use crate::core::io::tokens::TokenRows;
use crate::core::io::traits::SimulationFile;
use crate::core::models::cell::Cell;
use crate::core::models::code::StructureCode;
use crate::engine::config::{DataLayout, GeometryConfig};
use crate::engine::energy::ConvergenceSummary;
use crate::engine::error::EngineError;
use crate::engine::geometry::build_cell_from_record;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Everything the report needs to know about one cell.
#[derive(Debug, Clone)]
pub struct CellReport {
    pub entry: CellEntry,
    pub cell: Cell,
    pub convergence: ConvergenceSummary,
    /// The structure file exactly as read, for verbatim embedding.
    pub poscar_text: String,
}

/// Loads both input files of one entry and runs the geometry engine and the energy
/// analyzer on them.
#[instrument(skip_all, fields(code = %entry.code))]
pub fn analyze_cell(
    entry: &CellEntry,
    layout: &DataLayout,
    geometry: &GeometryConfig,
) -> Result<CellReport, EngineError> {
    let code = StructureCode::parse(&entry.code)?;

    let poscar_path = layout.poscar_path(code.as_str());
    let poscar_text = fs::read_to_string(&poscar_path)
        .map_err(|e| EngineError::missing_input(&poscar_path, e))?;
    let cell = cell_from_text(&code, &poscar_text, &poscar_path, geometry)?;

    let convergence = analyze_convergence(&layout.etot_path(code.as_str()))?;
    debug!(
        ideal_parameter = %convergence.ideal_parameter,
        expected = convergence.behaved_as_expected,
        "Cell analyzed."
    );

    Ok(CellReport {
        entry: entry.clone(),
        cell,
        convergence,
        poscar_text,
    })
}

/// Reconstructs the cell stored in one structure file.
pub fn measure_structure(
    path: &Path,
    code: &StructureCode,
    geometry: &GeometryConfig,
) -> Result<Cell, EngineError> {
    let text = fs::read_to_string(path).map_err(|e| EngineError::missing_input(path, e))?;
    cell_from_text(code, &text, path, geometry)
}

/// Reads a convergence log and locates its minimum.
///
/// # Errors
///
/// [`EngineError::EmptyInput`] if the log has no samples.
pub fn analyze_convergence(path: &Path) -> Result<ConvergenceSummary, EngineError> {
    let log = EtotFile::read_from_path(path).map_err(|e| EngineError::from_etot(path, e))?;
    ConvergenceSummary::analyze(&log).ok_or_else(|| EngineError::EmptyInput {
        path: path.to_path_buf(),
    })
}

fn cell_from_text(
    code: &StructureCode,
    text: &str,
    path: &Path,
    geometry: &GeometryConfig,
) -> Result<Cell, EngineError> {
    let rows = TokenRows::parse(text);
    let record = PoscarLayout::with_base_sites(geometry.base_sites)
        .decode(&rows)
        .map_err(|e| EngineError::malformed_row(path, e))?;
    Ok(build_cell_from_record(code, &record, geometry)?)
}
