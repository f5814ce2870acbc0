use crate::cli::BondsArgs;
use crate::config::build_geometry_config;
use crate::error::Result;
use cellbond::core::models::cell::Cell;
use cellbond::workflows::cell::measure_structure;
use std::fmt::Write;
use tracing::info;

pub fn run(args: BondsArgs) -> Result<()> {
    let geometry = build_geometry_config(args.wrap_tolerance)?;
    info!(
        "Measuring {:?} as cell {} (wrap tolerance {})",
        &args.poscar, args.code, geometry.wrap_tolerance
    );
    let cell = measure_structure(&args.poscar, &args.code, &geometry)?;
    print!("{}", render_bonds(&cell));
    Ok(())
}

/// Bond table in the report's number format.
pub fn render_bonds(cell: &Cell) -> String {
    let bonds = cell.bond_lengths();
    let mut out = format!("Cell {}\n\nC-C bond lengths (Å):\n", cell.code());
    for length in bonds.base() {
        let _ = writeln!(out, "  {length:.5}");
    }
    let _ = writeln!(out, "Average C-C bond length: {:.3} Å", bonds.mean_base());
    if let Some(mean) = bonds.mean_substituent() {
        out.push_str("\nC-H bond lengths (Å):\n");
        for (site, length) in cell.code().attached_sites().zip(bonds.substituent()) {
            let _ = writeln!(out, "  C{site}-H  {length:.5}");
        }
        let _ = writeln!(out, "Average C-H bond length: {mean:.3} Å");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellbond::core::models::code::StructureCode;
    use cellbond::engine::config::GeometryConfig;
    use std::fs;
    use tempfile::tempdir;

    const POSCAR_0201: &str = "\
graphane 0201
2.46
  2.0 0.0 0.0
  0.5 0.8660254037844386 0.0
  0.0 0.0 6.0
C H
4 2
Selective dynamics
Direct
  0.0 0.0 0.5 T T T
  0.5 0.0 0.5 T T T
  0.6666666666666666 -0.6666666666666666 0.5 T T T
  0.1666666666666667 -0.6666666666666666 0.5 T T T
  0.5 0.0 0.4 T T T
  0.1666666666666667 -0.6666666666666666 0.65 T T T
";

    fn measured(code: &str) -> Cell {
        let dir = tempdir().unwrap();
        let path = dir.path().join("POSCAR");
        fs::write(&path, POSCAR_0201).unwrap();
        let code = StructureCode::parse(code).unwrap();
        measure_structure(&path, &code, &GeometryConfig::default()).unwrap()
    }

    #[test]
    fn table_lists_substituent_bonds_by_site() {
        let text = render_bonds(&measured("0201"));
        assert!(text.starts_with("Cell 0201\n\nC-C bond lengths (Å):\n  1.42028\n"));
        assert!(text.contains("Average C-C bond length: 1.420 Å\n"));
        assert!(text.contains("  C1-H  1.47600\n  C3-H  2.21400\n"));
        assert!(text.ends_with("Average C-H bond length: 1.845 Å\n"));
    }

    #[test]
    fn run_rejects_code_that_does_not_match_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("POSCAR");
        fs::write(&path, POSCAR_0201).unwrap();
        let args = BondsArgs {
            poscar: path,
            code: StructureCode::parse("1000").unwrap(),
            wrap_tolerance: None,
        };
        assert!(run(args).is_err());
    }
}
