//! On-disk datasets shared by the workflow tests.

use crate::engine::config::{ReportConfig, ReportConfigBuilder};
use std::fs;
use std::path::Path;

pub const BARE_POSCAR: &str = "\
graphene 0000
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

pub const ONE_H_POSCAR: &str = "\
graphane 1000
2.46
  2.0 0.0 0.0
  0.5 0.8660254037844386 0.0
  0.0 0.0 6.0
C H
4 1
Selective dynamics
Direct
  0.0 0.0 0.5 T T T
  0.5 0.0 0.5 T T T
  0.6666666666666666 -0.6666666666666666 0.5 T T T
  0.1666666666666667 -0.6666666666666666 0.5 T T T
  0.0 0.0 0.6 T T T


";

pub const VALLEY_LOG: &str = "\
2.44 F= -.40400908E+02 E0= -40.400908 -40.4 0.0
2.46 F= -.40408000E+02 E0= -40.408000 -40.5 0.0
2.48 F= -.40410485E+02 E0= -40.410485 -40.45 0.0
";

pub const BUMPY_LOG: &str = "\
2.44 F= x E0= x -30.1 0.0
2.46 F= x E0= x -30.0 0.0
2.48 F= x E0= x -30.3 0.0
2.50 F= x E0= x -30.2 0.0
";

pub const KPOINTS: &str = "Automatic mesh\n0\nGamma\n 12 12 1\n";
pub const INCAR: &str = "ENCUT = 500\nISMEAR = 0\n\n";

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Lays out the standard `res/` tree with cells `0000` and `1000` and returns a
/// matching configuration.
pub fn dataset(root: &Path) -> ReportConfig {
    write(root, "res/poscar/POSCAR0000", BARE_POSCAR);
    write(root, "res/poscar/POSCAR1000", ONE_H_POSCAR);
    write(root, "res/etot/results/0000.dat", VALLEY_LOG);
    write(root, "res/etot/results/1000.dat", BUMPY_LOG);
    write(root, "res/io/KPOINTS", KPOINTS);
    write(root, "res/io/INCAR", INCAR);
    write(root, "res/io/current_entry.txt", "0000 1\n1000 4\n");
    builder(root).build().unwrap()
}

pub fn builder(root: &Path) -> ReportConfigBuilder {
    ReportConfigBuilder::new()
        .poscar_dir(root.join("res/poscar"))
        .poscar_prefix("POSCAR")
        .etot_dir(root.join("res/etot/results"))
        .etot_extension("dat")
        .aux_dir(root.join("res/io"))
        .aux_files(vec!["KPOINTS".into(), "INCAR".into()])
        .entries_path(root.join("res/io/current_entry.txt"))
        .output_path(root.join("res/io/output.txt"))
}
