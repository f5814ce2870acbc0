use std::path::PathBuf;

/// Values used when neither the command line nor the config file sets a field. They
/// describe the `res/` tree the convergence runs leave behind.
pub struct DefaultsConfig {
    pub poscar_dir: PathBuf,
    pub poscar_prefix: String,
    pub etot_dir: PathBuf,
    pub etot_extension: String,
    pub aux_dir: PathBuf,
    pub aux_files: Vec<String>,
    pub entries: PathBuf,
    pub report: PathBuf,
    pub wrap_tolerance: f64,
    pub base_sites: usize,
    pub parallel: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            poscar_dir: PathBuf::from("res/poscar"),
            poscar_prefix: "POSCAR".to_string(),
            etot_dir: PathBuf::from("res/etot/results"),
            etot_extension: "dat".to_string(),
            aux_dir: PathBuf::from("res/io"),
            aux_files: vec!["KPOINTS".to_string(), "INCAR".to_string()],
            entries: PathBuf::from("res/io/current_entry.txt"),
            report: PathBuf::from("res/io/output.txt"),
            wrap_tolerance: 0.8,
            base_sites: 4,
            parallel: false,
        }
    }
}
