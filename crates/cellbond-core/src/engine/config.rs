use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Tunables of the geometry engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Fractional components above this value are folded back by one cell length, and
    /// the same fraction of a basis vector's own-axis extent triggers Cartesian
    /// re-centering.
    pub wrap_tolerance: f64,
    /// Number of carbon sites at the head of the atom list; also the structure-code length.
    pub base_sites: usize,
}

/// Fewest base sites the bond recipe can address (it reads sites 0 through 3).
pub const MIN_BASE_SITES: usize = 4;

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            wrap_tolerance: 0.8,
            base_sites: 4,
        }
    }
}

impl GeometryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.wrap_tolerance > 0.0 && self.wrap_tolerance <= 1.0) {
            return Err(ConfigError::InvalidParameter {
                name: "wrap_tolerance",
                reason: format!("{} is outside (0, 1]", self.wrap_tolerance),
            });
        }
        if self.base_sites < MIN_BASE_SITES {
            return Err(ConfigError::InvalidParameter {
                name: "base_sites",
                reason: format!("{} is fewer than {}", self.base_sites, MIN_BASE_SITES),
            });
        }
        Ok(())
    }
}

/// Where the per-cell input files live and how their names derive from the structure code.
#[derive(Debug, Clone, PartialEq)]
pub struct DataLayout {
    pub poscar_dir: PathBuf,
    pub poscar_prefix: String,
    pub etot_dir: PathBuf,
    pub etot_extension: String,
    pub aux_dir: PathBuf,
    /// Auxiliary files echoed verbatim in the common section of the report, in order.
    pub aux_files: Vec<String>,
}

impl DataLayout {
    pub fn poscar_path(&self, code: &str) -> PathBuf {
        self.poscar_dir.join(format!("{}{}", self.poscar_prefix, code))
    }

    pub fn etot_path(&self, code: &str) -> PathBuf {
        self.etot_dir.join(format!("{}.{}", code, self.etot_extension))
    }

    pub fn aux_path(&self, name: &str) -> PathBuf {
        self.aux_dir.join(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub geometry: GeometryConfig,
    pub layout: DataLayout,
    pub entries_path: PathBuf,
    pub output_path: PathBuf,
    pub summary_path: Option<PathBuf>,
    /// Process cells on the rayon pool instead of one after another.
    pub parallel: bool,
}

#[derive(Default)]
pub struct ReportConfigBuilder {
    geometry: Option<GeometryConfig>,
    poscar_dir: Option<PathBuf>,
    poscar_prefix: Option<String>,
    etot_dir: Option<PathBuf>,
    etot_extension: Option<String>,
    aux_dir: Option<PathBuf>,
    aux_files: Option<Vec<String>>,
    entries_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    summary_path: Option<PathBuf>,
    parallel: bool,
}

impl ReportConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geometry(mut self, geometry: GeometryConfig) -> Self {
        self.geometry = Some(geometry);
        self
    }
    pub fn poscar_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.poscar_dir = Some(dir.into());
        self
    }
    pub fn poscar_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.poscar_prefix = Some(prefix.into());
        self
    }
    pub fn etot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.etot_dir = Some(dir.into());
        self
    }
    pub fn etot_extension(mut self, extension: impl Into<String>) -> Self {
        self.etot_extension = Some(extension.into());
        self
    }
    pub fn aux_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.aux_dir = Some(dir.into());
        self
    }
    pub fn aux_files(mut self, files: Vec<String>) -> Self {
        self.aux_files = Some(files);
        self
    }
    pub fn entries_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries_path = Some(path.into());
        self
    }
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }
    pub fn summary_path(mut self, path: Option<PathBuf>) -> Self {
        self.summary_path = path;
        self
    }
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn build(self) -> Result<ReportConfig, ConfigError> {
        let geometry = self.geometry.unwrap_or_default();
        geometry.validate()?;

        let layout = DataLayout {
            poscar_dir: self
                .poscar_dir
                .ok_or(ConfigError::MissingParameter("poscar_dir"))?,
            poscar_prefix: self
                .poscar_prefix
                .ok_or(ConfigError::MissingParameter("poscar_prefix"))?,
            etot_dir: self
                .etot_dir
                .ok_or(ConfigError::MissingParameter("etot_dir"))?,
            etot_extension: self
                .etot_extension
                .ok_or(ConfigError::MissingParameter("etot_extension"))?,
            aux_dir: self
                .aux_dir
                .ok_or(ConfigError::MissingParameter("aux_dir"))?,
            aux_files: self
                .aux_files
                .ok_or(ConfigError::MissingParameter("aux_files"))?,
        };

        Ok(ReportConfig {
            geometry,
            layout,
            entries_path: self
                .entries_path
                .ok_or(ConfigError::MissingParameter("entries_path"))?,
            output_path: self
                .output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
            summary_path: self.summary_path,
            parallel: self.parallel,
        })
    }
}

impl ReportConfig {
    pub fn summary_path(&self) -> Option<&Path> {
        self.summary_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> ReportConfigBuilder {
        ReportConfigBuilder::new()
            .poscar_dir("res/poscar")
            .poscar_prefix("POSCAR")
            .etot_dir("res/etot/results")
            .etot_extension("dat")
            .aux_dir("res/io")
            .aux_files(vec!["KPOINTS".into(), "INCAR".into()])
            .entries_path("res/io/current_entry.txt")
            .output_path("res/io/output.txt")
    }

    #[test]
    fn build_uses_default_geometry_when_unset() {
        let config = complete_builder().build().unwrap();
        assert_eq!(config.geometry, GeometryConfig::default());
        assert_eq!(config.geometry.wrap_tolerance, 0.8);
        assert_eq!(config.geometry.base_sites, 4);
        assert!(!config.parallel);
        assert!(config.summary_path().is_none());
    }

    #[test]
    fn build_reports_first_missing_parameter() {
        let err = ReportConfigBuilder::new().build().unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("poscar_dir"));

        let err = ReportConfigBuilder::new()
            .poscar_dir("p")
            .poscar_prefix("POSCAR")
            .etot_dir("e")
            .etot_extension("dat")
            .aux_dir("a")
            .aux_files(vec![])
            .output_path("o")
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("entries_path"));
    }

    #[test]
    fn build_rejects_invalid_geometry() {
        let err = complete_builder()
            .geometry(GeometryConfig {
                wrap_tolerance: 1.5,
                base_sites: 4,
            })
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "wrap_tolerance",
                ..
            }
        ));

        let err = complete_builder()
            .geometry(GeometryConfig {
                wrap_tolerance: 0.8,
                base_sites: 3,
            })
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "base_sites",
                ..
            }
        ));
    }

    #[test]
    fn layout_derives_file_names_from_code() {
        let config = complete_builder().build().unwrap();
        assert_eq!(
            config.layout.poscar_path("1122"),
            PathBuf::from("res/poscar/POSCAR1122")
        );
        assert_eq!(
            config.layout.etot_path("1122"),
            PathBuf::from("res/etot/results/1122.dat")
        );
        assert_eq!(config.layout.aux_path("INCAR"), PathBuf::from("res/io/INCAR"));
    }
}
