use cellbond::engine::config::ReportConfig;
use std::path::PathBuf;

pub struct AppConfig {
    /// The TOML file the values were merged from, if any.
    pub config_file: Option<PathBuf>,
    pub core_config: ReportConfig,
}
