//! Layered configuration for the `report` command: command-line flags, then `--set`
//! overrides, then the TOML file, then [`defaults::DefaultsConfig`].

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_config, build_geometry_config};
pub use models::AppConfig;
