use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ReportArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, ParseError};
use cellbond::engine::config::{GeometryConfig, ReportConfigBuilder};
use tracing::debug;

pub fn build_config(args: &ReportArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &args.config {
        Some(config_path) => FileConfig::from_file(config_path)?,
        None => FileConfig::default(),
    };
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let data = file_config.data.take().unwrap_or_default();
    let geometry_file = file_config.geometry.take().unwrap_or_default();
    let output = file_config.output.take().unwrap_or_default();

    let geometry = GeometryConfig {
        wrap_tolerance: geometry_file
            .wrap_tolerance
            .unwrap_or(defaults.wrap_tolerance),
        base_sites: geometry_file.base_sites.unwrap_or(defaults.base_sites),
    };

    let entries_path = args
        .entries
        .clone()
        .or(data.entries)
        .unwrap_or(defaults.entries);
    let output_path = args
        .output
        .clone()
        .or(output.report)
        .unwrap_or(defaults.report);
    let summary_path = args.summary.clone().or(output.summary);
    let parallel = args.parallel || output.parallel.unwrap_or(defaults.parallel);

    let core_config = ReportConfigBuilder::new()
        .geometry(geometry)
        .poscar_dir(data.poscar_dir.unwrap_or(defaults.poscar_dir))
        .poscar_prefix(data.poscar_prefix.unwrap_or(defaults.poscar_prefix))
        .etot_dir(data.etot_dir.unwrap_or(defaults.etot_dir))
        .etot_extension(data.etot_extension.unwrap_or(defaults.etot_extension))
        .aux_dir(data.aux_dir.unwrap_or(defaults.aux_dir))
        .aux_files(data.aux_files.unwrap_or(defaults.aux_files))
        .entries_path(entries_path)
        .output_path(output_path)
        .summary_path(summary_path)
        .parallel(parallel)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(?core_config, "Report configuration assembled.");
    Ok(AppConfig {
        config_file: args.config.clone(),
        core_config,
    })
}

/// Geometry settings for single-file commands, which take no config file.
pub fn build_geometry_config(wrap_tolerance: Option<f64>) -> Result<GeometryConfig> {
    let defaults = DefaultsConfig::default();
    let geometry = GeometryConfig {
        wrap_tolerance: wrap_tolerance.unwrap_or(defaults.wrap_tolerance),
        base_sites: defaults.base_sites,
    };
    geometry
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(geometry)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) = parser::parse_key_value(kv_pair).map_err(config_error)?;
        debug!(key, value, "Applying --set override.");

        match key {
            "data.poscar-dir" => data(&mut config).poscar_dir = Some(value.into()),
            "data.poscar-prefix" => data(&mut config).poscar_prefix = Some(value.to_string()),
            "data.etot-dir" => data(&mut config).etot_dir = Some(value.into()),
            "data.etot-extension" => data(&mut config).etot_extension = Some(value.to_string()),
            "data.aux-dir" => data(&mut config).aux_dir = Some(value.into()),
            "data.aux-files" => data(&mut config).aux_files = Some(parser::parse_list(value)),
            "data.entries" => data(&mut config).entries = Some(value.into()),
            "geometry.wrap-tolerance" => {
                config
                    .geometry
                    .get_or_insert_with(Default::default)
                    .wrap_tolerance =
                    Some(parser::parse_value(key, value, "float").map_err(config_error)?);
            }
            "geometry.base-sites" => {
                config
                    .geometry
                    .get_or_insert_with(Default::default)
                    .base_sites =
                    Some(parser::parse_value(key, value, "integer").map_err(config_error)?);
            }
            "output.report" => output(&mut config).report = Some(value.into()),
            "output.summary" => output(&mut config).summary = Some(value.into()),
            "output.parallel" => {
                output(&mut config).parallel =
                    Some(parser::parse_value(key, value, "boolean").map_err(config_error)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

fn data(config: &mut FileConfig) -> &mut super::file::FileDataConfig {
    config.data.get_or_insert_with(Default::default)
}

fn output(config: &mut FileConfig) -> &mut super::file::FileOutputConfig {
    config.output.get_or_insert_with(Default::default)
}

fn config_error(e: ParseError) -> CliError {
    CliError::Config(e.to_string())
}
