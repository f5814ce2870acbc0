use crate::utils::parser;
use cellbond::core::models::code::StructureCode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "cellbond - bond lengths and energy-convergence reports for graphane unit cells.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Number of worker threads used by `report --parallel`.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze every cell of the entry list and write the convergence report.
    Report(ReportArgs),
    /// Reconstruct a single structure file and print its bond lengths.
    Bonds(BondsArgs),
    /// Analyze a single convergence log.
    Energy(EnergyArgs),
}

/// Arguments for the `report` subcommand.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the entry list (one `CODE DEGENERACY` pair per line).
    #[arg(short, long, value_name = "PATH")]
    pub entries: Option<PathBuf>,

    /// Override the path of the text report.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write a CSV summary with one row per successful cell.
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Analyze cells concurrently.
    #[arg(long)]
    pub parallel: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S geometry.wrap-tolerance=0.75
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `bonds` subcommand.
#[derive(Args, Debug)]
pub struct BondsArgs {
    /// Structure file in direct coordinates (e.g., res/poscar/POSCAR1122).
    #[arg(required = true, value_name = "POSCAR")]
    pub poscar: PathBuf,

    /// Structure code of the cell, one digit per carbon site.
    #[arg(long, required = true, value_name = "CODE", value_parser = parser::parse_structure_code)]
    pub code: StructureCode,

    /// Override the fractional wrap tolerance.
    #[arg(long, value_name = "FLOAT")]
    pub wrap_tolerance: Option<f64>,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Convergence log (parameter label in column 1, energy in column 6).
    #[arg(required = true, value_name = "LOG")]
    pub log: PathBuf,
}
