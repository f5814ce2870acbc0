use crate::cli::ReportArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use cellbond::engine::progress::ProgressReporter;
use cellbond::workflows;
use tracing::{info, warn};

pub fn run(args: ReportArgs) -> Result<()> {
    let app = build_config(&args)?;
    if let Some(path) = &app.config_file {
        info!("Configuration merged from {:?}", path);
    }
    let config = &app.core_config;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Assembling report for the cells listed in {}...",
        config.entries_path.display()
    );
    let outcome = workflows::report::run(config, &reporter)?;

    println!("✓ Report written to: {}", outcome.output_path.display());
    if let Some(path) = &outcome.summary_path {
        println!("✓ Summary written to: {}", path.display());
    }

    if outcome.is_complete() {
        return Ok(());
    }
    for failure in &outcome.failures {
        warn!(code = %failure.code, "Cell left out of the report: {}", failure.error);
        eprintln!("  ✗ Cell {}: {}", failure.code, failure.error);
    }
    Err(CliError::IncompleteReport {
        failed: outcome.failures.len(),
        total: outcome.failures.len() + outcome.succeeded.len(),
    })
}
