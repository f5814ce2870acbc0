use super::cell::{CellReport, analyze_cell};
use crate::core::io::entries::{CellEntry, EntriesFile};
use crate::core::io::traits::SimulationFile;
use crate::core::models::code::StructureCode;
use crate::engine::config::ReportConfig;
use crate::engine::energy::EnergyText;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

pub const REPORT_TITLE: &str = "Results for the convergence of graphane cells";

/// An auxiliary input file echoed in the common section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxFile {
    pub name: String,
    pub content: String,
}

#[derive(Debug)]
pub struct CellOutcome {
    pub entry: CellEntry,
    pub result: Result<CellReport, EngineError>,
}

#[derive(Debug)]
pub struct CellFailure {
    pub code: String,
    pub error: EngineError,
}

#[derive(Debug)]
pub struct ReportOutcome {
    pub output_path: PathBuf,
    pub summary_path: Option<PathBuf>,
    /// Codes of the cells rendered in full, in entry order.
    pub succeeded: Vec<String>,
    pub failures: Vec<CellFailure>,
}

impl ReportOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One line of the CSV summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub code: String,
    pub degeneracy: String,
    pub ideal_parameter: String,
    pub smallest_energy: f64,
    pub expected_shape: bool,
    pub mean_cc_bond: f64,
    pub mean_ch_bond: Option<f64>,
}

impl From<&CellReport> for SummaryRow {
    fn from(report: &CellReport) -> Self {
        let bonds = report.cell.bond_lengths();
        Self {
            code: report.entry.code.clone(),
            degeneracy: report.entry.degeneracy.clone(),
            ideal_parameter: report.convergence.ideal_parameter.clone(),
            smallest_energy: report.convergence.smallest_energy,
            expected_shape: report.convergence.behaved_as_expected,
            mean_cc_bond: bonds.mean_base(),
            mean_ch_bond: bonds.mean_substituent(),
        }
    }
}

/// Analyzes every entry of the batch and writes the text report (and the optional CSV
/// summary).
///
/// A cell that fails is rendered as a failure block and listed in
/// [`ReportOutcome::failures`]; the remaining cells are still processed. Only problems
/// with the shared inputs (entry list, auxiliary files) or with writing the outputs
/// abort the run.
#[instrument(skip_all, name = "report_workflow")]
pub fn run(
    config: &ReportConfig,
    reporter: &ProgressReporter,
) -> Result<ReportOutcome, EngineError> {
    // === Phase 1: Shared inputs ===
    reporter.report(Progress::PhaseStart {
        name: "Reading Inputs",
    });
    let entries = EntriesFile::read_from_path(&config.entries_path)
        .map_err(|e| EngineError::from_entries(&config.entries_path, e))?;
    let aux = read_aux_files(config)?;
    info!(
        cells = entries.len(),
        aux_files = aux.len(),
        "Loaded batch entries."
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Per-cell analysis ===
    let outcomes = analyze_entries(&entries, config, reporter);

    // === Phase 3: Output ===
    reporter.report(Progress::PhaseStart {
        name: "Writing Report",
    });
    let document = ReportDocument {
        aux: &aux,
        cells: &outcomes,
    };
    fs::write(&config.output_path, document.to_string())
        .map_err(|e| EngineError::Output {
            path: config.output_path.clone(),
            source: e,
        })?;

    let summary_path = match config.summary_path() {
        Some(path) => {
            let rows: Vec<SummaryRow> = outcomes
                .iter()
                .filter_map(|o| o.result.as_ref().ok())
                .map(SummaryRow::from)
                .collect();
            write_summary(path, &rows)?;
            Some(path.to_path_buf())
        }
        None => None,
    };
    reporter.report(Progress::PhaseFinish);

    let mut succeeded = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(_) => succeeded.push(outcome.entry.code),
            Err(error) => failures.push(CellFailure {
                code: outcome.entry.code,
                error,
            }),
        }
    }

    info!(
        succeeded = succeeded.len(),
        failed = failures.len(),
        output = %config.output_path.display(),
        "Report written."
    );
    Ok(ReportOutcome {
        output_path: config.output_path.clone(),
        summary_path,
        succeeded,
        failures,
    })
}

fn read_aux_files(config: &ReportConfig) -> Result<Vec<AuxFile>, EngineError> {
    config
        .layout
        .aux_files
        .iter()
        .map(|name| {
            let path = config.layout.aux_path(name);
            let content =
                fs::read_to_string(&path).map_err(|e| EngineError::missing_input(&path, e))?;
            Ok(AuxFile {
                name: name.clone(),
                content,
            })
        })
        .collect()
}

fn analyze_entries(
    entries: &[CellEntry],
    config: &ReportConfig,
    reporter: &ProgressReporter,
) -> Vec<CellOutcome> {
    reporter.report(Progress::PhaseStart {
        name: "Analyzing Cells",
    });
    reporter.report(Progress::TaskStart {
        total_steps: entries.len() as u64,
    });

    let analyze = |entry: &CellEntry| {
        reporter.report(Progress::CellStart {
            code: entry.code.clone(),
        });
        let result = analyze_cell(entry, &config.layout, &config.geometry);
        if let Err(e) = &result {
            warn!(code = %entry.code, error = %e, "Cell analysis failed.");
        }
        reporter.report(Progress::CellFinish {
            code: entry.code.clone(),
            succeeded: result.is_ok(),
        });
        reporter.report(Progress::TaskIncrement);
        CellOutcome {
            entry: entry.clone(),
            result,
        }
    };

    let outcomes: Vec<CellOutcome> = if config.parallel {
        entries.par_iter().map(analyze).collect()
    } else {
        entries.iter().map(analyze).collect()
    };

    reporter.report(Progress::TaskFinish);
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        reporter.report(Progress::Message(format!(
            "{failed} of {} cell(s) failed",
            outcomes.len()
        )));
    }
    reporter.report(Progress::PhaseFinish);
    outcomes
}

fn write_summary(path: &Path, rows: &[SummaryRow]) -> Result<(), EngineError> {
    let to_error = |source: csv::Error| EngineError::Summary {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(to_error)?;
    for row in rows {
        writer.serialize(row).map_err(to_error)?;
    }
    writer.flush().map_err(|e| to_error(e.into()))?;
    Ok(())
}

/// The plain-text report, rendered through [`fmt::Display`].
pub struct ReportDocument<'a> {
    pub aux: &'a [AuxFile],
    pub cells: &'a [CellOutcome],
}

impl fmt::Display for ReportDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, REPORT_TITLE, '=')?;

        banner(f, "1. Common parameters for all cells", '=')?;
        for (i, aux) in self.aux.iter().enumerate() {
            banner(f, &format!("1.{} {}", i + 1, aux.name), '=')?;
            write!(f, "{}\n\n", trim_trailing_newlines(&aux.content))?;
        }

        banner(f, "2. Detailed results for each cell", '=')?;
        for outcome in self.cells {
            match &outcome.result {
                Ok(report) => write_cell(f, report)?,
                Err(error) => write_failure(f, &outcome.entry, error)?,
            }
        }
        Ok(())
    }
}

fn banner(f: &mut fmt::Formatter<'_>, title: &str, fill: char) -> fmt::Result {
    let rule: String = std::iter::repeat_n(fill, title.chars().count()).collect();
    write!(f, "{rule}\n{title}\n{rule}\n\n")
}

fn trim_trailing_newlines(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

fn write_cell_header(f: &mut fmt::Formatter<'_>, entry: &CellEntry) -> fmt::Result {
    banner(f, &format!("Cell {}", entry.code), '#')?;
    write!(f, "Degeneracy: {}\n\n", entry.degeneracy)
}

fn write_cell(f: &mut fmt::Formatter<'_>, report: &CellReport) -> fmt::Result {
    write_cell_header(f, &report.entry)?;
    write_composition(f, report.cell.code())?;

    let convergence = &report.convergence;
    banner(f, "Energy convergence results:", '=')?;
    banner(
        f,
        "Energies (in eV) for each lattice parameter (in angstroms)",
        '=',
    )?;
    for sample in &convergence.samples {
        writeln!(f, "{} {}", sample.parameter, EnergyText(sample.energy))?;
    }
    write!(
        f,
        "\nSmallest energy: {} eV\n",
        EnergyText(convergence.smallest_energy)
    )?;
    write!(f, "\nIdeal parameter: {} Å\n\n", convergence.ideal_parameter)?;
    write!(
        f,
        "Energy curve behaved as expected: {}\n\n",
        if convergence.behaved_as_expected {
            "Yes"
        } else {
            "No"
        }
    )?;

    banner(f, "Converged POSCAR", '=')?;
    write!(f, "{}\n\n", trim_trailing_newlines(&report.poscar_text))?;

    banner(f, "Bond lengths (in angstroms)", '=')?;
    let bonds = report.cell.bond_lengths();
    write!(f, "C-C bond lengths:\n\n")?;
    for length in bonds.base() {
        writeln!(f, "{length:.5}")?;
    }
    writeln!(f, "\nAverage C-C bond length: {:.3} Å", bonds.mean_base())?;
    if let Some(mean) = bonds.mean_substituent() {
        write!(f, "\nC-H bond length(s):\n\n")?;
        for length in bonds.substituent() {
            writeln!(f, "{length:.5}")?;
        }
        writeln!(f, "\nAverage C-H bond length: {mean:.3} Å")?;
    }
    writeln!(f)
}

fn write_composition(f: &mut fmt::Formatter<'_>, code: &StructureCode) -> fmt::Result {
    let composition = code.composition();
    write!(f, "Composition: {}C", composition.base_sites)?;
    if composition.substituents == 0 {
        return write!(f, "\n\n");
    }
    writeln!(f, " {}H", composition.substituents)?;
    if composition.below > 0 {
        writeln!(f, "{} above the graphene plane", composition.above)?;
        writeln!(f, "{} below the graphene plane", composition.below)?;
    }
    writeln!(f)
}

fn write_failure(
    f: &mut fmt::Formatter<'_>,
    entry: &CellEntry,
    error: &EngineError,
) -> fmt::Result {
    write_cell_header(f, entry)?;
    write!(f, "Analysis failed: {error}\n\n")
}
