use crate::cli::EnergyArgs;
use crate::error::Result;
use cellbond::engine::energy::{ConvergenceSummary, EnergyText};
use cellbond::workflows::cell::analyze_convergence;
use std::fmt::Write;
use tracing::info;

pub fn run(args: EnergyArgs) -> Result<()> {
    info!("Analyzing convergence log {:?}", &args.log);
    let summary = analyze_convergence(&args.log)?;
    print!("{}", render_convergence(&summary));
    Ok(())
}

pub fn render_convergence(summary: &ConvergenceSummary) -> String {
    let mut out = String::from("Parameter (Å)  Energy (eV)\n");
    for (i, sample) in summary.samples.iter().enumerate() {
        let marker = if i == summary.minimum_index { "  <- minimum" } else { "" };
        let _ = writeln!(
            out,
            "{:<14} {}{marker}",
            sample.parameter,
            EnergyText(sample.energy)
        );
    }
    let _ = write!(
        out,
        "\nSmallest energy: {} eV\nIdeal parameter: {} Å\nEnergy curve behaved as expected: {}\n",
        EnergyText(summary.smallest_energy),
        summary.ideal_parameter,
        if summary.behaved_as_expected { "Yes" } else { "No" }
    );
    out
}
