use crate::core::models::convergence::{ConvergenceLog, EnergySample};
use std::fmt;

/// Index of the smallest energy; ties resolve to the first occurrence.
pub fn minimum_index(energies: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &e) in energies.iter().enumerate() {
        match best {
            Some((_, smallest)) if e >= smallest => {}
            _ => best = Some((i, e)),
        }
    }
    best.map(|(i, _)| i)
}

/// Checks that the energy curve falls monotonically into its minimum and rises
/// monotonically after it.
///
/// Only interior points are examined: a point before the minimum must not exceed its
/// predecessor, and a point at or after the minimum must not exceed its successor.
/// Curves with fewer than three points are accepted.
pub fn is_global_minimum(energies: &[f64]) -> bool {
    let Some(min_index) = minimum_index(energies) else {
        return true;
    };
    (1..energies.len().saturating_sub(1)).all(|i| {
        let current = energies[i];
        if i < min_index {
            energies[i - 1] >= current
        } else {
            energies[i + 1] >= current
        }
    })
}

/// Outcome of a lattice-parameter convergence scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceSummary {
    pub samples: Vec<EnergySample>,
    pub minimum_index: usize,
    pub smallest_energy: f64,
    /// Parameter label of the minimum-energy sample, as written in the log.
    pub ideal_parameter: String,
    pub behaved_as_expected: bool,
}

impl ConvergenceSummary {
    /// Returns `None` for a log without samples.
    pub fn analyze(log: &ConvergenceLog) -> Option<Self> {
        let energies = log.energies();
        let minimum_index = minimum_index(&energies)?;
        let minimum = &log.samples()[minimum_index];
        Some(Self {
            samples: log.samples().to_vec(),
            minimum_index,
            smallest_energy: minimum.energy,
            ideal_parameter: minimum.parameter.clone(),
            behaved_as_expected: is_global_minimum(&energies),
        })
    }
}

/// Displays an energy the way the convergence reports have always printed it: at least
/// one fractional digit (`-40.0`), and `1.0E-5` notation outside `[1e-3, 1e7)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyText(pub f64);

impl fmt::Display for EnergyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() {
            return write!(f, "{value}");
        }
        let magnitude = value.abs();
        if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
            let text = value.to_string();
            if text.contains('.') {
                f.write_str(&text)
            } else {
                write!(f, "{text}.0")
            }
        } else {
            let text = format!("{value:e}");
            let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
            if mantissa.contains('.') {
                write!(f, "{mantissa}E{exponent}")
            } else {
                write!(f, "{mantissa}.0E{exponent}")
            }
        }
    }
}
