/// One point of a lattice-parameter scan.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergySample {
    /// The sampled lattice parameter exactly as written in the log.
    pub parameter: String,
    /// Total energy of the relaxed cell, in eV.
    pub energy: f64,
}

/// The ordered samples of one convergence run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvergenceLog {
    samples: Vec<EnergySample>,
}

impl ConvergenceLog {
    pub fn new(samples: Vec<EnergySample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[EnergySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn energies(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.energy).collect()
    }
}
