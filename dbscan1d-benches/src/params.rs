//! Benchmark parameter types.

use std::fmt;

/// Parameters for one clustering benchmark run.
#[derive(Clone, Debug)]
pub struct ClusteringBenchParams {
    /// Number of values in the dataset.
    pub point_count: usize,
    /// Density threshold passed to the engine.
    pub min_samples: usize,
}

impl fmt::Display for ClusteringBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},min={}", self.point_count, self.min_samples)
    }
}
