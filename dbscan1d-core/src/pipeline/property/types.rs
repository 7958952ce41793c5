//! Fixture types for pipeline property tests.

use std::num::NonZeroUsize;

/// Shape of the generated values.
///
/// Each layout stresses a different part of the sweep: blob edges exercise
/// border resolution, duplicates and grids exercise ties at exactly `eps`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum ValueLayout {
    /// A few dense blobs plus scattered outliers.
    Blobs,
    /// Values drawn from a handful of repeated levels.
    Duplicates,
    /// Multiples of a power-of-two step, with `eps` also on the grid, so
    /// neighbourhood boundaries land exactly on `eps`.
    Grid,
    /// Uniformly scattered values.
    Uniform,
}

/// Input for one pipeline property case.
#[derive(Clone, Debug)]
pub(super) struct PipelineFixture {
    /// Values in input order.
    pub values: Vec<f64>,
    /// Neighbourhood radius.
    pub eps: f64,
    /// Density threshold.
    pub min_samples: NonZeroUsize,
    /// Layout used during generation.
    pub layout: ValueLayout,
}

impl PipelineFixture {
    /// Short description for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "layout={:?}, n={}, eps={}, min_samples={}",
            self.layout,
            self.values.len(),
            self.eps,
            self.min_samples,
        )
    }
}
