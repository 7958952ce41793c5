//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark data so
//! setup functions can propagate failures with `?` instead of `.expect()`.

use crate::source::SyntheticError;
use dbscan1d_core::Dbscan1dError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic data generation failed.
    #[error("synthetic source generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Engine configuration or a warm-up run failed.
    #[error("clustering failed: {0}")]
    Clustering(#[from] Dbscan1dError),
}
