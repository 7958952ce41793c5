//! Property-based tests for the sweep pipeline.
//!
//! Checks the pipeline against a naive quadratic DBSCAN oracle and verifies
//! the structural guarantees of the output: dense labels, determinism,
//! input-order invariance, monotonicity in `eps`, and the interval-merge
//! degenerate case at `min_samples = 1`.

mod equivalence;
mod invariance;
mod oracle;
mod strategies;
mod types;
