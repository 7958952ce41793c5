//! Benchmark support crate for dbscan1d.
//!
//! Provides seeded synthetic value sources, a quadratic reference DBSCAN,
//! and parameter types used by the Criterion benchmarks that compare the
//! sweep engine against the pairwise baseline.

pub mod error;
pub mod naive;
pub mod params;
pub mod source;
