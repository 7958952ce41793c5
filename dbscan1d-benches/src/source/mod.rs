//! Seeded synthetic value sources for benchmarks.
//!
//! Generators are deterministic for a given seed so Criterion compares like
//! with like across runs.

mod errors;
mod generation;

use dbscan1d_core::{SourceError, ValueSource};
use rand::{SeedableRng, rngs::SmallRng};

pub use errors::SyntheticError;

use generation::{
    blob_centroids, noise_range, sample_blob_values, sample_uniform_values, validate_blob_config,
};

/// Configuration for uniformly distributed values.
#[derive(Clone, Debug)]
pub struct UniformConfig {
    /// Number of values to generate.
    pub point_count: usize,
    /// Inclusive lower bound.
    pub low: f64,
    /// Exclusive upper bound.
    pub high: f64,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Configuration for Gaussian blobs along the number line plus uniform noise.
#[derive(Clone, Debug)]
pub struct BlobConfig {
    /// Total number of values, noise included.
    pub point_count: usize,
    /// Number of blobs.
    pub cluster_count: usize,
    /// Standard deviation of each blob.
    pub spread: f64,
    /// Distance between neighbouring blob centres.
    pub separation: f64,
    /// Number of values drawn uniformly across the whole range instead of
    /// from a blob.
    pub noise_points: usize,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// In-memory synthetic values implementing [`ValueSource`].
#[derive(Clone, Debug)]
pub struct SyntheticValues {
    name: &'static str,
    values: Vec<f64>,
}

impl SyntheticValues {
    /// Generates values uniformly in `[low, high)`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    pub fn generate_uniform(config: &UniformConfig) -> Result<Self, SyntheticError> {
        if config.point_count == 0 {
            return Err(SyntheticError::ZeroPoints);
        }
        if !(config.low.is_finite() && config.high.is_finite() && config.low < config.high) {
            return Err(SyntheticError::InvalidRange {
                low: config.low,
                high: config.high,
            });
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        Ok(Self {
            name: "synthetic-uniform",
            values: sample_uniform_values(&mut rng, config.point_count, config.low, config.high),
        })
    }

    /// Generates blobs centred `separation` apart with uniform noise spread
    /// one separation beyond the outermost centres.
    ///
    /// Blob values are emitted round-robin across centres and the noise is
    /// appended last, so the output is not sorted.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    pub fn generate_blobs(config: &BlobConfig) -> Result<Self, SyntheticError> {
        validate_blob_config(config)?;
        let centroids = blob_centroids(config.cluster_count, config.separation);
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let blob_points = config.point_count - config.noise_points;
        let mut values = sample_blob_values(&mut rng, &centroids, blob_points, config.spread)?;
        if config.noise_points > 0 {
            let (low, high) = noise_range(&centroids, config.separation);
            values.extend(sample_uniform_values(&mut rng, config.noise_points, low, high));
        }
        Ok(Self {
            name: "synthetic-blobs",
            values,
        })
    }

    /// Wraps existing values, for example a sorted copy of generated data.
    #[must_use]
    pub const fn from_values(values: Vec<f64>) -> Self {
        Self {
            name: "synthetic-values",
            values,
        }
    }

    /// Returns the generated values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl ValueSource for SyntheticValues {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn name(&self) -> &str {
        self.name
    }

    fn value(&self, index: usize) -> Result<f64, SourceError> {
        self.values
            .get(index)
            .copied()
            .ok_or(SourceError::OutOfBounds { index })
    }

    fn values_into(&self, out: &mut [f64]) -> Result<(), SourceError> {
        self.values.as_slice().values_into(out)
    }
}
