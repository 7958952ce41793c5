//! Sampling helpers for synthetic values.

use std::f64::consts::PI;

use super::{BlobConfig, SyntheticError};
use rand::{Rng, rngs::SmallRng};

pub(super) fn validate_blob_config(config: &BlobConfig) -> Result<(), SyntheticError> {
    if config.point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    if config.cluster_count == 0 {
        return Err(SyntheticError::ZeroClusters);
    }
    let Some(blob_points) = config.point_count.checked_sub(config.noise_points) else {
        return Err(SyntheticError::NoiseExceedsPointCount {
            noise_points: config.noise_points,
            point_count: config.point_count,
        });
    };
    if config.cluster_count > blob_points {
        return Err(SyntheticError::ClusterCountExceedsPointCount {
            cluster_count: config.cluster_count,
            blob_points,
        });
    }
    validate_positive(config.spread, "spread")?;
    validate_positive(config.separation, "separation")
}

fn validate_positive(value: f64, parameter: &'static str) -> Result<(), SyntheticError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SyntheticError::InvalidFloatParameter { parameter })
    }
}

#[expect(clippy::float_arithmetic, reason = "centres are spaced by repeated addition")]
pub(super) fn blob_centroids(cluster_count: usize, separation: f64) -> Vec<f64> {
    std::iter::successors(Some(0.0_f64), |centre| Some(centre + separation))
        .take(cluster_count)
        .collect()
}

#[expect(clippy::float_arithmetic, reason = "noise extends one separation past each end")]
pub(super) fn noise_range(centroids: &[f64], separation: f64) -> (f64, f64) {
    let first = centroids.first().copied().unwrap_or(0.0);
    let last = centroids.last().copied().unwrap_or(0.0);
    (first - separation, last + separation)
}

pub(super) fn sample_uniform_values(
    rng: &mut SmallRng,
    count: usize,
    low: f64,
    high: f64,
) -> Vec<f64> {
    (0..count).map(|_| rng.gen_range(low..high)).collect()
}

#[expect(clippy::float_arithmetic, reason = "values are centre plus scaled noise")]
pub(super) fn sample_blob_values(
    rng: &mut SmallRng,
    centroids: &[f64],
    count: usize,
    spread: f64,
) -> Result<Vec<f64>, SyntheticError> {
    centroids
        .iter()
        .cycle()
        .take(count)
        .map(|&centre| Ok(centre + standard_normal_sample(rng)? * spread))
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "Box-Muller transform requires floating-point arithmetic"
)]
fn standard_normal_sample(rng: &mut SmallRng) -> Result<f64, SyntheticError> {
    let u1 = rng.gen_range(0.0_f64..1.0_f64).max(f64::EPSILON);
    let u2 = rng.gen_range(0.0_f64..1.0_f64);
    let radius = (-2.0_f64 * u1.ln()).sqrt();
    let sample = radius * (2.0_f64 * PI * u2).cos();
    if sample.is_finite() {
        Ok(sample)
    } else {
        Err(SyntheticError::InvalidFloatParameter {
            parameter: "standard_normal_sample",
        })
    }
}
