//! Core-point classification.

use std::num::NonZeroUsize;

use crate::error::InputError;

use super::neighbourhood::Neighbourhood;

/// How much each point contributes to a neighbourhood's density.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Density {
    /// Every point counts once.
    Uniform,
    /// Prefix sums of per-point weights in sorted order, with a leading zero,
    /// so the weight of `[lo, hi)` is `prefix[hi] - prefix[lo]`.
    Weighted { prefix: Vec<f64> },
}

impl Density {
    /// Builds a weighted density from weights already arranged in sorted
    /// order.
    pub(crate) fn weighted(sorted_weights: &[f64]) -> Self {
        let mut prefix = Vec::with_capacity(sorted_weights.len() + 1);
        prefix.push(0.0);
        let mut running = 0.0_f64;
        for &weight in sorted_weights {
            running = accumulate(running, weight);
            prefix.push(running);
        }
        Self::Weighted { prefix }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "weighted density subtracts prefix sums"
)]
fn range_weight(prefix: &[f64], hood: Neighbourhood) -> Option<f64> {
    Some(prefix.get(hood.hi)? - prefix.get(hood.lo)?)
}

#[expect(clippy::float_arithmetic, reason = "prefix sums add weights")]
fn accumulate(running: f64, weight: f64) -> f64 {
    running + weight
}

/// Checks caller-supplied weights against the value count.
///
/// # Errors
/// Returns [`InputError::WeightLengthMismatch`] or
/// [`InputError::InvalidWeight`] for the first unusable weight.
pub(crate) fn validate_weights(values: usize, weights: &[f64]) -> Result<(), InputError> {
    if weights.len() != values {
        return Err(InputError::WeightLengthMismatch {
            values,
            weights: weights.len(),
        });
    }
    match weights
        .iter()
        .enumerate()
        .find(|(_, weight)| !weight.is_finite() || **weight < 0.0)
    {
        Some((index, &weight)) => Err(InputError::InvalidWeight { index, weight }),
        None => Ok(()),
    }
}

/// Flags each sorted position whose neighbourhood density reaches
/// `min_samples`.
#[expect(
    clippy::cast_precision_loss,
    reason = "thresholds beyond 2^53 samples are not meaningful for weighted density"
)]
pub(crate) fn classify(
    neighbourhoods: &[Neighbourhood],
    density: &Density,
    min_samples: NonZeroUsize,
) -> Vec<bool> {
    let threshold = min_samples.get();
    match density {
        Density::Uniform => neighbourhoods
            .iter()
            .map(|hood| hood.len() >= threshold)
            .collect(),
        Density::Weighted { prefix } => {
            let weight_threshold = threshold as f64;
            neighbourhoods
                .iter()
                .map(|&hood| {
                    range_weight(prefix, hood).is_some_and(|weight| weight >= weight_threshold)
                })
                .collect()
        }
    }
}
