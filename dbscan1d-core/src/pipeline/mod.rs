//! The sweep pipeline behind [`crate::Dbscan1d`].
//!
//! Stages run strictly in sequence, each a pure function of the previous
//! stage's output:
//!
//! - Sort the values and keep the permutation back to input order.
//! - Compute every neighbourhood with a two-pointer sweep.
//! - Flag core points by neighbourhood density.
//! - Propagate cluster ids across overlapping core neighbourhoods.
//! - Attach border points to their nearest core and mark the rest as noise.
//! - Scatter labels and core flags back to input order.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::{debug, debug_span};

use crate::{
    error::{Dbscan1dError, InputError},
    result::ClusteringResult,
};

mod border;
mod classify;
mod neighbourhood;
mod propagate;
mod sorted;
mod unpermute;

#[cfg(test)]
mod property;

use self::{
    border::resolve_borders,
    classify::{Density, classify, validate_weights},
    neighbourhood::sweep,
    propagate::propagate,
    sorted::SortedSequence,
    unpermute::unpermute,
};

/// Failure raised by a pipeline stage before the data source name is known.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum StageError {
    /// The values or weights were rejected up front.
    Input(InputError),
    /// A stage produced output that breaks a pipeline invariant.
    Invariant { context: &'static str },
}

impl StageError {
    pub(crate) fn into_error(self, data_source: &str) -> Dbscan1dError {
        match self {
            Self::Input(error) => Dbscan1dError::InvalidInput {
                data_source: Arc::from(data_source),
                error,
            },
            Self::Invariant { context } => Dbscan1dError::InvariantViolation { context },
        }
    }
}

impl From<InputError> for StageError {
    fn from(error: InputError) -> Self {
        Self::Input(error)
    }
}

/// Clusters `values` with the given parameters.
///
/// When `weights` is supplied, each point contributes its weight to the
/// density of every neighbourhood containing it instead of a unit count.
///
/// # Errors
/// Returns [`StageError::Input`] when the values are empty or non-finite, or
/// the weights are unusable, and [`StageError::Invariant`] if a stage breaks
/// its output contract.
pub(crate) fn cluster(
    values: &[f64],
    weights: Option<&[f64]>,
    eps: f64,
    min_samples: NonZeroUsize,
) -> Result<ClusteringResult, StageError> {
    let _span = debug_span!("core.pipeline", items = values.len()).entered();

    let sorted = SortedSequence::from_values(values)?;
    let density = match weights {
        Some(weights) => {
            validate_weights(values.len(), weights)?;
            let sorted_weights = sorted.gather(weights).ok_or(StageError::Invariant {
                context: "reordering weights into sorted order",
            })?;
            Density::weighted(&sorted_weights)
        }
        None => Density::Uniform,
    };
    debug!(
        min = sorted.values().first().copied(),
        max = sorted.values().last().copied(),
        "values sorted"
    );

    let neighbourhoods = sweep(sorted.values(), eps);
    let core = classify(&neighbourhoods, &density, min_samples);
    debug!(
        core_points = core.iter().filter(|&&is_core| is_core).count(),
        "core points classified"
    );

    let mut propagated = propagate(&neighbourhoods, &core)?;
    debug!(clusters = propagated.cluster_count, "core clusters propagated");

    resolve_borders(sorted.values(), &neighbourhoods, &core, &mut propagated.labels);
    let assignments = unpermute(&propagated.labels, sorted.order())?;
    let core_flags = unpermute(&core, sorted.order())?;

    let result = ClusteringResult::try_from_parts(assignments, core_flags).map_err(|_| {
        StageError::Invariant {
            context: "assembling labels into a dense clustering",
        }
    })?;
    if result.cluster_count() != propagated.cluster_count {
        return Err(StageError::Invariant {
            context: "counting clusters after border resolution",
        });
    }
    debug!(noise = result.noise_count(), "borders resolved");
    Ok(result)
}
