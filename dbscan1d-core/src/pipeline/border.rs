//! Border and noise resolution.
//!
//! Each non-core point only needs to look at the closest core point on either
//! side of it: if the closest one on a side is outside the point's
//! neighbourhood, every core point further along that side is too.
//!
//! Equal values share a neighbourhood, so a run of them is resolved as one
//! unit. Distances are measured from the run's edge facing each core, which
//! keeps every copy of a value in the same cluster whatever their input
//! order.

use std::cmp::Ordering;

use crate::result::Assignment;

use super::neighbourhood::Neighbourhood;

#[derive(Clone, Copy, Debug)]
struct Claim {
    distance: usize,
    assignment: Assignment,
}

impl Claim {
    /// Prefers the nearer claim, then the lower cluster id.
    fn better(self, other: Self) -> Self {
        let key = |claim: &Self| (claim.distance, claim.assignment.cluster());
        if key(&other) < key(&self) { other } else { self }
    }
}

/// First and last sorted position of a run of equal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Run {
    first: usize,
    last: usize,
}

/// Labels every non-core position with the cluster of its nearest qualifying
/// core point, or [`Assignment::Noise`] when no core point reaches it.
///
/// `values` must be sorted and `labels` must hold the propagated core
/// assignments in the same order; core positions are left untouched.
pub(crate) fn resolve_borders(
    values: &[f64],
    neighbourhoods: &[Neighbourhood],
    core: &[bool],
    labels: &mut [Assignment],
) {
    let runs = equal_runs(values);
    let left = nearest_left_claims(neighbourhoods, core, labels, &runs);
    let right = nearest_right_claims(neighbourhoods, core, labels, &runs);

    let non_core = labels
        .iter_mut()
        .zip(core)
        .zip(left.into_iter().zip(right))
        .filter(|((_, is_core), _)| !**is_core);
    for ((label, _), (from_left, from_right)) in non_core {
        *label = match (from_left, from_right) {
            (Some(l), Some(r)) => l.better(r).assignment,
            (Some(claim), None) | (None, Some(claim)) => claim.assignment,
            (None, None) => Assignment::Noise,
        };
    }
}

/// The run of equal values holding each sorted position.
fn equal_runs(values: &[f64]) -> Vec<Run> {
    let mut runs = Vec::with_capacity(values.len());
    let same = |a: &f64, b: &f64| a.partial_cmp(b) == Some(Ordering::Equal);
    for chunk in values.chunk_by(same) {
        let first = runs.len();
        let run = Run {
            first,
            last: first + chunk.len().saturating_sub(1),
        };
        runs.extend(std::iter::repeat_n(run, chunk.len()));
    }
    runs
}

/// For every position, the closest core point at or before it that lies in
/// its neighbourhood, measured from the start of its run.
fn nearest_left_claims(
    neighbourhoods: &[Neighbourhood],
    core: &[bool],
    labels: &[Assignment],
    runs: &[Run],
) -> Vec<Option<Claim>> {
    let mut last_core: Option<usize> = None;
    neighbourhoods
        .iter()
        .zip(core)
        .zip(runs)
        .enumerate()
        .map(|(position, ((&hood, &is_core), run))| {
            if is_core {
                last_core = Some(position);
            }
            claim_from(last_core, run.first, hood, labels)
        })
        .collect()
}

/// For every position, the closest core point at or after it that lies in
/// its neighbourhood, measured from the end of its run.
fn nearest_right_claims(
    neighbourhoods: &[Neighbourhood],
    core: &[bool],
    labels: &[Assignment],
    runs: &[Run],
) -> Vec<Option<Claim>> {
    let mut next_core: Option<usize> = None;
    let mut claims: Vec<Option<Claim>> = neighbourhoods
        .iter()
        .zip(core)
        .zip(runs)
        .enumerate()
        .rev()
        .map(|(position, ((&hood, &is_core), run))| {
            if is_core {
                next_core = Some(position);
            }
            claim_from(next_core, run.last, hood, labels)
        })
        .collect();
    claims.reverse();
    claims
}

fn claim_from(
    candidate: Option<usize>,
    edge: usize,
    hood: Neighbourhood,
    labels: &[Assignment],
) -> Option<Claim> {
    let core_position = candidate.filter(|&c| hood.contains(c))?;
    let assignment = *labels.get(core_position)?;
    Some(Claim {
        distance: core_position.abs_diff(edge),
        assignment,
    })
}
