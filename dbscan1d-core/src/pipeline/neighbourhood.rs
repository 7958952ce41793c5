//! Neighbourhood ranges over the sorted values.
//!
//! In one dimension the points within `eps` of a sorted position form a
//! contiguous run, so a neighbourhood is stored as a pair of bounds into the
//! sorted array instead of a materialised neighbour list.

/// Half-open interval `[lo, hi)` of sorted positions within `eps` of a point.
///
/// Always satisfies `lo <= position < hi` for the position it was computed
/// for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Neighbourhood {
    pub(crate) lo: usize,
    pub(crate) hi: usize,
}

impl Neighbourhood {
    /// Number of points in the neighbourhood, the point itself included.
    pub(crate) const fn len(self) -> usize {
        self.hi.saturating_sub(self.lo)
    }

    pub(crate) const fn contains(self, position: usize) -> bool {
        self.lo <= position && position < self.hi
    }
}

/// Computes every neighbourhood with a two-pointer sweep.
///
/// Both bounds are non-decreasing in the position, so each pointer crosses
/// the array at most once and the whole pass is linear.
#[expect(
    clippy::float_arithmetic,
    reason = "neighbourhood membership compares value differences against eps"
)]
pub(crate) fn sweep(values: &[f64], eps: f64) -> Vec<Neighbourhood> {
    let mut neighbourhoods = Vec::with_capacity(values.len());
    let mut lo = 0_usize;
    let mut hi = 0_usize;
    for (position, &value) in values.iter().enumerate() {
        while values.get(lo).is_some_and(|&left| value - left > eps) {
            lo += 1;
        }
        hi = hi.max(position + 1);
        while values.get(hi).is_some_and(|&right| right - value <= eps) {
            hi += 1;
        }
        neighbourhoods.push(Neighbourhood { lo, hi });
    }
    neighbourhoods
}

/// Computes a single neighbourhood with two binary searches.
///
/// Returns `None` when `position` is outside `values`. Agrees with
/// [`sweep`] at every position; the property suites use it as the
/// on-demand cross-check for the sweep.
#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "neighbourhood membership compares value differences against eps"
)]
pub(crate) fn locate(values: &[f64], position: usize, eps: f64) -> Option<Neighbourhood> {
    let &value = values.get(position)?;
    let (before, after) = values.split_at(position);
    let lo = before.partition_point(|&left| value - left > eps);
    let hi = position + after.partition_point(|&right| right - value <= eps);
    Some(Neighbourhood { lo, hi })
}
