//! Result types for clustering operations.
//!
//! Provides the per-point [`Assignment`] labels, the [`ClusteringResult`]
//! returned by [`crate::Dbscan1d::run`], and validation of the dense cluster
//! identifier invariant.

use std::collections::BTreeSet;
use thiserror::Error;

/// Raw label used for noise points when assignments are flattened to
/// integers.
pub const NOISE_LABEL: i64 = -1;

/// Identifier assigned to a cluster.
///
/// Identifiers are never negative, so every one flattens into an `i64`
/// label.
///
/// # Examples
/// ```
/// use dbscan1d_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(i64);

impl ClusterId {
    /// Creates a new cluster identifier.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::ClusterId;
    ///
    /// let id = ClusterId::new(2);
    /// assert_eq!(id.get(), 2);
    /// ```
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(i64::from(id))
    }

    /// Numbers the cluster at `index` in sweep order, or `None` when the
    /// index does not fit an `i64` label.
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        i64::try_from(index).ok().map(Self)
    }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0.unsigned_abs() }
}

/// Outcome for a single point.
///
/// # Examples
/// ```
/// use dbscan1d_core::{Assignment, ClusterId, NOISE_LABEL};
///
/// assert_eq!(Assignment::Cluster(ClusterId::new(3)).label(), 3);
/// assert_eq!(Assignment::Noise.label(), NOISE_LABEL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assignment {
    /// The point belongs to the given cluster.
    Cluster(ClusterId),
    /// The point is neither core nor within `eps` of a core point.
    Noise,
}

impl Assignment {
    /// Returns the cluster, if any.
    #[must_use]
    pub const fn cluster(self) -> Option<ClusterId> {
        match self {
            Self::Cluster(id) => Some(id),
            Self::Noise => None,
        }
    }

    /// Returns whether the point was labelled as noise.
    #[must_use]
    pub const fn is_noise(self) -> bool {
        matches!(self, Self::Noise)
    }

    /// Flattens the assignment to the conventional integer label, using
    /// [`NOISE_LABEL`] for noise.
    #[must_use]
    pub const fn label(self) -> i64 {
        match self {
            Self::Cluster(id) => id.0,
            Self::Noise => NOISE_LABEL,
        }
    }
}

/// Error returned when assignments violate the result invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidAssignments {
    /// Clusters exist but none of them is cluster `0`.
    #[error("cluster identifiers must include 0")]
    MissingZero,
    /// The cluster identifiers skip values.
    #[error("cluster identifiers must be contiguous without gaps")]
    Gap,
    /// The core flags do not describe the same points as the assignments.
    #[error("{core_flags} core flags were supplied for {assignments} assignments")]
    CoreFlagLengthMismatch {
        /// Number of assignments.
        assignments: usize,
        /// Number of core flags.
        core_flags: usize,
    },
}

/// Represents the output of a [`crate::Dbscan1d::run`] invocation.
///
/// Assignments and core flags are indexed by the original input position.
///
/// # Examples
/// ```
/// use dbscan1d_core::{Assignment, ClusterId, ClusteringResult};
///
/// let result = ClusteringResult::try_from_parts(
///     vec![
///         Assignment::Cluster(ClusterId::new(0)),
///         Assignment::Noise,
///         Assignment::Cluster(ClusterId::new(0)),
///     ],
///     vec![true, false, true],
/// )?;
/// assert_eq!(result.labels(), vec![0, -1, 0]);
/// assert_eq!(result.cluster_count(), 1);
/// assert_eq!(result.core_sample_indices(), vec![0, 2]);
/// # Ok::<(), dbscan1d_core::InvalidAssignments>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusteringResult {
    assignments: Vec<Assignment>,
    core: Vec<bool>,
    cluster_count: usize,
}

impl ClusteringResult {
    /// Attempts to build a result from assignments and core flags.
    ///
    /// The non-noise identifiers must form the dense range `0..k`. An input
    /// consisting solely of noise is accepted and yields `cluster_count == 0`.
    ///
    /// # Errors
    /// Returns [`InvalidAssignments::CoreFlagLengthMismatch`] when the two
    /// vectors differ in length, [`InvalidAssignments::MissingZero`] when
    /// clusters exist but `0` is absent, [`InvalidAssignments::Gap`] when
    /// identifiers skip values.
    pub fn try_from_parts(
        assignments: Vec<Assignment>,
        core: Vec<bool>,
    ) -> Result<Self, InvalidAssignments> {
        if assignments.len() != core.len() {
            return Err(InvalidAssignments::CoreFlagLengthMismatch {
                assignments: assignments.len(),
                core_flags: core.len(),
            });
        }

        let seen: BTreeSet<u64> = assignments
            .iter()
            .filter_map(|assignment| assignment.cluster())
            .map(ClusterId::get)
            .collect();

        let Some(&max_id) = seen.last() else {
            return Ok(Self {
                assignments,
                core,
                cluster_count: 0,
            });
        };
        if !seen.contains(&0) {
            return Err(InvalidAssignments::MissingZero);
        }
        let cluster_count = seen.len();
        let dense = usize::try_from(max_id)
            .ok()
            .and_then(|max| max.checked_add(1))
            .is_some_and(|expected| expected == cluster_count);
        if !dense {
            return Err(InvalidAssignments::Gap);
        }

        Ok(Self {
            assignments,
            core,
            cluster_count,
        })
    }

    /// Returns the assignments in original input order.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Returns integer labels in original input order, with
    /// [`NOISE_LABEL`] marking noise.
    #[must_use]
    pub fn labels(&self) -> Vec<i64> {
        self.assignments.iter().map(|a| a.label()).collect()
    }

    /// Returns whether each original position is a core point.
    #[must_use]
    pub fn core_flags(&self) -> &[bool] {
        &self.core
    }

    /// Returns the ascending original indices of the core points.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::Dbscan1dBuilder;
    ///
    /// let dbscan = Dbscan1dBuilder::new().with_eps(0.5).with_min_samples(2).build()?;
    /// let result = dbscan.fit(&[10.0, 0.0, 0.2, 5.0])?;
    /// assert_eq!(result.core_sample_indices(), vec![1, 2]);
    /// # Ok::<(), dbscan1d_core::Dbscan1dError>(())
    /// ```
    #[must_use]
    pub fn core_sample_indices(&self) -> Vec<usize> {
        self.core
            .iter()
            .enumerate()
            .filter_map(|(index, &is_core)| is_core.then_some(index))
            .collect()
    }

    /// Number of distinct clusters, not counting noise.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Number of points labelled as noise.
    #[must_use]
    pub fn noise_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_noise()).count()
    }

    /// Number of points in each cluster, indexed by cluster identifier.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::Dbscan1dBuilder;
    ///
    /// let dbscan = Dbscan1dBuilder::new().with_eps(1.5).with_min_samples(2).build()?;
    /// let result = dbscan.fit(&[1.0, 2.0, 3.0, 10.0, 11.0, 50.0])?;
    /// assert_eq!(result.cluster_sizes(), vec![3, 2]);
    /// # Ok::<(), dbscan1d_core::Dbscan1dError>(())
    /// ```
    #[must_use]
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0_usize; self.cluster_count];
        for id in self.assignments.iter().filter_map(|a| a.cluster()) {
            if let Some(size) = usize::try_from(id.get())
                .ok()
                .and_then(|slot| sizes.get_mut(slot))
            {
                *size += 1;
            }
        }
        sizes
    }

    /// Returns the number of points that were clustered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns whether the result covers no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
