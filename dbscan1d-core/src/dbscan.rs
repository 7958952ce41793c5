//! Clustering entry points for the dbscan1d library.
//!
//! Provides the [`Dbscan1d`] runtime, which reads values from a
//! [`ValueSource`], runs the sweep pipeline, and wraps stage failures with
//! the source name.

use std::{num::NonZeroUsize, sync::Arc};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::{
    Result,
    error::{Dbscan1dError, InputError},
    pipeline,
    result::ClusteringResult,
    source::ValueSource,
};

/// Entry point for clustering one-dimensional values.
///
/// Construct instances with [`crate::Dbscan1dBuilder`]; a built instance
/// always holds a valid `eps` and `min_samples`.
///
/// # Examples
/// ```
/// use dbscan1d_core::{Dbscan1dBuilder, NOISE_LABEL};
///
/// let dbscan = Dbscan1dBuilder::new()
///     .with_eps(1.5)
///     .with_min_samples(2)
///     .build()
///     .expect("builder must succeed");
/// let result = dbscan.fit(&[1.0, 2.0, 100.0]).expect("run must succeed");
/// assert_eq!(result.labels(), vec![0, 0, NOISE_LABEL]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dbscan1d {
    eps: f64,
    min_samples: NonZeroUsize,
}

impl Dbscan1d {
    pub(crate) const fn new(eps: f64, min_samples: NonZeroUsize) -> Self {
        Self { eps, min_samples }
    }

    /// Returns the neighbourhood radius.
    #[must_use]
    pub const fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the density threshold, counting the point itself.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::Dbscan1dBuilder;
    ///
    /// let dbscan = Dbscan1dBuilder::new()
    ///     .with_min_samples(9)
    ///     .build()
    ///     .expect("builder must accept non-zero min_samples");
    /// assert_eq!(dbscan.min_samples().get(), 9);
    /// ```
    #[must_use]
    pub const fn min_samples(&self) -> NonZeroUsize {
        self.min_samples
    }

    /// Clusters every value in `source`.
    ///
    /// Labels in the result are indexed by the position each value had in
    /// the source.
    ///
    /// # Errors
    /// Returns [`Dbscan1dError::InvalidInput`] when the source is empty or
    /// holds a NaN or infinite value, [`Dbscan1dError::Source`] when reading
    /// from the source fails, and [`Dbscan1dError::InvariantViolation`] if
    /// the pipeline detects an internal inconsistency.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::{Dbscan1dBuilder, SourceError, ValueSource};
    ///
    /// struct Readings(Vec<f64>);
    ///
    /// impl ValueSource for Readings {
    ///     fn len(&self) -> usize { self.0.len() }
    ///     fn name(&self) -> &str { "readings" }
    ///     fn value(&self, index: usize) -> Result<f64, SourceError> {
    ///         self.0.get(index).copied().ok_or(SourceError::OutOfBounds { index })
    ///     }
    /// }
    ///
    /// let dbscan = Dbscan1dBuilder::new()
    ///     .with_eps(1.5)
    ///     .with_min_samples(2)
    ///     .build()
    ///     .expect("builder must succeed");
    /// let result = dbscan
    ///     .run(&Readings(vec![1.0, 2.0, 3.0, 10.0, 11.0, 12.0]))
    ///     .expect("run must succeed");
    /// assert_eq!(result.labels(), vec![0, 0, 0, 1, 1, 1]);
    /// assert_eq!(result.cluster_count(), 2);
    /// ```
    pub fn run<S: ValueSource + ?Sized>(&self, source: &S) -> Result<ClusteringResult> {
        self.run_with_weights(source, None)
    }

    /// Clusters every value in `source`, letting each point contribute
    /// `weights[i]` to neighbourhood density instead of a unit count.
    ///
    /// A point is core when the summed weight of its neighbourhood reaches
    /// `min_samples`. With every weight equal to `1.0` this matches
    /// [`Self::run`].
    ///
    /// # Errors
    /// Returns the same errors as [`Self::run`], plus
    /// [`Dbscan1dError::InvalidInput`] when `weights` differs in length from
    /// the source or holds a negative, NaN, or infinite weight.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::Dbscan1dBuilder;
    ///
    /// let dbscan = Dbscan1dBuilder::new().with_eps(1.0).with_min_samples(3).build()?;
    /// let values = vec![0.0, 0.5, 10.0];
    /// let result = dbscan.run_weighted(&values, &[1.0, 1.0, 4.0])?;
    /// assert_eq!(result.labels(), vec![-1, -1, 0]);
    /// # Ok::<(), dbscan1d_core::Dbscan1dError>(())
    /// ```
    pub fn run_weighted<S: ValueSource + ?Sized>(
        &self,
        source: &S,
        weights: &[f64],
    ) -> Result<ClusteringResult> {
        self.run_with_weights(source, Some(weights))
    }

    /// Clusters a slice of values directly.
    ///
    /// # Errors
    /// Returns the same errors as [`Self::run`].
    pub fn fit(&self, values: &[f64]) -> Result<ClusteringResult> {
        self.run(values)
    }

    /// Clusters several independent sources in parallel.
    ///
    /// Each source gets its own pipeline; results are returned in the order
    /// of `sources`, and one failing source does not affect the others.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::Dbscan1dBuilder;
    ///
    /// let dbscan = Dbscan1dBuilder::new().with_eps(1.0).with_min_samples(2).build()?;
    /// let batches = vec![vec![0.0, 0.5], vec![], vec![3.0, 30.0]];
    /// let results = dbscan.run_batch(&batches);
    /// assert_eq!(results.len(), 3);
    /// assert_eq!(results[0].as_ref().map(|r| r.cluster_count()), Ok(1));
    /// assert!(results[1].is_err());
    /// assert_eq!(results[2].as_ref().map(|r| r.noise_count()), Ok(2));
    /// # Ok::<(), dbscan1d_core::Dbscan1dError>(())
    /// ```
    #[cfg(feature = "parallel")]
    #[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
    #[must_use]
    pub fn run_batch<S: ValueSource + Sync>(&self, sources: &[S]) -> Vec<Result<ClusteringResult>> {
        sources.par_iter().map(|source| self.run(source)).collect()
    }

    #[instrument(
        name = "core.run",
        err,
        skip(self, source, weights),
        fields(
            data_source = %source.name(),
            items = source.len(),
            eps = self.eps,
            min_samples = %self.min_samples,
            weighted = weights.is_some(),
        ),
    )]
    fn run_with_weights<S: ValueSource + ?Sized>(
        &self,
        source: &S,
        weights: Option<&[f64]>,
    ) -> Result<ClusteringResult> {
        let items = source.len();
        if items == 0 {
            warn!(
                data_source = source.name(),
                "data source is empty, returning error"
            );
            return Err(Dbscan1dError::InvalidInput {
                data_source: Arc::from(source.name()),
                error: InputError::Empty,
            });
        }

        let mut values = vec![0.0; items];
        source
            .values_into(&mut values)
            .map_err(|error| Dbscan1dError::Source {
                data_source: Arc::from(source.name()),
                error,
            })?;

        let result = pipeline::cluster(&values, weights, self.eps, self.min_samples)
            .map_err(|error| error.into_error(source.name()))?;
        record_run(items, result.cluster_count());
        info!(
            clusters = result.cluster_count(),
            noise = result.noise_count(),
            "clustering completed"
        );
        Ok(result)
    }
}

#[cfg(feature = "metrics")]
#[expect(
    clippy::cast_precision_loss,
    reason = "cluster counts are recorded as approximate histogram samples"
)]
fn record_run(items: usize, clusters: usize) {
    metrics::counter!("dbscan1d_runs_total").increment(1);
    metrics::counter!("dbscan1d_points_total").increment(items as u64);
    metrics::histogram!("dbscan1d_cluster_count").record(clusters as f64);
}

#[cfg(not(feature = "metrics"))]
const fn record_run(_items: usize, _clusters: usize) {}
