//! Builder utilities for configuring [`Dbscan1d`] runs.
//!
//! Validates `eps` and `min_samples` once, up front, so a constructed
//! [`Dbscan1d`] is always runnable.

use std::num::NonZeroUsize;

use crate::{Result, dbscan::Dbscan1d, error::Dbscan1dError};

const DEFAULT_EPS: f64 = 0.5;
const DEFAULT_MIN_SAMPLES: usize = 5;

/// Configures and constructs [`Dbscan1d`] instances.
///
/// # Examples
/// ```
/// use dbscan1d_core::Dbscan1dBuilder;
///
/// let dbscan = Dbscan1dBuilder::new()
///     .with_eps(1.5)
///     .with_min_samples(2)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(dbscan.eps(), 1.5);
/// assert_eq!(dbscan.min_samples().get(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dbscan1dBuilder {
    eps: f64,
    min_samples: usize,
}

impl Default for Dbscan1dBuilder {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            min_samples: DEFAULT_MIN_SAMPLES,
        }
    }
}

impl Dbscan1dBuilder {
    /// Creates a builder populated with default parameters
    /// (`eps = 0.5`, `min_samples = 5`).
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::Dbscan1dBuilder;
    ///
    /// let builder = Dbscan1dBuilder::new();
    /// assert_eq!(builder.eps(), 0.5);
    /// assert_eq!(builder.min_samples(), 5);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the neighbourhood radius.
    #[must_use]
    pub const fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Returns the configured neighbourhood radius.
    #[must_use]
    pub const fn eps(&self) -> f64 {
        self.eps
    }

    /// Overrides the density threshold. The count includes the point itself.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::Dbscan1dBuilder;
    ///
    /// let builder = Dbscan1dBuilder::new().with_min_samples(10);
    /// assert_eq!(builder.min_samples(), 10);
    /// ```
    #[must_use]
    pub const fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Returns the configured density threshold.
    #[must_use]
    pub const fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Validates the configuration and constructs a [`Dbscan1d`] instance.
    ///
    /// # Errors
    /// Returns [`Dbscan1dError::InvalidEps`] when `eps` is negative, NaN, or
    /// infinite and [`Dbscan1dError::InvalidMinSamples`] when `min_samples`
    /// is zero.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::{Dbscan1dBuilder, Dbscan1dError};
    ///
    /// let err = Dbscan1dBuilder::new().with_eps(-1.0).build().unwrap_err();
    /// assert!(matches!(err, Dbscan1dError::InvalidEps { .. }));
    /// ```
    pub fn build(self) -> Result<Dbscan1d> {
        if !self.eps.is_finite() || self.eps < 0.0 {
            return Err(Dbscan1dError::InvalidEps { got: self.eps });
        }
        let min_samples =
            NonZeroUsize::new(self.min_samples).ok_or(Dbscan1dError::InvalidMinSamples {
                got: self.min_samples,
            })?;

        Ok(Dbscan1d::new(self.eps, min_samples))
    }
}
