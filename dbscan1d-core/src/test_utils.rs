//! Shared test utilities for `dbscan1d-core`.

use dbscan1d_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{error::SourceError, source::ValueSource};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `DBSCAN1D_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`ValueSource`] implementation that records value reads for tests.
///
/// # Examples
/// ```ignore
/// use std::sync::{Arc, atomic::AtomicUsize};
/// use dbscan1d_core::ValueSource;
/// use dbscan1d_core::test_utils::CountingSource;
///
/// let counter = Arc::new(AtomicUsize::new(0));
/// let source = CountingSource::new(vec![0.0, 1.0], Arc::clone(&counter));
/// assert_eq!(source.value(1)?, 1.0);
/// assert_eq!(counter.load(std::sync::atomic::Ordering::Relaxed), 1);
/// # Ok::<(), dbscan1d_core::SourceError>(())
/// ```
#[derive(Clone)]
pub(crate) struct CountingSource {
    data: Vec<f64>,
    calls: Arc<AtomicUsize>,
    name: &'static str,
    fail_at: Option<usize>,
}

impl CountingSource {
    /// Creates a counting source with the default "counting" name.
    #[must_use]
    pub(crate) fn new(data: Vec<f64>, calls: Arc<AtomicUsize>) -> Self {
        Self::with_name("counting", data, calls)
    }

    /// Creates a counting source with a specific display name.
    #[must_use]
    pub(crate) fn with_name(name: &'static str, data: Vec<f64>, calls: Arc<AtomicUsize>) -> Self {
        Self {
            data,
            calls,
            name,
            fail_at: None,
        }
    }

    /// Makes every read of `index` fail with [`SourceError::OutOfBounds`].
    #[must_use]
    pub(crate) fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Returns the backing read counter for assertions.
    #[must_use]
    pub(crate) fn calls(&self) -> &Arc<AtomicUsize> {
        &self.calls
    }
}

impl ValueSource for CountingSource {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn name(&self) -> &str {
        self.name
    }

    fn value(&self, index: usize) -> Result<f64, SourceError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_at == Some(index) {
            return Err(SourceError::OutOfBounds { index });
        }
        self.data
            .get(index)
            .copied()
            .ok_or(SourceError::OutOfBounds { index })
    }
}
