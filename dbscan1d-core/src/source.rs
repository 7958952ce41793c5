//! Value source abstractions for the dbscan1d runtime.

use crate::error::SourceError;

/// Abstraction over a collection of scalar values to be clustered.
///
/// Sources only hand out raw values. Validation (emptiness, finiteness)
/// happens once at the [`crate::Dbscan1d`] entry point, before any stage of
/// the pipeline runs.
///
/// # Examples
/// ```
/// use dbscan1d_core::{SourceError, ValueSource};
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
/// let src = Readings(vec![1.0, 2.0, 4.0]);
/// assert_eq!(src.len(), 3);
/// assert_eq!(src.name(), "readings");
/// assert_eq!(src.value(2)?, 4.0);
///
/// let mut out = vec![0.0; 3];
/// src.values_into(&mut out)?;
/// assert_eq!(out, [1.0, 2.0, 4.0]);
/// # Ok::<(), SourceError>(())
/// ```
pub trait ValueSource {
    /// Returns number of values in the source.
    fn len(&self) -> usize;

    /// Returns whether the source contains no values.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::ValueSource;
    ///
    /// let empty: Vec<f64> = Vec::new();
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the value stored at `index`.
    ///
    /// # Errors
    /// Implementations must return [`SourceError::OutOfBounds`] for invalid
    /// indices.
    fn value(&self, index: usize) -> Result<f64, SourceError>;

    /// Copies every value into `out`.
    ///
    /// Implementations backed by contiguous storage can override this to
    /// copy in bulk. The default implementation calls [`Self::value`] for each
    /// position.
    ///
    /// # Errors
    /// Returns [`SourceError::OutputLengthMismatch`] if `out.len()` differs
    /// from [`Self::len`], or any error surfaced by [`Self::value`].
    ///
    /// If any read fails, `out` is left unmodified.
    fn values_into(&self, out: &mut [f64]) -> Result<(), SourceError> {
        if out.len() != self.len() {
            return Err(SourceError::OutputLengthMismatch {
                out: out.len(),
                expected: self.len(),
            });
        }
        // Read into a temp buffer to keep `out` unchanged on error.
        let tmp = (0..self.len())
            .map(|index| self.value(index))
            .collect::<Result<Vec<_>, _>>()?;
        out.copy_from_slice(&tmp);
        Ok(())
    }
}

impl ValueSource for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn name(&self) -> &str {
        "values"
    }

    fn value(&self, index: usize) -> Result<f64, SourceError> {
        self.get(index)
            .copied()
            .ok_or(SourceError::OutOfBounds { index })
    }

    fn values_into(&self, out: &mut [f64]) -> Result<(), SourceError> {
        if out.len() != <[f64]>::len(self) {
            return Err(SourceError::OutputLengthMismatch {
                out: out.len(),
                expected: <[f64]>::len(self),
            });
        }
        out.copy_from_slice(self);
        Ok(())
    }
}

impl ValueSource for Vec<f64> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn name(&self) -> &str {
        self.as_slice().name()
    }

    fn value(&self, index: usize) -> Result<f64, SourceError> {
        self.as_slice().value(index)
    }

    fn values_into(&self, out: &mut [f64]) -> Result<(), SourceError> {
        self.as_slice().values_into(out)
    }
}
