//! Sorting and indexing of the raw input values.
//!
//! Produces the non-decreasing value array that every later stage works
//! over, together with the permutation back to original positions.

use crate::error::InputError;

/// A scalar value tagged with its original input position.
#[derive(Clone, Copy, Debug)]
struct Point {
    value: f64,
    original_index: usize,
}

/// Input values in non-decreasing order plus the permutation
/// `order[sorted_position] = original_index`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SortedSequence {
    values: Vec<f64>,
    order: Vec<usize>,
}

impl SortedSequence {
    /// Validates and sorts `raw`.
    ///
    /// Equal values are ordered by original index so the permutation, and
    /// therefore every label derived from it, is deterministic.
    ///
    /// # Errors
    /// Returns [`InputError::Empty`] for an empty slice and
    /// [`InputError::NonFinite`] for the first NaN or infinite value.
    pub(crate) fn from_values(raw: &[f64]) -> Result<Self, InputError> {
        if raw.is_empty() {
            return Err(InputError::Empty);
        }
        if let Some((index, &value)) = raw.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InputError::NonFinite { index, value });
        }

        let mut points: Vec<Point> = raw
            .iter()
            .enumerate()
            .map(|(original_index, &value)| Point {
                value,
                original_index,
            })
            .collect();
        points.sort_unstable_by(|left, right| {
            left.value
                .total_cmp(&right.value)
                .then(left.original_index.cmp(&right.original_index))
        });

        let (values, order) = points
            .into_iter()
            .map(|point| (point.value, point.original_index))
            .unzip();
        Ok(Self { values, order })
    }

    /// Sorted values.
    pub(crate) fn values(&self) -> &[f64] {
        &self.values
    }

    /// Permutation from sorted position to original index.
    pub(crate) fn order(&self) -> &[usize] {
        &self.order
    }

    /// Reorders per-original-index data (e.g. sample weights) into sorted
    /// order.
    pub(crate) fn gather<T: Copy>(&self, by_original: &[T]) -> Option<Vec<T>> {
        self.order
            .iter()
            .map(|&original| by_original.get(original).copied())
            .collect()
    }
}
