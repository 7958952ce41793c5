//! Mapping sorted-order data back to original input order.

use super::StageError;

const NOT_A_BIJECTION: StageError = StageError::Invariant {
    context: "unpermuting through a permutation that is not a bijection",
};

/// Scatters `by_sorted` through `order`, so that
/// `out[order[i]] == by_sorted[i]`.
///
/// # Errors
/// Returns [`StageError::Invariant`] when the lengths differ or `order` is
/// not a bijection on `0..len`.
pub(crate) fn unpermute<T: Copy>(by_sorted: &[T], order: &[usize]) -> Result<Vec<T>, StageError> {
    if by_sorted.len() != order.len() {
        return Err(StageError::Invariant {
            context: "unpermuting labels of a different length than the permutation",
        });
    }

    let mut scattered: Vec<Option<T>> = vec![None; order.len()];
    for (&original, &item) in order.iter().zip(by_sorted) {
        let slot = scattered.get_mut(original).ok_or(NOT_A_BIJECTION)?;
        if slot.replace(item).is_some() {
            return Err(NOT_A_BIJECTION);
        }
    }

    scattered
        .into_iter()
        .collect::<Option<Vec<T>>>()
        .ok_or(NOT_A_BIJECTION)
}
