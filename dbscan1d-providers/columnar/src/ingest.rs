//! Helpers for ingesting floating-point arrays into a contiguous buffer.
use arrow_array::{Array, Float32Array, Float64Array};
use arrow_schema::{DataType, Field};

use crate::errors::ColumnarProviderError;

pub(crate) fn validate_float_field(field: &Field, column: &str) -> Result<(), ColumnarProviderError> {
    if !matches!(field.data_type(), DataType::Float64 | DataType::Float32) {
        return Err(ColumnarProviderError::InvalidColumnType {
            column: column.to_owned(),
            actual: field.data_type().clone(),
        });
    }
    if field.is_nullable() {
        return Err(ColumnarProviderError::NullableField {
            column: column.to_owned(),
        });
    }
    Ok(())
}

/// Appends every value of `array` to `out`, widening `Float32` to `f64`.
///
/// `start_row` offsets the row reported by [`ColumnarProviderError::NullValue`]
/// so errors point at the row within the whole column.
pub(crate) fn append_float_values(
    array: &dyn Array,
    start_row: usize,
    out: &mut Vec<f64>,
) -> Result<(), ColumnarProviderError> {
    let any = array.as_any();
    if let Some(floats) = any.downcast_ref::<Float64Array>() {
        reject_nulls(floats, start_row)?;
        out.extend_from_slice(floats.values());
    } else if let Some(floats) = any.downcast_ref::<Float32Array>() {
        reject_nulls(floats, start_row)?;
        out.extend(floats.values().iter().copied().map(f64::from));
    } else {
        return Err(ColumnarProviderError::InvalidValueType {
            actual: array.data_type().clone(),
        });
    }
    Ok(())
}

fn reject_nulls(array: &dyn Array, start_row: usize) -> Result<(), ColumnarProviderError> {
    if array.null_count() == 0 {
        return Ok(());
    }
    match (0..array.len()).find(|&row| array.is_null(row)) {
        Some(row) => Err(ColumnarProviderError::NullValue {
            row: start_row + row,
        }),
        None => Ok(()),
    }
}
