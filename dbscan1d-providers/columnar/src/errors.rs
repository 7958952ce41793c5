use arrow_schema::{ArrowError, DataType};
use thiserror::Error;

/// Errors raised while loading a numeric column.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ColumnarProviderError {
    /// The requested column is absent from the schema.
    #[error("column `{column}` not found in schema")]
    ColumnNotFound {
        /// Requested column name.
        column: String,
    },
    /// The column is not `Float64` or `Float32`.
    #[error("column `{column}` must be Float64 or Float32 but found {actual:?}")]
    InvalidColumnType {
        /// Requested column name.
        column: String,
        /// Data type declared by the schema.
        actual: DataType,
    },
    /// An in-memory array holds neither `Float64` nor `Float32` values.
    #[error("array must hold Float64 or Float32 values but found {actual:?}")]
    InvalidValueType {
        /// Data type of the array.
        actual: DataType,
    },
    /// The schema declares the column nullable.
    #[error("column `{column}` must not be nullable")]
    NullableField {
        /// Requested column name.
        column: String,
    },
    /// A row holds a null instead of a value.
    #[error("row {row} is null")]
    NullValue {
        /// Zero-based row across all batches.
        row: usize,
    },
    /// Decoding Arrow data failed.
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
    /// Reading Parquet metadata or pages failed.
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    /// Opening the file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
