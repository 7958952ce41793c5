//! Columnar provider implementation and Parquet ingestion.
use std::{fs::File, path::Path};

use arrow_array::{Array, RecordBatch, RecordBatchReader};
use dbscan1d_core::{SourceError, ValueSource};
use parquet::arrow::{ProjectionMask, arrow_reader::ParquetRecordBatchReaderBuilder};
use parquet::file::reader::ChunkReader;

use crate::errors::ColumnarProviderError;
use crate::ingest::{append_float_values, validate_float_field};

/// Values of one numeric column, widened to `f64` and held contiguously.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnarProvider {
    name: String,
    values: Vec<f64>,
}

impl ColumnarProvider {
    fn from_parts(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the loaded values in row order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Loads data from an in-memory `Float64` or `Float32` array.
    ///
    /// # Errors
    /// Returns [`ColumnarProviderError::InvalidValueType`] for other data
    /// types and [`ColumnarProviderError::NullValue`] for the first null row.
    ///
    /// # Examples
    /// ```
    /// use arrow_array::Float32Array;
    /// use dbscan1d_core::ValueSource;
    /// use dbscan1d_providers_columnar::ColumnarProvider;
    ///
    /// let array = Float32Array::from(vec![0.5, 1.5]);
    /// let provider = ColumnarProvider::try_from_array("demo", &array)?;
    /// assert_eq!(provider.values(), &[0.5, 1.5]);
    /// assert_eq!(provider.len(), 2);
    /// # Ok::<(), dbscan1d_providers_columnar::ColumnarProviderError>(())
    /// ```
    pub fn try_from_array(
        name: impl Into<String>,
        array: &dyn Array,
    ) -> Result<Self, ColumnarProviderError> {
        let mut values = Vec::with_capacity(array.len());
        append_float_values(array, 0, &mut values)?;
        Ok(Self::from_parts(name, values))
    }

    /// Loads `column` from a sequence of record batches.
    ///
    /// # Errors
    /// Returns [`ColumnarProviderError::ColumnNotFound`] when a batch lacks
    /// the column, and the schema and null errors of
    /// [`Self::try_from_parquet_reader`].
    pub fn try_from_record_batches<I>(
        name: impl Into<String>,
        column: &str,
        batches: I,
    ) -> Result<Self, ColumnarProviderError>
    where
        I: IntoIterator<Item = RecordBatch>,
    {
        let mut values = Vec::new();
        for batch in batches {
            let schema = batch.schema();
            let index = column_index(&schema, column)?;
            validate_float_field(schema.field(index), column)?;
            append_float_values(batch.column(index).as_ref(), values.len(), &mut values)?;
        }
        Ok(Self::from_parts(name, values))
    }

    /// Loads data from a Parquet file containing a non-nullable `Float64` or
    /// `Float32` column.
    ///
    /// # Errors
    /// Returns [`ColumnarProviderError::Io`] when the file cannot be opened,
    /// and otherwise the errors of [`Self::try_from_parquet_reader`].
    pub fn try_from_parquet_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        column: &str,
    ) -> Result<Self, ColumnarProviderError> {
        let file = File::open(path)?;
        Self::try_from_parquet_reader(name, file, column)
    }

    /// Loads data from a Parquet reader.
    ///
    /// # Errors
    /// Returns [`ColumnarProviderError::ColumnNotFound`] when `column` is
    /// absent, [`ColumnarProviderError::InvalidColumnType`] or
    /// [`ColumnarProviderError::NullableField`] when its schema is unusable,
    /// [`ColumnarProviderError::NullValue`] for null rows, and
    /// [`ColumnarProviderError::Parquet`] or [`ColumnarProviderError::Arrow`]
    /// when decoding fails.
    pub fn try_from_parquet_reader<R>(
        name: impl Into<String>,
        reader: R,
        column: &str,
    ) -> Result<Self, ColumnarProviderError>
    where
        R: ChunkReader + Send + 'static,
    {
        let builder = ParquetRecordBatchReaderBuilder::try_new(reader)?;
        let mask = ProjectionMask::columns(builder.parquet_schema(), [column]);
        let reader = builder.with_projection(mask).build()?;
        let schema = reader.schema();
        let index = column_index(&schema, column)?;
        validate_float_field(schema.field(index), column)?;
        let mut values = Vec::new();
        for batch in reader {
            let batch = batch?;
            append_float_values(batch.column(index).as_ref(), values.len(), &mut values)?;
        }
        Ok(Self::from_parts(name, values))
    }
}

fn column_index(schema: &arrow_schema::Schema, column: &str) -> Result<usize, ColumnarProviderError> {
    schema
        .index_of(column)
        .map_err(|_| ColumnarProviderError::ColumnNotFound {
            column: column.to_owned(),
        })
}

impl ValueSource for ColumnarProvider {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self, index: usize) -> Result<f64, SourceError> {
        self.values
            .get(index)
            .copied()
            .ok_or(SourceError::OutOfBounds { index })
    }

    fn values_into(&self, out: &mut [f64]) -> Result<(), SourceError> {
        self.values.as_slice().values_into(out)
    }
}
