use arrow_array::{ArrayRef, RecordBatch};
use arrow_schema::{DataType, Field, Schema};
use bytes::Bytes;
use parquet::arrow::arrow_writer::ArrowWriter;
use std::sync::Arc;

pub(crate) fn reading_field(data_type: DataType, nullable: bool) -> Field {
    Field::new("reading", data_type, nullable)
}

pub(crate) fn batch_with_field(field: Field, array: ArrayRef) -> RecordBatch {
    RecordBatch::try_new(Arc::new(Schema::new(vec![field])), vec![array]).expect("batch")
}

pub(crate) fn write_batches(batches: &[RecordBatch]) -> Bytes {
    let schema = batches.first().expect("at least one batch").schema();
    let mut buffer = Vec::new();
    {
        let mut writer = ArrowWriter::try_new(&mut buffer, schema, None).expect("writer");
        for batch in batches {
            writer.write(batch).expect("write");
        }
        writer.close().expect("close");
    }
    Bytes::from(buffer)
}

pub(crate) fn write_parquet(field: Field, array: ArrayRef) -> Bytes {
    write_batches(&[batch_with_field(field, array)])
}
