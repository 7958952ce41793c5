//! Columnar provider loading a numeric Arrow or Parquet column as a
//! `ValueSource`.

mod errors;
mod ingest;
mod provider;

pub use errors::ColumnarProviderError;
pub use provider::ColumnarProvider;

#[cfg(test)]
mod tests;
