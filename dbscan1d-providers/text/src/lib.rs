//! Text provider for line-based numeric sources implementing `ValueSource`.
//!
//! Each non-blank line holds one decimal number. Lines whose first
//! non-whitespace character is `#` are comments. Tokens such as `nan` or
//! `inf` parse successfully here and are rejected by the clustering engine.
use std::{fs::File, io, io::BufRead, io::BufReader, path::Path};

use dbscan1d_core::{SourceError, ValueSource};
use thiserror::Error;

/// Errors raised while reading numeric text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextProviderError {
    /// The input held no values once blank lines and comments were skipped.
    #[error("text input contains no values")]
    EmptyInput,
    /// A line could not be parsed as a decimal number.
    #[error("line {line} is not a number: `{content}`")]
    Parse {
        /// One-based line number.
        line: usize,
        /// The offending line with surrounding whitespace removed.
        content: String,
    },
    /// Reading from the underlying reader failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// In-memory values parsed from line-based text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextValuesProvider {
    name: String,
    values: Vec<f64>,
}

impl TextValuesProvider {
    /// Creates a provider from already-parsed values.
    ///
    /// # Errors
    /// Returns [`TextProviderError::EmptyInput`] when `values` is empty.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::ValueSource;
    /// use dbscan1d_providers_text::TextValuesProvider;
    ///
    /// let provider = TextValuesProvider::new("demo", vec![0.5, 1.5])?;
    /// assert_eq!(provider.len(), 2);
    /// # Ok::<(), dbscan1d_providers_text::TextProviderError>(())
    /// ```
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Result<Self, TextProviderError> {
        if values.is_empty() {
            return Err(TextProviderError::EmptyInput);
        }
        Ok(Self {
            name: name.into(),
            values,
        })
    }

    /// Parses one number per line from `reader`.
    ///
    /// # Errors
    /// Returns [`TextProviderError::Parse`] for the first malformed line,
    /// [`TextProviderError::Io`] when reading fails, and
    /// [`TextProviderError::EmptyInput`] when no values remain.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use dbscan1d_providers_text::TextValuesProvider;
    ///
    /// let text = "# readings\n1.0\n\n2.5\n";
    /// let provider = TextValuesProvider::try_from_reader("demo", Cursor::new(text))?;
    /// assert_eq!(provider.values(), &[1.0, 2.5]);
    /// # Ok::<(), dbscan1d_providers_text::TextProviderError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, TextProviderError> {
        let mut values = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let value = trimmed
                .parse::<f64>()
                .map_err(|_| TextProviderError::Parse {
                    line: index + 1,
                    content: trimmed.to_owned(),
                })?;
            values.push(value);
        }
        Self::new(name, values)
    }

    /// Opens `path` and parses it with [`Self::try_from_reader`].
    ///
    /// # Errors
    /// Returns [`TextProviderError::Io`] when the file cannot be opened, and
    /// otherwise the errors of [`Self::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, TextProviderError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Returns the parsed values in input order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl ValueSource for TextValuesProvider {
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
