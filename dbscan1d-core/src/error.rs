//! Error types for the dbscan1d core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::ValueSource`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SourceError {
    /// Requested index was outside the source's bounds.
    #[error("index {index} is out of bounds")]
    OutOfBounds {
        /// The requested position that exceeded the source bounds.
        index: usize,
    },
    /// Provided output buffer length did not match the number of values.
    #[error("output buffer has length {out} but the source holds {expected} values")]
    OutputLengthMismatch {
        /// Caller-provided buffer length.
        out: usize,
        /// Number of values held by the source.
        expected: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SourceError`] variants.
    enum SourceErrorCode for SourceError {
        /// Requested index was outside the source's bounds.
        OutOfBounds => OutOfBounds { .. } => "SOURCE_OUT_OF_BOUNDS",
        /// Provided output buffer length did not match the number of values.
        OutputLengthMismatch => OutputLengthMismatch { .. } => "SOURCE_OUTPUT_LENGTH_MISMATCH",
    }
}

/// Reasons an input array is rejected before any clustering work begins.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    /// The input contained no values.
    #[error("input contains no values")]
    Empty,
    /// A value was NaN or infinite.
    #[error("value at index {index} is not finite ({value})")]
    NonFinite {
        /// Original position of the offending value.
        index: usize,
        /// The rejected value.
        value: f64,
    },
    /// Sample weights did not line up with the values.
    #[error("{weights} sample weights were supplied for {values} values")]
    WeightLengthMismatch {
        /// Number of values in the input.
        values: usize,
        /// Number of weights supplied.
        weights: usize,
    },
    /// A sample weight was negative or non-finite.
    #[error("sample weight at index {index} must be finite and non-negative ({weight})")]
    InvalidWeight {
        /// Original position of the offending weight.
        index: usize,
        /// The rejected weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`InputError`] variants.
    enum InputErrorCode for InputError {
        /// The input contained no values.
        Empty => Empty => "INPUT_EMPTY",
        /// A value was NaN or infinite.
        NonFinite => NonFinite { .. } => "INPUT_NON_FINITE",
        /// Sample weights did not line up with the values.
        WeightLengthMismatch => WeightLengthMismatch { .. } => "INPUT_WEIGHT_LENGTH_MISMATCH",
        /// A sample weight was negative or non-finite.
        InvalidWeight => InvalidWeight { .. } => "INPUT_INVALID_WEIGHT",
    }
}

/// Broad classification of a [`Dbscan1dError`].
///
/// Callers that only need to know whose fault a failure was can match on
/// this instead of the individual variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The supplied values (or weights) were unusable.
    InvalidInput,
    /// `eps` or `min_samples` were out of range.
    InvalidParameter,
    /// The [`crate::ValueSource`] failed while values were read.
    Source,
    /// An internal invariant was violated. This is a defect in the library.
    Internal,
}

/// Error type produced when constructing or running [`crate::Dbscan1d`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Dbscan1dError {
    /// The neighbourhood radius was negative, NaN, or infinite.
    #[error("eps must be finite and non-negative (got {got})")]
    InvalidEps {
        /// The invalid radius supplied by the caller.
        got: f64,
    },
    /// The density threshold was zero.
    #[error("min_samples must be at least 1 (got {got})")]
    InvalidMinSamples {
        /// The invalid threshold supplied by the caller.
        got: usize,
    },
    /// The values read from a [`crate::ValueSource`] were rejected.
    #[error("data source `{data_source}` is invalid: {error}")]
    InvalidInput {
        /// Identifier for the data source that produced the input.
        data_source: Arc<str>,
        #[source]
        /// The validation failure.
        error: InputError,
    },
    /// A [`crate::ValueSource`] operation failed while reading values.
    #[error("data source `{data_source}` failed: {error}")]
    Source {
        /// Identifier for the data source that produced the error.
        data_source: Arc<str>,
        #[source]
        /// Underlying source error.
        error: SourceError,
    },
    /// The pipeline detected an internal inconsistency.
    #[error("internal invariant violated while {context}")]
    InvariantViolation {
        /// Which pipeline step detected the violation.
        context: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`Dbscan1dError`] variants.
    enum Dbscan1dErrorCode for Dbscan1dError {
        /// The neighbourhood radius was negative, NaN, or infinite.
        InvalidEps => InvalidEps { .. } => "DBSCAN1D_INVALID_EPS",
        /// The density threshold was zero.
        InvalidMinSamples => InvalidMinSamples { .. } => "DBSCAN1D_INVALID_MIN_SAMPLES",
        /// The values read from a data source were rejected.
        InvalidInput => InvalidInput { .. } => "DBSCAN1D_INVALID_INPUT",
        /// A data source operation failed while reading values.
        SourceFailure => Source { .. } => "DBSCAN1D_SOURCE_FAILURE",
        /// The pipeline detected an internal inconsistency.
        InvariantViolation => InvariantViolation { .. } => "DBSCAN1D_INVARIANT_VIOLATION",
    }
}

impl Dbscan1dError {
    /// Classify the error according to who must act on it.
    ///
    /// # Examples
    /// ```
    /// use dbscan1d_core::{Dbscan1dError, ErrorKind};
    ///
    /// let err = Dbscan1dError::InvalidMinSamples { got: 0 };
    /// assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEps { .. } | Self::InvalidMinSamples { .. } => ErrorKind::InvalidParameter,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::Source { .. } => ErrorKind::Source,
            Self::InvariantViolation { .. } => ErrorKind::Internal,
        }
    }

    /// Retrieve the inner [`InputErrorCode`] when the input was rejected.
    #[must_use]
    pub const fn input_code(&self) -> Option<InputErrorCode> {
        match self {
            Self::InvalidInput { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`SourceErrorCode`] when the error originated in a
    /// [`crate::ValueSource`].
    #[must_use]
    pub const fn source_code(&self) -> Option<SourceErrorCode> {
        match self {
            Self::Source { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, Dbscan1dError>;
