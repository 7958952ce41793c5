//! dbscan1d core library.
//!
//! Density-based clustering (DBSCAN) specialised to one-dimensional data.
//! Sorting the values turns every `eps`-neighbourhood into a contiguous run,
//! so the whole clustering is a linear sweep after an `O(n log n)` sort.
//!
//! ```
//! use dbscan1d_core::Dbscan1dBuilder;
//!
//! let dbscan = Dbscan1dBuilder::new().with_eps(1.5).with_min_samples(2).build()?;
//! let result = dbscan.fit(&[1.0, 2.0, 3.0, 10.0, 11.0, 12.0])?;
//! assert_eq!(result.labels(), vec![0, 0, 0, 1, 1, 1]);
//! # Ok::<(), dbscan1d_core::Dbscan1dError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod dbscan;
mod error;
mod pipeline;
mod result;
mod source;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::Dbscan1dBuilder,
    dbscan::Dbscan1d,
    error::{
        Dbscan1dError, Dbscan1dErrorCode, ErrorKind, InputError, InputErrorCode, Result,
        SourceError, SourceErrorCode,
    },
    result::{Assignment, ClusterId, ClusteringResult, InvalidAssignments, NOISE_LABEL},
    source::ValueSource,
};
