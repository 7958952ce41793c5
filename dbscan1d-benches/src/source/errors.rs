//! Error types for synthetic benchmark data generation.

/// Errors that may occur while preparing benchmark values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The requested cluster count was zero.
    #[error("cluster count must be greater than zero")]
    ZeroClusters,
    /// Too few non-noise points remain to seed every blob.
    #[error("cluster count ({cluster_count}) must not exceed blob point count ({blob_points})")]
    ClusterCountExceedsPointCount {
        /// Number of clusters requested.
        cluster_count: usize,
        /// Points left for blobs once noise is removed.
        blob_points: usize,
    },
    /// More noise points than total points were requested.
    #[error("noise points ({noise_points}) exceed point count ({point_count})")]
    NoiseExceedsPointCount {
        /// Number of noise points requested.
        noise_points: usize,
        /// Total number of points requested.
        point_count: usize,
    },
    /// A floating-point generator parameter was invalid.
    #[error("invalid floating-point parameter `{parameter}`")]
    InvalidFloatParameter {
        /// Name of the invalid parameter.
        parameter: &'static str,
    },
    /// A uniform range was empty or not finite.
    #[error("invalid uniform range [{low}, {high})")]
    InvalidRange {
        /// Requested lower bound.
        low: f64,
        /// Requested upper bound.
        high: f64,
    },
}
