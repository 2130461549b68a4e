//! Cluster error types

use thiserror::Error;

/// Cluster error type
#[derive(Error, Debug)]
pub enum ClusterError {
    /// Tolerance must be odd and positive
    #[error("tolerance must be odd and positive, got {0}")]
    InvalidTolerance(u32),

    /// Unsupported pixel depth
    #[error("unsupported depth: expected {expected}, got {actual} bpp")]
    UnsupportedDepth {
        expected: &'static str,
        actual: u32,
    },

    /// Ground-truth masks do not match the predictions
    #[error("truth mask mismatch: {0}")]
    TruthMaskMismatch(String),

    /// Color processing error
    #[error("color error: {0}")]
    Color(#[from] chromadoc_color::ColorError),

    /// Filter error
    #[error("filter error: {0}")]
    Filter(#[from] chromadoc_filter::FilterError),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromadoc_core::Error),
}

/// Result type for cluster operations
pub type ClusterResult<T> = Result<T, ClusterError>;
