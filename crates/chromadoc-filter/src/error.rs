//! Filter error types

use thiserror::Error;

/// Filter error type
#[derive(Error, Debug)]
pub enum FilterError {
    /// Invalid kernel definition
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Unsupported pixel depth
    #[error("unsupported depth: expected {expected}, got {actual} bpp")]
    UnsupportedDepth {
        expected: &'static str,
        actual: u32,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromadoc_core::Error),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
