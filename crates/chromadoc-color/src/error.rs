//! Color error types

use thiserror::Error;

/// Color error type
#[derive(Error, Debug)]
pub enum ColorError {
    /// Unsupported pixel depth
    #[error("unsupported depth: expected {expected}, got {actual} bpp")]
    UnsupportedDepth {
        expected: &'static str,
        actual: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Filter error
    #[error("filter error: {0}")]
    Filter(#[from] chromadoc_filter::FilterError),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromadoc_core::Error),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
