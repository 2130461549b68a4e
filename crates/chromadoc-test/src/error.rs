//! Test framework error types

use thiserror::Error;

/// Test framework error type
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to load an image
    #[error("failed to load image {path}: {message}")]
    ImageLoad { path: String, message: String },

    /// Failed to write an image
    #[error("failed to write image {path}: {message}")]
    ImageWrite { path: String, message: String },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
