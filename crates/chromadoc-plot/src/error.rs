//! Plot error types

use thiserror::Error;

/// Plot error type
#[derive(Error, Debug)]
pub enum PlotError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromadoc_core::Error),

    /// Cluster pipeline error
    #[error("cluster error: {0}")]
    Cluster(#[from] chromadoc_cluster::ClusterError),
}

/// Result type for plot operations
pub type PlotResult<T> = Result<T, PlotError>;
