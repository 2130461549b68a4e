//! chromadoc-filter - Convolution and smoothing
//!
//! Provides the filtering primitives the decomposition pipeline relies on:
//!
//! - **Kernels** ([`kernel`]): 2-D and 1-D Gaussian kernel construction
//! - **Convolution** ([`convolve`]): color-image convolution and blur
//! - **Circular smoothing** ([`circular`]): wrap-aware 1-D histogram blur

pub mod circular;
pub mod convolve;
mod error;
pub mod kernel;

pub use circular::smooth_circular;
pub use convolve::{convolve_color, gaussian_blur_color};
pub use error::{FilterError, FilterResult};
pub use kernel::{Kernel, sigma_for_size};
