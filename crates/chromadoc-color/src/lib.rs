//! chromadoc-color - Color processing for document decomposition
//!
//! This crate provides the color manipulation the pipeline is built on:
//!
//! - **Color space conversion** ([`colorspace`]): full-range RGB <-> HSV / HLS
//! - **Preprocessing** ([`threshold`]): saturation/lightness thresholding,
//!   hue smoothing
//! - **Chromatic projection** ([`project`]): central projection onto the
//!   alpha-beta plane and polar hue angles

pub mod colorspace;
mod error;
pub mod project;
pub mod threshold;

// Re-export core types
pub use chromadoc_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{Hls, Hsv, hls_to_rgb, hsv_to_rgb, rgb_to_hls, rgb_to_hsv};

// Re-export preprocessing functions
pub use threshold::{
    DEFAULT_HUE_KERNEL, DEFAULT_LIGHTNESS_THRESH, DEFAULT_SATURATION_THRESH, smooth_hue,
    thresh_lightness, thresh_saturation,
};

// Re-export projection functions
pub use project::{LAB_WHITE, phi_from_lab, proj_on_lab};
