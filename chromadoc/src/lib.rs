//! chromadoc - Document decomposition by color clustering
//!
//! Splits a multi-color document image into single-color layers, one per
//! distinguishable hue cluster plus one achromatic layer. Layers keep the
//! original pixels on a white background, so they re-composite into the
//! source document.
//!
//! The pipeline projects every color onto a chromatic plane through the
//! white point, bins the polar angles into a circular histogram, smooths
//! it, detects peaks and cuts the circle at the midpoints between them.
//!
//! # Example
//!
//! ```
//! use chromadoc::{DocColorDecomposer, Pix, PixelDepth, color};
//!
//! let red = color::compose_rgb(220, 40, 40);
//! let pix = Pix::new_with_value(32, 32, PixelDepth::Bit32, red).unwrap();
//!
//! let dcd = DocColorDecomposer::new(&pix).unwrap();
//! assert_eq!(dcd.layers().len(), 2);
//! ```

// Re-export the core image types
pub use chromadoc_core::{Error, Pix, PixMut, PixelDepth, Result, color, count_nonzero};

// Re-export the pipeline
pub use chromadoc_cluster::{
    ClusterError, ClusterResult, DecomposerOptions, DocColorDecomposer, compute_iou, compute_pq,
};

// Re-export color utilities
pub use chromadoc_color::{
    ColorError, phi_from_lab, proj_on_lab, rgb_to_hls, rgb_to_hsv, smooth_hue, thresh_lightness,
    thresh_saturation,
};

// Re-export I/O
pub use chromadoc_io::{IoError, read_image, write_image};

// Re-export plot emitters
pub use chromadoc_plot::{
    Plot3dOptions, plot_1d_clusters, plot_1d_phi, plot_2d_lab, plot_3d_rgb,
};
