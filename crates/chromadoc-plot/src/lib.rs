//! chromadoc-plot - Diagnostic plot emitters
//!
//! Visualizations of the decomposition internals:
//!
//! - **TikZ emitters** ([`tikz`]): 3-D RGB scatter, raw angular histogram,
//!   smoothed histogram with cluster dividers (pgfplots sources)
//! - **Raster plot** ([`raster`]): 2-D chromatic plane projection image
//! - **Mean colors** ([`mean`]): count-weighted bar color accumulators

mod error;
pub mod mean;
pub mod raster;
pub mod tikz;

pub use error::{PlotError, PlotResult};
pub use mean::{cluster_to_mean_rgb, phi_to_mean_rgb};
pub use raster::{PLOT_CENTER, PLOT_SIZE, plot_2d_lab};
pub use tikz::{Plot3dOptions, plot_1d_clusters, plot_1d_phi, plot_3d_rgb};
