//! chromadoc-cluster - Color clustering pipeline
//!
//! Decomposes a document image into single-color layers by clustering its
//! chromatic content on a circular hue histogram:
//!
//! - **Color counting** ([`counts`]): exact color -> pixel-count map
//! - **Angular histogram** ([`hist`]): projection, binning, circular smoothing
//! - **Peak detection** ([`peaks`]): circular extremes and prominence filter
//! - **Cluster assignment** ([`assign`]): midpoint boundaries, angle lookup
//! - **Layer compositing** ([`layers`]): per-cluster images and masks
//! - **Quality** ([`quality`]): panoptic quality against ground truth
//! - **Facade** ([`decomposer`]): one-call pipeline with precomputed getters

pub mod assign;
pub mod counts;
pub mod decomposer;
mod error;
pub mod hist;
pub mod layers;
pub mod peaks;
pub mod quality;

pub use assign::{cluster_boundaries, phi_to_cluster};
pub use counts::color_counts;
pub use decomposer::{DecomposerOptions, DocColorDecomposer};
pub use error::{ClusterError, ClusterResult};
pub use hist::{ColorAngle, PHI_BINS, PhiHistogram};
pub use layers::{LayerSet, merge_layers};
pub use peaks::{find_extremes, find_peaks};
pub use quality::{compute_iou, compute_pq};
