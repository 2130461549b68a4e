//! chromadoc-core - Core data structures for document color decomposition
//!
//! Provides the [`Pix`] image container used throughout the chromadoc
//! workspace, RGB word packing helpers, binary mask primitives, and the
//! shared core error type.

pub mod color;
mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::{Pix, PixMut, PixelDepth, count_nonzero};
