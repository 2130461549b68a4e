//! PIX - The image container
//!
//! The `Pix` structure is the image type used throughout chromadoc. It
//! supports the two depths the decomposition pipeline works with: 32-bpp
//! RGB documents and 8-bpp grayscale masks.

mod access;
mod mask;

pub use mask::count_nonzero;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Pixel depth (bits per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 8-bit grayscale (masks, single channels)
    Bit8 = 8,
    /// 32-bit RGB (red in the MSB)
    Bit32 = 32,
}

impl PixelDepth {
    /// Create PixelDepth from a u32 value
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(PixelDepth::Bit8),
            32 => Ok(PixelDepth::Bit32),
            _ => Err(Error::UnsupportedDepth(bits)),
        }
    }

    /// Get the number of bits
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get maximum value of a single sample for this depth
    pub fn max_value(self) -> u32 {
        match self {
            PixelDepth::Bit8 => 255,
            PixelDepth::Bit32 => 0xFFFFFFFF,
        }
    }
}

/// Internal PIX data
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Depth in bits per pixel
    depth: PixelDepth,
    /// The image data, one 32-bit word per pixel in row-major order.
    /// For 8-bpp images only the low byte of each word is significant.
    data: Vec<u32>,
}

/// PIX - Image container
///
/// `Pix` is the image type used by every chromadoc crate. It uses
/// reference counting via `Arc` for cheap cloning; pixel data is written
/// through the [`PixMut`] companion during construction and is immutable
/// afterwards.
///
/// # Pixel Layout
///
/// - One 32-bit word per pixel, rows stored contiguously
/// - For 32-bpp images, color order is RGBA with red in the MSB
/// - For 8-bpp images, the value lives in the low byte
///
/// # Examples
///
/// ```
/// use chromadoc_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(640, 480, PixelDepth::Bit32).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions and depth.
    ///
    /// The image data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let data = vec![0u32; (width as usize) * (height as usize)];

        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                depth,
                data,
            }),
        })
    }

    /// Create a new PIX with every pixel set to `val`.
    ///
    /// `val` is a raw pixel word: a packed RGB word for 32-bpp images
    /// (see [`crate::color::compose_rgb`]), a byte value for 8-bpp.
    pub fn new_with_value(width: u32, height: u32, depth: PixelDepth, val: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let data = vec![val; (width as usize) * (height as usize)];

        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                depth,
                data,
            }),
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get raw access to the image data
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this PIX
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check whether two images have identical dimensions and depth
    pub fn same_shape(&self, other: &Pix) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.depth() == other.depth()
    }

    /// Check whether two images are identical in shape and content
    pub fn equals(&self, other: &Pix) -> bool {
        self.same_shape(other) && self.inner.data == other.inner.data
    }

    /// Create a deep copy of this PIX
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(PixData {
                width: self.inner.width,
                height: self.inner.height,
                depth: self.inner.depth,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data
    ///
    /// This succeeds only if there is exactly one reference to the data.
    /// If successful, returns a `PixMut` that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX
    ///
    /// This always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData {
                width: self.inner.width,
                height: self.inner.height,
                depth: self.inner.depth,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable PIX
///
/// This type allows modification of image data. It can be converted
/// back to an immutable `Pix` using `into()`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get raw access to the image data
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Set every pixel word to `val`
    pub fn fill(&mut self, val: u32) {
        self.inner.data.fill(val);
    }

    /// Clear all pixels to zero
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
