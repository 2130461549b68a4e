//! Binary mask operations
//!
//! Masks are 8-bpp images with values 0 (off) and 255 (on). These are the
//! primitives the panoptic-quality metric is built from.

use super::{Pix, PixelDepth};
use crate::error::{Error, Result};

/// Count the nonzero pixels of an 8-bpp image
pub fn count_nonzero(pix: &Pix) -> u64 {
    pix.data().iter().filter(|&&w| w != 0).count() as u64
}

impl Pix {
    /// Pixel-wise AND with another mask of the same shape.
    ///
    /// A pixel of the result is 255 where both inputs are nonzero, 0
    /// elsewhere.
    pub fn mask_and(&self, other: &Pix) -> Result<Pix> {
        check_mask_pair(self, other)?;

        let out = Pix::new(self.width(), self.height(), PixelDepth::Bit8)?;
        let mut out_mut = out.try_into_mut().expect("freshly created pix");
        for (dst, (&a, &b)) in out_mut
            .data_mut()
            .iter_mut()
            .zip(self.data().iter().zip(other.data().iter()))
        {
            *dst = if a != 0 && b != 0 { 255 } else { 0 };
        }
        Ok(out_mut.into())
    }

    /// Pixel-wise OR with another mask of the same shape.
    pub fn mask_or(&self, other: &Pix) -> Result<Pix> {
        check_mask_pair(self, other)?;

        let out = Pix::new(self.width(), self.height(), PixelDepth::Bit8)?;
        let mut out_mut = out.try_into_mut().expect("freshly created pix");
        for (dst, (&a, &b)) in out_mut
            .data_mut()
            .iter_mut()
            .zip(self.data().iter().zip(other.data().iter()))
        {
            *dst = if a != 0 || b != 0 { 255 } else { 0 };
        }
        Ok(out_mut.into())
    }
}

fn check_mask_pair(a: &Pix, b: &Pix) -> Result<()> {
    if a.depth() != PixelDepth::Bit8 {
        return Err(Error::UnsupportedDepth(a.depth().bits()));
    }
    if b.depth() != PixelDepth::Bit8 {
        return Err(Error::UnsupportedDepth(b.depth().bits()));
    }
    if a.width() != b.width() || a.height() != b.height() {
        return Err(Error::DimensionMismatch {
            expected: (a.width(), a.height()),
            actual: (b.width(), b.height()),
        });
    }
    Ok(())
}
