//! Convolution operations
//!
//! Implements color-image convolution with arbitrary kernels, used by the
//! hue-smoothing preprocessing step.

use crate::{FilterError, FilterResult, Kernel};
use chromadoc_core::{Pix, PixelDepth, color};

/// Convolve a 32-bit color image with a kernel
///
/// Uses replicate (clamp) border handling: pixels outside the image boundary
/// are treated as having the same value as the nearest edge pixel.
pub fn convolve_color(pix: &Pix, kernel: &Kernel) -> FilterResult<Pix> {
    check_color(pix)?;

    let w = pix.width();
    let h = pix.height();
    let kw = kernel.width();
    let kh = kernel.height();
    let kcx = kernel.center_x() as i64;
    let kcy = kernel.center_y() as i64;

    let out_pix = Pix::new(w, h, PixelDepth::Bit32)?;
    let mut out_mut = out_pix.try_into_mut().expect("freshly created pix");

    for y in 0..h {
        for x in 0..w {
            let mut sum_r = 0.0f64;
            let mut sum_g = 0.0f64;
            let mut sum_b = 0.0f64;

            for ky in 0..kh {
                for kx in 0..kw {
                    let sx = x as i64 + (kx as i64 - kcx);
                    let sy = y as i64 + (ky as i64 - kcy);

                    // Clamp to image boundaries (replicate border)
                    let sx = sx.clamp(0, w as i64 - 1) as u32;
                    let sy = sy.clamp(0, h as i64 - 1) as u32;

                    let pixel = pix.get_pixel_unchecked(sx, sy);
                    let (r, g, b) = color::extract_rgb(pixel);
                    let k = kernel.get(kx, ky).unwrap_or(0.0);

                    sum_r += r as f64 * k;
                    sum_g += g as f64 * k;
                    sum_b += b as f64 * k;
                }
            }

            let r = sum_r.round().clamp(0.0, 255.0) as u8;
            let g = sum_g.round().clamp(0.0, 255.0) as u8;
            let b = sum_b.round().clamp(0.0, 255.0) as u8;

            out_mut.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
        }
    }

    Ok(out_mut.into())
}

/// Apply Gaussian blur to a color image
///
/// `size` is the odd kernel aperture; `sigma <= 0` selects the
/// size-derived default.
pub fn gaussian_blur_color(pix: &Pix, size: u32, sigma: f64) -> FilterResult<Pix> {
    let kernel = Kernel::gaussian(size, sigma)?;
    convolve_color(pix, &kernel)
}

fn check_color(pix: &Pix) -> FilterResult<()> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(FilterError::UnsupportedDepth {
            expected: "32-bpp color",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}
