//! Preprocessing passes for document images
//!
//! Three passes that suppress pixels which would pollute the angular
//! histogram: near-neutral paper, near-black ink bleed, and hue noise
//! around glyph edges.

use crate::colorspace::{Hls, hls_to_rgb, rgb_to_hls, rgb_to_hsv};
use crate::{ColorError, ColorResult};
use chromadoc_core::{Pix, PixelDepth, color};
use chromadoc_filter::gaussian_blur_color;

/// Default saturation threshold (0..=255 scale)
pub const DEFAULT_SATURATION_THRESH: u8 = 10;

/// Default lightness threshold (0..=255 scale)
pub const DEFAULT_LIGHTNESS_THRESH: u8 = 50;

/// Default hue-smoothing kernel size
pub const DEFAULT_HUE_KERNEL: u32 = 5;

/// Zero the saturation of weakly saturated pixels.
///
/// Every pixel whose full-range HSV saturation is at or below `thresh`
/// collapses to the gray of its value channel; pixels above the threshold
/// pass through untouched.
pub fn thresh_saturation(pix: &Pix, thresh: u8) -> ColorResult<Pix> {
    check_rgb(pix)?;

    let out = Pix::new(pix.width(), pix.height(), PixelDepth::Bit32)?;
    let mut out_mut = out.try_into_mut().expect("freshly created pix");

    for (dst, &word) in out_mut.data_mut().iter_mut().zip(pix.data().iter()) {
        let (r, g, b) = color::extract_rgb(word);
        let hsv = rgb_to_hsv(r, g, b);
        *dst = if hsv.s <= thresh {
            color::compose_rgb(hsv.v, hsv.v, hsv.v)
        } else {
            word
        };
    }

    Ok(out_mut.into())
}

/// Zero the lightness of dark pixels.
///
/// Every pixel whose full-range HLS lightness is at or below `thresh`
/// becomes black; pixels above the threshold pass through untouched.
pub fn thresh_lightness(pix: &Pix, thresh: u8) -> ColorResult<Pix> {
    check_rgb(pix)?;

    let out = Pix::new(pix.width(), pix.height(), PixelDepth::Bit32)?;
    let mut out_mut = out.try_into_mut().expect("freshly created pix");

    for (dst, &word) in out_mut.data_mut().iter_mut().zip(pix.data().iter()) {
        let (r, g, b) = color::extract_rgb(word);
        let hls = rgb_to_hls(r, g, b);
        *dst = if hls.l <= thresh {
            color::compose_rgb(0, 0, 0)
        } else {
            word
        };
    }

    Ok(out_mut.into())
}

/// Replace the hue channel with a Gaussian-smoothed copy.
///
/// The image is blurred with a `ker_size` x `ker_size` Gaussian
/// (sigma = `ker_size`); each output pixel takes H from the blurred copy
/// and keeps L and S from the original. This reduces hue aberration along
/// edges without losing lightness detail.
///
/// `ker_size` must be odd and positive.
pub fn smooth_hue(pix: &Pix, ker_size: u32) -> ColorResult<Pix> {
    check_rgb(pix)?;
    if ker_size == 0 || ker_size.is_multiple_of(2) {
        return Err(ColorError::InvalidParameter(format!(
            "hue-smoothing kernel size must be odd and positive, got {ker_size}"
        )));
    }

    let blurred = gaussian_blur_color(pix, ker_size, ker_size as f64)?;

    let out = Pix::new(pix.width(), pix.height(), PixelDepth::Bit32)?;
    let mut out_mut = out.try_into_mut().expect("freshly created pix");

    for (dst, (&orig, &smooth)) in out_mut
        .data_mut()
        .iter_mut()
        .zip(pix.data().iter().zip(blurred.data().iter()))
    {
        let (r, g, b) = color::extract_rgb(orig);
        let (sr, sg, sb) = color::extract_rgb(smooth);

        let orig_hls = rgb_to_hls(r, g, b);
        let smooth_hls = rgb_to_hls(sr, sg, sb);

        let (nr, ng, nb) = hls_to_rgb(Hls {
            h: smooth_hls.h,
            l: orig_hls.l,
            s: orig_hls.s,
        });
        *dst = color::compose_rgb(nr, ng, nb);
    }

    Ok(out_mut.into())
}

fn check_rgb(pix: &Pix) -> ColorResult<()> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(ColorError::UnsupportedDepth {
            expected: "32-bpp color",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}
