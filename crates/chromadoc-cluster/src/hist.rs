//! Angular histogram construction
//!
//! Projects every chromatic color of the count map onto the chromatic
//! plane, bins the projections by polar angle into a 360-bin circular
//! histogram weighted by pixel count, and smooths the result with a
//! circular Gaussian whose aperture is the decomposition tolerance.

use crate::ClusterResult;
use chromadoc_color::{phi_from_lab, proj_on_lab};
use chromadoc_core::color::is_gray;
use chromadoc_filter::smooth_circular;
use std::collections::BTreeMap;

/// Number of angular bins
pub const PHI_BINS: usize = 360;

/// Projection record of a single chromatic color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAngle {
    /// Rounded `(alpha, beta, L)` projection, scaled by 255
    pub lab: [i32; 3],
    /// Polar hue angle in 0..360
    pub phi: u16,
}

/// The angular histogram of a color count map
#[derive(Debug, Clone)]
pub struct PhiHistogram {
    raw: [f64; PHI_BINS],
    smoothed: [i64; PHI_BINS],
}

impl PhiHistogram {
    /// Build the histogram and the per-color projection index.
    ///
    /// Gray colors (R = G = B) contribute nothing and are absent from the
    /// returned index; looking one up yields `None`, the achromatic
    /// sentinel. `tolerance` is the odd Gaussian aperture; validation
    /// happens at the facade.
    pub fn build(
        counts: &BTreeMap<[u8; 3], u32>,
        tolerance: u32,
    ) -> ClusterResult<(Self, BTreeMap<[u8; 3], ColorAngle>)> {
        let mut raw = [0.0f64; PHI_BINS];
        let mut angles = BTreeMap::new();

        for (&rgb, &n) in counts {
            if is_gray(rgb[0], rgb[1], rgb[2]) {
                continue;
            }

            let lab = proj_on_lab(rgb);
            let phi = phi_from_lab(lab);

            raw[phi as usize] += n as f64;
            angles.insert(rgb, ColorAngle { lab, phi });
        }

        let smoothed_f = smooth_circular(&raw, tolerance, 0.0)?;
        let mut smoothed = [0i64; PHI_BINS];
        for (dst, v) in smoothed.iter_mut().zip(smoothed_f.iter()) {
            *dst = v.round() as i64;
        }

        Ok((PhiHistogram { raw, smoothed }, angles))
    }

    /// The raw count-weighted histogram
    pub fn raw(&self) -> &[f64; PHI_BINS] {
        &self.raw
    }

    /// The smoothed, integer-rounded histogram
    pub fn smoothed(&self) -> &[i64; PHI_BINS] {
        &self.smoothed
    }

    /// Total chromatic mass (sum of raw bins)
    pub fn mass(&self) -> f64 {
        self.raw.iter().sum()
    }
}
