//! Circular 1-D smoothing
//!
//! Smoothing for histograms whose domain wraps, such as an angular
//! histogram over 0..360 degrees. A non-wrapping blur would bias values
//! near the two ends of the array toward zero and distort peaks that
//! straddle the wrap point.

use crate::{FilterError, FilterResult, Kernel};

/// Smooth a circular histogram with a 1-D Gaussian of odd length `size`.
///
/// Index arithmetic wraps modulo the histogram length, so a peak at bin 0
/// is smoothed exactly like a peak in the middle of the array. A
/// non-positive sigma selects the size-derived default
/// ([`crate::kernel::sigma_for_size`]).
pub fn smooth_circular(hist: &[f64], size: u32, sigma: f64) -> FilterResult<Vec<f64>> {
    if hist.is_empty() {
        return Err(FilterError::InvalidParameters(
            "histogram must not be empty".into(),
        ));
    }

    let kernel = Kernel::gaussian_1d(size, sigma)?;
    let n = hist.len() as i64;
    let half = kernel.center_x() as i64;
    let kdata = kernel.data();

    let mut out = vec![0.0f64; hist.len()];
    for (i, dst) in out.iter_mut().enumerate() {
        let mut sum = 0.0f64;
        for (k, &weight) in kdata.iter().enumerate() {
            let src = (i as i64 + k as i64 - half).rem_euclid(n) as usize;
            sum += hist[src] * weight;
        }
        *dst = sum;
    }

    Ok(out)
}
