//! Document color decomposition facade
//!
//! [`DocColorDecomposer`] runs the whole pipeline eagerly at construction:
//! preprocess, count colors, build and smooth the angular histogram, find
//! peaks, derive clusters, and composite the layers. Everything after
//! construction is a pure read over precomputed state.

use crate::assign::{cluster_boundaries, phi_to_cluster};
use crate::counts::color_counts;
use crate::hist::{ColorAngle, PHI_BINS, PhiHistogram};
use crate::layers::{LayerSet, merge_layers};
use crate::peaks::find_peaks;
use crate::quality::{check_truth_masks, compute_pq};
use crate::{ClusterError, ClusterResult};
use chromadoc_color::{
    DEFAULT_LIGHTNESS_THRESH, DEFAULT_SATURATION_THRESH, smooth_hue, thresh_lightness,
    thresh_saturation,
};
use chromadoc_core::{Pix, PixelDepth};
use std::collections::BTreeMap;

/// Decomposition options
///
/// `tolerance` is the odd aperture of the histogram smoothing; raising it
/// merges nearby hue peaks and yields fewer layers. `preprocessing`
/// enables the saturation/lightness suppression of near-neutral pixels,
/// and `hue_smoothing` optionally runs the hue-channel blur (odd kernel
/// size) before the thresholds.
#[derive(Debug, Clone)]
pub struct DecomposerOptions {
    pub tolerance: u32,
    pub preprocessing: bool,
    pub hue_smoothing: Option<u32>,
}

impl Default for DecomposerOptions {
    fn default() -> Self {
        Self {
            tolerance: 35,
            preprocessing: true,
            hue_smoothing: None,
        }
    }
}

/// Decomposes a document image into single-color layers.
///
/// # Examples
///
/// ```
/// use chromadoc_cluster::DocColorDecomposer;
/// use chromadoc_core::{Pix, PixelDepth, color};
///
/// let red = color::compose_rgb(220, 40, 40);
/// let pix = Pix::new_with_value(16, 16, PixelDepth::Bit32, red).unwrap();
///
/// let dcd = DocColorDecomposer::new(&pix).unwrap();
/// assert_eq!(dcd.layers().len(), 2); // achromatic layer + one cluster
/// ```
#[derive(Debug, Clone)]
pub struct DocColorDecomposer {
    src: Pix,
    processed: Pix,
    tolerance: u32,
    rgb_to_n: BTreeMap<[u8; 3], u32>,
    angles: BTreeMap<[u8; 3], ColorAngle>,
    hist: PhiHistogram,
    peaks: Vec<usize>,
    clusters: Vec<u16>,
    phi_to_cluster: [u16; PHI_BINS],
    layer_set: LayerSet,
}

impl DocColorDecomposer {
    /// Decompose with the default options (tolerance 35, preprocessing on).
    pub fn new(src: &Pix) -> ClusterResult<Self> {
        Self::with_options(src, &DecomposerOptions::default())
    }

    /// Decompose with explicit options.
    ///
    /// # Errors
    ///
    /// `InvalidTolerance` when the tolerance is even or zero;
    /// `UnsupportedDepth` when the source is not a 32-bpp image. Errors
    /// from the preprocessing stages bubble up unchanged.
    pub fn with_options(src: &Pix, opts: &DecomposerOptions) -> ClusterResult<Self> {
        if opts.tolerance == 0 || opts.tolerance.is_multiple_of(2) {
            return Err(ClusterError::InvalidTolerance(opts.tolerance));
        }
        if src.depth() != PixelDepth::Bit32 {
            return Err(ClusterError::UnsupportedDepth {
                expected: "32-bpp color",
                actual: src.depth().bits(),
            });
        }

        let processed = if opts.preprocessing {
            let smoothed = match opts.hue_smoothing {
                Some(k) => smooth_hue(src, k)?,
                None => src.clone(),
            };
            thresh_lightness(
                &thresh_saturation(&smoothed, DEFAULT_SATURATION_THRESH)?,
                DEFAULT_LIGHTNESS_THRESH,
            )?
        } else {
            src.clone()
        };

        let rgb_to_n = color_counts(&processed)?;
        let (hist, angles) = PhiHistogram::build(&rgb_to_n, opts.tolerance)?;

        let peaks = detect_peaks(&hist);
        let clusters = cluster_boundaries(&peaks);
        let table = phi_to_cluster(&clusters);

        let layer_set = LayerSet::composite(src, &processed, &angles, &table, clusters.len())?;

        Ok(Self {
            src: src.clone(),
            processed,
            tolerance: opts.tolerance,
            rgb_to_n,
            angles,
            hist,
            peaks,
            clusters,
            phi_to_cluster: table,
            layer_set,
        })
    }

    /// The source image
    pub fn src(&self) -> &Pix {
        &self.src
    }

    /// The preprocessed image the clustering ran on
    pub fn processed(&self) -> &Pix {
        &self.processed
    }

    /// The smoothing tolerance
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// The decomposed layers; index 0 is the achromatic layer
    pub fn layers(&self) -> &[Pix] {
        self.layer_set.layers()
    }

    /// The binary masks, parallel to the layers
    pub fn masks(&self) -> &[Pix] {
        self.layer_set.masks()
    }

    /// The detected histogram peaks, sorted ascending
    pub fn peaks(&self) -> &[usize] {
        &self.peaks
    }

    /// The cluster boundaries, sorted ascending
    pub fn clusters(&self) -> &[u16] {
        &self.clusters
    }

    /// The dense angle -> cluster table
    pub fn phi_to_cluster(&self) -> &[u16; PHI_BINS] {
        &self.phi_to_cluster
    }

    /// The raw count-weighted angular histogram
    pub fn phi_hist(&self) -> &[f64; PHI_BINS] {
        self.hist.raw()
    }

    /// The smoothed, integer-rounded angular histogram
    pub fn smoothed_phi_hist(&self) -> &[i64; PHI_BINS] {
        self.hist.smoothed()
    }

    /// The color -> pixel-count map of the preprocessed image
    pub fn color_counts(&self) -> &BTreeMap<[u8; 3], u32> {
        &self.rgb_to_n
    }

    /// The chromatic color -> projection index
    ///
    /// Gray colors are absent; see [`Self::phi_of`].
    pub fn angles(&self) -> &BTreeMap<[u8; 3], ColorAngle> {
        &self.angles
    }

    /// Hue angle of a color of the preprocessed image.
    ///
    /// `None` is the achromatic sentinel: gray colors (and colors that do
    /// not occur in the image) have no angle.
    pub fn phi_of(&self, rgb: [u8; 3]) -> Option<u16> {
        self.angles.get(&rgb).map(|angle| angle.phi)
    }

    /// Re-composite all layers onto a white canvas.
    ///
    /// With preprocessing disabled the result equals the source exactly;
    /// otherwise it equals the source on every covered pixel.
    pub fn merge_layers(&self) -> ClusterResult<Pix> {
        let merged = merge_layers(self.layer_set.layers())?;
        Ok(merged.expect("a decomposition always has at least one layer"))
    }

    /// Panoptic quality of the masks against ground truth.
    ///
    /// # Errors
    ///
    /// `TruthMaskMismatch` when a truth mask has the wrong depth or
    /// dimensions.
    pub fn compute_quality(&self, truth_masks: &[Pix]) -> ClusterResult<f64> {
        check_truth_masks(self.masks(), truth_masks)?;
        compute_pq(self.masks(), truth_masks)
    }
}

/// Detect peaks with the adaptive minimum height `round(0.01 * max)`.
///
/// A histogram that carries chromatic mass but no detectable structure
/// (flat after smoothing, or a single plateau) still yields one synthetic
/// peak at its heaviest bin, so such documents decompose into a single
/// chromatic cluster instead of failing.
fn detect_peaks(hist: &PhiHistogram) -> Vec<usize> {
    let smoothed = hist.smoothed();
    let max_h = smoothed.iter().copied().max().unwrap_or(0);
    let min_h = (0.01 * max_h as f64).round() as i64;

    let peaks = find_peaks(smoothed, min_h);
    if !peaks.is_empty() {
        return peaks;
    }

    if hist.mass() > 0.0 {
        let raw = hist.raw();
        let mut best = 0usize;
        for i in 1..PHI_BINS {
            if (smoothed[i], raw[i]) > (smoothed[best], raw[best]) {
                best = i;
            }
        }
        return vec![best];
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromadoc_core::{color, count_nonzero};

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> Pix {
        Pix::new_with_value(
            w,
            h,
            PixelDepth::Bit32,
            color::compose_rgb(rgb[0], rgb[1], rgb[2]),
        )
        .unwrap()
    }

    /// Image split into vertical bands of the given colors
    fn banded(w: u32, h: u32, bands: &[[u8; 3]]) -> Pix {
        let pix = Pix::new(w, h, PixelDepth::Bit32).unwrap();
        let mut pix_mut = pix.try_into_mut().unwrap();
        let band_w = w / bands.len() as u32;
        for y in 0..h {
            for x in 0..w {
                let band = ((x / band_w) as usize).min(bands.len() - 1);
                let [r, g, b] = bands[band];
                pix_mut.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
            }
        }
        pix_mut.into()
    }

    fn assert_partition(dcd: &DocColorDecomposer) {
        let total: u64 = dcd.masks().iter().map(count_nonzero).sum();
        assert_eq!(
            total,
            (dcd.src().width() as u64) * (dcd.src().height() as u64)
        );

        for i in 0..dcd.masks().len() {
            for j in (i + 1)..dcd.masks().len() {
                let overlap = dcd.masks()[i].mask_and(&dcd.masks()[j]).unwrap();
                assert_eq!(count_nonzero(&overlap), 0, "masks {i} and {j} overlap");
            }
        }
    }

    #[test]
    fn test_invalid_tolerance() {
        let pix = solid(4, 4, [255, 0, 0]);
        for tolerance in [0u32, 2, 10, 36] {
            let opts = DecomposerOptions {
                tolerance,
                ..Default::default()
            };
            assert!(matches!(
                DocColorDecomposer::with_options(&pix, &opts),
                Err(ClusterError::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn test_wrong_depth_rejected() {
        let mask = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        assert!(DocColorDecomposer::new(&mask).is_err());
    }

    #[test]
    fn test_single_red_pixel_on_white() {
        // 10x10: 99 white pixels and one pure red
        let pix = solid(10, 10, [255, 255, 255]);
        let mut pix_mut = pix.try_into_mut().unwrap();
        pix_mut.set_rgb(3, 4, 255, 0, 0).unwrap();
        let pix: Pix = pix_mut.into();

        let dcd = DocColorDecomposer::new(&pix).unwrap();

        assert_eq!(dcd.layers().len(), 2);
        assert_eq!(dcd.clusters().len(), 1);
        assert_eq!(count_nonzero(&dcd.masks()[0]), 99);
        assert_eq!(count_nonzero(&dcd.masks()[1]), 1);
        assert_eq!(dcd.layers()[1].get_rgb(3, 4).unwrap(), (255, 0, 0));
        // Off-cluster pixels of layer 1 are white
        assert_eq!(dcd.layers()[1].get_rgb(0, 0).unwrap(), (255, 255, 255));
        assert_partition(&dcd);
    }

    #[test]
    fn test_two_hue_hemispheres() {
        let pix = banded(100, 100, &[[220, 40, 40], [40, 200, 40]]);
        let dcd = DocColorDecomposer::new(&pix).unwrap();

        assert_eq!(dcd.clusters().len(), 2);
        assert_eq!(dcd.layers().len(), 3);
        assert_partition(&dcd);

        // Ground truth: left half and right half
        let mut truth = Vec::new();
        for half in 0..2u32 {
            let mask = Pix::new(100, 100, PixelDepth::Bit8).unwrap();
            let mut mask_mut = mask.try_into_mut().unwrap();
            for y in 0..100 {
                for x in (half * 50)..(half * 50 + 50) {
                    mask_mut.set_pixel_unchecked(x, y, 255);
                }
            }
            truth.push(mask_mut.into());
        }

        let pq = dcd.compute_quality(&truth).unwrap();
        assert!((pq - 1.0).abs() < 1e-12, "expected PQ 1.0, got {pq}");
    }

    #[test]
    fn test_grayscale_ramp() {
        // 256x1 ramp of grays
        let pix = Pix::new(256, 1, PixelDepth::Bit32).unwrap();
        let mut pix_mut = pix.try_into_mut().unwrap();
        for x in 0..256u32 {
            let v = x as u8;
            pix_mut.set_rgb(x, 0, v, v, v).unwrap();
        }
        let pix: Pix = pix_mut.into();

        let dcd = DocColorDecomposer::new(&pix).unwrap();

        assert_eq!(dcd.layers().len(), 1);
        assert!(dcd.clusters().is_empty());
        assert!(dcd.peaks().is_empty());
        assert_eq!(count_nonzero(&dcd.masks()[0]), 256);
        assert_partition(&dcd);
    }

    #[test]
    fn test_white_only_image() {
        let pix = solid(12, 12, [255, 255, 255]);
        let dcd = DocColorDecomposer::new(&pix).unwrap();

        assert_eq!(dcd.layers().len(), 1);
        assert!(dcd.clusters().is_empty());
        assert_partition(&dcd);
    }

    #[test]
    fn test_three_primaries() {
        let pix = banded(60, 60, &[[200, 20, 20], [20, 200, 20], [20, 20, 200]]);
        let opts = DecomposerOptions {
            tolerance: 35,
            ..Default::default()
        };
        let dcd = DocColorDecomposer::with_options(&pix, &opts).unwrap();

        assert_eq!(dcd.clusters().len(), 3);
        assert_eq!(dcd.layers().len(), 4);
        assert_partition(&dcd);

        // Each band mask covers exactly its 20 columns. The hues land at
        // 210 (red), 330 (green) and 90 (blue); with boundaries at
        // [30, 150, 270] that puts red in cluster 3, green in the wrap
        // cluster 1, and blue in cluster 2.
        for (cluster, band) in [(3usize, 0u32), (1, 1), (2, 2)] {
            let mask = &dcd.masks()[cluster];
            assert_eq!(count_nonzero(mask), 20 * 60, "cluster {cluster}");
            assert_eq!(mask.get_pixel(band * 20 + 10, 30), Some(255));
        }

        // Full coverage means the merge reproduces the input exactly
        let merged = dcd.merge_layers().unwrap();
        assert!(merged.equals(&pix));
    }

    #[test]
    fn test_peak_wraparound() {
        // r + g = 2b with g > r projects exactly to phi = 0
        let pix = solid(50, 50, [0, 200, 100]);
        let dcd = DocColorDecomposer::new(&pix).unwrap();

        assert_eq!(dcd.peaks(), &[0]);
        assert_eq!(dcd.clusters(), &[180]);
        assert_eq!(dcd.layers().len(), 2);
        assert_eq!(count_nonzero(&dcd.masks()[1]), 2500);
    }

    #[test]
    fn test_phi_sentinels() {
        let pix = banded(16, 16, &[[220, 40, 40], [128, 128, 128]]);
        let dcd = DocColorDecomposer::new(&pix).unwrap();

        // Chromatic colors get an angle in range, grays get none
        assert!(dcd.phi_of([220, 40, 40]).is_some_and(|phi| phi < 360));
        assert_eq!(dcd.phi_of([128, 128, 128]), None);
        assert_eq!(dcd.phi_of([1, 2, 3]), None, "absent colors have no angle");
    }

    #[test]
    fn test_merge_layers_without_preprocessing_is_identity() {
        let pix = banded(30, 30, &[[220, 40, 40], [40, 200, 40], [250, 250, 250]]);
        let opts = DecomposerOptions {
            preprocessing: false,
            ..Default::default()
        };
        let dcd = DocColorDecomposer::with_options(&pix, &opts).unwrap();

        let merged = dcd.merge_layers().unwrap();
        assert!(merged.equals(&pix));
    }

    #[test]
    fn test_layers_equal_src_under_mask() {
        let pix = banded(40, 20, &[[220, 40, 40], [40, 200, 40]]);
        let dcd = DocColorDecomposer::new(&pix).unwrap();

        for (layer, mask) in dcd.layers().iter().zip(dcd.masks().iter()) {
            for y in 0..20 {
                for x in 0..40 {
                    if mask.get_pixel_unchecked(x, y) != 0 {
                        assert_eq!(
                            layer.get_pixel_unchecked(x, y),
                            pix.get_pixel_unchecked(x, y)
                        );
                    } else {
                        assert_eq!(
                            layer.get_rgb(x, y).unwrap(),
                            (255, 255, 255),
                            "uncovered pixels must be white"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_truth_mask_mismatch_surfaced() {
        let pix = solid(10, 10, [220, 40, 40]);
        let dcd = DocColorDecomposer::new(&pix).unwrap();

        let wrong_size = Pix::new(9, 10, PixelDepth::Bit8).unwrap();
        assert!(matches!(
            dcd.compute_quality(&[wrong_size]),
            Err(ClusterError::TruthMaskMismatch(_))
        ));
    }

    #[test]
    fn test_hue_smoothing_option() {
        // On a uniform image the hue blur is a no-op and the pipeline
        // behaves as without it
        let pix = solid(30, 30, [220, 40, 40]);
        let opts = DecomposerOptions {
            hue_smoothing: Some(5),
            ..Default::default()
        };
        let dcd = DocColorDecomposer::with_options(&pix, &opts).unwrap();
        assert_eq!(dcd.clusters().len(), 1);
        assert_partition(&dcd);

        // Even kernel is rejected through the option too
        let bad = DecomposerOptions {
            hue_smoothing: Some(4),
            ..Default::default()
        };
        assert!(DocColorDecomposer::with_options(&pix, &bad).is_err());
    }
}
