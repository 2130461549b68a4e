//! Panoptic quality
//!
//! Evaluates a predicted mask set against ground truth by greedy IoU
//! matching: every prediction claims the truth mask it overlaps best,
//! a pair counts as a true positive when the IoU reaches 0.5, and the
//! final score is `sum_iou / (tp + 0.5 * (fp + fn))`.

use crate::{ClusterError, ClusterResult};
use chromadoc_core::{Pix, PixelDepth, count_nonzero};

/// Intersection-over-union of two binary masks.
///
/// Two empty masks have an empty union; that case scores 0 rather than
/// dividing by zero.
pub fn compute_iou(predicted: &Pix, truth: &Pix) -> ClusterResult<f64> {
    let intersection = count_nonzero(&predicted.mask_and(truth)?) as f64;
    let union = count_nonzero(&predicted.mask_or(truth)?) as f64;

    if union == 0.0 {
        return Ok(0.0);
    }
    Ok(intersection / union)
}

/// Panoptic quality of a predicted mask set against ground truth.
///
/// Matching is greedy in prediction order and does not exclude
/// already-claimed truth masks; with the 0.5 threshold a double claim
/// requires pathologically overlapping predictions. All-zero masks carry
/// no segment on either side and take no part in the matching or the
/// FP/FN counts, so the empty achromatic mask of a fully chromatic
/// document does not dilute the score. When no segments exist at all the
/// score is defined as 0.
pub fn compute_pq(predicted: &[Pix], truth: &[Pix]) -> ClusterResult<f64> {
    let predicted: Vec<&Pix> = predicted.iter().filter(|p| count_nonzero(p) > 0).collect();
    let truth: Vec<&Pix> = truth.iter().filter(|t| count_nonzero(t) > 0).collect();

    let mut sum_iou = 0.0f64;
    let mut tp = 0.0f64;

    let mut matched_predicted = vec![false; predicted.len()];
    let mut matched_truth = vec![false; truth.len()];

    for (p_idx, &p) in predicted.iter().enumerate() {
        let mut max_iou = 0.0f64;
        let mut max_idx = None;

        for (t_idx, &t) in truth.iter().enumerate() {
            let iou = compute_iou(p, t)?;
            if iou >= max_iou {
                max_iou = iou;
                max_idx = Some(t_idx);
            }
        }

        if max_iou >= 0.5 {
            sum_iou += max_iou;
            tp += 1.0;

            matched_predicted[p_idx] = true;
            if let Some(t_idx) = max_idx {
                matched_truth[t_idx] = true;
            }
        }
    }

    let fp = matched_predicted.iter().filter(|&&m| !m).count() as f64;
    let fn_ = matched_truth.iter().filter(|&&m| !m).count() as f64;

    let denom = tp + 0.5 * (fp + fn_);
    if denom == 0.0 {
        return Ok(0.0);
    }
    Ok(sum_iou / denom)
}

/// Validate a ground-truth mask set against the predicted one.
///
/// Every truth mask must be an 8-bpp image with the predictions'
/// dimensions.
pub fn check_truth_masks(predicted: &[Pix], truth: &[Pix]) -> ClusterResult<()> {
    let Some(reference) = predicted.first() else {
        return Ok(());
    };

    for (idx, mask) in truth.iter().enumerate() {
        if mask.depth() != PixelDepth::Bit8 {
            return Err(ClusterError::TruthMaskMismatch(format!(
                "mask {} has depth {} bpp, expected 8",
                idx,
                mask.depth().bits()
            )));
        }
        if mask.width() != reference.width() || mask.height() != reference.height() {
            return Err(ClusterError::TruthMaskMismatch(format!(
                "mask {} is {}x{}, expected {}x{}",
                idx,
                mask.width(),
                mask.height(),
                reference.width(),
                reference.height()
            )));
        }
    }
    Ok(())
}
