//! Circular peak detection
//!
//! Locates the maxima of a smoothed circular histogram. Extremes are
//! found as sign changes of the forward difference, with plateaus
//! resolved to their midpoints; maxima are then kept only when both
//! shoulders rise at least `min_h` above the neighboring minima, so a
//! step edge is never mistaken for a peak.

/// Find all extremes (minima and maxima) of a circular histogram.
///
/// The result is sorted ascending. A constant histogram has no extremes.
pub fn find_extremes(hist: &[i64]) -> Vec<usize> {
    let n = hist.len();
    if n < 2 {
        return Vec::new();
    }

    let mut extremes = Vec::new();

    let mut prev_diff = hist[0] - hist[n - 1];
    for i in 0..n {
        let curr_diff = hist[(i + 1) % n] - hist[i];

        if prev_diff != 0 && curr_diff == 0 {
            // Plateau: scan to its far end, bounded to one full wrap
            let mut j = i + 1;
            while j < i + n && hist[j % n] == hist[i] {
                j += 1;
            }
            if j < i + n {
                let next_diff = hist[j % n] - hist[i];
                if prev_diff.signum() * next_diff.signum() < 0 {
                    extremes.push(((i + j) / 2) % n);
                }
            }
        } else if prev_diff.signum() * curr_diff.signum() < 0 {
            extremes.push(i);
        }

        prev_diff = curr_diff;
    }

    extremes.sort_unstable();
    extremes
}

/// Find the peaks of a circular histogram.
///
/// Returns the sorted positions of all maxima whose smaller shoulder is
/// at least `min_h` tall. Fewer than two extremes yield no peaks.
pub fn find_peaks(hist: &[i64], min_h: i64) -> Vec<usize> {
    let mut extremes = find_extremes(hist);
    if extremes.len() < 2 {
        return Vec::new();
    }

    // Canonicalize so the list starts with a minimum and alternates
    // min, max, min, max, ...
    if hist[extremes[0]] > hist[extremes[1]] {
        extremes.rotate_left(1);
    }

    let m = extremes.len();
    let mut peaks = Vec::new();

    for j in (1..m).step_by(2) {
        let lh = hist[extremes[j]] - hist[extremes[j - 1]];
        let rh = hist[extremes[j]] - hist[extremes[(j + 1) % m]];

        if lh.min(rh) >= min_h {
            peaks.push(extremes[j]);
        }
    }

    peaks.sort_unstable();
    peaks
}
