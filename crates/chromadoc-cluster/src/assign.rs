//! Cluster assignment
//!
//! Turns a list of peaks into cluster boundaries (the circular midpoints
//! between adjacent peaks) and a dense angle -> cluster lookup table.
//! Cluster indices start at 1; index 0 is reserved for the achromatic
//! bucket and never appears in the table.

use crate::hist::PHI_BINS;

/// Derive the sorted cluster boundaries from the detected peaks.
///
/// The circle is closed by re-appending the first peak shifted by 360;
/// each adjacent pair contributes its midpoint mod 360. One peak yields
/// one boundary (opposite the peak); no peaks yield no boundaries.
pub fn cluster_boundaries(peaks: &[usize]) -> Vec<u16> {
    if peaks.is_empty() {
        return Vec::new();
    }

    let mut closed: Vec<usize> = peaks.to_vec();
    closed.push(peaks[0] + PHI_BINS);

    let mut boundaries: Vec<u16> = closed
        .windows(2)
        .map(|w| (((w[0] + w[1]) / 2) % PHI_BINS) as u16)
        .collect();
    boundaries.sort_unstable();
    boundaries
}

/// Build the dense angle -> cluster table.
///
/// Every angle between boundary `i` and boundary `i + 1` belongs to
/// cluster `i + 2`; the wrap-around arc (from the last boundary through
/// 359 back up to the first) keeps the default cluster 1.
pub fn phi_to_cluster(boundaries: &[u16]) -> [u16; PHI_BINS] {
    let mut table = [1u16; PHI_BINS];

    for i in 0..boundaries.len().saturating_sub(1) {
        for phi in boundaries[i]..boundaries[i + 1] {
            table[phi as usize] = (i + 2) as u16;
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_peaks_no_boundaries() {
        assert!(cluster_boundaries(&[]).is_empty());
        let table = phi_to_cluster(&[]);
        assert!(table.iter().all(|&c| c == 1));
    }

    #[test]
    fn test_single_peak_boundary_opposite() {
        assert_eq!(cluster_boundaries(&[0]), vec![180]);
        assert_eq!(cluster_boundaries(&[210]), vec![30]);

        // One boundary: the whole circle is cluster 1
        let table = phi_to_cluster(&[30]);
        assert!(table.iter().all(|&c| c == 1));
    }

    #[test]
    fn test_two_peaks() {
        // Peaks at 210 and 330 split at 270 and (330 + 570)/2 = 450 -> 90
        let boundaries = cluster_boundaries(&[210, 330]);
        assert_eq!(boundaries, vec![90, 270]);

        let table = phi_to_cluster(&boundaries);
        // Arc [90, 270) is cluster 2; the wrap arc keeps 1
        assert_eq!(table[90], 2);
        assert_eq!(table[210], 2);
        assert_eq!(table[269], 2);
        assert_eq!(table[270], 1);
        assert_eq!(table[330], 1);
        assert_eq!(table[0], 1);
        assert_eq!(table[89], 1);
    }

    #[test]
    fn test_three_peaks() {
        let boundaries = cluster_boundaries(&[90, 210, 330]);
        assert_eq!(boundaries, vec![30, 150, 270]);

        let table = phi_to_cluster(&boundaries);
        assert_eq!(table[30], 2);
        assert_eq!(table[90], 2);
        assert_eq!(table[149], 2);
        assert_eq!(table[150], 3);
        assert_eq!(table[210], 3);
        assert_eq!(table[269], 3);
        // Wrap region: [270, 360) and [0, 30)
        assert_eq!(table[270], 1);
        assert_eq!(table[330], 1);
        assert_eq!(table[15], 1);
    }

    #[test]
    fn test_boundaries_sorted_and_in_range() {
        let boundaries = cluster_boundaries(&[5, 100, 200, 355]);
        let mut sorted = boundaries.clone();
        sorted.sort_unstable();
        assert_eq!(boundaries, sorted);
        assert!(boundaries.iter().all(|&b| (b as usize) < PHI_BINS));
        assert_eq!(boundaries.len(), 4);
    }
}
