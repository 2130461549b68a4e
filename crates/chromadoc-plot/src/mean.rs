//! Mean-color accumulators
//!
//! Count-weighted mean RGB per angle bin and per cluster, used to color
//! the histogram bars of the TikZ plots. Bins and clusters with no
//! chromatic mass stay black.

use chromadoc_cluster::{DocColorDecomposer, PHI_BINS};

/// Count-weighted mean RGB of the colors at each angle
pub fn phi_to_mean_rgb(dcd: &DocColorDecomposer) -> Vec<[u8; 3]> {
    let mut sums = vec![[0u64; 3]; PHI_BINS];
    let mut totals = vec![0u64; PHI_BINS];

    for (rgb, &n) in dcd.color_counts() {
        let Some(phi) = dcd.phi_of(*rgb) else {
            continue;
        };
        let phi = phi as usize;
        for c in 0..3 {
            sums[phi][c] += rgb[c] as u64 * n as u64;
        }
        totals[phi] += n as u64;
    }

    mean_of(&sums, &totals)
}

/// Count-weighted mean RGB of the colors in each cluster
///
/// Index 0 (the achromatic bucket) stays black: gray colors carry no
/// angle and never accumulate here.
pub fn cluster_to_mean_rgb(dcd: &DocColorDecomposer) -> Vec<[u8; 3]> {
    let n_clusters = dcd.clusters().len();
    let mut sums = vec![[0u64; 3]; n_clusters + 1];
    let mut totals = vec![0u64; n_clusters + 1];

    let table = dcd.phi_to_cluster();
    for (rgb, &n) in dcd.color_counts() {
        let Some(phi) = dcd.phi_of(*rgb) else {
            continue;
        };
        let cluster = table[phi as usize] as usize;
        // A single-boundary table maps everything to 1 even when no
        // clusters exist; guard against the degenerate shapes
        if cluster >= sums.len() {
            continue;
        }
        for c in 0..3 {
            sums[cluster][c] += rgb[c] as u64 * n as u64;
        }
        totals[cluster] += n as u64;
    }

    mean_of(&sums, &totals)
}

fn mean_of(sums: &[[u64; 3]], totals: &[u64]) -> Vec<[u8; 3]> {
    sums.iter()
        .zip(totals.iter())
        .map(|(sum, &n)| {
            if n == 0 {
                [0, 0, 0]
            } else {
                [
                    (sum[0] / n) as u8,
                    (sum[1] / n) as u8,
                    (sum[2] / n) as u8,
                ]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromadoc_cluster::DecomposerOptions;
    use chromadoc_core::{Pix, PixelDepth, color};

    fn half_and_half() -> DocColorDecomposer {
        let pix = Pix::new(40, 40, PixelDepth::Bit32).unwrap();
        let mut pix_mut = pix.try_into_mut().unwrap();
        for y in 0..40 {
            for x in 0..40 {
                let word = if x < 20 {
                    color::compose_rgb(220, 40, 40)
                } else {
                    color::compose_rgb(40, 200, 40)
                };
                pix_mut.set_pixel_unchecked(x, y, word);
            }
        }
        DocColorDecomposer::new(&pix_mut.into()).unwrap()
    }

    #[test]
    fn test_phi_mean_is_the_color_itself() {
        let dcd = half_and_half();
        let means = phi_to_mean_rgb(&dcd);

        let red_phi = dcd.phi_of([220, 40, 40]).unwrap() as usize;
        assert_eq!(means[red_phi], [220, 40, 40]);

        let green_phi = dcd.phi_of([40, 200, 40]).unwrap() as usize;
        assert_eq!(means[green_phi], [40, 200, 40]);

        // Unpopulated bins are black
        let empty_phi = (0..360)
            .find(|&phi| phi != red_phi && phi != green_phi)
            .unwrap();
        assert_eq!(means[empty_phi], [0, 0, 0]);
    }

    #[test]
    fn test_cluster_means() {
        let dcd = half_and_half();
        let means = cluster_to_mean_rgb(&dcd);
        assert_eq!(means.len(), dcd.clusters().len() + 1);

        // The achromatic bucket is black; each chromatic cluster carries
        // exactly one color here
        assert_eq!(means[0], [0, 0, 0]);
        assert!(means[1..].contains(&[220, 40, 40]));
        assert!(means[1..].contains(&[40, 200, 40]));
    }

    #[test]
    fn test_same_bin_colors_average() {
        // Two reds along the same hue ray land in bin 210 and average
        // with integer truncation
        let pix = Pix::new(2, 1, PixelDepth::Bit32).unwrap();
        let mut pix_mut = pix.try_into_mut().unwrap();
        pix_mut.set_pixel_unchecked(0, 0, color::compose_rgb(255, 0, 0));
        pix_mut.set_pixel_unchecked(1, 0, color::compose_rgb(200, 0, 0));
        let pix: Pix = pix_mut.into();
        let dcd = DocColorDecomposer::with_options(
            &pix,
            &DecomposerOptions {
                preprocessing: false,
                ..Default::default()
            },
        )
        .unwrap();

        let means = phi_to_mean_rgb(&dcd);
        assert_eq!(means[210], [227, 0, 0]);
    }
}
