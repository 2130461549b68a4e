//! Color counting
//!
//! Builds the color -> pixel-count map every later stage consumes. The
//! map is a `BTreeMap`, so iteration order is the ascending lexicographic
//! order of RGB triples; downstream accumulators rely on that order being
//! deterministic.

use crate::{ClusterError, ClusterResult};
use chromadoc_core::{Pix, PixelDepth, color};
use std::collections::BTreeMap;

/// Count the occurrences of each exact RGB triple in a 32-bpp image.
pub fn color_counts(pix: &Pix) -> ClusterResult<BTreeMap<[u8; 3], u32>> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(ClusterError::UnsupportedDepth {
            expected: "32-bpp color",
            actual: pix.depth().bits(),
        });
    }

    let mut counts: BTreeMap<[u8; 3], u32> = BTreeMap::new();
    for &word in pix.data() {
        let (r, g, b) = color::extract_rgb(word);
        *counts.entry([r, g, b]).or_insert(0) += 1;
    }

    Ok(counts)
}
