//! Layer compositing
//!
//! Splits the source document into one image per cluster plus the
//! achromatic layer 0. Each layer keeps the original pixel values of its
//! cluster on a white background; each mask is the 255/0 indicator of
//! the same pixels. Cluster lookup goes through the preprocessed image,
//! but the emitted pixels come from the untouched source so color
//! correction never leaks into the output.

use crate::ClusterResult;
use crate::hist::{ColorAngle, PHI_BINS};
use chromadoc_core::{Pix, PixelDepth, color};
use std::collections::BTreeMap;

/// White pixel word used for layer backgrounds
fn white() -> u32 {
    color::compose_rgb(255, 255, 255)
}

/// The decomposed layers and their masks
#[derive(Debug, Clone)]
pub struct LayerSet {
    layers: Vec<Pix>,
    masks: Vec<Pix>,
}

impl LayerSet {
    /// Composite the source into `n_clusters + 1` layers.
    ///
    /// `angles` maps every chromatic color of the preprocessed image to
    /// its projection; colors absent from the map (the grays) fall into
    /// layer 0.
    pub fn composite(
        src: &Pix,
        processed: &Pix,
        angles: &BTreeMap<[u8; 3], ColorAngle>,
        phi_to_cluster: &[u16; PHI_BINS],
        n_clusters: usize,
    ) -> ClusterResult<LayerSet> {
        let w = src.width();
        let h = src.height();

        let mut layer_muts = Vec::with_capacity(n_clusters + 1);
        let mut mask_muts = Vec::with_capacity(n_clusters + 1);
        for _ in 0..=n_clusters {
            let layer = Pix::new_with_value(w, h, PixelDepth::Bit32, white())?;
            layer_muts.push(layer.try_into_mut().expect("freshly created pix"));
            let mask = Pix::new(w, h, PixelDepth::Bit8)?;
            mask_muts.push(mask.try_into_mut().expect("freshly created pix"));
        }

        for y in 0..h {
            for x in 0..w {
                let (r, g, b) = color::extract_rgb(processed.get_pixel_unchecked(x, y));
                let cluster = match angles.get(&[r, g, b]) {
                    Some(angle) => phi_to_cluster[angle.phi as usize] as usize,
                    None => 0,
                };

                layer_muts[cluster].set_pixel_unchecked(x, y, src.get_pixel_unchecked(x, y));
                mask_muts[cluster].set_pixel_unchecked(x, y, 255);
            }
        }

        Ok(LayerSet {
            layers: layer_muts.into_iter().map(Pix::from).collect(),
            masks: mask_muts.into_iter().map(Pix::from).collect(),
        })
    }

    /// The layers, achromatic first
    pub fn layers(&self) -> &[Pix] {
        &self.layers
    }

    /// The binary masks, parallel to the layers
    pub fn masks(&self) -> &[Pix] {
        &self.masks
    }

    /// Number of layers (clusters + 1)
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when no layers exist
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Re-composite layers onto a white canvas.
///
/// Copies every non-white pixel of every layer; with disjoint layers the
/// result reproduces the source on the covered region.
pub fn merge_layers(layers: &[Pix]) -> ClusterResult<Option<Pix>> {
    let Some(first) = layers.first() else {
        return Ok(None);
    };

    let w = first.width();
    let h = first.height();
    let merged = Pix::new_with_value(w, h, PixelDepth::Bit32, white())?;
    let mut merged_mut = merged.try_into_mut().expect("freshly created pix");

    for layer in layers {
        for y in 0..h {
            for x in 0..w {
                let word = layer.get_pixel_unchecked(x, y);
                if word != white() {
                    merged_mut.set_pixel_unchecked(x, y, word);
                }
            }
        }
    }

    Ok(Some(merged_mut.into()))
}
