//! 2-D chromatic plane raster plot
//!
//! Renders the projection of every document color onto the alpha-beta
//! plane as a 1505 x 1505 image: a dark backdrop with the projected
//! RGB-cube gamut outline, and one pixel per color at
//! `(alpha + 752, beta + 752)` filled with the color itself.
//!
//! The scaled projections stay within roughly +-541 on alpha and +-625
//! on beta, so the +752 offset always lands inside the canvas.

use crate::PlotResult;
use chromadoc_cluster::DocColorDecomposer;
use chromadoc_color::proj_on_lab;
use chromadoc_core::{Pix, PixMut, PixelDepth, color};

/// Side length of the square plot canvas
pub const PLOT_SIZE: u32 = 1505;

/// Offset that centers the projection on the canvas
pub const PLOT_CENTER: i32 = 752;

const OUTLINE_GRAY: u8 = 64;

/// Render the 2-D projection plot of the document colors.
pub fn plot_2d_lab(dcd: &DocColorDecomposer) -> PlotResult<Pix> {
    let canvas = Pix::new(PLOT_SIZE, PLOT_SIZE, PixelDepth::Bit32)?;
    let mut canvas_mut = canvas.try_into_mut().expect("freshly created pix");

    draw_gamut_outline(&mut canvas_mut);

    for (&rgb, angle) in dcd.angles() {
        let x = angle.lab[0] + PLOT_CENTER;
        let y = angle.lab[1] + PLOT_CENTER;
        if (0..PLOT_SIZE as i32).contains(&x) && (0..PLOT_SIZE as i32).contains(&y) {
            let word = color::compose_rgb(rgb[0], rgb[1], rgb[2]);
            canvas_mut.set_pixel_unchecked(x as u32, y as u32, word);
        }
    }

    Ok(canvas_mut.into())
}

/// Draw the projected gamut boundary.
///
/// The boundary is the image of the six cube edges connecting the
/// chromatic vertices (R-Y-G-C-B-M); each edge is sampled at every 8-bit
/// step and consecutive samples are joined.
fn draw_gamut_outline(canvas: &mut PixMut) {
    const RING: [[u8; 3]; 6] = [
        [255, 0, 0],   // red
        [255, 255, 0], // yellow
        [0, 255, 0],   // green
        [0, 255, 255], // cyan
        [0, 0, 255],   // blue
        [255, 0, 255], // magenta
    ];

    for i in 0..RING.len() {
        let from = RING[i];
        let to = RING[(i + 1) % RING.len()];

        let mut prev: Option<(i32, i32)> = None;
        for step in 0..=255u16 {
            let t = step as u8;
            let rgb = [
                lerp_channel(from[0], to[0], t),
                lerp_channel(from[1], to[1], t),
                lerp_channel(from[2], to[2], t),
            ];
            let lab = proj_on_lab(rgb);
            let point = (lab[0] + PLOT_CENTER, lab[1] + PLOT_CENTER);

            if let Some(prev) = prev {
                draw_line(canvas, prev, point);
            }
            prev = Some(point);
        }
    }
}

#[inline]
fn lerp_channel(from: u8, to: u8, t: u8) -> u8 {
    let v = from as i32 + (to as i32 - from as i32) * t as i32 / 255;
    v.clamp(0, 255) as u8
}

/// Straight line between two canvas points (integer DDA)
fn draw_line(canvas: &mut PixMut, from: (i32, i32), to: (i32, i32)) {
    let word = color::compose_rgb(OUTLINE_GRAY, OUTLINE_GRAY, OUTLINE_GRAY);

    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let steps = dx.abs().max(dy.abs()).max(1);

    for s in 0..=steps {
        let x = from.0 + dx * s / steps;
        let y = from.1 + dy * s / steps;
        if (0..PLOT_SIZE as i32).contains(&x) && (0..PLOT_SIZE as i32).contains(&y) {
            canvas.set_pixel_unchecked(x as u32, y as u32, word);
        }
    }
}
