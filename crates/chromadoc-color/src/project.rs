//! Chromatic plane projection
//!
//! Projects RGB points onto a perceptual chromatic plane by central
//! projection through the white point of the unit RGB cube, then rotates
//! into an `(alpha, beta, L)` frame where L is the achromatic axis and
//! `(alpha, beta)` carry all chromatic information.
//!
//! The white point itself is the singularity of the projection; it is
//! represented by the all-zero sentinel [`LAB_WHITE`].

use std::f64::consts::SQRT_2;

/// Sentinel projection of the white point
pub const LAB_WHITE: [i32; 3] = [0, 0, 0];

const SQRT_3: f64 = 1.732050807568877293527446341505872367_f64;
const SQRT_6: f64 = 2.449489742783178098197284074705891392_f64;

/// Project an RGB triple onto the chromatic plane.
///
/// The input is normalized to the unit cube and centrally projected
/// through the white point `w = (1,1,1)` onto the plane with the diagonal
/// normal:
///
/// ```text
/// p' = w - (n.w / n.(p - w)) * (p - w),    n = (1,1,1)/sqrt(3)
/// ```
///
/// The result is rotated into the `(alpha, beta, L)` frame, scaled by 255
/// and rounded. Exact white returns [`LAB_WHITE`]; it is the only input
/// for which the divisor vanishes.
pub fn proj_on_lab(rgb: [u8; 3]) -> [i32; 3] {
    if rgb == [255, 255, 255] {
        return LAB_WHITE;
    }

    let p = [
        rgb[0] as f64 / 255.0,
        rgb[1] as f64 / 255.0,
        rgb[2] as f64 / 255.0,
    ];

    // n.(p - w) scaled by sqrt(3); strictly negative for non-white cube points
    let s = p[0] + p[1] + p[2] - 3.0;
    let t = 3.0 / s;

    let proj = [
        1.0 - t * (p[0] - 1.0),
        1.0 - t * (p[1] - 1.0),
        1.0 - t * (p[2] - 1.0),
    ];

    let alpha = (-proj[0] + proj[1]) / SQRT_2;
    let beta = (proj[0] + proj[1] - 2.0 * proj[2]) / SQRT_6;
    let l = (proj[0] + proj[1] + proj[2]) / SQRT_3;

    [
        (alpha * 255.0).round() as i32,
        (beta * 255.0).round() as i32,
        (l * 255.0).round() as i32,
    ]
}

/// Polar hue angle of a projected point, integer degrees in 0..360.
///
/// Computed as `round(atan2(-beta, alpha) * 180/pi + 360) mod 360`; the
/// negated beta fixes the direction of increasing phi. Callers must filter
/// the white sentinel before calling.
pub fn phi_from_lab(lab: [i32; 3]) -> u16 {
    let rad = (-(lab[1] as f64)).atan2(lab[0] as f64);
    (((rad.to_degrees() + 360.0).round() as i64) % 360) as u16
}
