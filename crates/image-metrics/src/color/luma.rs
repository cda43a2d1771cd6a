//! 8-bit luma (Rec. 601)

use super::rgb::Rgb8;

/// Fractional bits of the luma coefficients.
const LUMA_SHIFT: u32 = 14;

/// Rec. 601 weights scaled by `1 << 14`: 0.299, 0.587, 0.114.
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;

/// Luma of a pixel on the 0..=255 scale.
///
/// `Y = 0.299 R + 0.587 G + 0.114 B`, rounded. The weights sum to exactly
/// `1 << 14`, so greys map to themselves.
///
/// # Example
/// ```
/// use image_metrics::{color::luma, Rgb8};
/// assert_eq!(luma(Rgb8::grey(200)), 200);
/// assert_eq!(luma(Rgb8::new(255, 0, 0)), 76);
/// ```
#[inline]
pub fn luma(px: Rgb8) -> u8 {
    let y = px.r as u32 * R_WEIGHT
        + px.g as u32 * G_WEIGHT
        + px.b as u32 * B_WEIGHT
        + (1 << (LUMA_SHIFT - 1));
    (y >> LUMA_SHIFT) as u8
}
