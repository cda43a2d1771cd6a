//! 8-bit HSV saturation
//!
//! Only the saturation channel is needed for scheme selection, so hue and
//! value are not materialized. Saturation uses the 0..=255 scale of 8-bit
//! HSV images.

use super::rgb::Rgb8;

/// Fractional bits of the fixed-point reciprocal table.
const HSV_SHIFT: u32 = 12;

/// `round(255 << 12 / v)` for every possible `v`; entry 0 is unused.
const SATURATION_DIVISORS: [u32; 256] = build_divisors();

const fn build_divisors() -> [u32; 256] {
    let mut table = [0u32; 256];
    let numerator = 255u32 << HSV_SHIFT;
    let mut v = 1;
    while v < 256 {
        // Integer round-half-up of numerator / v
        table[v] = (2 * numerator + v as u32) / (2 * v as u32);
        v += 1;
    }
    table
}

/// HSV saturation of a pixel on the 0..=255 scale.
///
/// `S = 255 * (max - min) / max`, rounded to the nearest integer. Black
/// (`max == 0`) has zero saturation. The division runs through a 12-bit
/// fixed-point reciprocal so results are bit-identical to common 8-bit
/// RGB-to-HSV converters.
///
/// # Example
/// ```
/// use image_metrics::{color::saturation, Rgb8};
/// assert_eq!(saturation(Rgb8::new(255, 0, 0)), 255);
/// assert_eq!(saturation(Rgb8::grey(128)), 0);
/// ```
#[inline]
pub fn saturation(px: Rgb8) -> u8 {
    let v = px.max_channel() as u32;
    let diff = v - px.min_channel() as u32;
    let s = (diff * SATURATION_DIVISORS[v as usize] + (1 << (HSV_SHIFT - 1))) >> HSV_SHIFT;
    s.min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_greys_have_zero_saturation() {
        assert_eq!(saturation(Rgb8::grey(0)), 0);
        for v in [1u8, 17, 128, 254, 255] {
            assert_eq!(saturation(Rgb8::grey(v)), 0, "grey {v}");
        }
    }

    #[test]
    fn test_primaries_are_fully_saturated() {
        assert_eq!(saturation(Rgb8::new(255, 0, 0)), 255);
        assert_eq!(saturation(Rgb8::new(0, 1, 0)), 255);
        assert_eq!(saturation(Rgb8::new(0, 0, 9)), 255);
    }

    #[test]
    fn test_matches_float_formula() {
        // Fixed point may only differ from the exact rounded value by one
        // step at exact .5 boundaries
        for r in (0..=255u32).step_by(7) {
            for g in (0..=255u32).step_by(11) {
                let px = Rgb8::new(r as u8, g as u8, 40);
                let v = px.max_channel() as f64;
                let expected = if v == 0.0 {
                    0.0
                } else {
                    (255.0 * (v - px.min_channel() as f64) / v).round()
                };
                let got = saturation(px) as f64;
                assert!(
                    (got - expected).abs() <= 1.0,
                    "pixel {px:?}: got {got}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn test_partial_saturation() {
        // 255 * 50 / 200 = 63.75
        assert_eq!(saturation(Rgb8::new(200, 150, 150)), 64);
        // 255 * 100 / 255 = 100
        assert_eq!(saturation(Rgb8::new(155, 255, 200)), 100);
    }
}
