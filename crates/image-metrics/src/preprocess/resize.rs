//! Bilinear image resizing.
//!
//! Output pixel centers are mapped back onto the source with the
//! half-pixel convention `src = (dst + 0.5) * scale - 0.5`, clamped to the
//! image edge. The same routine handles down- and upscaling.

use crate::color::Rgb8;

/// Source sample pair and blend weight for one output coordinate.
#[derive(Debug, Clone, Copy)]
struct Tap {
    lo: usize,
    hi: usize,
    weight: f64,
}

fn axis_taps(src_len: usize, dst_len: usize) -> Vec<Tap> {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|d| {
            let pos = ((d as f64 + 0.5) * scale - 0.5).max(0.0);
            let lo = pos.floor() as usize;
            if lo + 1 >= src_len {
                Tap {
                    lo: src_len - 1,
                    hi: src_len - 1,
                    weight: 0.0,
                }
            } else {
                Tap {
                    lo,
                    hi: lo + 1,
                    weight: pos - lo as f64,
                }
            }
        })
        .collect()
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
fn blend(tl: u8, tr: u8, bl: u8, br: u8, wx: f64, wy: f64) -> u8 {
    let top = lerp(tl as f64, tr as f64, wx);
    let bottom = lerp(bl as f64, br as f64, wx);
    lerp(top, bottom, wy).round().clamp(0.0, 255.0) as u8
}

/// Resize row-major pixels with bilinear interpolation.
///
/// Returns the input unchanged when dimensions already match.
///
/// # Panics
///
/// Panics if any dimension is zero or `pixels.len() != width * height`.
pub fn resize_bilinear(
    pixels: &[Rgb8],
    width: usize,
    height: usize,
    new_width: usize,
    new_height: usize,
) -> (Vec<Rgb8>, usize, usize) {
    assert!(
        width > 0 && height > 0 && new_width > 0 && new_height > 0,
        "resize dimensions must be non-zero: {width}x{height} -> {new_width}x{new_height}"
    );
    assert_eq!(pixels.len(), width * height, "pixel buffer does not match {width}x{height}");

    if width == new_width && height == new_height {
        return (pixels.to_vec(), width, height);
    }

    let x_taps = axis_taps(width, new_width);
    let y_taps = axis_taps(height, new_height);

    let mut out = Vec::with_capacity(new_width * new_height);
    for ty in &y_taps {
        let row_lo = &pixels[ty.lo * width..(ty.lo + 1) * width];
        let row_hi = &pixels[ty.hi * width..(ty.hi + 1) * width];
        for tx in &x_taps {
            let (tl, tr) = (row_lo[tx.lo], row_lo[tx.hi]);
            let (bl, br) = (row_hi[tx.lo], row_hi[tx.hi]);
            out.push(Rgb8::new(
                blend(tl.r, tr.r, bl.r, br.r, tx.weight, ty.weight),
                blend(tl.g, tr.g, bl.g, br.g, tx.weight, ty.weight),
                blend(tl.b, tr.b, bl.b, br.b, tx.weight, ty.weight),
            ));
        }
    }

    (out, new_width, new_height)
}
