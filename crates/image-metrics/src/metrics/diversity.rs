//! Color diversity: distinct quantized colors in a fixed-size sample.

use crate::color::Rgb8;
use crate::grid::PixelGrid;
use crate::preprocess::resize_bilinear;
use crate::thresholds::{DIVERSITY_SAMPLE_SIZE, QUANTIZATION_STEP};

/// Number of buckets per channel after quantization.
const BUCKETS: usize = 256 / QUANTIZATION_STEP as usize;

/// Slot of the quantized color in a `BUCKETS`³ table.
#[inline]
fn bucket_index(px: Rgb8) -> usize {
    let q = px.quantize(QUANTIZATION_STEP);
    let step = QUANTIZATION_STEP as usize;
    let (r, g, b) = (q.r as usize / step, q.g as usize / step, q.b as usize / step);
    (r * BUCKETS + g) * BUCKETS + b
}

/// Count distinct colors in `pixels` after quantizing each channel to
/// multiples of [`QUANTIZATION_STEP`].
///
/// The result is at most 512.
pub fn count_quantized_colors(pixels: &[Rgb8]) -> usize {
    let mut seen = [false; BUCKETS * BUCKETS * BUCKETS];
    let mut distinct = 0;
    for &px in pixels {
        let slot = &mut seen[bucket_index(px)];
        if !*slot {
            *slot = true;
            distinct += 1;
        }
    }
    distinct
}

/// Distinct quantized colors in a 100x100 bilinear sample of the grid.
///
/// Sampling to a fixed size makes the metric independent of resolution.
/// A grid that already is 100x100 is counted as-is.
///
/// # Example
///
/// ```
/// use image_metrics::{color_diversity, PixelGrid, Rgb8};
///
/// let grid = PixelGrid::filled(640, 480, Rgb8::new(10, 90, 250)).unwrap();
/// assert_eq!(color_diversity(&grid), 1);
/// ```
pub fn color_diversity(grid: &PixelGrid) -> usize {
    let (sample, _, _) = resize_bilinear(
        grid.pixels(),
        grid.width(),
        grid.height(),
        DIVERSITY_SAMPLE_SIZE,
        DIVERSITY_SAMPLE_SIZE,
    );
    count_quantized_colors(&sample)
}
