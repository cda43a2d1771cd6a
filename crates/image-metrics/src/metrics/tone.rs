//! Mean saturation and mean brightness.

use crate::color::{luma, saturation, Rgb8};
use crate::grid::PixelGrid;

fn channel_mean(grid: &PixelGrid, channel: fn(Rgb8) -> u8) -> f64 {
    let sum: u64 = grid.pixels().iter().map(|&px| channel(px) as u64).sum();
    sum as f64 / grid.len() as f64
}

/// Mean HSV saturation over every pixel, on the 0..=255 scale.
///
/// # Example
///
/// ```
/// use image_metrics::{mean_saturation, PixelGrid, Rgb8};
///
/// let grid = PixelGrid::new(vec![Rgb8::new(255, 0, 0), Rgb8::grey(40)], 2, 1).unwrap();
/// assert_eq!(mean_saturation(&grid), 127.5);
/// ```
pub fn mean_saturation(grid: &PixelGrid) -> f64 {
    channel_mean(grid, saturation)
}

/// Mean Rec. 601 luma over every pixel, on the 0..=255 scale.
pub fn mean_brightness(grid: &PixelGrid) -> f64 {
    channel_mean(grid, luma)
}
