//! Hasler–Süsstrunk colorfulness.
//!
//! Two opponent channels are derived per pixel:
//!
//! ```text
//! rg = |R - G|
//! yb = |0.5 * (R + G) - B|
//! ```
//!
//! and combined as
//!
//! ```text
//! C = sqrt(std(rg)^2 + std(yb)^2) + 0.3 * sqrt(mean(rg)^2 + mean(yb)^2)
//! ```
//!
//! Standard deviations are population (divisor N). Everything is computed in
//! `f64`; 8-bit arithmetic would wrap on `R + G` and truncate the half.

use crate::color::Rgb8;
use crate::grid::PixelGrid;

/// Weight of the mean term relative to the spread term.
const MEAN_WEIGHT: f64 = 0.3;

#[inline]
fn opponents(px: Rgb8) -> (f64, f64) {
    let (r, g, b) = (px.r as f64, px.g as f64, px.b as f64);
    ((r - g).abs(), (0.5 * (r + g) - b).abs())
}

/// Colorfulness of the whole grid. Zero for any grey image.
///
/// # Example
///
/// ```
/// use image_metrics::{colorfulness, PixelGrid, Rgb8};
///
/// let grey = PixelGrid::filled(8, 8, Rgb8::grey(90)).unwrap();
/// assert_eq!(colorfulness(&grey), 0.0);
///
/// let red = PixelGrid::filled(8, 8, Rgb8::new(255, 0, 0)).unwrap();
/// assert!(colorfulness(&red) > 80.0);
/// ```
pub fn colorfulness(grid: &PixelGrid) -> f64 {
    let n = grid.len() as f64;

    let (sum_rg, sum_yb) = grid
        .pixels()
        .iter()
        .map(|&px| opponents(px))
        .fold((0.0, 0.0), |(a, b), (rg, yb)| (a + rg, b + yb));
    let mean_rg = sum_rg / n;
    let mean_yb = sum_yb / n;

    // Second pass over deviations keeps constant images at exactly zero variance
    let (ss_rg, ss_yb) = grid
        .pixels()
        .iter()
        .map(|&px| opponents(px))
        .fold((0.0, 0.0), |(a, b), (rg, yb)| {
            (a + (rg - mean_rg).powi(2), b + (yb - mean_yb).powi(2))
        });
    let var_rg = ss_rg / n;
    let var_yb = ss_yb / n;

    (var_rg + var_yb).sqrt() + MEAN_WEIGHT * (mean_rg.powi(2) + mean_yb.powi(2)).sqrt()
}
