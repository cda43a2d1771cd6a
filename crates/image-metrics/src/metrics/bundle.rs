//! The metric bundle consumed by scheme classification.

use crate::grid::PixelGrid;
use crate::thresholds::{MANY_COLORS_DIVERSITY, MONOCHROME_SATURATION};

use super::colorfulness::colorfulness;
use super::diversity::color_diversity;
use super::tone::{mean_brightness, mean_saturation};

/// All image statistics needed to choose a color scheme.
///
/// Computed once per image with [`MetricBundle::from_grid`]. Fields are
/// public so callers can build synthetic bundles, e.g. to probe
/// classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricBundle {
    /// Hasler–Süsstrunk colorfulness (>= 0)
    pub colorfulness: f64,
    /// Mean HSV saturation, 0..=255
    pub saturation: f64,
    /// Mean luma, 0..=255
    pub brightness: f64,
    /// Distinct quantized colors in the 100x100 sample, 0..=512
    pub diversity: usize,
    /// Mean saturation is below [`MONOCHROME_SATURATION`]
    pub is_monochrome: bool,
    /// Diversity exceeds [`MANY_COLORS_DIVERSITY`]
    pub has_many_colors: bool,
}

impl MetricBundle {
    /// Compute every metric for `grid`.
    ///
    /// The monochrome flag reuses the full-resolution saturation mean and
    /// the many-colors flag reuses the diversity count, so each statistic
    /// is evaluated exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use image_metrics::{MetricBundle, PixelGrid, Rgb8};
    ///
    /// let black = PixelGrid::filled(32, 32, Rgb8::grey(0)).unwrap();
    /// let metrics = MetricBundle::from_grid(&black);
    ///
    /// assert!(metrics.is_monochrome);
    /// assert!(!metrics.has_many_colors);
    /// assert_eq!(metrics.brightness, 0.0);
    /// assert_eq!(metrics.diversity, 1);
    /// ```
    pub fn from_grid(grid: &PixelGrid) -> Self {
        let saturation = mean_saturation(grid);
        let diversity = color_diversity(grid);
        Self {
            colorfulness: colorfulness(grid),
            saturation,
            brightness: mean_brightness(grid),
            diversity,
            is_monochrome: is_monochrome(saturation),
            has_many_colors: has_many_colors(diversity),
        }
    }
}

/// True iff a mean saturation counts as mostly grayscale.
#[inline]
pub fn is_monochrome(mean_saturation: f64) -> bool {
    mean_saturation < MONOCHROME_SATURATION
}

/// True iff a diversity count counts as many colors.
#[inline]
pub fn has_many_colors(diversity: usize) -> bool {
    diversity > MANY_COLORS_DIVERSITY
}
