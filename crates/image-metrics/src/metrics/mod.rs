//! Metric extractors.
//!
//! Every extractor is a pure function of a [`PixelGrid`](crate::PixelGrid):
//!
//! | Metric | Function | Scale |
//! |--------|----------|-------|
//! | Colorfulness | [`colorfulness`] | 0.. (Hasler–Süsstrunk) |
//! | Saturation | [`mean_saturation`] | 0..=255 |
//! | Brightness | [`mean_brightness`] | 0..=255 |
//! | Diversity | [`color_diversity`] | 0..=512 |
//!
//! [`MetricBundle::from_grid`] evaluates all of them plus the derived
//! monochrome and many-colors flags.

mod bundle;
mod colorfulness;
mod diversity;
mod tone;

pub use bundle::{has_many_colors, is_monochrome, MetricBundle};
pub use colorfulness::colorfulness;
pub use diversity::{color_diversity, count_quantized_colors};
pub use tone::{mean_brightness, mean_saturation};
