//! image-metrics: color statistics for scheme selection
//!
//! This library computes the image statistics used to pick a color scheme
//! for an image: how colorful, how saturated, how bright, and how varied
//! its colors are. It is decoder-agnostic; callers hand in 8-bit RGB
//! samples and get plain numbers back.
//!
//! # Quick Start
//!
//! ```
//! use image_metrics::{MetricBundle, PixelGrid, Rgb8};
//!
//! let grid = PixelGrid::filled(64, 64, Rgb8::new(200, 40, 40)).unwrap();
//! let metrics = MetricBundle::from_grid(&grid);
//!
//! assert!(!metrics.is_monochrome);
//! assert_eq!(metrics.diversity, 1);
//! ```
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|------------|
//! | Colorfulness | Hasler–Süsstrunk: spread plus 0.3 x magnitude of the `rg`/`yb` opponent channels |
//! | Saturation | Mean 8-bit HSV saturation |
//! | Brightness | Mean 8-bit Rec. 601 luma |
//! | Diversity | Distinct colors in a 100x100 bilinear sample, 8 buckets per channel |
//! | Monochrome | Saturation below 30 |
//! | Many colors | Diversity above 50 |
//!
//! All extractors are pure: the same grid always yields the same bundle.
//!
//! ## Channel Order
//!
//! [`Rgb8`] is always red, green, blue. The opponent channels are
//!
//! ```text
//! rg = |R - G|
//! yb = |0.5 * (R + G) - B|
//! ```
//!
//! so swapping red and blue changes the result. Decoders that produce BGR
//! must reorder before building a [`PixelGrid`].
//!
//! ## Integer Conversions
//!
//! Saturation and luma are computed per pixel on the 0..=255 integer scale
//! with fixed-point arithmetic (12 and 14 fractional bits), matching the
//! usual 8-bit image conversions bit for bit. Only the aggregates
//! (means, standard deviations) are floating point.

pub mod color;
pub mod grid;
pub mod metrics;
pub mod preprocess;
pub mod thresholds;


pub use color::Rgb8;
pub use grid::{GridError, PixelGrid};
pub use metrics::{
    color_diversity, colorfulness, mean_brightness, mean_saturation, MetricBundle,
};
