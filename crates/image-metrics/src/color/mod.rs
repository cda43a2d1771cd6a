//! Pixel type and per-pixel color conversions
//!
//! Metrics only need two derived channels, so instead of full color-space
//! types this module exposes per-pixel functions on the 8-bit scale.
//!
//! - [`saturation`]: HSV saturation, 0..=255
//! - [`luma`]: Rec. 601 luma, 0..=255
//!
//! # Example
//!
//! ```
//! use image_metrics::{color, Rgb8};
//!
//! let px = Rgb8::new(255, 255, 0);
//! assert_eq!(color::saturation(px), 255);
//! assert_eq!(color::luma(px), 226);
//! ```

mod hsv;
mod luma;
mod rgb;

pub use hsv::saturation;
pub use luma::luma;
pub use rgb::Rgb8;
