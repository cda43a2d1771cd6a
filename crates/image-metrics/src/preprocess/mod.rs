//! Image preprocessing for metric extraction.
//!
//! Diversity is measured on a fixed-size sample so that results do not
//! depend on the source resolution. Resizing uses bilinear interpolation,
//! which is deterministic for a fixed image and target size.
//!
//! # Example
//!
//! ```
//! use image_metrics::{preprocess::resize_bilinear, Rgb8};
//!
//! let input = vec![Rgb8::grey(128); 640 * 480];
//! let (small, w, h) = resize_bilinear(&input, 640, 480, 100, 100);
//! assert_eq!((w, h), (100, 100));
//! assert_eq!(small.len(), 100 * 100);
//! ```

mod resize;

pub use resize::resize_bilinear;
