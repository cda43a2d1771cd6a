//! Pixel grid input type.
//!
//! [`PixelGrid`] is produced once per image by the caller's decoder and
//! shared read-only by all extractors.

mod error;
mod pixel_grid;

pub use error::GridError;
pub use pixel_grid::PixelGrid;
