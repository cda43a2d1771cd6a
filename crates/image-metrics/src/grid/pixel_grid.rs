//! Immutable pixel grid.
//!
//! [`PixelGrid`] owns the decoded samples of one image in row-major order.
//! Every metric borrows it read-only.

use crate::color::Rgb8;

use super::error::GridError;

/// An immutable, non-empty 2D grid of RGB pixels in row-major order.
///
/// # Example
///
/// ```
/// use image_metrics::{PixelGrid, Rgb8};
///
/// let grid = PixelGrid::filled(4, 3, Rgb8::grey(128)).unwrap();
/// assert_eq!(grid.width(), 4);
/// assert_eq!(grid.height(), 3);
/// assert_eq!(grid.len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<Rgb8>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Create a grid from row-major pixels.
    ///
    /// # Errors
    ///
    /// [`GridError::Empty`] if either dimension is zero,
    /// [`GridError::LengthMismatch`] if `pixels.len() != width * height`.
    pub fn new(pixels: Vec<Rgb8>, width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Create a grid from a packed `[R, G, B, R, G, B, ...]` buffer.
    ///
    /// # Errors
    ///
    /// Same as [`PixelGrid::new`]; a buffer whose length is not
    /// `width * height * 3` is a [`GridError::LengthMismatch`] (in bytes).
    ///
    /// # Example
    ///
    /// ```
    /// use image_metrics::{PixelGrid, Rgb8};
    ///
    /// let grid = PixelGrid::from_rgb_bytes(&[255, 0, 0, 0, 0, 255], 2, 1).unwrap();
    /// assert_eq!(grid.pixel(1, 0), Rgb8::new(0, 0, 255));
    /// ```
    pub fn from_rgb_bytes(bytes: &[u8], width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        let expected = width * height * 3;
        if bytes.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb8::new(c[0], c[1], c[2]))
            .collect();
        Self::new(pixels, width, height)
    }

    /// Create a grid where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Rgb8) -> Result<Self, GridError> {
        Self::new(vec![color; width * height], width, height)
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false; construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            PixelGrid::new(Vec::new(), 0, 5),
            Err(GridError::Empty {
                width: 0,
                height: 5
            })
        );
        assert!(PixelGrid::from_rgb_bytes(&[], 3, 0).is_err());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = PixelGrid::new(vec![Rgb8::grey(0); 5], 2, 2).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                expected: 4,
                actual: 5
            }
        );

        let err = PixelGrid::from_rgb_bytes(&[0; 11], 2, 2).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_row_major_layout() {
        let bytes: Vec<u8> = (0..6u8).flat_map(|i| [i, i, i]).collect();
        let grid = PixelGrid::from_rgb_bytes(&bytes, 3, 2).unwrap();

        assert_eq!(grid.pixel(0, 0), Rgb8::grey(0));
        assert_eq!(grid.pixel(2, 0), Rgb8::grey(2));
        assert_eq!(grid.pixel(0, 1), Rgb8::grey(3));
        assert_eq!(grid.pixel(2, 1), Rgb8::grey(5));
        assert!(!grid.is_empty());
    }

    #[test]
    #[should_panic(expected = "outside 3x2 grid")]
    fn test_pixel_out_of_bounds_panics() {
        let grid = PixelGrid::filled(3, 2, Rgb8::grey(0)).unwrap();
        let _ = grid.pixel(3, 0);
    }
}
