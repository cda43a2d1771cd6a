//! 8-bit RGB pixel type
//!
//! Decoded images arrive as 8-bit samples. All metrics are defined on the
//! 0..=255 integer scale, so unlike a float color type this keeps the exact
//! byte values a decoder produced.

/// A single 8-bit RGB sample.
///
/// Channel order is always red, green, blue. Decoders that hand out BGR
/// data must reorder before constructing pixels, otherwise colorfulness
/// and saturation are computed against the wrong channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb8 {
    /// Create a new pixel from channel values.
    ///
    /// # Example
    /// ```
    /// use image_metrics::Rgb8;
    /// let orange = Rgb8::new(255, 128, 0);
    /// assert_eq!(orange.g, 128);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a grey pixel with all three channels set to `value`.
    #[inline]
    pub const fn grey(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Largest of the three channels (the HSV "value").
    #[inline]
    pub fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest of the three channels.
    #[inline]
    pub fn min_channel(self) -> u8 {
        self.r.min(self.g).min(self.b)
    }

    /// Quantize each channel down to the lower edge of its `step`-wide bucket.
    ///
    /// With `step = 32` the 256 levels per channel collapse into 8 buckets,
    /// leaving 512 representable colors.
    ///
    /// # Example
    /// ```
    /// use image_metrics::Rgb8;
    /// let q = Rgb8::new(31, 32, 255).quantize(32);
    /// assert_eq!(q, Rgb8::new(0, 32, 224));
    /// ```
    #[inline]
    pub fn quantize(self, step: u8) -> Self {
        debug_assert!(step > 0, "quantization step must be non-zero");
        Self::new(
            (self.r / step) * step,
            (self.g / step) * step,
            (self.b / step) * step,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_extremes() {
        let px = Rgb8::new(10, 200, 90);
        assert_eq!(px.max_channel(), 200);
        assert_eq!(px.min_channel(), 10);

        let grey = Rgb8::grey(77);
        assert_eq!(grey.max_channel(), grey.min_channel());
    }

    #[test]
    fn test_quantize_bucket_edges() {
        // Every value inside a bucket maps to the bucket's lower edge
        for v in 0..=255u8 {
            let q = Rgb8::grey(v).quantize(32);
            assert_eq!(q.r, v - v % 32, "value {v} quantized to {}", q.r);
        }
        assert_eq!(Rgb8::grey(255).quantize(32), Rgb8::grey(224));
        assert_eq!(Rgb8::grey(32).quantize(32), Rgb8::grey(32));
        assert_eq!(Rgb8::grey(31).quantize(32), Rgb8::grey(0));
    }
}
