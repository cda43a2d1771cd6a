//! Fixed metric constants.
//!
//! These values are part of the scheme selection contract and are not
//! configurable at runtime.

/// Width and height of the square sample used for color diversity.
pub const DIVERSITY_SAMPLE_SIZE: usize = 100;

/// Per-channel bucket width for diversity quantization (8 buckets per channel).
pub const QUANTIZATION_STEP: u8 = 32;

/// Mean HSV saturation (0..=255) below which an image counts as monochrome.
pub const MONOCHROME_SATURATION: f64 = 30.0;

/// Distinct quantized colors above which an image has "many colors".
pub const MANY_COLORS_DIVERSITY: usize = 50;
