//! Error type for pixel grid construction

use thiserror::Error;

/// Returned when raw pixel data cannot form a valid [`PixelGrid`](super::PixelGrid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// One of the dimensions is zero
    #[error("pixel grid must not be empty (got {width}x{height})")]
    Empty { width: usize, height: usize },

    /// Sample buffer does not match the dimensions
    #[error("pixel buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
