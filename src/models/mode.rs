use std::path::PathBuf;

/// What to print for an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Classify the image and print a scheme identifier
    #[default]
    Classify,
    /// Print the raw colorfulness score
    Colorfulness,
}

/// One invocation of the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Image to analyze; `None` when no path was supplied
    pub image: Option<PathBuf>,
    pub mode: Mode,
}

impl Request {
    pub fn new(image: Option<PathBuf>, mode: Mode) -> Self {
        Self { image, mode }
    }
}
