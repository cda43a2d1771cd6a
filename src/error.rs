use std::path::PathBuf;

use image_metrics::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickError {
    #[error("No image path given")]
    MissingInput,

    #[error("Failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid pixel data: {0}")]
    Grid(#[from] GridError),
}
