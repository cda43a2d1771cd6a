//! Decoding image files into pixel grids.

use std::path::Path;

use image::DynamicImage;
use image_metrics::PixelGrid;

use crate::error::PickError;

/// Decode the image at `path` into an 8-bit RGB grid.
///
/// The format is detected from the file contents. Alpha is dropped and
/// higher bit depths are scaled down to 8 bits.
pub fn load_grid(path: &Path) -> Result<PixelGrid, PickError> {
    let img = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| PickError::Decode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|source| PickError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded image"
    );

    grid_from_image(&img)
}

/// Convert an already decoded image.
pub fn grid_from_image(img: &DynamicImage) -> Result<PixelGrid, PickError> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(PixelGrid::from_rgb_bytes(
        rgb.as_raw(),
        width as usize,
        height as usize,
    )?)
}
