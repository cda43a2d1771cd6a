//! End-to-end scheme picking: metrics, classification, validation.

use image_metrics::{colorfulness, MetricBundle, PixelGrid};

use crate::error::PickError;
use crate::models::{Mode, Request, SchemeLabel};

use super::classifier::Classifier;
use super::image_loader::load_grid;
use super::validation::validate;

/// Pick the color scheme for a decoded image.
///
/// The result is always one of the nine allowed labels.
pub fn pick_scheme(grid: &PixelGrid) -> SchemeLabel {
    pick_scheme_with(&Classifier::new(), grid)
}

/// [`pick_scheme`] with a caller-supplied classifier.
pub fn pick_scheme_with(classifier: &Classifier, grid: &PixelGrid) -> SchemeLabel {
    let metrics = MetricBundle::from_grid(grid);
    tracing::debug!(
        colorfulness = metrics.colorfulness,
        saturation = metrics.saturation,
        brightness = metrics.brightness,
        diversity = metrics.diversity,
        monochrome = metrics.is_monochrome,
        many_colors = metrics.has_many_colors,
        "Image metrics"
    );
    validate(classifier.classify(&metrics))
}

/// Render a colorfulness score the way the picker prints it.
///
/// Uses the shortest representation that round-trips, always with a
/// decimal point (`0.0`, `85.53946...`).
pub fn format_colorfulness(value: f64) -> String {
    format!("{value:?}")
}

/// Output line for an already decoded image.
pub fn render(grid: &PixelGrid, mode: Mode) -> String {
    match mode {
        Mode::Classify => pick_scheme(grid).to_string(),
        Mode::Colorfulness => format_colorfulness(colorfulness(grid)),
    }
}

/// Run one request: decode the image and produce the output line.
pub fn run(request: &Request) -> Result<String, PickError> {
    let path = request.image.as_deref().ok_or(PickError::MissingInput)?;
    let grid = load_grid(path)?;
    Ok(render(&grid, request.mode))
}
