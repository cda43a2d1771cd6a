pub mod classifier;
pub mod image_loader;
pub mod picker;
pub mod validation;

pub use classifier::{Classifier, Rule, DEFAULT_RULES};
pub use image_loader::{grid_from_image, load_grid};
pub use picker::{format_colorfulness, pick_scheme, pick_scheme_with, render, run};
pub use validation::{validate, validate_name, FALLBACK_SCHEME};
