//! scheme-picker
//!
//! Chooses a color scheme variant for an image from its colorfulness,
//! saturation, brightness and color diversity.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use error::PickError;
pub use models::{Mode, Request, SchemeLabel};
pub use services::{pick_scheme, run, FALLBACK_SCHEME};
