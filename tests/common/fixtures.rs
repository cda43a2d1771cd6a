//! Test images written to temporary directories.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

/// All identifiers the picker may print.
pub const ALLOWED_SCHEMES: [&str; 9] = [
    "scheme-content",
    "scheme-expressive",
    "scheme-fidelity",
    "scheme-fruit-salad",
    "scheme-monochrome",
    "scheme-neutral",
    "scheme-rainbow",
    "scheme-tonal-spot",
    "scheme-vibrant",
];

/// A temporary directory holding fixture images.
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Save `img` under `name`; the format follows the extension.
    pub fn save(&self, name: &str, img: &RgbImage) -> PathBuf {
        let path = self.path(name);
        img.save(&path).expect("Failed to write fixture image");
        path
    }

    /// Single-color image.
    pub fn solid(&self, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
        self.save(name, &RgbImage::from_pixel(width, height, Rgb(rgb)))
    }

    /// Seeded uniform noise.
    pub fn noise(&self, name: &str, width: u32, height: u32, seed: u64) -> PathBuf {
        self.save(name, &noise_image(width, height, seed))
    }

    /// Vertical stripes cycling through `colors`, each `stripe` pixels wide.
    pub fn stripes(&self, name: &str, width: u32, height: u32, stripe: u32, colors: &[[u8; 3]]) -> PathBuf {
        let img = RgbImage::from_fn(width, height, |x, _| {
            Rgb(colors[((x / stripe) as usize) % colors.len()])
        });
        self.save(name, &img)
    }

    /// Write arbitrary bytes under `name`.
    pub fn raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

/// Seeded uniform RGB noise.
pub fn noise_image(width: u32, height: u32, seed: u64) -> RgbImage {
    let mut rng = StdRng::seed_from_u64(seed);
    RgbImage::from_fn(width, height, |_, _| Rgb([rng.gen(), rng.gen(), rng.gen()]))
}
