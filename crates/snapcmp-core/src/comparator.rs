//! Visual equality check over decoded images, byte buffers or files.
//!
//! Every call works on fresh grids and fingerprints; nothing is cached
//! between calls, so one comparator can be shared freely across threads.

use crate::compare::Matcher;
use crate::config::ComparatorConfig;
use crate::error::{Error, Result};
use crate::fingerprint::{Fingerprint, FingerprintBuilder};
use crate::grid::PixelGrid;
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader, RgbImage};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Comparator {
    config: ComparatorConfig,
    builder: FingerprintBuilder,
    matcher: Matcher,
}

impl Comparator {
    pub fn new(config: ComparatorConfig) -> Self {
        Self {
            config,
            builder: FingerprintBuilder::new(config.detail()),
            matcher: Matcher::for_tolerance(config.tolerance_percent()),
        }
    }

    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    pub fn matcher(&self) -> Matcher {
        self.matcher
    }

    /// Downscales `image` to the configured square and quantizes every pixel.
    pub fn fingerprint(&self, image: &DynamicImage) -> Result<Fingerprint> {
        let side = self.config.square_side();
        let resized = image.resize_exact(side, side, FilterType::Nearest);
        let rgb = to_rgb(&resized);
        let grid = PixelGrid::from_rgb(&rgb);
        self.builder.build(&grid)
    }

    /// Compares two fingerprints produced by this comparator.
    pub fn matches(&self, left: &Fingerprint, right: &Fingerprint) -> Result<bool> {
        let equal = self.matcher.matches(left, right)?;
        debug!(
            matcher = ?self.matcher,
            mismatches = left.mismatches(right),
            allowed = self.matcher.allowed_mismatches(left.len()),
            equal,
            "Compared fingerprints"
        );
        Ok(equal)
    }

    pub fn compare_images(&self, first: &DynamicImage, second: &DynamicImage) -> Result<bool> {
        let first = self.fingerprint(first)?;
        let second = self.fingerprint(second)?;
        self.matches(&first, &second)
    }

    pub fn compare_bytes(&self, first: &[u8], second: &[u8]) -> Result<bool> {
        let first = image::load_from_memory(first)?;
        let second = image::load_from_memory(second)?;
        self.compare_images(&first, &second)
    }

    pub fn compare_paths(&self, first: impl AsRef<Path>, second: impl AsRef<Path>) -> Result<bool> {
        let first = open(first.as_ref())?;
        let second = open(second.as_ref())?;
        self.compare_images(&first, &second)
    }

    pub fn fingerprint_path(&self, path: impl AsRef<Path>) -> Result<Fingerprint> {
        self.fingerprint(&open(path.as_ref())?)
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(ComparatorConfig::default())
    }
}

/// Opens `path`, sniffing the format from its contents rather than its extension.
fn open(path: &Path) -> Result<DynamicImage> {
    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::IoError)
        .and_then(|reader| reader.decode());
    decoded.map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Borrows the buffer when the image is already 8-bit RGB.
fn to_rgb(image: &DynamicImage) -> Cow<'_, RgbImage> {
    match image {
        DynamicImage::ImageRgb8(rgb) => Cow::Borrowed(rgb),
        other => Cow::Owned(other.to_rgb8()),
    }
}
