//! Error types for snapcmp

use std::path::PathBuf;
use thiserror::Error;

/// Result type for snapcmp operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Rejected when a configuration is built, before any comparison runs
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A grid was read outside its own dimensions
    #[error("Illegal coordinates ({x}, {y}) for image of size {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Fingerprints of different lengths can't be compared positionally
    #[error("Fingerprint length mismatch: {left} vs {right}")]
    FingerprintLength { left: usize, right: usize },

    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to decode image from memory: {0}")]
    DecodeBytes(#[from] image::ImageError),
}
