//! Visual equality of raster images through coarse color fingerprints.
//!
//! Each image is downscaled to a fixed square, every pixel is quantized to a
//! single color cell, and the resulting fingerprints are compared positionally,
//! either exactly or with a bounded number of mismatches.

pub mod compare;
pub mod comparator;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod grid;
pub mod quantize;

pub use compare::Matcher;
pub use comparator::Comparator;
pub use config::{ComparatorConfig, Detail};
pub use error::{Error, Result};
pub use fingerprint::{Fingerprint, FingerprintBuilder};
pub use grid::PixelGrid;
pub use quantize::ColorQuantizer;
