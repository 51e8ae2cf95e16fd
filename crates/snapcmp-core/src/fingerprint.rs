use crate::config::Detail;
use crate::error::Result;
use crate::grid::PixelGrid;
use crate::quantize::ColorQuantizer;
use tracing::trace;

/// Ordered color cells of a downscaled image, one per pixel.
///
/// Two fingerprints are only comparable when they were built from grids of
/// the same size, since comparison is purely positional.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(Vec<u8>);

impl Fingerprint {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of positions where the two fingerprints differ.
    pub fn mismatches(&self, other: &Fingerprint) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl From<Vec<u8>> for Fingerprint {
    fn from(cells: Vec<u8>) -> Self {
        Self(cells)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FingerprintBuilder {
    quantizer: ColorQuantizer,
}

impl FingerprintBuilder {
    pub fn new(detail: Detail) -> Self {
        Self {
            quantizer: ColorQuantizer::new(detail),
        }
    }

    /// Walks the grid column by column (x outer, y inner).
    pub fn build(&self, grid: &PixelGrid) -> Result<Fingerprint> {
        let mut cells = Vec::with_capacity(grid.len());
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                cells.push(self.quantizer.quantize(
                    grid.red(x, y)?,
                    grid.green(x, y)?,
                    grid.blue(x, y)?,
                ));
            }
        }
        trace!(
            width = grid.width(),
            height = grid.height(),
            "Built fingerprint"
        );
        Ok(Fingerprint(cells))
    }
}
