use crate::error::{Error, Result};
use image::{Rgb, RgbImage};

/// Read-only per-channel snapshot of a decoded RGB image.
///
/// Channel planes are stored column by column, matching the order in which
/// fingerprints walk the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    red: Vec<u8>,
    green: Vec<u8>,
    blue: Vec<u8>,
}

impl PixelGrid {
    pub fn from_rgb(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let len = width as usize * height as usize;
        let mut red = Vec::with_capacity(len);
        let mut green = Vec::with_capacity(len);
        let mut blue = Vec::with_capacity(len);

        for x in 0..width {
            for y in 0..height {
                let Rgb([r, g, b]) = *image.get_pixel(x, y);
                red.push(r);
                green.push(g);
                blue.push(b);
            }
        }

        Self {
            width,
            height,
            red,
            green,
            blue,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.red.len()
    }

    pub fn is_empty(&self) -> bool {
        self.red.is_empty()
    }

    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x as usize * self.height as usize + y as usize)
    }

    pub fn red(&self, x: u32, y: u32) -> Result<u8> {
        Ok(self.red[self.index(x, y)?])
    }

    pub fn green(&self, x: u32, y: u32) -> Result<u8> {
        Ok(self.green[self.index(x, y)?])
    }

    pub fn blue(&self, x: u32, y: u32) -> Result<u8> {
        Ok(self.blue[self.index(x, y)?])
    }

    pub fn color(&self, x: u32, y: u32) -> Result<Rgb<u8>> {
        let i = self.index(x, y)?;
        Ok(Rgb([self.red[i], self.green[i], self.blue[i]]))
    }
}
