//! Grayscale pixel grid.

use lzwpress_core::{CodecError, Result};

/// A 2-D grid of grayscale pixel intensities, stored row-major.
///
/// Values are carried as `u16` so that out-of-range input can be detected at
/// the compression boundary instead of silently wrapping; anything above 255
/// is rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<u16>,
}

impl PixelGrid {
    /// Create a grid from row-major pixel values.
    ///
    /// # Errors
    ///
    /// [`CodecError::SizeMismatch`] if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u16>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(CodecError::size_mismatch(expected, pixels.len()));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid from a row-major 8-bit luma buffer.
    ///
    /// # Errors
    ///
    /// [`CodecError::SizeMismatch`] if `luma.len() != width * height`.
    pub fn from_luma8(width: u32, height: u32, luma: &[u8]) -> Result<Self> {
        Self::new(width, height, luma.iter().map(|&v| u16::from(v)).collect())
    }

    /// Grid width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel values.
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    /// Convert to a row-major 8-bit luma buffer.
    ///
    /// # Errors
    ///
    /// [`CodecError::PixelRange`] if any value exceeds 255.
    pub fn to_luma8(&self) -> Result<Vec<u8>> {
        self.pixels
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u8::try_from(value).map_err(|_| CodecError::pixel_range(value, index))
            })
            .collect()
    }
}
