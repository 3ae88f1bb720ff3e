//! # lzwpress-image
//!
//! Fixed-width LZW codec for grayscale pixel grids.
//!
//! The grid is flattened row-major, every pixel is serialized as exactly
//! three zero-padded decimal digits, and the concatenated digit stream runs
//! through the shared LZW core. Width and height travel alongside the codes
//! because the flattened stream alone cannot recover the grid shape.
//!
//! ## Example
//!
//! ```rust
//! use lzwpress_image::{PixelGrid, compress, decompress};
//!
//! let grid = PixelGrid::new(2, 2, vec![0, 128, 255, 64]).unwrap();
//! let image = compress(&grid).unwrap();
//! let restored = decompress(image.width, image.height, &image.codes).unwrap();
//! assert_eq!(restored, grid);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod digits;
pub mod format;
mod grid;

pub use grid::PixelGrid;

use lzwpress_core::codec;
use lzwpress_core::{Code, CodecError, Result};

/// A compressed grayscale image: the grid dimensions and the LZW code
/// sequence for its digit stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    /// Grid width in pixels.
    pub width: u32,
    /// Grid height in pixels.
    pub height: u32,
    /// LZW codes for the 3-digit-per-pixel stream.
    pub codes: Vec<Code>,
}

/// Compress a pixel grid.
///
/// # Errors
///
/// [`CodecError::PixelRange`] if any pixel value exceeds 255.
pub fn compress(grid: &PixelGrid) -> Result<CompressedImage> {
    let stream = digits::encode(grid.pixels())?;
    Ok(CompressedImage {
        width: grid.width(),
        height: grid.height(),
        codes: codec::compress(stream),
    })
}

/// Decompress a code sequence back into a `height x width` pixel grid.
///
/// # Errors
///
/// - [`CodecError::EmptyInput`], [`CodecError::UnknownCode`], and
///   [`CodecError::CorruptStream`] from the core decoder.
/// - [`CodecError::MalformedDigitStream`] if the decoded stream does not
///   parse back into pixels.
/// - [`CodecError::SizeMismatch`] if the pixel count differs from
///   `width * height`.
pub fn decompress(width: u32, height: u32, codes: &[Code]) -> Result<PixelGrid> {
    let stream = codec::decompress(codes)?;
    let pixels = digits::decode(&stream)?;

    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(CodecError::size_mismatch(expected, pixels.len()));
    }
    PixelGrid::new(width, height, pixels)
}
