//! Grayscale PNG reading and writing.
//!
//! The codec itself only sees [`PixelGrid`]s; this module is the image I/O
//! collaborator that feeds it. Color inputs are reduced to luma with the
//! integer BT.601 weights, matching the usual 8-bit grayscale conversion.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use lzwpress_image::PixelGrid;

/// Read a PNG file as an 8-bit grayscale pixel grid.
///
/// Palette and 16-bit images are normalized to 8-bit first; RGB and RGBA
/// are converted to luma, and alpha is discarded.
pub fn read_grayscale_png(path: &Path) -> Result<PixelGrid, Box<dyn std::error::Error>> {
    let mut decoder = png::Decoder::new(File::open(path)?);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    let luma: Vec<u8> = match info.color_type {
        png::ColorType::Grayscale => data.to_vec(),
        png::ColorType::GrayscaleAlpha => data.chunks_exact(2).map(|px| px[0]).collect(),
        png::ColorType::Rgb => data.chunks_exact(3).map(|px| luma_of(px[0], px[1], px[2])).collect(),
        png::ColorType::Rgba => data.chunks_exact(4).map(|px| luma_of(px[0], px[1], px[2])).collect(),
        other => return Err(format!("unsupported PNG color type {other:?}").into()),
    };

    Ok(PixelGrid::from_luma8(info.width, info.height, &luma)?)
}

/// Write a pixel grid as an 8-bit grayscale PNG file.
pub fn write_grayscale_png(path: &Path, grid: &PixelGrid) -> Result<(), Box<dyn std::error::Error>> {
    let luma = grid.to_luma8()?;

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, grid.width(), grid.height());
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&luma)?;
    Ok(())
}

fn luma_of(r: u8, g: u8, b: u8) -> u8 {
    let value = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
    value as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights() {
        assert_eq!(luma_of(0, 0, 0), 0);
        assert_eq!(luma_of(255, 255, 255), 255);
        // Pure green carries the dominant weight.
        assert_eq!(luma_of(0, 255, 0), 149);
    }

    #[test]
    fn test_png_roundtrip_through_temp_file() {
        let grid = PixelGrid::from_luma8(3, 2, &[0, 60, 120, 180, 240, 255]).unwrap();
        let path = std::env::temp_dir().join("lzwpress_io_test.png");

        write_grayscale_png(&path, &grid).unwrap();
        let reloaded = read_grayscale_png(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(reloaded, grid);
    }
}
