//! Pixel codec integration tests, including the persisted format.

use lzwpress_core::CodecError;
use lzwpress_image::{PixelGrid, compress, decompress, format};

fn gradient_grid(width: u32, height: u32) -> PixelGrid {
    let pixels = (0..width as usize * height as usize)
        .map(|i| (i % 256) as u16)
        .collect();
    PixelGrid::new(width, height, pixels).unwrap()
}

#[test]
fn test_roundtrip_through_persisted_format() {
    let grid = gradient_grid(16, 12);
    let image = compress(&grid).expect("compression failed");

    let mut buffer = Vec::new();
    format::write(&mut buffer, &image).expect("write failed");
    let reloaded = format::read(buffer.as_slice()).expect("read failed");
    assert_eq!(reloaded, image);

    let restored =
        decompress(reloaded.width, reloaded.height, &reloaded.codes).expect("decompression failed");
    assert_eq!(restored, grid);
}

#[test]
fn test_roundtrip_shapes() {
    for (width, height) in [(1, 1), (1, 7), (7, 1), (3, 5), (64, 64)] {
        let grid = gradient_grid(width, height);
        let image = compress(&grid).expect("compression failed");
        let restored =
            decompress(image.width, image.height, &image.codes).expect("decompression failed");

        assert_eq!(restored, grid, "mismatch for {width}x{height}");
    }
}

#[test]
fn test_roundtrip_flat_image() {
    // A constant image is the best case for the dictionary.
    let grid = PixelGrid::new(32, 32, vec![200; 1024]).unwrap();
    let image = compress(&grid).unwrap();
    assert!(image.codes.len() < 1024);

    let restored = decompress(image.width, image.height, &image.codes).unwrap();
    assert_eq!(restored, grid);
}

#[test]
fn test_roundtrip_extreme_values() {
    let grid = PixelGrid::new(4, 1, vec![0, 255, 0, 255]).unwrap();
    let image = compress(&grid).unwrap();
    let restored = decompress(image.width, image.height, &image.codes).unwrap();
    assert_eq!(restored.pixels(), &[0, 255, 0, 255]);
}

#[test]
fn test_corrupted_codes_are_detected() {
    let grid = gradient_grid(8, 8);
    let mut image = compress(&grid).unwrap();
    let last = image.codes.len() - 1;
    image.codes[last] = 1_000_000;

    let err = decompress(image.width, image.height, &image.codes).unwrap_err();
    assert!(matches!(err, CodecError::CorruptStream { .. }));
}

#[test]
fn test_header_mismatch_is_detected() {
    let grid = gradient_grid(6, 4);
    let image = compress(&grid).unwrap();

    // Claiming different dimensions than the stream carries must fail.
    let err = decompress(6, 5, &image.codes).unwrap_err();
    assert!(matches!(err, CodecError::SizeMismatch { .. }));
}

#[test]
fn test_determinism() {
    let grid = gradient_grid(20, 20);
    assert_eq!(compress(&grid).unwrap(), compress(&grid).unwrap());
}
