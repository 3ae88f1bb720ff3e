//! Textual persistence format for compressed images.
//!
//! ```text
//! line 1: "<width> <height>"
//! line 2: comma-separated decimal codes
//! ```
//!
//! The dimensions travel in the header because the flattened digit stream
//! alone cannot recover the grid shape.

use std::io::{BufRead, Write};

use lzwpress_core::{Code, CodecError, Result};

use crate::CompressedImage;

/// Write a compressed image as a dimension header plus one line of codes.
pub fn write<W: Write>(mut writer: W, image: &CompressedImage) -> Result<()> {
    writeln!(writer, "{} {}", image.width, image.height)?;
    let mut first = true;
    for code in &image.codes {
        if first {
            first = false;
        } else {
            write!(writer, ",")?;
        }
        write!(writer, "{code}")?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Read a compressed image back from its persisted form.
///
/// Code order is preserved. Content past the second line is ignored.
///
/// # Errors
///
/// [`CodecError::MalformedFile`] if the header is not exactly two integers,
/// the code line is missing, or any code fails to parse.
pub fn read<R: BufRead>(reader: R) -> Result<CompressedImage> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| CodecError::malformed_file(1, "missing dimension header"))??;
    let mut fields = header.split_whitespace();
    let width = parse_dimension(fields.next(), &header)?;
    let height = parse_dimension(fields.next(), &header)?;
    if fields.next().is_some() {
        return Err(CodecError::malformed_file(
            1,
            format!("expected two integers, got {header:?}"),
        ));
    }

    let body = lines
        .next()
        .ok_or_else(|| CodecError::malformed_file(2, "missing code line"))??;
    let codes = body
        .trim()
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<Code>()
                .map_err(|_| CodecError::malformed_file(2, format!("invalid code {token:?}")))
        })
        .collect::<Result<Vec<Code>>>()?;

    Ok(CompressedImage {
        width,
        height,
        codes,
    })
}

fn parse_dimension(field: Option<&str>, header: &str) -> Result<u32> {
    field
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or_else(|| {
            CodecError::malformed_file(1, format!("expected two integers, got {header:?}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let image = CompressedImage {
            width: 2,
            height: 2,
            codes: vec![48, 48, 256, 49, 50, 56],
        };

        let mut buffer = Vec::new();
        write(&mut buffer, &image).unwrap();
        assert_eq!(buffer, b"2 2\n48,48,256,49,50,56\n");

        let reloaded = read(buffer.as_slice()).unwrap();
        assert_eq!(reloaded, image);
    }

    #[test]
    fn test_read_rejects_bad_header() {
        for input in ["", "2\n1,2", "a b\n1,2", "2 2 2\n1,2", "-1 2\n1,2"] {
            let err = read(input.as_bytes()).unwrap_err();
            assert!(
                matches!(err, CodecError::MalformedFile { line: 1, .. }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_read_rejects_bad_body() {
        for input in ["2 2", "2 2\n", "2 2\n1;2", "2 2\n1,,2", "2 2\n1,x"] {
            let err = read(input.as_bytes()).unwrap_err();
            assert!(
                matches!(err, CodecError::MalformedFile { line: 2, .. }),
                "input {input:?}"
            );
        }
    }
}
