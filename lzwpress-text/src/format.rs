//! Textual persistence format for compressed text.
//!
//! A single line of whitespace-separated decimal codes, no header: the
//! original text's length and shape are implicit in the decoded string.

use std::io::{Read, Write};

use lzwpress_core::{Code, CodecError, Result};

/// Write a code sequence as one whitespace-separated line.
pub fn write_codes<W: Write>(mut writer: W, codes: &[Code]) -> Result<()> {
    let mut first = true;
    for code in codes {
        if first {
            first = false;
        } else {
            write!(writer, " ")?;
        }
        write!(writer, "{code}")?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Read a whitespace-separated code sequence, preserving order.
///
/// An empty or whitespace-only input yields an empty code list (which the
/// decoder will reject as an empty stream).
///
/// # Errors
///
/// [`CodecError::MalformedFile`] if any token is not a decimal integer.
pub fn read_codes<R: Read>(mut reader: R) -> Result<Vec<Code>> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    contents
        .split_whitespace()
        .map(|token| {
            token
                .parse::<Code>()
                .map_err(|_| CodecError::malformed_file(1, format!("invalid code {token:?}")))
        })
        .collect()
}
