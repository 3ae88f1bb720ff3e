//! # lzwpress-text
//!
//! Generic LZW codec for arbitrary text.
//!
//! Each character of the input is one symbol. The 256-entry dictionary seed
//! covers code points 0-255, so the codec accepts exactly the texts whose
//! characters all fall in that range and rejects anything else up front
//! rather than emitting a stream the decoder could not reproduce.
//!
//! ## Example
//!
//! ```rust
//! let original = "TOBEORNOTTOBEORTOBEORNOT";
//! let codes = lzwpress_text::compress(original).unwrap();
//! assert_eq!(&codes[..10], &[84, 79, 66, 69, 79, 82, 78, 79, 84, 256]);
//!
//! let restored = lzwpress_text::decompress(&codes).unwrap();
//! assert_eq!(restored, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod format;

use lzwpress_core::codec;
use lzwpress_core::{Code, CodecError, Result};

/// Compress text into a sequence of dictionary codes.
///
/// Empty input yields an empty code list.
///
/// # Errors
///
/// [`CodecError::UnsupportedSymbol`] if any character has a scalar value
/// of 256 or above.
pub fn compress(text: &str) -> Result<Vec<Code>> {
    let mut symbols = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let value = ch as u32;
        if value >= lzwpress_core::SEED_SIZE {
            return Err(CodecError::unsupported_symbol(ch));
        }
        symbols.push(value as u8);
    }
    Ok(codec::compress(symbols))
}

/// Decompress a sequence of dictionary codes back into text.
///
/// Decoded bytes map to the Unicode code points 0-255, mirroring
/// [`compress`].
///
/// # Errors
///
/// Propagates [`CodecError::EmptyInput`], [`CodecError::UnknownCode`], and
/// [`CodecError::CorruptStream`] from the core decoder.
pub fn decompress(codes: &[Code]) -> Result<String> {
    let bytes = codec::decompress(codes)?;
    Ok(bytes.into_iter().map(char::from).collect())
}
