//! Error types for lzwpress operations.
//!
//! A single error enum covers both codecs and the textual persistence
//! formats. Every variant is unrecoverable for the operation that raised it:
//! the codec aborts and surfaces the error, never substituting defaults or
//! truncating data.

use std::io;
use thiserror::Error;

/// The main error type for lzwpress operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Decompression was invoked on an empty code sequence.
    #[error("Empty compressed stream: at least one code is required")]
    EmptyInput,

    /// The first code of a stream references an entry that cannot exist yet.
    #[error("Unknown start code {code}: the dictionary holds only codes 0-255 at stream start")]
    UnknownCode {
        /// The offending code value.
        code: u32,
    },

    /// A code is neither a known dictionary entry nor the next one to be
    /// assigned. The stream was corrupted, truncated, or produced by a
    /// different encoder.
    #[error("Bad compressed code {code} at position {position}")]
    CorruptStream {
        /// The offending code value.
        code: u32,
        /// Index of the code within the stream.
        position: usize,
    },

    /// An input character falls outside the 256-entry dictionary seed.
    #[error("Unsupported symbol {ch:?} (U+{codepoint:04X}): only code points 0-255 can be compressed")]
    UnsupportedSymbol {
        /// The offending character.
        ch: char,
        /// Its Unicode scalar value.
        codepoint: u32,
    },

    /// A pixel value cannot be represented by the fixed 3-digit encoding.
    #[error("Pixel value {value} at index {index} is out of range (0-255)")]
    PixelRange {
        /// The offending pixel value.
        value: u16,
        /// Flat row-major index of the pixel.
        index: usize,
    },

    /// The decoded digit stream cannot be parsed back into pixels.
    #[error("Malformed digit stream: {message}")]
    MalformedDigitStream {
        /// Description of the defect.
        message: String,
    },

    /// The decoded pixel count does not match the declared dimensions.
    #[error("Pixel count mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Expected pixel count (`width * height`).
        expected: usize,
        /// Actual decoded pixel count.
        actual: usize,
    },

    /// A persisted header or body could not be parsed into the expected shape.
    #[error("Malformed file at line {line}: {message}")]
    MalformedFile {
        /// One-based line number of the defect.
        line: usize,
        /// Description of the defect.
        message: String,
    },

    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for lzwpress operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create an unknown start code error.
    pub fn unknown_code(code: u32) -> Self {
        Self::UnknownCode { code }
    }

    /// Create a corrupt stream error.
    pub fn corrupt_stream(code: u32, position: usize) -> Self {
        Self::CorruptStream { code, position }
    }

    /// Create an unsupported symbol error.
    pub fn unsupported_symbol(ch: char) -> Self {
        Self::UnsupportedSymbol {
            ch,
            codepoint: ch as u32,
        }
    }

    /// Create a pixel range error.
    pub fn pixel_range(value: u16, index: usize) -> Self {
        Self::PixelRange { value, index }
    }

    /// Create a malformed digit stream error.
    pub fn malformed_digits(message: impl Into<String>) -> Self {
        Self::MalformedDigitStream {
            message: message.into(),
        }
    }

    /// Create a size mismatch error.
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Create a malformed file error.
    pub fn malformed_file(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedFile {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::corrupt_stream(999, 4);
        assert!(err.to_string().contains("999"));
        assert!(err.to_string().contains("position 4"));

        let err = CodecError::unsupported_symbol('é');
        assert!(err.to_string().contains("00E9"));

        let err = CodecError::pixel_range(300, 7);
        assert!(err.to_string().contains("300"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: CodecError = io_err.into();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
