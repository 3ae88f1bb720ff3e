//! # lzwpress-core
//!
//! Core components for the lzwpress compression library.
//!
//! This crate provides the shared LZW machinery that both codecs build on:
//!
//! - [`dictionary`]: arena-backed code tables for encoding and decoding
//! - [`codec`]: the single-pass encode/decode state machines
//! - [`stats`]: compression statistics (entropy, ratio, size bookkeeping)
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! The workspace is layered: this crate is the algorithm core, and the two
//! codec crates are thin adapters over it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     lzwpress-cli: subcommands, image I/O, statistics    │
//! ├────────────────────────────┬────────────────────────────┤
//! │ Text adapter               │ Pixel adapter              │
//! │     lzwpress-text          │     lzwpress-image         │
//! ├────────────────────────────┴────────────────────────────┤
//! │ Algorithm core (this crate)                             │
//! │     PrefixTable/SuffixTable, compress/decompress        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lzwpress_core::codec;
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let codes = codec::compress(original.iter().copied());
//! let restored = codec::decompress(&codes).unwrap();
//! assert_eq!(restored, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod dictionary;
pub mod error;
pub mod stats;

// Re-exports for convenience
pub use dictionary::{Code, SEED_SIZE};
pub use error::{CodecError, Result};
pub use stats::CompressionStats;
