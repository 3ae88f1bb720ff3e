//! Compression statistics.
//!
//! Pure helpers for the summary figures shown after a run: Shannon entropy
//! of the input and of the code stream, the mean occurrences per distinct
//! symbol, and the size bookkeeping. Sizes are symbol counts: bytes on the
//! input side, codes on the output side.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::dictionary::Code;

/// Shannon entropy of a symbol sequence, in bits per symbol.
///
/// Empty input has zero entropy.
pub fn entropy<T: Eq + Hash>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut freq: HashMap<&T, usize> = HashMap::new();
    for symbol in data {
        *freq.entry(symbol).or_insert(0) += 1;
    }
    let len = data.len() as f64;
    freq.values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Mean number of occurrences per distinct symbol.
///
/// Zero for empty input.
pub fn average_code_length<T: Eq + Hash>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&T> = data.iter().collect();
    data.len() as f64 / distinct.len() as f64
}

/// Summary of one compression run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
    /// Input length in symbols (bytes).
    pub input_size: usize,
    /// Output length in symbols (codes).
    pub compressed_size: usize,
    /// `compressed_size / input_size`; zero for empty input.
    pub ratio: f64,
    /// `input_size - compressed_size`.
    pub difference: i64,
    /// Shannon entropy of the input bytes.
    pub input_entropy: f64,
    /// Shannon entropy of the code stream.
    pub compressed_entropy: f64,
    /// Mean occurrences per distinct input byte.
    pub average_code_length: f64,
}

impl CompressionStats {
    /// Compute the summary for a compression of `input` into `codes`.
    pub fn new(input: &[u8], codes: &[Code]) -> Self {
        let input_size = input.len();
        let compressed_size = codes.len();
        let ratio = if input_size > 0 {
            compressed_size as f64 / input_size as f64
        } else {
            0.0
        };
        Self {
            input_size,
            compressed_size,
            ratio,
            difference: input_size as i64 - compressed_size as i64,
            input_entropy: entropy(input),
            compressed_entropy: entropy(codes),
            average_code_length: average_code_length(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_uniform() {
        // Two equiprobable symbols carry exactly one bit each.
        let data = b"ABABABAB";
        assert!((entropy(data) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_degenerate() {
        assert_eq!(entropy::<u8>(&[]), 0.0);
        assert_eq!(entropy(&[b'X'; 100]), 0.0);
    }

    #[test]
    fn test_average_code_length() {
        assert_eq!(average_code_length(b"AABB"), 2.0);
        assert_eq!(average_code_length::<u8>(&[]), 0.0);
    }

    #[test]
    fn test_stats_bookkeeping() {
        let input = b"TOBEORNOTTOBEORTOBEORNOT";
        let codes = crate::codec::compress(input.iter().copied());
        let stats = CompressionStats::new(input, &codes);

        assert_eq!(stats.input_size, 24);
        assert_eq!(stats.compressed_size, 16);
        assert_eq!(stats.difference, 8);
        assert!((stats.ratio - 16.0 / 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_empty_input() {
        let stats = CompressionStats::new(&[], &[]);
        assert_eq!(stats.ratio, 0.0);
        assert_eq!(stats.difference, 0);
    }
}
