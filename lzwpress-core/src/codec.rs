//! LZW encode/decode state machines over byte symbols.
//!
//! Both directions are single-pass and sequential. The dictionary grows
//! unbounded for the life of one call; there is no clear code, no end-of-
//! information marker, and no variable-width bit packing. Codes travel as
//! plain integers and length is implicit in the sequence.

use crate::dictionary::{Code, PrefixTable, SEED_SIZE, SuffixTable};
use crate::error::{CodecError, Result};

/// Compress a byte sequence into a sequence of dictionary codes.
///
/// The running match `w` is extended while the dictionary knows the
/// extension; on the first miss the code for `w` is emitted, the extension
/// is inserted under the next free code, and the match restarts at the
/// current byte. Empty input produces an empty code list.
pub fn compress(input: impl IntoIterator<Item = u8>) -> Vec<Code> {
    let mut table = PrefixTable::new();
    let mut iter = input.into_iter();
    let mut output = Vec::new();

    let Some(first) = iter.next() else {
        return output;
    };
    let mut w: Code = first as Code;

    for byte in iter {
        match table.extend(w, byte) {
            Some(code) => w = code,
            None => {
                output.push(w);
                table.insert(w, byte);
                w = byte as Code;
            }
        }
    }

    // The running match is never empty once input was non-empty.
    output.push(w);
    output
}

/// Decompress a sequence of dictionary codes back into bytes.
///
/// Mirrors [`compress`] exactly: the inverse dictionary is rebuilt with the
/// same assignment rule, so any stream produced by the encoder round-trips
/// without the dictionary ever being transmitted.
///
/// # Errors
///
/// - [`CodecError::EmptyInput`] if `codes` is empty.
/// - [`CodecError::UnknownCode`] if the first code is not a seed entry.
/// - [`CodecError::CorruptStream`] if a later code is neither a known entry
///   nor exactly the next code to be assigned.
pub fn decompress(codes: &[Code]) -> Result<Vec<u8>> {
    let (&first, rest) = codes.split_first().ok_or(CodecError::EmptyInput)?;
    if first >= SEED_SIZE {
        return Err(CodecError::unknown_code(first));
    }

    let mut table = SuffixTable::new();
    let mut output = Vec::with_capacity(codes.len());
    output.push(first as u8);
    let mut w = first;

    for (i, &code) in rest.iter().enumerate() {
        let start = output.len();
        let entry_first = if table.contains(code) {
            table.expand_into(code, &mut output);
            output[start]
        } else if code == table.next_code() {
            // Self-reference: the entry being decoded is the one the encoder
            // assigned on this very step, so it must be w + first(w).
            table.expand_into(w, &mut output);
            let head = output[start];
            output.push(head);
            head
        } else {
            return Err(CodecError::corrupt_stream(code, i + 1));
        };

        table.push(w, entry_first);
        w = code;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_known_prefix() {
        let codes = compress(b"TOBEORNOTTOBEORTOBEORNOT".iter().copied());
        assert_eq!(
            codes,
            vec![84, 79, 66, 69, 79, 82, 78, 79, 84, 256, 258, 260, 265, 259, 261, 263]
        );
    }

    #[test]
    fn test_compress_empty() {
        let codes = compress(std::iter::empty());
        assert!(codes.is_empty());
    }

    #[test]
    fn test_compress_single_byte() {
        assert_eq!(compress(b"A".iter().copied()), vec![65]);
    }

    #[test]
    fn test_decompress_empty_fails() {
        assert!(matches!(decompress(&[]), Err(CodecError::EmptyInput)));
    }

    #[test]
    fn test_decompress_unknown_start_code() {
        let err = decompress(&[256]).unwrap_err();
        assert!(matches!(err, CodecError::UnknownCode { code: 256 }));
    }

    #[test]
    fn test_decompress_single_seed_code() {
        // A lone seed code yields one byte and grows nothing.
        assert_eq!(decompress(&[5]).unwrap(), vec![5]);
    }

    #[test]
    fn test_decompress_corrupt_stream() {
        let mut codes = compress(b"TOBEORNOTTOBEORTOBEORNOT".iter().copied());
        let last = codes.len() - 1;
        codes[last] = 9999;
        let err = decompress(&codes).unwrap_err();
        assert!(matches!(
            err,
            CodecError::CorruptStream { code: 9999, position } if position == last
        ));
    }

    #[test]
    fn test_decompress_self_reference() {
        // "cScSc" emits the not-yet-assigned code 256 for "cS" mid-stream.
        let codes = compress(b"ABABABA".iter().copied());
        assert!(codes.contains(&256));
        assert_eq!(decompress(&codes).unwrap(), b"ABABABA");
    }

    #[test]
    fn test_roundtrip_patterns() {
        let cases: Vec<Vec<u8>> = vec![
            b"A".to_vec(),
            b"AAAAAAAAAA".to_vec(),
            b"ABCDEFGHIJ".to_vec(),
            b"TOBEORNOTTOBEORTOBEORNOT".to_vec(),
            (0..=255).collect(),
            b"The quick brown fox jumps over the lazy dog. ".repeat(20),
        ];
        for original in cases {
            let codes = compress(original.iter().copied());
            let restored = decompress(&codes).unwrap();
            assert_eq!(restored, original);
        }
    }

    #[test]
    fn test_code_monotonicity() {
        // One entry is assigned per emission, counting up from 256, so the
        // code emitted at step t can only reference an entry below 256 + t.
        let codes = compress(b"ABABABABACACACADADADAD".iter().copied());
        for (t, &code) in codes.iter().enumerate() {
            assert!(
                code < SEED_SIZE + t as Code,
                "code {code} at step {t} references an entry not yet assigned"
            );
        }
    }

    #[test]
    fn test_determinism() {
        let data = b"deterministic deterministic deterministic";
        let a = compress(data.iter().copied());
        let b = compress(data.iter().copied());
        assert_eq!(a, b);
        assert_eq!(decompress(&a).unwrap(), decompress(&b).unwrap());
    }
}
