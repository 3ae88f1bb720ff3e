//! LZW dictionary (code table) management.
//!
//! Both tables share the same assignment rule: codes 0-255 are the implicit
//! single-byte seed entries, and codes 256, 257, ... are handed out strictly
//! increasing, one per insertion, never reused and never removed. Entries are
//! stored as (prefix code, appended byte) pairs instead of owned byte
//! strings, so lookups are index operations and no growable keys are
//! reallocated as matches get longer.

use std::collections::HashMap;

/// An integer identifying one dictionary entry.
pub type Code = u32;

/// Number of implicit single-byte seed entries.
pub const SEED_SIZE: Code = 256;

/// Encoder-side dictionary: maps (prefix code, appended byte) to the code
/// assigned for that extension.
///
/// Single-byte strings are the identity mapping `byte as Code` and occupy no
/// storage; only multi-byte extensions are inserted.
#[derive(Debug)]
pub struct PrefixTable {
    extensions: HashMap<(Code, u8), Code>,
    next_code: Code,
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTable {
    /// Create a table holding exactly the 256 seed entries.
    pub fn new() -> Self {
        Self {
            extensions: HashMap::new(),
            next_code: SEED_SIZE,
        }
    }

    /// Look up the code for `prefix` extended by `byte`, if present.
    pub fn extend(&self, prefix: Code, byte: u8) -> Option<Code> {
        self.extensions.get(&(prefix, byte)).copied()
    }

    /// Insert the extension of `prefix` by `byte` under the next free code.
    ///
    /// Returns the assigned code.
    pub fn insert(&mut self, prefix: Code, byte: u8) -> Code {
        let code = self.next_code;
        self.extensions.insert((prefix, byte), code);
        self.next_code += 1;
        code
    }

    /// The next code that will be assigned.
    pub fn next_code(&self) -> Code {
        self.next_code
    }
}

#[derive(Debug)]
struct SuffixEntry {
    parent: Code,
    byte: u8,
    /// First byte of the full expansion, memoized so the decoder's
    /// self-reference branch and dictionary growth stay O(1).
    first: u8,
}

/// Decoder-side dictionary: an arena of (parent code, appended byte) chains.
///
/// Entry `i` of the arena holds code `SEED_SIZE + i`. Expanding a code walks
/// the parent chain back to a seed byte and reverses in place.
#[derive(Debug, Default)]
pub struct SuffixTable {
    entries: Vec<SuffixEntry>,
}

impl SuffixTable {
    /// Create a table holding exactly the 256 seed entries.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The next code that will be assigned.
    pub fn next_code(&self) -> Code {
        SEED_SIZE + self.entries.len() as Code
    }

    /// Whether `code` already names an entry (seed or assigned).
    pub fn contains(&self, code: Code) -> bool {
        code < self.next_code()
    }

    /// First byte of the expansion of `code`.
    ///
    /// `code` must be contained in the table.
    pub fn first_byte(&self, code: Code) -> u8 {
        if code < SEED_SIZE {
            code as u8
        } else {
            self.entries[(code - SEED_SIZE) as usize].first
        }
    }

    /// Insert the extension of `parent` by `byte` under the next free code.
    ///
    /// Returns the assigned code. `parent` must be contained in the table.
    pub fn push(&mut self, parent: Code, byte: u8) -> Code {
        let code = self.next_code();
        let first = self.first_byte(parent);
        self.entries.push(SuffixEntry {
            parent,
            byte,
            first,
        });
        code
    }

    /// Append the expansion of `code` to `out`.
    ///
    /// `code` must be contained in the table.
    pub fn expand_into(&self, code: Code, out: &mut Vec<u8>) {
        let start = out.len();
        let mut current = code;
        while current >= SEED_SIZE {
            let entry = &self.entries[(current - SEED_SIZE) as usize];
            out.push(entry.byte);
            current = entry.parent;
        }
        out.push(current as u8);
        out[start..].reverse();
    }
}
