//! Byte accumulation for in-progress string and number literals.
//!
//! The tokenizer owns two [`LiteralStore`]s, one for the current string
//! literal and one for the current number literal. Each store comes in two
//! flavors, chosen per instance at construction:
//!
//! - **Growable** keeps every appended byte in one growable buffer and
//!   decodes it once, when the literal completes. Peak memory is the size
//!   of the largest literal.
//! - **Flushing** holds a fixed byte capacity; an append that would
//!   overflow it first decodes the filled bytes into a text accumulator and
//!   restarts the buffer. Peak raw-byte memory per literal is bounded by
//!   the capacity.
//!
//! Appends are always whole characters (ASCII bytes, complete multi-byte
//! sequences, or `char`s from decoded escapes), so a flush never lands
//! inside a UTF-8 sequence. Decoding is lossy: a literal that carries
//! invalid UTF-8 comes out with U+FFFD in place of the offending bytes
//! rather than failing the tokenize call.
use alloc::{string::String, vec::Vec};

#[derive(Debug)]
pub(crate) enum LiteralStore {
    Growable {
        bytes: Vec<u8>,
    },
    Flushing {
        bytes: Vec<u8>,
        capacity: usize,
        decoded: String,
    },
}

impl LiteralStore {
    pub fn growable() -> Self {
        LiteralStore::Growable { bytes: Vec::new() }
    }

    pub fn flushing(capacity: usize) -> Self {
        LiteralStore::Flushing {
            bytes: Vec::with_capacity(capacity),
            capacity,
            decoded: String::new(),
        }
    }

    /// Store for string literals: flushing above the 4-byte floor (a single
    /// character may need 4 bytes), growable otherwise.
    pub fn for_strings(buffer_size: usize) -> Self {
        if buffer_size > 4 {
            Self::flushing(buffer_size)
        } else {
            Self::growable()
        }
    }

    /// Store for number literals: flushing for any non-zero capacity.
    pub fn for_numbers(buffer_size: usize) -> Self {
        if buffer_size > 0 {
            Self::flushing(buffer_size)
        } else {
            Self::growable()
        }
    }

    /// Discards everything accumulated for the previous literal.
    pub fn reset(&mut self) {
        match self {
            LiteralStore::Growable { bytes } => bytes.clear(),
            LiteralStore::Flushing { bytes, decoded, .. } => {
                bytes.clear();
                decoded.clear();
            }
        }
    }

    pub fn push_byte(&mut self, byte: u8) {
        self.push_slice(&[byte]);
    }

    pub fn push_slice(&mut self, slice: &[u8]) {
        match self {
            LiteralStore::Growable { bytes } => bytes.extend_from_slice(slice),
            LiteralStore::Flushing {
                bytes,
                capacity,
                decoded,
            } => {
                if bytes.len() + slice.len() > *capacity {
                    spill(bytes, decoded);
                }
                bytes.extend_from_slice(slice);
            }
        }
    }

    pub fn push_char(&mut self, ch: char) {
        let mut encoded = [0u8; 4];
        self.push_slice(ch.encode_utf8(&mut encoded).as_bytes());
    }

    /// Bytes accumulated for the current literal. For the flushing store
    /// this is the decoded accumulator plus the undecoded tail.
    pub fn byte_len(&self) -> usize {
        match self {
            LiteralStore::Growable { bytes } => bytes.len(),
            LiteralStore::Flushing { bytes, decoded, .. } => decoded.len() + bytes.len(),
        }
    }

    /// Decodes and returns the literal, leaving the store reset.
    pub fn take_string(&mut self) -> String {
        match self {
            LiteralStore::Growable { bytes } => match String::from_utf8(core::mem::take(bytes)) {
                Ok(text) => text,
                Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
            },
            LiteralStore::Flushing { bytes, decoded, .. } => {
                spill(bytes, decoded);
                core::mem::take(decoded)
            }
        }
    }
}

fn spill(bytes: &mut Vec<u8>, decoded: &mut String) {
    decoded.push_str(&String::from_utf8_lossy(bytes));
    bytes.clear();
}
