//! Reassembly buffer for a multi-byte UTF-8 character whose continuation
//! bytes arrive in a later chunk.
//!
//! When a string literal's lead byte announces an `N`-byte sequence and the
//! current chunk holds fewer than `N` of them, the available prefix is
//! stashed here and the tokenizer parks in its incomplete-character state.
//! Each following chunk tops the buffer up; the assembled sequence is
//! appended to the string literal once all `N` bytes are present. A chunk
//! may be as small as one byte, so the top-up can span several `write`
//! calls.

#[derive(Debug)]
pub(crate) struct PartialCharBuffer {
    bytes: [u8; 4],
    /// Total length of the sequence announced by the lead byte (2–4).
    sequence_len: u8,
    /// Bytes already stashed; the sequence is complete when this reaches
    /// `sequence_len`.
    have: u8,
}

impl PartialCharBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0; 4],
            sequence_len: 0,
            have: 0,
        }
    }

    /// Stashes the available prefix of an `sequence_len`-byte sequence.
    pub fn begin(&mut self, prefix: &[u8], sequence_len: usize) {
        debug_assert!((2..=4).contains(&sequence_len));
        debug_assert!(prefix.len() < sequence_len);
        self.bytes[..prefix.len()].copy_from_slice(prefix);
        self.sequence_len = sequence_len as u8;
        self.have = prefix.len() as u8;
    }

    /// Copies continuation bytes from the front of `chunk`, returning how
    /// many were taken (at least one when `chunk` is non-empty and the
    /// sequence is still incomplete).
    pub fn fill(&mut self, chunk: &[u8]) -> usize {
        let missing = usize::from(self.sequence_len - self.have);
        let take = missing.min(chunk.len());
        let start = usize::from(self.have);
        self.bytes[start..start + take].copy_from_slice(&chunk[..take]);
        self.have += take as u8;
        take
    }

    /// The fully assembled sequence, or `None` while bytes are missing.
    pub fn complete(&self) -> Option<&[u8]> {
        if self.sequence_len > 0 && self.have == self.sequence_len {
            Some(&self.bytes[..usize::from(self.sequence_len)])
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.sequence_len = 0;
        self.have = 0;
    }
}
