use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized byte chunks.
///
/// Chunk boundaries fall wherever the arithmetic puts them, including in
/// the middle of a multi-byte character or an escape sequence; the
/// tokenizer must produce identical output regardless, which is exactly
/// what stream tests use this helper to check.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let len = payload.len();
    let chunk_size = len.div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}

/// Return a sequence of prefixes converging to `payload`, one per chunk
/// produced by [`produce_chunks`].
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_prefixes(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    let chunks = produce_chunks(payload, parts);
    let mut prefixes = Vec::with_capacity(chunks.len());
    let mut end = 0;
    for chunk in chunks {
        end += chunk.len();
        prefixes.push(&payload[..end]);
    }
    prefixes
}
