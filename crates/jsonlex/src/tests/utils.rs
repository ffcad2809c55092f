use alloc::vec::Vec;

use crate::{Token, Tokenizer, TokenizerError, TokenizerOptions};

/// Documents that exercise every sub-machine: structure, whitespace,
/// keywords, escapes, surrogate pairs, raw multi-byte text, and the full
/// number grammar. Stream tests re-feed these under many chunkings.
pub const CORPUS: &[&str] = &[
    "[]",
    "[0,1,-1]",
    "[6.02e23, 6.02e+23, 6.02e-23, 0e23]",
    "{\"a\":1,\"b\":[true,false,null],\"c\":\"d\\ne\"}",
    "\"a\\u00e9b\"",
    "\"\\uD83D\\uDE00\"",
    "{\"emoji\":\"\u{1F600}\u{1F680}\",\"text\":\"h\u{E9}llo w\u{F6}rld\"}",
    "  [ 12.5e-3 , \"\\u0041\\uD834\\uDD1E\" , {\"k\" : [] } ]  ",
];

pub fn collect_chunks(
    chunks: &[&[u8]],
    options: TokenizerOptions,
) -> Result<Vec<(Token, usize)>, TokenizerError> {
    let mut tokenizer = Tokenizer::with_sink(options, Vec::new());
    for chunk in chunks {
        tokenizer.write(chunk)?;
    }
    tokenizer.end()?;
    Ok(tokenizer.into_sink())
}

pub fn collect(payload: &[u8]) -> Result<Vec<(Token, usize)>, TokenizerError> {
    collect_chunks(&[payload], TokenizerOptions::default())
}

/// Tokens only, offsets dropped.
pub fn tokens(payload: &[u8]) -> Vec<Token> {
    collect(payload)
        .unwrap()
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}
