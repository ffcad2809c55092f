#![no_main]

use jsonlex::{NumberMode, Token, Tokenizer, TokenizerError, TokenizerOptions};
use libfuzzer_sys::fuzz_target;

const HEADER: usize = 3; // 1 flag byte + 2-byte split seed

fn tokenize(
    data: &[u8],
    options: TokenizerOptions,
    chunk_size: usize,
) -> Result<Vec<(Token, usize)>, TokenizerError> {
    let mut tokenizer = Tokenizer::with_sink(options, Vec::new());
    for chunk in data.chunks(chunk_size.max(1)) {
        tokenizer.write(chunk)?;
    }
    tokenizer.end()?;
    Ok(tokenizer.into_sink())
}

fuzz_target!(|data: &[u8]| {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let split_seed = usize::from(u16::from_le_bytes([data[1], data[2]]));
    let data = &data[HEADER..];
    if data.is_empty() {
        return;
    }

    let options = TokenizerOptions {
        string_buffer_size: if flags & 1 != 0 { 8 } else { 0 },
        number_buffer_size: if flags & 2 != 0 { 4 } else { 0 },
        number_mode: if flags & 4 != 0 {
            NumberMode::Literal
        } else {
            NumberMode::Float
        },
    };

    // Whole-input feed versus a seeded chunking: success, token kinds,
    // values, and offsets must all agree. Error positions are relative to
    // the failing chunk, so errors are compared on occurrence only.
    let whole = tokenize(data, options, data.len());
    let chunked = tokenize(data, options, 1 + split_seed % data.len());

    match (whole, chunked) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(_), Err(_)) => {}
        (a, b) => panic!("chunking changed the outcome: {a:?} vs {b:?}"),
    }
});
