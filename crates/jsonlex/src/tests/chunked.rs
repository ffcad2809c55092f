use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use super::utils::{collect, collect_chunks, CORPUS};
use crate::{produce_chunks, Tokenizer, TokenizerOptions};

/// Property: for any partition of a document into byte chunks, feeding the
/// chunks sequentially yields the identical token sequence (kinds, values,
/// offsets) as feeding the document whole.
#[test]
fn every_two_way_split_matches_single_write() {
    for payload in CORPUS {
        let bytes = payload.as_bytes();
        let whole = collect(bytes).unwrap();
        for cut in 0..=bytes.len() {
            let split = collect_chunks(
                &[&bytes[..cut], &bytes[cut..]],
                TokenizerOptions::default(),
            )
            .unwrap();
            assert_eq!(split, whole, "payload {payload:?} cut at {cut}");
        }
    }
}

#[test]
fn one_byte_chunks_match() {
    for payload in CORPUS {
        let bytes = payload.as_bytes();
        let whole = collect(bytes).unwrap();
        let chunks: Vec<&[u8]> = bytes.chunks(1).collect();
        assert_eq!(
            collect_chunks(&chunks, TokenizerOptions::default()).unwrap(),
            whole,
            "payload {payload:?}"
        );
    }
}

#[test]
fn produced_partitions_match() {
    for payload in CORPUS {
        let bytes = payload.as_bytes();
        let whole = collect(bytes).unwrap();
        for parts in [2, 3, 5, 7, 11] {
            let chunks = produce_chunks(bytes, parts);
            assert_eq!(
                collect_chunks(&chunks, TokenizerOptions::default()).unwrap(),
                whole,
                "payload {payload:?} in {parts} parts"
            );
        }
    }
}

#[test]
fn offsets_are_non_decreasing() {
    for payload in CORPUS {
        let tokens = collect(payload.as_bytes()).unwrap();
        for pair in tokens.windows(2) {
            assert!(pair[0].1 <= pair[1].1, "payload {payload:?}: {tokens:?}");
        }
    }
}

/// Property: tokenizing a valid document never errors, and arbitrary
/// chunk partitions reproduce the single-write token stream exactly.
#[test]
fn partition_roundtrip_quickcheck() {
    fn prop(doc: ArbitraryJson, splits: Vec<usize>) -> bool {
        let text = doc.0.to_string();
        let bytes = text.as_bytes();
        let whole = collect(bytes).unwrap();

        let mut tokenizer = Tokenizer::with_sink(TokenizerOptions::default(), Vec::new());
        let mut idx = 0;
        let mut remaining = bytes.len();
        for s in splits {
            if remaining == 0 {
                break;
            }
            let size = 1 + (s % remaining);
            tokenizer.write(&bytes[idx..idx + size]).unwrap();
            idx += size;
            remaining -= size;
        }
        tokenizer.write(&bytes[idx..]).unwrap();
        tokenizer.end().unwrap();

        tokenizer.into_sink() == whole
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(ArbitraryJson, Vec<usize>) -> bool);
}

#[derive(Debug, Clone)]
struct ArbitraryJson(serde_json::Value);

impl Arbitrary for ArbitraryJson {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbitraryJson(arbitrary_value(g, 3))
    }
}

fn arbitrary_value(g: &mut Gen, depth: usize) -> serde_json::Value {
    use serde_json::Value;

    let choice = u8::arbitrary(g) % if depth == 0 { 4 } else { 6 };
    match choice {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => {
            let number = loop {
                let candidate = f64::arbitrary(g);
                if candidate.is_finite() {
                    break candidate;
                }
            };
            Value::Number(serde_json::Number::from_f64(number).unwrap())
        }
        3 => Value::String(String::arbitrary(g)),
        4 => Value::Array(
            (0..usize::arbitrary(g) % 4)
                .map(|_| arbitrary_value(g, depth - 1))
                .collect(),
        ),
        _ => Value::Object(
            (0..usize::arbitrary(g) % 4)
                .map(|_| (String::arbitrary(g), arbitrary_value(g, depth - 1)))
                .collect(),
        ),
    }
}
