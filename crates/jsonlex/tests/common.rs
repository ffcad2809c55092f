#![allow(missing_docs)]
#![allow(dead_code)]

// This stream intentionally cuts its chunks on awkward seams (inside a key,
// inside a keyword's neighborhood) to exercise cross-chunk resumption.
#[rustfmt::skip]
pub const STREAM: [&str; 3] = [
    r#"{"id":1,"ta"#,        // cut inside the "tags" key
    r#"gs":["a","b"],"ok"#,  // cut inside the "ok" key's literal
    r#"":true}"#,
];

pub const JOINED: &str = r#"{"id":1,"tags":["a","b"],"ok":true}"#;

#[test]
fn stream_chunks_reassemble() {
    assert_eq!(STREAM.join(""), JOINED);
}
