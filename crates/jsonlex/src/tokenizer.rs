//! The streaming JSON tokenizer implementation.
//!
//! This module provides the [`Tokenizer`], a byte-at-a-time deterministic
//! state machine that consumes UTF-8 input in chunks of arbitrary size and
//! pushes each recognized lexeme into a [`TokenSink`] the moment its last
//! byte has been consumed.
//!
//! Any state may be the terminal state at the end of a chunk: a chunk
//! boundary may fall inside a multi-byte character, a `\uXXXX` escape, a
//! number, or a keyword, and the next [`write`](Tokenizer::write) resumes
//! from the exact byte position reached. Numbers have no closing delimiter,
//! so the machine commits a number on the first byte that cannot extend it
//! and then reprocesses that byte from the start state.
//!
//! # Examples
//!
//! ```rust
//! use jsonlex::{Number, Token, Tokenizer, TokenizerOptions};
//!
//! let mut tokenizer = Tokenizer::with_sink(TokenizerOptions::default(), Vec::new());
//! tokenizer.write(b"{\"id\": 7,").unwrap();
//! tokenizer.write(b" \"ok\": true}").unwrap();
//! tokenizer.end().unwrap();
//!
//! let tokens: Vec<Token> = tokenizer
//!     .into_sink()
//!     .into_iter()
//!     .map(|(token, _offset)| token)
//!     .collect();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::LeftBrace,
//!         Token::String("id".into()),
//!         Token::Colon,
//!         Token::Number(Number::Float(7.0)),
//!         Token::Comma,
//!         Token::String("ok".into()),
//!         Token::Colon,
//!         Token::True,
//!         Token::RightBrace,
//!     ]
//! );
//! ```
#![allow(clippy::enum_glob_use)]

use core::fmt;

use crate::{
    error::TokenizerError,
    escape_buffer::UnicodeEscapeBuffer,
    keyword::{self, KeywordMatcher},
    literal_store::LiteralStore,
    options::{NumberMode, TokenizerOptions},
    partial_char::PartialCharBuffer,
    sink::{NoopSink, TokenSink},
    token::{Number, Token},
};

/// Tokenizer state, reported in [`TokenizerError`]s.
///
/// The string and number literals each form a small sub-machine; `Start` is
/// both the initial state and the state after every complete token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    /// Inside `true`, `false`, or `null`.
    Keyword,
    /// Inside a string literal, outside any escape.
    String,
    /// Immediately after the backslash of an escape sequence.
    StringEscape,
    /// Inside the four hex digits of a `\uXXXX` escape.
    StringEscapeUnicode,
    /// A multi-byte character's continuation bytes are still in a future
    /// chunk.
    StringIncompleteChar,
    /// After the leading minus sign.
    Sign,
    /// After a leading zero.
    Zero,
    /// Inside the integer digits.
    DecimalInteger,
    /// After the decimal point, before its first digit.
    DecimalPoint,
    /// Inside the fraction digits.
    DecimalFraction,
    /// After `e`/`E`, before sign or digit.
    DecimalExponent,
    /// After the exponent sign, before its first digit.
    DecimalExponentSign,
    /// Inside the exponent digits.
    DecimalExponentInteger,
    /// Poisoned after an error.
    Error,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The streaming JSON tokenizer.
///
/// One instance tokenizes one stream: feed it byte chunks with
/// [`write`](Self::write), then call [`end`](Self::end). Tokens are
/// delivered to the [`TokenSink`] in strict lexical order with
/// non-decreasing byte offsets. The instance is not shareable across
/// threads, and dropping it between writes discards any half-accumulated
/// literal.
///
/// Offsets are diagnostics-grade: the offset of every token is the byte
/// position of its first byte, except that string escape sequences advance
/// the position by their *decoded* length, so positions after an escaped
/// string undercount the raw input. They remain non-decreasing and
/// chunking-independent either way.
#[derive(Debug)]
pub struct Tokenizer<S = NoopSink> {
    sink: S,
    state: State,

    /// Cumulative byte position, updated at token boundaries.
    offset: usize,

    string_store: LiteralStore,
    number_store: LiteralStore,
    escape: UnicodeEscapeBuffer,
    /// Set after a `\uXXXX` escape in `0xD800..=0xDBFF`, awaiting its low
    /// half.
    high_surrogate: Option<u16>,
    keyword: KeywordMatcher,
    partial_char: PartialCharBuffer,
    number_mode: NumberMode,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerOptions::default())
    }
}

impl Tokenizer {
    /// Creates a tokenizer that discards its tokens.
    ///
    /// Useful for validation-only passes; everyone else wants
    /// [`with_sink`](Self::with_sink).
    #[must_use]
    pub fn new(options: TokenizerOptions) -> Self {
        Self::with_sink(options, NoopSink)
    }
}

impl<S: TokenSink> Tokenizer<S> {
    /// Creates a tokenizer delivering tokens to `sink`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonlex::{Token, Tokenizer, TokenizerOptions};
    ///
    /// let mut count = 0usize;
    /// let mut tokenizer =
    ///     Tokenizer::with_sink(TokenizerOptions::default(), |_token: Token, _offset: usize| {
    ///         count += 1;
    ///     });
    /// tokenizer.write(b"[null, null]").unwrap();
    /// tokenizer.end().unwrap();
    /// drop(tokenizer);
    /// assert_eq!(count, 5);
    /// ```
    #[must_use]
    pub fn with_sink(options: TokenizerOptions, sink: S) -> Self {
        Self {
            sink,
            state: State::Start,
            offset: 0,
            string_store: LiteralStore::for_strings(options.string_buffer_size),
            number_store: LiteralStore::for_numbers(options.number_buffer_size),
            escape: UnicodeEscapeBuffer::new(),
            high_surrogate: None,
            keyword: KeywordMatcher::none(),
            partial_char: PartialCharBuffer::new(),
            number_mode: options.number_mode,
        }
    }

    /// Consumes the tokenizer and returns its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Feeds one chunk of the stream.
    ///
    /// The chunk may start and end anywhere: in the middle of a number, a
    /// keyword, an escape sequence, or even between the bytes of a single
    /// UTF-8 character. Tokens completed by this chunk are delivered to the
    /// sink before the call returns.
    ///
    /// # Errors
    ///
    /// [`TokenizerError::UnexpectedByte`] on the first byte not permitted by
    /// the grammar; the tokenizer is poisoned afterwards.
    #[allow(clippy::too_many_lines)]
    pub fn write(&mut self, chunk: &[u8]) -> Result<(), TokenizerError> {
        use State::*;

        let mut i = 0;
        while i < chunk.len() {
            let n = chunk[i];
            match self.state {
                Start => self.start_byte(n, i)?,

                Keyword => match self.keyword.step(n) {
                    keyword::Step::NeedMore => {}
                    keyword::Step::Done(keyword) => {
                        self.sink.token(keyword.token(), self.offset);
                        self.offset += keyword.text().len();
                        self.state = Start;
                    }
                    keyword::Step::Reject => return Err(self.unexpected(n, i)),
                },

                String => match n {
                    b'"' => {
                        let byte_len = self.string_store.byte_len();
                        let text = self.string_store.take_string();
                        self.sink.token(Token::String(text), self.offset);
                        self.offset += byte_len + 2;
                        self.state = Start;
                    }
                    b'\\' => self.state = StringEscape,
                    0x00..=0x1F => return Err(self.unexpected(n, i)),
                    0x20..=0x7F => {
                        // Bulk-copy the run of plain ASCII content bytes.
                        let run = chunk[i..]
                            .iter()
                            .take_while(|&&b| (0x20..0x80).contains(&b) && b != b'"' && b != b'\\')
                            .count();
                        self.string_store.push_slice(&chunk[i..i + run]);
                        i += run - 1;
                    }
                    0x80..=0xFF => {
                        let sequence_len = utf8_sequence_len(n);
                        if i + sequence_len <= chunk.len() {
                            self.string_store.push_slice(&chunk[i..i + sequence_len]);
                            i += sequence_len - 1;
                        } else {
                            self.partial_char.begin(&chunk[i..], sequence_len);
                            self.state = StringIncompleteChar;
                            i = chunk.len() - 1;
                        }
                    }
                },

                StringIncompleteChar => {
                    let taken = self.partial_char.fill(&chunk[i..]);
                    if let Some(sequence) = self.partial_char.complete() {
                        self.string_store.push_slice(sequence);
                        self.partial_char.clear();
                        self.state = String;
                    }
                    i += taken - 1;
                }

                StringEscape => match n {
                    b'u' => {
                        self.escape.reset();
                        self.state = StringEscapeUnicode;
                    }
                    _ => {
                        let decoded = match n {
                            b'"' | b'\\' | b'/' => n,
                            b'b' => 0x08,
                            b'f' => 0x0C,
                            b'n' => b'\n',
                            b'r' => b'\r',
                            b't' => b'\t',
                            _ => return Err(self.unexpected(n, i)),
                        };
                        self.string_store.push_byte(decoded);
                        self.state = String;
                    }
                },

                StringEscapeUnicode => {
                    if !n.is_ascii_hexdigit() {
                        return Err(self.unexpected(n, i));
                    }
                    if let Some(unit) = self.escape.feed(n) {
                        self.decode_escaped_unit(unit);
                        self.state = String;
                    }
                }

                Sign => match n {
                    b'0' => {
                        self.number_store.push_byte(n);
                        self.state = Zero;
                    }
                    b'1'..=b'9' => {
                        self.number_store.push_byte(n);
                        self.state = DecimalInteger;
                    }
                    _ => return Err(self.unexpected(n, i)),
                },

                Zero => match n {
                    b'.' => {
                        self.number_store.push_byte(n);
                        self.state = DecimalPoint;
                    }
                    b'e' | b'E' => {
                        self.number_store.push_byte(n);
                        self.state = DecimalExponent;
                    }
                    _ => {
                        // Reprocess the terminating byte from Start.
                        self.flush_number();
                        self.state = Start;
                        continue;
                    }
                },

                DecimalInteger => match n {
                    b'0'..=b'9' => self.number_store.push_byte(n),
                    b'.' => {
                        self.number_store.push_byte(n);
                        self.state = DecimalPoint;
                    }
                    b'e' | b'E' => {
                        self.number_store.push_byte(n);
                        self.state = DecimalExponent;
                    }
                    _ => {
                        self.flush_number();
                        self.state = Start;
                        continue;
                    }
                },

                DecimalPoint => match n {
                    b'0'..=b'9' => {
                        self.number_store.push_byte(n);
                        self.state = DecimalFraction;
                    }
                    _ => return Err(self.unexpected(n, i)),
                },

                DecimalFraction => match n {
                    b'0'..=b'9' => self.number_store.push_byte(n),
                    b'e' | b'E' => {
                        self.number_store.push_byte(n);
                        self.state = DecimalExponent;
                    }
                    _ => {
                        self.flush_number();
                        self.state = Start;
                        continue;
                    }
                },

                DecimalExponent => match n {
                    b'+' | b'-' => {
                        self.number_store.push_byte(n);
                        self.state = DecimalExponentSign;
                    }
                    b'0'..=b'9' => {
                        self.number_store.push_byte(n);
                        self.state = DecimalExponentInteger;
                    }
                    _ => return Err(self.unexpected(n, i)),
                },

                DecimalExponentSign => match n {
                    b'0'..=b'9' => {
                        self.number_store.push_byte(n);
                        self.state = DecimalExponentInteger;
                    }
                    _ => return Err(self.unexpected(n, i)),
                },

                DecimalExponentInteger => match n {
                    b'0'..=b'9' => self.number_store.push_byte(n),
                    _ => {
                        self.flush_number();
                        self.state = Start;
                        continue;
                    }
                },

                Error => return Err(self.unexpected(n, i)),
            }
            i += 1;
        }
        Ok(())
    }

    /// UTF-8-encodes `text` and feeds it as one chunk.
    ///
    /// # Errors
    ///
    /// Same as [`write`](Self::write).
    pub fn write_str(&mut self, text: &str) -> Result<(), TokenizerError> {
        self.write(text.as_bytes())
    }

    /// Finalizes the stream.
    ///
    /// A pending number literal is complete the moment the stream ends (it
    /// has no closing delimiter) and is flushed here. Every other
    /// mid-token state still needs input and fails.
    ///
    /// # Errors
    ///
    /// [`TokenizerError::IncompleteInput`] if the stream ends inside a
    /// string, escape sequence, keyword, or unfinished number; the
    /// tokenizer is poisoned afterwards.
    pub fn end(&mut self) -> Result<(), TokenizerError> {
        match self.state {
            State::Start => Ok(()),
            State::Zero
            | State::DecimalInteger
            | State::DecimalFraction
            | State::DecimalExponentInteger => {
                self.flush_number();
                self.state = State::Start;
                Ok(())
            }
            state => {
                self.state = State::Error;
                Err(TokenizerError::IncompleteInput { state })
            }
        }
    }

    fn start_byte(&mut self, n: u8, position: usize) -> Result<(), TokenizerError> {
        match n {
            b' ' | b'\t' | b'\n' | b'\r' => self.offset += 1,
            b'{' => self.structural(Token::LeftBrace),
            b'}' => self.structural(Token::RightBrace),
            b'[' => self.structural(Token::LeftBracket),
            b']' => self.structural(Token::RightBracket),
            b':' => self.structural(Token::Colon),
            b',' => self.structural(Token::Comma),
            b't' | b'f' | b'n' => {
                self.keyword = KeywordMatcher::after(n);
                self.state = State::Keyword;
            }
            b'"' => {
                self.string_store.reset();
                self.high_surrogate = None;
                self.state = State::String;
            }
            b'0' => {
                self.number_store.reset();
                self.number_store.push_byte(n);
                self.state = State::Zero;
            }
            b'1'..=b'9' => {
                self.number_store.reset();
                self.number_store.push_byte(n);
                self.state = State::DecimalInteger;
            }
            b'-' => {
                self.number_store.reset();
                self.number_store.push_byte(n);
                self.state = State::Sign;
            }
            _ => return Err(self.unexpected(n, position)),
        }
        Ok(())
    }

    fn structural(&mut self, token: Token) {
        self.sink.token(token, self.offset);
        self.offset += 1;
    }

    fn flush_number(&mut self) {
        let byte_len = self.number_store.byte_len();
        let literal = self.number_store.take_string();
        let number = match self.number_mode {
            // The number grammar admits only valid float syntax.
            NumberMode::Float => Number::Float(literal.parse().unwrap()),
            NumberMode::Literal => Number::Literal(literal),
        };
        self.sink.token(Token::Number(number), self.offset);
        self.offset += byte_len;
    }

    /// Folds one decoded `\uXXXX` code unit into the string literal,
    /// pairing surrogate halves across consecutive escapes.
    ///
    /// A high half is held back until the next escape. If that next escape
    /// is not a low half, the held half cannot form a scalar value: it is
    /// decoded as U+FFFD and the non-pairing unit is dropped. A stray low
    /// half decodes as U+FFFD directly.
    fn decode_escaped_unit(&mut self, unit: u16) {
        match self.high_surrogate.take() {
            None => {
                if (0xD800..=0xDBFF).contains(&unit) {
                    self.high_surrogate = Some(unit);
                } else {
                    self.string_store.push_char(
                        char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER),
                    );
                }
            }
            Some(high) => {
                if (0xDC00..=0xDFFF).contains(&unit) {
                    let code_point = 0x10000
                        + ((u32::from(high) - 0xD800) << 10)
                        + (u32::from(unit) - 0xDC00);
                    self.string_store.push_char(
                        char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER),
                    );
                } else {
                    self.string_store.push_char(char::REPLACEMENT_CHARACTER);
                }
            }
        }
    }

    fn unexpected(&mut self, byte: u8, position: usize) -> TokenizerError {
        let state = self.state;
        self.state = State::Error;
        TokenizerError::UnexpectedByte {
            byte,
            position,
            state,
        }
    }
}

/// Sequence length announced by a multi-byte lead byte.
///
/// `0xC2..=0xDF` opens a 2-byte sequence, everything else up to `0xEF` a
/// 3-byte one, and the rest 4 bytes. Ill-formed leads are not rejected
/// here; whatever they accumulate is replaced with U+FFFD when the literal
/// is decoded.
fn utf8_sequence_len(lead: u8) -> usize {
    if (194..=223).contains(&lead) {
        2
    } else if lead <= 239 {
        3
    } else {
        4
    }
}
