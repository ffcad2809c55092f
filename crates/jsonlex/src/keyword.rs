use crate::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    Null,
    True,
    False,
}

impl Keyword {
    pub fn token(self) -> Token {
        match self {
            Keyword::Null => Token::Null,
            Keyword::True => Token::True,
            Keyword::False => Token::False,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Keyword::Null => "null",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }
}

/// What happened after feeding one more byte into the keyword matcher?
pub(crate) enum Step {
    /// Byte matched, but the keyword is not finished yet.
    NeedMore,
    /// Byte matched *and* we consumed the last byte of the keyword.
    Done(Keyword),
    /// Byte did **not** match the expected one.
    Reject,
}

/// `None`  ➜  we are **not** in the middle of a keyword
/// `Some`  ➜  `(remaining_bytes, keyword)` while matching
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct KeywordMatcher(Option<(&'static [u8], Keyword)>);

impl KeywordMatcher {
    /// No keyword is in flight
    pub fn none() -> Self {
        KeywordMatcher(None)
    }

    /// Start matching after the *first* byte (`n`, `t`, or `f`)
    pub fn after(first: u8) -> Self {
        match first {
            b'n' => KeywordMatcher(Some((b"ull", Keyword::Null))),
            b't' => KeywordMatcher(Some((b"rue", Keyword::True))),
            b'f' => KeywordMatcher(Some((b"alse", Keyword::False))),
            _ => KeywordMatcher::none(),
        }
    }

    /// Give the matcher the next input byte and learn what to do next.
    pub fn step(&mut self, byte: u8) -> Step {
        // If we are not in the middle of a keyword, any byte is a reject
        let Some((bytes, keyword)) = self.0.take() else {
            return Step::Reject;
        };

        // Do we in fact expect `byte`?
        if bytes.first() == Some(&byte) {
            // Safe: we just checked that `bytes` is non-empty
            let (_, rest) = bytes.split_first().unwrap();

            if rest.is_empty() {
                // Keyword finished
                Step::Done(keyword)
            } else {
                // Still more to go – remember the rest
                self.0 = Some((rest, keyword));
                Step::NeedMore
            }
        } else {
            // Mismatch – restore the state we took at the top
            self.0 = Some((bytes, keyword));
            Step::Reject
        }
    }
}
