use thiserror::Error;

use crate::tokenizer::State;

/// Failure raised by [`write`](crate::Tokenizer::write) or
/// [`end`](crate::Tokenizer::end).
///
/// Either error aborts the current call and poisons the tokenizer: the
/// instance stays in an error state and every subsequent call fails. Errors
/// are never recovered internally; start over with a fresh instance.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerError {
    /// A byte not permitted by the current state. `position` is the index
    /// of the byte within the chunk passed to the failing `write` call.
    #[error("unexpected byte '{}' at position {position} in state {state}", .byte.escape_ascii())]
    UnexpectedByte {
        byte: u8,
        position: usize,
        state: State,
    },

    /// `end` was called while a token still needs more input.
    #[error("unexpected end of input in state {state}")]
    IncompleteInput { state: State },
}
