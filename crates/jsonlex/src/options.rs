/// Determines the representation of [`Token::Number`](crate::Token::Number)
/// values.
///
/// In `Float` mode the buffered literal is converted with the host's default
/// floating-point conversion. Integer literals beyond the `f64` safe-integer
/// range lose precision in this mode.
///
/// In `Literal` mode the raw literal text is passed through unparsed, so the
/// consumer can apply an arbitrary-precision (or decimal) conversion of its
/// own choosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberMode {
    /// Convert with `str::parse::<f64>()`.
    Float,
    /// Emit the raw digits as text.
    Literal,
}

impl Default for NumberMode {
    fn default() -> Self {
        Self::Float
    }
}

/// Configuration options for the JSON tokenizer.
///
/// The two buffer sizes choose between the accumulating and the
/// fixed-capacity flushing variant of the literal stores; see
/// [`Tokenizer`](crate::Tokenizer) for the memory trade-off. The defaults
/// select the accumulating variant for both.
///
/// # Examples
///
/// ```rust
/// use jsonlex::{Tokenizer, TokenizerOptions};
///
/// let tokenizer = Tokenizer::new(TokenizerOptions {
///     string_buffer_size: 64 * 1024,
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizerOptions {
    /// Byte capacity of the in-progress string literal buffer.
    ///
    /// Any value greater than `4` selects the fixed-capacity flushing store:
    /// peak raw-byte usage per string literal is bounded by this capacity,
    /// with completed bytes decoded into a text accumulator on overflow. `4`
    /// or below keeps the whole literal in one growable byte buffer until it
    /// completes.
    ///
    /// # Default
    ///
    /// `0`
    pub string_buffer_size: usize,

    /// Byte capacity of the in-progress number literal buffer.
    ///
    /// Any non-zero value selects the fixed-capacity flushing store; `0`
    /// selects the growable one. Number literals are short, so this is
    /// rarely worth setting.
    ///
    /// # Default
    ///
    /// `0`
    pub number_buffer_size: usize,

    /// How number literals are converted on emission.
    ///
    /// # Default
    ///
    /// [`NumberMode::Float`]
    pub number_mode: NumberMode,
}
