//! Lexer error type.

/// A tokenization failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {position}")]
pub struct LexError {
    /// The error message.
    pub message: String,
    /// Byte offset where the offending lexeme starts.
    pub position: usize,
}

impl LexError {
    /// Creates a new lex error.
    #[must_use]
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}
