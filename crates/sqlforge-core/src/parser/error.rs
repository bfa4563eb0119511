//! Parser error types.

use crate::lexer::{LexError, Lexeme};

/// A parse failure. No partial tree is ever returned with it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {position}")]
pub struct SqlParsingError {
    /// The error message.
    pub message: String,
    /// The SQL text being parsed.
    pub sql: String,
    /// Byte offset of the offending lexeme, or the input length at EOF.
    pub position: usize,
    /// The lexer failure that caused this error, if any.
    #[source]
    pub cause: Option<LexError>,
}

impl SqlParsingError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>, sql: &str, position: usize) -> Self {
        Self {
            message: message.into(),
            sql: sql.to_string(),
            position,
            cause: None,
        }
    }

    /// Creates an "unexpected token" error, or an "unexpected end of input"
    /// error when `found` is `None`.
    #[must_use]
    pub fn unexpected(expected: &str, found: Option<&Lexeme>, sql: &str) -> Self {
        match found {
            Some(lexeme) => Self::new(
                format!("Unexpected token: expected {expected}, found '{}'", lexeme.text),
                sql,
                lexeme.position,
            ),
            None => Self::new(
                format!("Unexpected end of input: expected {expected}"),
                sql,
                sql.len(),
            ),
        }
    }

    /// Wraps a lexer failure.
    #[must_use]
    pub fn from_lex_error(cause: LexError, sql: &str) -> Self {
        Self {
            message: cause.message.clone(),
            sql: sql.to_string(),
            position: cause.position,
            cause: Some(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LexemeKind;
    use std::error::Error;

    #[test]
    fn test_unexpected_token_message() {
        let lexeme = Lexeme::new(LexemeKind::Identifier, "foo", 7);
        let err = SqlParsingError::unexpected("FROM", Some(&lexeme), "SELECT foo");
        assert_eq!(
            err.to_string(),
            "Unexpected token: expected FROM, found 'foo' at position 7"
        );
    }

    #[test]
    fn test_unexpected_eof_points_at_end() {
        let err = SqlParsingError::unexpected("expression", None, "SELECT");
        assert_eq!(err.position, 6);
        assert!(err.cause.is_none());
    }

    #[test]
    fn test_lex_error_is_source() {
        let err = SqlParsingError::from_lex_error(LexError::new("Unterminated string literal", 3), "x");
        assert_eq!(err.position, 3);
        assert!(err.source().is_some());
    }
}
