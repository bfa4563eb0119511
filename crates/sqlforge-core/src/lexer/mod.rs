//! SQL Lexer
//!
//! Converts SQL text into a stream of lexemes. Comments are kept as
//! lexemes so the parser can attach them to the tree.

mod error;
mod token;
mod tokenizer;

pub use error::LexError;
pub use token::{Keyword, Lexeme, LexemeKind};
pub use tokenizer::Lexer;

/// Tokenizes `sql` into lexemes.
pub fn tokenize(sql: &str) -> Result<Vec<Lexeme>, LexError> {
    Lexer::new(sql).tokenize()
}
