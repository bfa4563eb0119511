//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.

mod error;
mod expression;
mod parser;
mod pratt;

pub use error::SqlParsingError;
pub use parser::{Parser, DEFAULT_MAX_DEPTH};
