//! # sqlforge-core
//!
//! A SQL front-end for SELECT-family queries: a tokenizer, a recursive
//! descent parser with Pratt expression parsing, a rewritable AST and a
//! styled formatter.
//!
//! ## Parse, rewrite, format
//!
//! ```rust
//! use sqlforge_core::{format, parse, FormatStyle};
//!
//! let mut query = parse("SELECT id FROM users").unwrap();
//! if let Some(simple) = query.as_simple_mut() {
//!     simple.append_where_raw("status = 'active'").unwrap();
//! }
//!
//! let (sql, params) = format(&query, &FormatStyle::default());
//! assert_eq!(sql, r#"select "id" from "users" where "status" = 'active'"#);
//! assert!(params.is_empty());
//! ```
//!
//! ## Common table expressions
//!
//! ```rust
//! use sqlforge_core::parse;
//!
//! let mut query = parse("SELECT * FROM recent").unwrap();
//! let recent = parse("SELECT id FROM orders WHERE created_at > now()").unwrap();
//!
//! let simple = query.as_simple_mut().unwrap();
//! simple.add_cte("recent", recent, None).unwrap();
//! assert!(simple.has_cte("recent"));
//! assert!(simple.add_cte("recent", parse("SELECT 1").unwrap(), None).is_err());
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod printer;

pub use ast::{
    CteError, SelectQuery, SetOperations, SimpleSelectQuery, SqlValue, ToSimpleQuery,
    ToSqlValue, ValueComponent,
};
pub use lexer::{LexError, Lexeme, LexemeKind, Lexer};
pub use parser::{Parser, SqlParsingError};
pub use printer::{format, FormatStyle, ParamList, Preset, SqlFormatter, StyleError};

/// Parses a single SELECT-family statement.
pub fn parse(sql: &str) -> Result<SelectQuery, SqlParsingError> {
    Parser::new(sql)?.parse_select()
}
