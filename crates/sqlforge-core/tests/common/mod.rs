#![allow(dead_code)]

use sqlforge_core::ast::{SelectQuery, SimpleSelectQuery, ValueComponent};
use sqlforge_core::{format, FormatStyle, Parser, SqlParsingError};

pub fn parse(sql: &str) -> SelectQuery {
    sqlforge_core::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> SqlParsingError {
    sqlforge_core::parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_simple(sql: &str) -> SimpleSelectQuery {
    match parse(sql) {
        SelectQuery::Simple(s) => s,
        other => panic!("Expected simple SELECT, got {other:?}"),
    }
}

pub fn parse_value(sql: &str) -> ValueComponent {
    Parser::new(sql)
        .and_then(|mut p| p.parse_value())
        .unwrap_or_else(|e| panic!("Failed to parse value: {sql}\nError: {e:?}"))
}

/// Formats with the default style and drops the parameters.
pub fn render(query: &SelectQuery) -> String {
    format(query, &FormatStyle::default()).0
}

/// Parses and re-formats `sql` with the default style.
pub fn normalize(sql: &str) -> String {
    render(&parse(sql))
}

/// Verifies that formatting reaches a fixed point after one pass:
/// the formatted text re-parses, formats to the same text, and the
/// re-parsed tree is stable from then on.
pub fn round_trip_with(sql: &str, style: &FormatStyle) {
    let rendered1 = format(&parse(sql), style).0;
    let ast2 = parse(&rendered1);
    let rendered2 = format(&ast2, style).0;
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
    assert_eq!(ast2, parse(&rendered2), "Tree changed after re-parse of: {rendered2}");
}

pub fn round_trip(sql: &str) {
    round_trip_with(sql, &FormatStyle::default());
}
