//! Property tests: formatted output re-parses to the same tree.

mod common;
use common::*;

use proptest::prelude::*;
use sqlforge_core::lexer::Keyword;
use sqlforge_core::printer::{KeywordCase, Newline};
use sqlforge_core::{format, FormatStyle, Preset};

fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,10}".prop_filter("keywords are not identifiers", |s| {
        Keyword::from_str(s).is_none()
    })
}

fn quoted_identifier() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 \"]{1,10}".prop_map(|s| format!("\"{}\"", s.replace('"', "\"\"")))
}

fn string_literal() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ',%_]{0,12}".prop_map(|s| format!("'{}'", s.replace('\'', "''")))
}

fn number() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..100_000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
    ]
}

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier(),
        quoted_identifier(),
        string_literal(),
        number(),
        (identifier(), identifier()).prop_map(|(t, c)| format!("{t}.{c}")),
        identifier().prop_map(|name| format!(":{name}")),
        number().prop_map(|n| format!("-{n}")),
    ]
}

const OPERATORS: [&str; 14] = [
    "+", "-", "*", "/", "%", "^", "||", "=", "<>", "<", ">=", "AND", "OR", "LIKE",
];

/// Expressions written without parentheses, so the tree follows operator
/// precedence alone.
fn bare_expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 24, 2, |inner| {
        (inner.clone(), 0..OPERATORS.len(), inner)
            .prop_map(|(l, op, r)| format!("{l} {} {r}", OPERATORS[op]))
    })
}

/// Expressions with explicit grouping, functions and CASE.
fn grouped_expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            (inner.clone(), 0..OPERATORS.len(), inner.clone())
                .prop_map(|(l, op, r)| format!("({l} {} {r})", OPERATORS[op])),
            (identifier(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(c, t, e)| format!("CASE WHEN {c} THEN {t} ELSE {e} END")),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(x, lo, hi)| format!("({x} BETWEEN {lo} AND {hi})")),
            inner.clone().prop_map(|x| format!("NOT ({x})")),
            inner.prop_map(|x| format!("CAST({x} AS numeric(10, 2))")),
        ]
    })
}

fn query() -> impl Strategy<Value = String> {
    (
        prop::collection::vec((bare_expression(), proptest::option::of(identifier())), 1..4),
        identifier(),
        proptest::option::of(grouped_expression()),
        proptest::option::of(0u32..100),
    )
        .prop_map(|(items, table, predicate, limit)| {
            let items: Vec<String> = items
                .into_iter()
                .map(|(value, alias)| match alias {
                    Some(alias) => format!("{value} AS {alias}"),
                    None => value,
                })
                .collect();
            let mut sql = format!("SELECT {} FROM {table}", items.join(", "));
            if let Some(predicate) = predicate {
                sql.push_str(&format!(" WHERE {predicate}"));
            }
            if let Some(limit) = limit {
                sql.push_str(&format!(" LIMIT {limit}"));
            }
            sql
        })
}

proptest! {
    #[test]
    fn prop_bare_expressions_keep_their_tree(expr in bare_expression()) {
        let sql = format!("SELECT {expr}");
        let query = parse(&sql);
        let rendered = render(&query);
        prop_assert_eq!(parse(&rendered), query, "rendered: {}", rendered);
    }

    #[test]
    fn prop_grouped_expressions_keep_their_tree(expr in grouped_expression()) {
        let sql = format!("SELECT {expr}");
        let query = parse(&sql);
        let rendered = render(&query);
        prop_assert_eq!(parse(&rendered), query, "rendered: {}", rendered);
    }

    #[test]
    fn prop_queries_reach_a_fixed_point(sql in query()) {
        round_trip(&sql);
        round_trip_with(&sql, &FormatStyle::default().with_newline(Newline::Lf));
        round_trip_with(&sql, &Preset::Postgres.style().with_keyword_case(KeywordCase::Upper));
    }

    #[test]
    fn prop_formatting_is_deterministic(sql in query()) {
        let query = parse(&sql);
        let style = Preset::SqlServer.style();
        prop_assert_eq!(format(&query, &style), format(&query.clone(), &style));
    }

    #[test]
    fn prop_string_literals_survive(literal in "[^\\x00]{0,16}") {
        let quoted = format!("'{}'", literal.replace('\'', "''"));
        prop_assert_eq!(normalize(&format!("SELECT {quoted}")), format!("select {quoted}"));
    }
}
