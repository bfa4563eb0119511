//! Tests for adding, removing and replacing CTEs.

mod common;
use common::*;

use sqlforge_core::{CteError, SelectQuery};

#[test]
fn add_cte_creates_with_clause() {
    let mut query = parse_simple("SELECT * FROM recent");
    query
        .add_cte("recent", parse("SELECT id FROM orders"), None)
        .unwrap();
    assert_eq!(
        render(&query.into()),
        r#"with "recent" as (select "id" from "orders") select * from "recent""#
    );
}

#[test]
fn add_cte_appends_in_order() {
    let mut query = parse_simple("WITH a AS (SELECT 1) SELECT * FROM a, b, c");
    query
        .add_cte("b", parse("SELECT 2"), None)
        .unwrap()
        .add_cte("c", parse("SELECT 3"), Some(true))
        .unwrap();
    assert_eq!(query.cte_names(), vec!["a", "b", "c"]);
    assert_eq!(
        render(&query.into()),
        r#"with "a" as (select 1), "b" as (select 2), "c" as materialized (select 3) select * from "a", "b", "c""#
    );
}

#[test]
fn add_cte_rejects_duplicates_and_blank_names() {
    let mut query = parse_simple("WITH a AS (SELECT 1) SELECT * FROM a");
    let before = query.clone();

    let err = query.add_cte("a", parse("SELECT 2"), None).unwrap_err();
    assert_eq!(
        err,
        CteError::Duplicate {
            cte_name: String::from("a")
        }
    );
    assert_eq!(err.to_string(), "CTE 'a' already exists");

    let err = query.add_cte("", parse("SELECT 2"), None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid CTE name '': name must not be empty or whitespace"
    );
    let err = query.add_cte(" \t", parse("SELECT 2"), None).unwrap_err();
    assert!(matches!(err, CteError::InvalidName { .. }));

    assert_eq!(query, before);
}

#[test]
fn remove_cte() {
    let mut query = parse_simple("WITH a AS (SELECT 1), b AS (SELECT 2) SELECT * FROM b");
    query.remove_cte("a").unwrap();
    assert_eq!(query.cte_names(), vec!["b"]);

    let err = query.remove_cte("a").unwrap_err();
    assert_eq!(err.to_string(), "CTE 'a' not found");

    query.remove_cte("b").unwrap();
    assert!(query.with_clause.is_none());
    assert_eq!(render(&query.into()), r#"select * from "b""#);
}

#[test]
fn replace_cte_keeps_shape() {
    let mut query =
        parse_simple("WITH a(x) AS MATERIALIZED (SELECT 1), b AS (SELECT 2) SELECT * FROM a");
    query.replace_cte("a", parse("SELECT 10")).unwrap();
    assert_eq!(query.cte_names(), vec!["a", "b"]);
    assert_eq!(
        render(&query.into()),
        r#"with "a"("x") as materialized (select 10), "b" as (select 2) select * from "a""#
    );
}

#[test]
fn replace_cte_errors() {
    let mut query = parse_simple("SELECT 1");
    let err = query.replace_cte("missing", parse("SELECT 2")).unwrap_err();
    assert_eq!(
        err,
        CteError::NotFound {
            cte_name: String::from("missing")
        }
    );
    let err = query.replace_cte("  ", parse("SELECT 2")).unwrap_err();
    assert!(matches!(err, CteError::InvalidName { .. }));
}

#[test]
fn lookups() {
    let query = parse_simple("WITH a AS (SELECT 1), b AS (SELECT 2) SELECT 3");
    assert!(query.has_cte("a"));
    assert!(!query.has_cte("A"));
    assert!(!query.has_cte("z"));
    let b = query.get_cte("b").unwrap();
    assert_eq!(b.query, parse("SELECT 2"));
    assert!(parse_simple("SELECT 1").cte_names().is_empty());
}

#[test]
fn cte_body_can_be_any_query_kind() {
    let mut query = parse_simple("SELECT * FROM u, v");
    query
        .add_cte("u", parse("SELECT 1 UNION SELECT 2"), None)
        .unwrap()
        .add_cte("v", parse("VALUES (1), (2)"), Some(false))
        .unwrap();
    let query = SelectQuery::from(query);
    assert_eq!(
        render(&query),
        r#"with "u" as (select 1 union select 2), "v" as not materialized (values (1), (2)) select * from "u", "v""#
    );
    round_trip(&render(&query));
}
