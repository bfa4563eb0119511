//! Tests for UNION, INTERSECT and EXCEPT.

mod common;
use common::*;

use sqlforge_core::ast::SetOperator;
use sqlforge_core::{SelectQuery, SetOperations, SqlParsingError};

fn operator(query: &SelectQuery) -> SetOperator {
    match query {
        SelectQuery::Binary(binary) => binary.operator,
        other => panic!("expected set operation, got {other:?}"),
    }
}

#[test]
fn set_operator_keywords() {
    for (sql, expected) in [
        ("SELECT 1 UNION SELECT 2", SetOperator::Union),
        ("SELECT 1 UNION DISTINCT SELECT 2", SetOperator::Union),
        ("SELECT 1 UNION ALL SELECT 2", SetOperator::UnionAll),
        ("SELECT 1 INTERSECT SELECT 2", SetOperator::Intersect),
        ("SELECT 1 INTERSECT ALL SELECT 2", SetOperator::IntersectAll),
        ("SELECT 1 EXCEPT SELECT 2", SetOperator::Except),
        ("SELECT 1 EXCEPT ALL SELECT 2", SetOperator::ExceptAll),
    ] {
        assert_eq!(operator(&parse(sql)), expected, "{sql}");
    }
}

#[test]
fn chains_are_left_associative() {
    let query = parse("SELECT 1 UNION SELECT 2 EXCEPT SELECT 3");
    let SelectQuery::Binary(outer) = &query else {
        panic!("expected set operation");
    };
    assert_eq!(outer.operator, SetOperator::Except);
    assert_eq!(operator(&outer.left), SetOperator::Union);
    assert!(matches!(*outer.right, SelectQuery::Simple(_)));
}

#[test]
fn parenthesized_right_operand_is_kept() {
    let query = parse("SELECT 1 UNION (SELECT 2 UNION SELECT 3)");
    let SelectQuery::Binary(outer) = &query else {
        panic!("expected set operation");
    };
    assert!(matches!(*outer.right, SelectQuery::Binary(_)));
    assert_eq!(render(&query), "select 1 union (select 2 union select 3)");
}

#[test]
fn parenthesized_left_operand_flattens() {
    assert_eq!(
        normalize("(SELECT 1 UNION SELECT 2) UNION SELECT 3"),
        "select 1 union select 2 union select 3"
    );
}

#[test]
fn left_operand_with_trailing_clauses_keeps_parentheses() {
    assert_eq!(
        normalize("(SELECT id FROM a ORDER BY x) UNION SELECT id FROM b"),
        r#"(select "id" from "a" order by "x") union select "id" from "b""#
    );
    assert_eq!(
        normalize("(SELECT id FROM a LIMIT 5) UNION ALL SELECT id FROM b"),
        r#"(select "id" from "a" limit 5) union all select "id" from "b""#
    );
    assert_eq!(
        normalize("(SELECT 1 UNION SELECT 2 ORDER BY 1) EXCEPT SELECT 3"),
        "(select 1 union select 2 order by 1) except select 3"
    );
    assert_eq!(
        normalize("(SELECT id FROM a FOR UPDATE) UNION SELECT id FROM b OFFSET 2"),
        r#"(select "id" from "a" for update) union select "id" from "b" offset 2"#
    );
}

#[test]
fn combinator_on_an_ordered_chain_nests_it() {
    let ordered = parse("SELECT 1 UNION SELECT 2 ORDER BY 1");
    let query = ordered.union(parse_simple("SELECT 3"));
    assert_eq!(
        render(&query.into()),
        "(select 1 union select 2 order by 1) union select 3"
    );
}

#[test]
fn values_as_operand() {
    let query = parse("SELECT 1, 'a' UNION ALL VALUES (2, 'b')");
    let SelectQuery::Binary(binary) = &query else {
        panic!("expected set operation");
    };
    assert!(matches!(*binary.right, SelectQuery::Values(_)));
    assert_eq!(render(&query), "select 1, 'a' union all values (2, 'b')");
}

#[test]
fn combinators_build_set_operations() {
    let left = parse_simple("SELECT 1");
    let right = parse_simple("SELECT 2");
    let query = SelectQuery::from(left.except_all(right));
    assert_eq!(render(&query), "select 1 except all select 2");

    let chained = parse_simple("SELECT 1")
        .union(parse_simple("SELECT 2"))
        .intersect(parse_simple("SELECT 3"));
    assert_eq!(
        render(&chained.into()),
        "select 1 union select 2 intersect select 3"
    );
}

#[test]
fn combinators_nest_a_binary_right_operand() {
    let right = parse("SELECT 2 UNION SELECT 3");
    let query = parse_simple("SELECT 1").union(right);
    assert_eq!(
        render(&query.into()),
        "select 1 union (select 2 union select 3)"
    );
}

#[test]
fn raw_combinators_parse_their_operand() -> Result<(), SqlParsingError> {
    let query = parse_simple("SELECT id FROM a")
        .union_all_raw("SELECT id FROM b")?
        .except_raw("SELECT id FROM c")?;
    assert_eq!(
        render(&query.into()),
        r#"select "id" from "a" union all select "id" from "b" except select "id" from "c""#
    );
    Ok(())
}

#[test]
fn raw_combinator_reports_parse_errors() {
    let err = parse_simple("SELECT 1").union_raw("SELECT FROM").unwrap_err();
    assert!(err.message.contains("expected expression"), "{err}");
}

#[test]
fn round_trip_set_operations() {
    for sql in [
        "SELECT a FROM t UNION SELECT b FROM u ORDER BY 1",
        "SELECT 1 INTERSECT ALL SELECT 2 EXCEPT SELECT 3",
        "SELECT 1 UNION (SELECT 2 EXCEPT (SELECT 3 INTERSECT SELECT 4))",
        "VALUES (1) UNION VALUES (2)",
        "(SELECT a FROM t ORDER BY a LIMIT 1) UNION (SELECT b FROM u ORDER BY b LIMIT 1)",
        "(SELECT 1 UNION SELECT 2 LIMIT 1) INTERSECT SELECT 3",
    ] {
        round_trip(sql);
    }
}
