//! Tests for WITH clause parsing.

mod common;
use common::*;

use sqlforge_core::SelectQuery;

#[test]
fn with_single_cte() {
    let q = parse_simple("WITH recent AS (SELECT id FROM orders) SELECT * FROM recent");
    assert_eq!(q.cte_names(), vec!["recent"]);
    let with = q.with_clause.as_ref().unwrap();
    assert!(!with.recursive);
    assert!(with.tables[0].column_aliases.is_empty());
    assert_eq!(with.tables[0].materialized, None);
}

#[test]
fn with_several_ctes_keep_order() {
    let q = parse_simple(
        "WITH a AS (SELECT 1), b (x, y) AS (SELECT 2, 3), c AS (SELECT * FROM b) SELECT * FROM c",
    );
    assert_eq!(q.cte_names(), vec!["a", "b", "c"]);
    assert_eq!(q.get_cte("b").unwrap().column_aliases, vec!["x", "y"]);
}

#[test]
fn with_materialization_hints() {
    let q = parse_simple(
        "WITH m AS MATERIALIZED (SELECT 1), n AS NOT MATERIALIZED (SELECT 2) SELECT 3",
    );
    assert_eq!(q.get_cte("m").unwrap().materialized, Some(true));
    assert_eq!(q.get_cte("n").unwrap().materialized, Some(false));
    assert_eq!(
        render(&parse("WITH m AS MATERIALIZED (SELECT 1) SELECT 3")),
        r#"with "m" as materialized (select 1) select 3"#
    );
}

#[test]
fn with_recursive() {
    let sql = "WITH RECURSIVE t(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM t WHERE n < 5) \
               SELECT n FROM t";
    let q = parse_simple(sql);
    let with = q.with_clause.as_ref().unwrap();
    assert!(with.recursive);
    assert!(matches!(with.tables[0].query, SelectQuery::Binary(_)));
    assert_eq!(
        normalize(sql),
        r#"with recursive "t"("n") as (select 1 union all select "n" + 1 from "t" where "n" < 5) select "n" from "t""#
    );
}

#[test]
fn with_applies_to_leftmost_operand_of_set_operation() {
    let query = parse("WITH a AS (SELECT 1) SELECT * FROM a UNION SELECT 2");
    let SelectQuery::Binary(binary) = &query else {
        panic!("expected set operation");
    };
    let SelectQuery::Simple(left) = binary.left.as_ref() else {
        panic!("expected simple left operand");
    };
    assert!(left.has_cte("a"));
}

#[test]
fn nested_with_inside_cte_and_subquery() {
    let q = parse_simple(
        "WITH outer_q AS (WITH inner_q AS (SELECT 1 AS v) SELECT v FROM inner_q) \
         SELECT * FROM outer_q WHERE v IN (WITH z AS (SELECT 1) SELECT * FROM z)",
    );
    let SelectQuery::Simple(inner) = &q.get_cte("outer_q").unwrap().query else {
        panic!("expected simple cte body");
    };
    assert!(inner.has_cte("inner_q"));
}

#[test]
fn cte_names_are_case_sensitive_after_quoting() {
    let q = parse_simple(r#"WITH "A" AS (SELECT 1), a AS (SELECT 2) SELECT 3"#);
    assert_eq!(q.cte_names(), vec!["A", "a"]);
}

#[test]
fn round_trip_with_clauses() {
    for sql in [
        "WITH a AS (SELECT 1) SELECT * FROM a",
        "WITH a(x) AS NOT MATERIALIZED (SELECT 1), b AS (SELECT x FROM a) SELECT * FROM b",
        "WITH RECURSIVE r AS (SELECT 1 AS n UNION SELECT n + 1 FROM r) SELECT * FROM r",
        "WITH a AS (SELECT 1) SELECT * FROM a UNION ALL SELECT 2",
        "SELECT 1 UNION (WITH b AS (SELECT 2) SELECT * FROM b)",
    ] {
        round_trip(sql);
    }
}
