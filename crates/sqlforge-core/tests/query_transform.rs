//! Tests for WHERE splicing, normalization and parameter binding.

mod common;
use common::*;

use sqlforge_core::ast::{Datasource, ValueKind};
use sqlforge_core::{ParamList, SelectQuery, SqlParsingError, SqlValue, ToSimpleQuery, ValueComponent};

// ===== append_where =====

#[test]
fn append_where_raw_adds_and_combines() -> Result<(), SqlParsingError> {
    let mut query = parse_simple("SELECT id FROM users");
    query.append_where_raw("status = 'active'")?;
    assert_eq!(
        render(&query.clone().into()),
        r#"select "id" from "users" where "status" = 'active'"#
    );

    query.append_where_raw("created_at > '2023-01-01'")?;
    assert_eq!(
        render(&query.into()),
        r#"select "id" from "users" where "status" = 'active' and "created_at" > '2023-01-01'"#
    );
    Ok(())
}

#[test]
fn append_where_parenthesizes_or_sides() -> Result<(), SqlParsingError> {
    let mut query = parse_simple("SELECT * FROM t WHERE a = 1 OR b = 2");
    query.append_where_raw("c = 3")?;
    assert_eq!(
        render(&query.into()),
        r#"select * from "t" where ("a" = 1 or "b" = 2) and "c" = 3"#
    );

    let mut query = parse_simple("SELECT * FROM t WHERE c = 3");
    query.append_where_raw("a = 1 OR b = 2")?;
    assert_eq!(
        render(&query.into()),
        r#"select * from "t" where "c" = 3 and ("a" = 1 or "b" = 2)"#
    );
    Ok(())
}

#[test]
fn append_where_with_built_predicates() {
    let mut query = parse_simple("SELECT * FROM t");
    query
        .append_where(ValueComponent::column("a").gt(ValueComponent::number(1)))
        .append_where(ValueComponent::column("b").is_null());
    assert_eq!(
        render(&query.into()),
        r#"select * from "t" where "a" > 1 and "b" is null"#
    );
}

#[test]
fn append_where_raw_rejects_trailing_tokens() {
    let mut query = parse_simple("SELECT * FROM t");
    let err = query.append_where_raw("a = 1 ORDER BY a").unwrap_err();
    assert!(err.message.starts_with("Unexpected token"), "{err}");
    assert!(query.where_clause.is_none());
}

// ===== to_simple_query =====

#[test]
fn simple_query_is_returned_unchanged() {
    let query = parse_simple("SELECT id FROM users WHERE id = 1");
    let items = query.select_clause.items.as_ptr();
    let expected = query.clone();
    let simple = query.to_simple_query();
    assert_eq!(simple.select_clause.items.as_ptr(), items);
    assert_eq!(simple, expected);
}

#[test]
fn binary_query_is_wrapped_and_keeps_order_by_outside() {
    let query = parse("SELECT id FROM a UNION SELECT id FROM b ORDER BY id");
    let simple = query.to_simple_query();
    assert_eq!(simple.order_by.len(), 1);
    let source = &simple.from_clause.as_ref().unwrap().source;
    assert_eq!(source.alias.as_ref().unwrap().name, "bq");
    assert!(matches!(source.datasource, Datasource::Subquery(_)));
    assert_eq!(
        render(&simple.into()),
        r#"select * from (select "id" from "a" union select "id" from "b") as "bq" order by "id""#
    );
}

#[test]
fn relocated_order_by_leaves_the_right_branch() {
    let query = parse("SELECT id FROM users UNION SELECT id FROM customers ORDER BY name ASC");
    let simple = query.to_simple_query();
    let Datasource::Subquery(inner) = &simple.from_clause.as_ref().unwrap().source.datasource
    else {
        panic!("expected derived table");
    };
    let SelectQuery::Binary(binary) = inner.as_ref() else {
        panic!("expected set operation");
    };
    assert!(binary.right.as_simple().unwrap().order_by.is_empty());
    assert_eq!(
        render(&simple.into()),
        r#"select * from (select "id" from "users" union select "id" from "customers") as "bq" order by "name" asc"#
    );
}

#[test]
fn limit_and_offset_travel_with_the_relocated_order_by() {
    let simple = parse("SELECT id FROM a UNION SELECT id FROM b ORDER BY id LIMIT 10 OFFSET 5")
        .to_simple_query();
    assert!(simple.limit.is_some());
    assert!(simple.offset.is_some());
    assert_eq!(
        render(&simple.into()),
        r#"select * from (select "id" from "a" union select "id" from "b") as "bq" order by "id" limit 10 offset 5"#
    );
}

#[test]
fn limit_without_order_by_stays_inside() {
    let simple = parse("SELECT 1 UNION SELECT 2 LIMIT 3").to_simple_query();
    assert!(simple.order_by.is_empty());
    assert!(simple.limit.is_none());
    assert_eq!(
        render(&simple.into()),
        r#"select * from (select 1 union select 2 limit 3) as "bq""#
    );
}

#[test]
fn only_the_right_order_by_is_relocated() {
    let query = parse("(SELECT id FROM a ORDER BY x) UNION SELECT id FROM b ORDER BY y");
    let simple = query.to_simple_query();
    assert_eq!(simple.order_by.len(), 1);

    let Datasource::Subquery(inner) = &simple.from_clause.as_ref().unwrap().source.datasource
    else {
        panic!("expected derived table");
    };
    let SelectQuery::Binary(binary) = inner.as_ref() else {
        panic!("expected set operation");
    };
    assert_eq!(binary.left.as_simple().unwrap().order_by.len(), 1);
    assert!(binary.right.as_simple().unwrap().order_by.is_empty());

    assert_eq!(
        render(&simple.into()),
        r#"select * from ((select "id" from "a" order by "x") union select "id" from "b") as "bq" order by "y""#
    );
}

#[test]
fn no_order_by_means_none_on_the_wrapper() {
    let simple = parse("SELECT id FROM a EXCEPT SELECT id FROM b").to_simple_query();
    assert!(simple.order_by.is_empty());
}

#[test]
fn values_query_is_wrapped_with_its_column_aliases() {
    let SelectQuery::Values(values) = parse("VALUES (1, 'a'), (2, 'b')") else {
        panic!("expected VALUES");
    };
    let simple = values
        .with_column_aliases(vec![String::from("id"), String::from("name")])
        .to_simple_query();
    assert_eq!(
        render(&simple.into()),
        r#"select * from (values (1, 'a'), (2, 'b')) as "vq"("id", "name")"#
    );
}

#[test]
fn wrapped_query_accepts_where() -> Result<(), SqlParsingError> {
    let mut simple = parse("SELECT id FROM a UNION ALL SELECT id FROM b").to_simple_query();
    simple.append_where_raw("bq.id > 10")?;
    assert_eq!(
        render(&simple.into()),
        r#"select * from (select "id" from "a" union all select "id" from "b") as "bq" where "bq"."id" > 10"#
    );
    Ok(())
}

// ===== set_parameter =====

#[test]
fn set_parameter_binds_every_occurrence() {
    let mut query = parse("SELECT * FROM t WHERE id = :id AND owner = :id");
    assert_eq!(query.set_parameter("id", 42), 2);
    let (sql, params) = sqlforge_core::format(&query, &sqlforge_core::FormatStyle::default());
    assert_eq!(sql, r#"select * from "t" where "id" = :id and "owner" = :id"#);
    assert_eq!(
        params,
        ParamList::Named(vec![(String::from("id"), SqlValue::Int(42))])
    );
}

#[test]
fn set_parameter_reaches_nested_queries() {
    let mut query = parse(
        "WITH a AS (SELECT * FROM x WHERE k = :k) \
         SELECT * FROM a WHERE v IN (SELECT v FROM y WHERE k = :k) \
         UNION SELECT * FROM z WHERE k = :k",
    );
    assert_eq!(query.set_parameter(":k", "key"), 3);

    let mut bound = 0;
    if let SelectQuery::Binary(binary) = &query {
        if let SelectQuery::Simple(right) = binary.right.as_ref() {
            if let Some(ValueComponent {
                kind: ValueKind::Binary { right, .. },
                ..
            }) = &right.where_clause
            {
                if let ValueKind::Parameter { value, .. } = &right.kind {
                    assert_eq!(value, &Some(SqlValue::Text(String::from("key"))));
                    bound += 1;
                }
            }
        }
    }
    assert_eq!(bound, 1);
}

#[test]
fn set_parameter_on_unknown_name_binds_nothing() {
    let mut query = parse_simple("SELECT * FROM t WHERE id = :id");
    assert_eq!(query.set_parameter("other", 1), 0);
    let (_, params) = sqlforge_core::format(&query.into(), &sqlforge_core::FormatStyle::default());
    assert_eq!(params, ParamList::Named(vec![(String::from("id"), SqlValue::Null)]));
}

#[test]
fn rebinding_overwrites_the_value() {
    let mut query = parse("SELECT * FROM t WHERE id = :id");
    query.set_parameter("id", 1);
    query.set_parameter("id", Some("x"));
    query.set_parameter("id", None::<i64>);
    let (_, params) = sqlforge_core::format(&query, &sqlforge_core::FormatStyle::default());
    assert_eq!(params.get("id"), Some(&SqlValue::Null));
}
