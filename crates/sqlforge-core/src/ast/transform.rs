//! Query reshaping: normalization to a simple query, set-operation
//! combinators, WHERE splicing and parameter binding.

use super::clause::{SelectItem, SourceAlias, SourceExpression};
use super::expression::{ValueComponent, ValueKind};
use super::query::{BinarySelectQuery, SelectQuery, SimpleSelectQuery, ValuesQuery};
use super::types::SetOperator;
use super::value::{SqlValue, ToSqlValue};
use super::visit::{MutVisitable, MutVisitor};
use crate::parser::{Parser, SqlParsingError};

/// Alias of the derived table wrapping a set operation.
pub const BINARY_QUERY_ALIAS: &str = "bq";

/// Alias of the derived table wrapping a VALUES list.
pub const VALUES_QUERY_ALIAS: &str = "vq";

/// Conversion of any query kind into a `SimpleSelectQuery`.
pub trait ToSimpleQuery {
    /// Returns a simple query equivalent to `self`.
    ///
    /// A `SimpleSelectQuery` is returned as is. Other kinds are wrapped as
    /// `SELECT * FROM (<query>) AS alias`; for a set operation, the ORDER BY
    /// of its right-hand branch moves to the wrapping query together with
    /// that branch's LIMIT and OFFSET.
    fn to_simple_query(self) -> SimpleSelectQuery;
}

impl ToSimpleQuery for SimpleSelectQuery {
    fn to_simple_query(self) -> SimpleSelectQuery {
        self
    }
}

impl ToSimpleQuery for BinarySelectQuery {
    fn to_simple_query(mut self) -> SimpleSelectQuery {
        // LIMIT and OFFSET apply after the ordering, so they travel with it.
        let mut relocated = SimpleSelectQuery::default();
        if let SelectQuery::Simple(right) = self.right.as_mut() {
            if !right.order_by.is_empty() {
                relocated.order_by = std::mem::take(&mut right.order_by);
                relocated.limit = right.limit.take();
                relocated.offset = right.offset.take();
            }
        }
        let header_comments = std::mem::take(&mut self.header_comments);
        tracing::debug!(
            relocated_order_by = relocated.order_by.len(),
            "wrapping set operation"
        );
        let mut wrapper = wrap(
            SelectQuery::Binary(self),
            SourceAlias::new(BINARY_QUERY_ALIAS),
            header_comments,
        );
        wrapper.order_by = relocated.order_by;
        wrapper.limit = relocated.limit;
        wrapper.offset = relocated.offset;
        wrapper
    }
}

impl ToSimpleQuery for ValuesQuery {
    fn to_simple_query(mut self) -> SimpleSelectQuery {
        let alias = SourceAlias {
            name: String::from(VALUES_QUERY_ALIAS),
            columns: self.column_aliases.clone().unwrap_or_default(),
        };
        let header_comments = std::mem::take(&mut self.header_comments);
        wrap(SelectQuery::Values(self), alias, header_comments)
    }
}

impl ToSimpleQuery for SelectQuery {
    fn to_simple_query(self) -> SimpleSelectQuery {
        match self {
            Self::Simple(q) => q,
            Self::Binary(q) => q.to_simple_query(),
            Self::Values(q) => q.to_simple_query(),
        }
    }
}

fn wrap(
    query: SelectQuery,
    alias: SourceAlias,
    header_comments: Vec<String>,
) -> SimpleSelectQuery {
    let mut wrapper = SimpleSelectQuery::new(vec![SelectItem::new(ValueComponent::wildcard())])
        .with_from(SourceExpression::subquery(query, alias));
    wrapper.header_comments = header_comments;
    wrapper
}

/// Set-operation combinators. The receiver becomes the left operand.
pub trait SetOperations: Into<SelectQuery> + Sized {
    /// Combines `self` and `other` with `operator`.
    fn combine(self, operator: SetOperator, other: impl Into<SelectQuery>) -> BinarySelectQuery {
        BinarySelectQuery::new(self, operator, other)
    }

    /// Parses `sql` as a query and combines it as the right operand.
    fn combine_raw(
        self,
        operator: SetOperator,
        sql: &str,
    ) -> Result<BinarySelectQuery, SqlParsingError> {
        let other = Parser::new(sql)?.parse_select()?;
        tracing::debug!(operator = operator.as_str(), "combining raw query");
        Ok(self.combine(operator, other))
    }

    fn union(self, other: impl Into<SelectQuery>) -> BinarySelectQuery {
        self.combine(SetOperator::Union, other)
    }

    fn union_all(self, other: impl Into<SelectQuery>) -> BinarySelectQuery {
        self.combine(SetOperator::UnionAll, other)
    }

    fn intersect(self, other: impl Into<SelectQuery>) -> BinarySelectQuery {
        self.combine(SetOperator::Intersect, other)
    }

    fn intersect_all(self, other: impl Into<SelectQuery>) -> BinarySelectQuery {
        self.combine(SetOperator::IntersectAll, other)
    }

    fn except(self, other: impl Into<SelectQuery>) -> BinarySelectQuery {
        self.combine(SetOperator::Except, other)
    }

    fn except_all(self, other: impl Into<SelectQuery>) -> BinarySelectQuery {
        self.combine(SetOperator::ExceptAll, other)
    }

    fn union_raw(self, sql: &str) -> Result<BinarySelectQuery, SqlParsingError> {
        self.combine_raw(SetOperator::Union, sql)
    }

    fn union_all_raw(self, sql: &str) -> Result<BinarySelectQuery, SqlParsingError> {
        self.combine_raw(SetOperator::UnionAll, sql)
    }

    fn intersect_raw(self, sql: &str) -> Result<BinarySelectQuery, SqlParsingError> {
        self.combine_raw(SetOperator::Intersect, sql)
    }

    fn intersect_all_raw(self, sql: &str) -> Result<BinarySelectQuery, SqlParsingError> {
        self.combine_raw(SetOperator::IntersectAll, sql)
    }

    fn except_raw(self, sql: &str) -> Result<BinarySelectQuery, SqlParsingError> {
        self.combine_raw(SetOperator::Except, sql)
    }

    fn except_all_raw(self, sql: &str) -> Result<BinarySelectQuery, SqlParsingError> {
        self.combine_raw(SetOperator::ExceptAll, sql)
    }
}

impl SetOperations for SimpleSelectQuery {}
impl SetOperations for BinarySelectQuery {}
impl SetOperations for ValuesQuery {}
impl SetOperations for SelectQuery {}

fn parenthesize_or(value: ValueComponent) -> ValueComponent {
    if value.is_or() {
        value.paren()
    } else {
        value
    }
}

impl SimpleSelectQuery {
    /// AND-combines `predicate` with the existing WHERE predicate.
    ///
    /// A side that is a bare OR is parenthesized before combining.
    pub fn append_where(&mut self, predicate: ValueComponent) -> &mut Self {
        self.where_clause = Some(match self.where_clause.take() {
            None => predicate,
            Some(existing) => parenthesize_or(existing).and(parenthesize_or(predicate)),
        });
        self
    }

    /// Parses `sql` as a standalone predicate and appends it with
    /// [`append_where`](Self::append_where).
    pub fn append_where_raw(&mut self, sql: &str) -> Result<&mut Self, SqlParsingError> {
        let predicate = Parser::new(sql)?.parse_value()?;
        tracing::debug!(fragment = sql, "appending raw where predicate");
        Ok(self.append_where(predicate))
    }

    /// Binds `value` to every parameter called `name`; see
    /// [`SelectQuery::set_parameter`].
    pub fn set_parameter(&mut self, name: &str, value: impl ToSqlValue) -> usize {
        let mut binder = ParameterBinder::new(name, value.to_sql_value());
        self.accept_mut(&mut binder);
        binder.bound
    }
}

impl SelectQuery {
    /// Binds `value` to every parameter called `name`, anywhere in the
    /// tree, and returns how many placeholders were bound.
    ///
    /// The name may be given with or without its marker (`:id` or `id`).
    pub fn set_parameter(&mut self, name: &str, value: impl ToSqlValue) -> usize {
        let mut binder = ParameterBinder::new(name, value.to_sql_value());
        self.accept_mut(&mut binder);
        binder.bound
    }
}

struct ParameterBinder {
    name: String,
    value: SqlValue,
    bound: usize,
}

impl ParameterBinder {
    fn new(name: &str, value: SqlValue) -> Self {
        let name = name.trim_start_matches([':', '@', '$']).to_string();
        Self {
            name,
            value,
            bound: 0,
        }
    }
}

impl MutVisitor for ParameterBinder {
    fn enter_value(&mut self, node: &mut ValueComponent) {
        if let ValueKind::Parameter { name, value } = &mut node.kind {
            if *name == self.name {
                *value = Some(self.value.clone());
                self.bound += 1;
            }
        }
    }
}
