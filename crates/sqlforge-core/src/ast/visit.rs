//! Mutable traversal of the query tree.
//!
//! `MutVisitor` has `enter_*`/`exit_*` hooks for queries and values;
//! `MutVisitable::accept_mut` walks every nested node, including CTE
//! bodies, derived tables and subqueries.

use super::clause::{
    Datasource, Distinct, FromClause, JoinCondition, OrderByItem, SourceExpression, WithClause,
};
use super::expression::{
    FrameBound, FunctionCall, OverClause, ValueComponent, ValueKind, WindowSpec,
};
use super::query::{SelectQuery, SimpleSelectQuery};

/// Hooks called while walking a tree.
pub trait MutVisitor {
    fn enter_query(&mut self, _node: &mut SelectQuery) {}
    fn exit_query(&mut self, _node: &mut SelectQuery) {}

    fn enter_value(&mut self, _node: &mut ValueComponent) {}
    fn exit_value(&mut self, _node: &mut ValueComponent) {}
}

/// Nodes that can be walked by a `MutVisitor`.
pub trait MutVisitable {
    fn accept_mut<V: MutVisitor>(&mut self, visitor: &mut V);
}

impl MutVisitable for SelectQuery {
    fn accept_mut<V: MutVisitor>(&mut self, visitor: &mut V) {
        visitor.enter_query(self);
        match self {
            Self::Simple(q) => q.accept_mut(visitor),
            Self::Binary(q) => {
                q.left.accept_mut(visitor);
                q.right.accept_mut(visitor);
            }
            Self::Values(q) => {
                for value in q.tuples.iter_mut().flatten() {
                    value.accept_mut(visitor);
                }
            }
        }
        visitor.exit_query(self);
    }
}

impl MutVisitable for SimpleSelectQuery {
    fn accept_mut<V: MutVisitor>(&mut self, visitor: &mut V) {
        if let Some(with) = self.with_clause.as_mut() {
            with.accept_mut(visitor);
        }
        if let Some(Distinct::DistinctOn(values)) = self.select_clause.distinct.as_mut() {
            walk_values(values, visitor);
        }
        for item in &mut self.select_clause.items {
            item.value.accept_mut(visitor);
        }
        if let Some(from) = self.from_clause.as_mut() {
            from.accept_mut(visitor);
        }
        if let Some(predicate) = self.where_clause.as_mut() {
            predicate.accept_mut(visitor);
        }
        walk_values(&mut self.group_by, visitor);
        if let Some(having) = self.having.as_mut() {
            having.accept_mut(visitor);
        }
        for definition in &mut self.window {
            definition.spec.accept_mut(visitor);
        }
        walk_order_by(&mut self.order_by, visitor);
        if let Some(limit) = self.limit.as_mut() {
            limit.accept_mut(visitor);
        }
        if let Some(offset) = self.offset.as_mut() {
            offset.accept_mut(visitor);
        }
    }
}

impl MutVisitable for WithClause {
    fn accept_mut<V: MutVisitor>(&mut self, visitor: &mut V) {
        for table in &mut self.tables {
            table.query.accept_mut(visitor);
        }
    }
}

impl MutVisitable for FromClause {
    fn accept_mut<V: MutVisitor>(&mut self, visitor: &mut V) {
        self.source.accept_mut(visitor);
        for join in &mut self.joins {
            join.source.accept_mut(visitor);
            if let Some(JoinCondition::On(condition)) = join.condition.as_mut() {
                condition.accept_mut(visitor);
            }
        }
    }
}

impl MutVisitable for SourceExpression {
    fn accept_mut<V: MutVisitor>(&mut self, visitor: &mut V) {
        match &mut self.datasource {
            Datasource::Table(_) => {}
            Datasource::Subquery(query) => query.accept_mut(visitor),
            Datasource::Function(call) => call.accept_mut(visitor),
        }
    }
}

impl MutVisitable for FunctionCall {
    fn accept_mut<V: MutVisitor>(&mut self, visitor: &mut V) {
        walk_values(&mut self.args, visitor);
        if let Some(OverClause::Spec(spec)) = self.over.as_mut() {
            spec.accept_mut(visitor);
        }
    }
}

impl MutVisitable for WindowSpec {
    fn accept_mut<V: MutVisitor>(&mut self, visitor: &mut V) {
        walk_values(&mut self.partition_by, visitor);
        walk_order_by(&mut self.order_by, visitor);
        if let Some(frame) = self.frame.as_mut() {
            for bound in std::iter::once(&mut frame.start).chain(frame.end.as_mut()) {
                if let FrameBound::Preceding(value) | FrameBound::Following(value) = bound {
                    value.accept_mut(visitor);
                }
            }
        }
    }
}

impl MutVisitable for ValueComponent {
    fn accept_mut<V: MutVisitor>(&mut self, visitor: &mut V) {
        visitor.enter_value(self);
        match &mut self.kind {
            ValueKind::Column(_) | ValueKind::Literal(_) | ValueKind::Parameter { .. } => {}
            ValueKind::Binary { left, right, .. } => {
                left.accept_mut(visitor);
                right.accept_mut(visitor);
            }
            ValueKind::Unary { operand, .. } => operand.accept_mut(visitor),
            ValueKind::Function(call) => call.accept_mut(visitor),
            ValueKind::Case(case) => {
                if let Some(operand) = case.operand.as_mut() {
                    operand.accept_mut(visitor);
                }
                for (condition, value) in &mut case.when_then {
                    condition.accept_mut(visitor);
                    value.accept_mut(visitor);
                }
                if let Some(value) = case.else_value.as_mut() {
                    value.accept_mut(visitor);
                }
            }
            ValueKind::Tuple(items) => walk_values(items, visitor),
            ValueKind::Subquery(query) | ValueKind::Exists(query) => query.accept_mut(visitor),
            ValueKind::Paren(inner) => inner.accept_mut(visitor),
            ValueKind::Between {
                expr, low, high, ..
            } => {
                expr.accept_mut(visitor);
                low.accept_mut(visitor);
                high.accept_mut(visitor);
            }
            ValueKind::Cast { expr, .. } => expr.accept_mut(visitor),
        }
        visitor.exit_value(self);
    }
}

fn walk_values<V: MutVisitor>(values: &mut [ValueComponent], visitor: &mut V) {
    for value in values {
        value.accept_mut(visitor);
    }
}

fn walk_order_by<V: MutVisitor>(items: &mut [OrderByItem], visitor: &mut V) {
    for item in items {
        item.value.accept_mut(visitor);
    }
}
