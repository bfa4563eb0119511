//! Query AST types.

use super::clause::{
    FromClause, OrderByItem, SelectClause, SelectItem, SourceExpression, WindowDefinition,
    WithClause,
};
use super::comments::{Commentable, Comments};
use super::expression::ValueComponent;
use super::types::{LockMode, SetOperator};

/// A parsed query: the root of every parse result.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectQuery {
    /// `[WITH ...] SELECT ...`
    Simple(SimpleSelectQuery),
    /// `left <set operator> right`
    Binary(BinarySelectQuery),
    /// `VALUES (...), (...)`
    Values(ValuesQuery),
}

/// A single SELECT with its clauses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleSelectQuery {
    /// Comments rendered above the statement.
    pub header_comments: Vec<String>,
    pub comments: Comments,
    pub with_clause: Option<WithClause>,
    pub select_clause: SelectClause,
    pub from_clause: Option<FromClause>,
    pub where_clause: Option<ValueComponent>,
    pub group_by: Vec<ValueComponent>,
    pub having: Option<ValueComponent>,
    pub window: Vec<WindowDefinition>,
    pub order_by: Vec<OrderByItem>,
    pub limit: Option<ValueComponent>,
    pub offset: Option<ValueComponent>,
    pub for_clause: Option<LockMode>,
}

/// Two queries combined by a set operator.
#[derive(Debug, Clone, PartialEq)]
pub struct BinarySelectQuery {
    pub header_comments: Vec<String>,
    pub comments: Comments,
    pub left: Box<SelectQuery>,
    pub operator: SetOperator,
    pub right: Box<SelectQuery>,
}

/// A VALUES list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuesQuery {
    pub header_comments: Vec<String>,
    pub comments: Comments,
    /// Rows, each an ordered list of values.
    pub tuples: Vec<Vec<ValueComponent>>,
    /// Column names used when the list is wrapped as a derived table.
    pub column_aliases: Option<Vec<String>>,
}

impl SimpleSelectQuery {
    /// Creates `SELECT <items>` with no other clause.
    #[must_use]
    pub fn new(items: Vec<SelectItem>) -> Self {
        Self {
            select_clause: SelectClause {
                distinct: None,
                items,
            },
            ..Self::default()
        }
    }

    /// Sets the FROM source, replacing any existing FROM clause.
    #[must_use]
    pub fn with_from(mut self, source: SourceExpression) -> Self {
        self.from_clause = Some(FromClause::new(source));
        self
    }

    /// Sets the WHERE predicate.
    #[must_use]
    pub fn with_where(mut self, predicate: ValueComponent) -> Self {
        self.where_clause = Some(predicate);
        self
    }
}

impl BinarySelectQuery {
    /// Combines two queries.
    #[must_use]
    pub fn new(
        left: impl Into<SelectQuery>,
        operator: SetOperator,
        right: impl Into<SelectQuery>,
    ) -> Self {
        Self {
            header_comments: Vec::new(),
            comments: Comments::new(),
            left: Box::new(left.into()),
            operator,
            right: Box::new(right.into()),
        }
    }
}

impl ValuesQuery {
    /// Creates a VALUES list.
    #[must_use]
    pub fn new(tuples: Vec<Vec<ValueComponent>>) -> Self {
        Self {
            tuples,
            ..Self::default()
        }
    }

    /// Names the columns of the list.
    #[must_use]
    pub fn with_column_aliases(mut self, columns: Vec<String>) -> Self {
        self.column_aliases = Some(columns);
        self
    }
}

impl SelectQuery {
    /// Returns a short name of the query kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Simple(_) => "simple",
            Self::Binary(_) => "binary",
            Self::Values(_) => "values",
        }
    }

    /// Returns the simple query, if this is one.
    #[must_use]
    pub const fn as_simple(&self) -> Option<&SimpleSelectQuery> {
        match self {
            Self::Simple(q) => Some(q),
            _ => None,
        }
    }

    /// Returns the simple query for mutation, if this is one.
    pub fn as_simple_mut(&mut self) -> Option<&mut SimpleSelectQuery> {
        match self {
            Self::Simple(q) => Some(q),
            _ => None,
        }
    }

    /// Returns the header comments of the root node.
    #[must_use]
    pub fn header_comments(&self) -> &[String] {
        match self {
            Self::Simple(q) => &q.header_comments,
            Self::Binary(q) => &q.header_comments,
            Self::Values(q) => &q.header_comments,
        }
    }

    /// Returns the header comments of the root node for mutation.
    pub fn header_comments_mut(&mut self) -> &mut Vec<String> {
        match self {
            Self::Simple(q) => &mut q.header_comments,
            Self::Binary(q) => &mut q.header_comments,
            Self::Values(q) => &mut q.header_comments,
        }
    }

    /// Returns the leftmost operand of a set-operation chain.
    pub fn leftmost_mut(&mut self) -> &mut Self {
        match self {
            Self::Binary(q) => q.left.leftmost_mut(),
            other => other,
        }
    }

    /// Returns true if the query ends in ORDER BY, LIMIT, OFFSET or FOR.
    ///
    /// Followed by a set operator, such a query must be parenthesized or the
    /// trailing clauses would apply to the whole chain.
    #[must_use]
    pub fn has_trailing_clauses(&self) -> bool {
        match self {
            Self::Simple(q) => {
                !q.order_by.is_empty()
                    || q.limit.is_some()
                    || q.offset.is_some()
                    || q.for_clause.is_some()
            }
            Self::Binary(q) => q.right.has_trailing_clauses(),
            Self::Values(_) => false,
        }
    }

    /// Returns true if the query has a WITH clause at its root.
    #[must_use]
    pub const fn has_with_clause(&self) -> bool {
        matches!(
            self,
            Self::Simple(SimpleSelectQuery {
                with_clause: Some(_),
                ..
            })
        )
    }
}

impl From<SimpleSelectQuery> for SelectQuery {
    fn from(query: SimpleSelectQuery) -> Self {
        Self::Simple(query)
    }
}

impl From<BinarySelectQuery> for SelectQuery {
    fn from(query: BinarySelectQuery) -> Self {
        Self::Binary(query)
    }
}

impl From<ValuesQuery> for SelectQuery {
    fn from(query: ValuesQuery) -> Self {
        Self::Values(query)
    }
}

macro_rules! impl_commentable {
    ($($ty:ty),*) => {
        $(
            impl Commentable for $ty {
                fn comments(&self) -> &Comments {
                    &self.comments
                }

                fn comments_mut(&mut self) -> &mut Comments {
                    &mut self.comments
                }
            }
        )*
    };
}

impl_commentable!(SimpleSelectQuery, BinarySelectQuery, ValuesQuery);

impl Commentable for SelectQuery {
    fn comments(&self) -> &Comments {
        match self {
            Self::Simple(q) => &q.comments,
            Self::Binary(q) => &q.comments,
            Self::Values(q) => &q.comments,
        }
    }

    fn comments_mut(&mut self) -> &mut Comments {
        match self {
            Self::Simple(q) => &mut q.comments,
            Self::Binary(q) => &mut q.comments,
            Self::Values(q) => &mut q.comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CommentPosition;

    fn select_one() -> SimpleSelectQuery {
        SimpleSelectQuery::new(vec![SelectItem::new(ValueComponent::number(1))])
    }

    #[test]
    fn test_leftmost_of_chain() {
        let mut chain = SelectQuery::from(BinarySelectQuery::new(
            BinarySelectQuery::new(
                ValuesQuery::new(vec![vec![ValueComponent::number(1)]]),
                SetOperator::Union,
                select_one(),
            ),
            SetOperator::Except,
            select_one(),
        ));
        assert_eq!(chain.leftmost_mut().kind_name(), "values");
    }

    #[test]
    fn test_commentable_dispatch() {
        let mut query = SelectQuery::from(select_one());
        query.add_positioned_comments(CommentPosition::After, vec![String::from("tail")]);
        let simple = query.as_simple().unwrap();
        assert_eq!(
            simple.get_positioned_comments(CommentPosition::After),
            vec![String::from("tail")]
        );
    }
}
