//! Clause-level AST types.

use super::comments::{Commentable, Comments};
use super::expression::{FunctionCall, ValueComponent, WindowSpec};
use super::query::SelectQuery;
use super::types::{JoinKind, NullsOrder, OrderDirection};

/// DISTINCT qualifier of a select list.
#[derive(Debug, Clone, PartialEq)]
pub enum Distinct {
    /// `SELECT DISTINCT`
    Distinct,
    /// `SELECT DISTINCT ON (...)`
    DistinctOn(Vec<ValueComponent>),
}

/// A single item of the select list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub value: ValueComponent,
    pub alias: Option<String>,
}

impl SelectItem {
    /// Creates an item without alias.
    #[must_use]
    pub const fn new(value: ValueComponent) -> Self {
        Self { value, alias: None }
    }

    /// Creates an aliased item.
    #[must_use]
    pub fn aliased(value: ValueComponent, alias: impl Into<String>) -> Self {
        Self {
            value,
            alias: Some(alias.into()),
        }
    }
}

/// The select list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectClause {
    pub distinct: Option<Distinct>,
    pub items: Vec<SelectItem>,
}

/// A named table, possibly schema-qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    pub namespaces: Vec<String>,
    pub name: String,
}

/// What a FROM item reads from.
#[derive(Debug, Clone, PartialEq)]
pub enum Datasource {
    /// A table or CTE name.
    Table(TableSource),
    /// A derived table.
    Subquery(Box<SelectQuery>),
    /// A set-returning function.
    Function(Box<FunctionCall>),
}

/// `AS name(col, ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAlias {
    pub name: String,
    pub columns: Vec<String>,
}

impl SourceAlias {
    /// Creates an alias without column names.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }
}

/// A FROM item.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceExpression {
    pub datasource: Datasource,
    pub alias: Option<SourceAlias>,
    pub comments: Comments,
}

impl SourceExpression {
    /// Creates a source reading from a table.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::new(Datasource::Table(TableSource {
            namespaces: Vec::new(),
            name: name.into(),
        }))
    }

    /// Creates a derived-table source.
    #[must_use]
    pub fn subquery(query: impl Into<SelectQuery>, alias: SourceAlias) -> Self {
        Self {
            datasource: Datasource::Subquery(Box::new(query.into())),
            alias: Some(alias),
            comments: Comments::new(),
        }
    }

    /// Creates a source without alias.
    #[must_use]
    pub const fn new(datasource: Datasource) -> Self {
        Self {
            datasource,
            alias: None,
            comments: Comments::new(),
        }
    }
}

impl Commentable for SourceExpression {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

/// ON or USING.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinCondition {
    On(ValueComponent),
    Using(Vec<String>),
}

/// A join following the first FROM item.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub lateral: bool,
    pub source: SourceExpression,
    pub condition: Option<JoinCondition>,
}

/// The FROM clause: a source followed by joins.
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub source: SourceExpression,
    pub joins: Vec<JoinClause>,
}

impl FromClause {
    /// Creates a FROM clause without joins.
    #[must_use]
    pub const fn new(source: SourceExpression) -> Self {
        Self {
            source,
            joins: Vec::new(),
        }
    }
}

/// An ORDER BY item.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByItem {
    pub value: ValueComponent,
    /// Explicit direction; `None` when omitted.
    pub direction: Option<OrderDirection>,
    pub nulls: Option<NullsOrder>,
}

impl OrderByItem {
    /// Creates an item with the given direction.
    #[must_use]
    pub const fn new(value: ValueComponent, direction: Option<OrderDirection>) -> Self {
        Self {
            value,
            direction,
            nulls: None,
        }
    }
}

/// `WINDOW name AS (spec)`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDefinition {
    pub name: String,
    pub spec: WindowSpec,
}

/// A common table expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonTable {
    pub name: String,
    pub column_aliases: Vec<String>,
    pub query: SelectQuery,
    /// `Some(true)` for MATERIALIZED, `Some(false)` for NOT MATERIALIZED.
    pub materialized: Option<bool>,
}

impl CommonTable {
    #[must_use]
    pub fn new(name: impl Into<String>, query: impl Into<SelectQuery>) -> Self {
        Self {
            name: name.into(),
            column_aliases: Vec::new(),
            query: query.into(),
            materialized: None,
        }
    }
}

/// `WITH [RECURSIVE] name AS (...), ...`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WithClause {
    pub recursive: bool,
    pub tables: Vec<CommonTable>,
}

impl WithClause {
    /// Returns the table with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CommonTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Returns the index of the table with the given name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.tables.iter().position(|t| t.name == name)
    }
}
