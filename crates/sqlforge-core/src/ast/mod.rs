//! Abstract Syntax Tree (AST) types for SQL queries.
//!
//! A parse produces a [`SelectQuery`]; its nodes are plain owned values the
//! caller may mutate through the CTE and transform APIs.

mod clause;
mod comments;
mod cte;
mod error;
mod expression;
mod query;
mod transform;
mod types;
mod value;
mod visit;

pub use clause::{
    CommonTable, Datasource, Distinct, FromClause, JoinClause, JoinCondition, OrderByItem,
    SelectClause, SelectItem, SourceAlias, SourceExpression, TableSource, WindowDefinition,
    WithClause,
};
pub use comments::{CommentPosition, Commentable, Comments, PositionedComment};
pub use error::CteError;
pub use expression::{
    CaseExpression, FrameBound, FunctionCall, Literal, OverClause, ValueComponent, ValueKind,
    WindowFrame, WindowSpec,
};
pub use query::{BinarySelectQuery, SelectQuery, SimpleSelectQuery, ValuesQuery};
pub use transform::{SetOperations, ToSimpleQuery, BINARY_QUERY_ALIAS, VALUES_QUERY_ALIAS};
pub use types::{
    BinaryOperator, CastSyntax, ColumnReference, FrameUnits, JoinKind, LockMode, NullsOrder,
    OrderDirection, SetOperator, TypeValue, UnaryOperator,
};
pub use value::{SqlValue, ToSqlValue};
pub use visit::{MutVisitable, MutVisitor};
