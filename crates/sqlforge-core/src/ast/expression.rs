//! Value expression AST types.

use super::clause::OrderByItem;
use super::comments::{Commentable, Comments};
use super::query::SelectQuery;
use super::types::{
    BinaryOperator, CastSyntax, ColumnReference, FrameUnits, TypeValue, UnaryOperator,
};
use super::value::SqlValue;

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Numeric literal, kept in source spelling.
    Number(String),
    /// String literal (unescaped content).
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// NULL literal.
    Null,
}

/// A function call, optionally a window function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Qualifying names (`schema.fn`).
    pub namespaces: Vec<String>,
    /// The function name.
    pub name: String,
    /// The arguments; `count(*)` has a single wildcard column.
    pub args: Vec<ValueComponent>,
    /// Whether DISTINCT was specified.
    pub distinct: bool,
    /// The OVER clause of a window function.
    pub over: Option<OverClause>,
}

impl FunctionCall {
    /// Creates a plain function call.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<ValueComponent>) -> Self {
        Self {
            namespaces: Vec::new(),
            name: name.into(),
            args,
            distinct: false,
            over: None,
        }
    }
}

/// `OVER name` or `OVER (...)`.
#[derive(Debug, Clone, PartialEq)]
pub enum OverClause {
    Named(String),
    Spec(WindowSpec),
}

/// A window specification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowSpec {
    /// An existing window this one refines.
    pub base: Option<String>,
    pub partition_by: Vec<ValueComponent>,
    pub order_by: Vec<OrderByItem>,
    pub frame: Option<WindowFrame>,
}

/// A window frame: `ROWS BETWEEN start AND end` or `ROWS start`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrame {
    pub units: FrameUnits,
    pub start: FrameBound,
    pub end: Option<FrameBound>,
}

/// One end of a window frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameBound {
    UnboundedPreceding,
    Preceding(Box<ValueComponent>),
    CurrentRow,
    Following(Box<ValueComponent>),
    UnboundedFollowing,
}

/// A CASE expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpression {
    /// The operand of a simple CASE (`CASE x WHEN ...`).
    pub operand: Option<Box<ValueComponent>>,
    /// WHEN/THEN pairs, in source order.
    pub when_then: Vec<(ValueComponent, ValueComponent)>,
    /// The ELSE value.
    pub else_value: Option<Box<ValueComponent>>,
}

/// The shape of a value expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    /// Column reference (`id`, `u.id`, `*`, `u.*`).
    Column(ColumnReference),
    /// Literal value.
    Literal(Literal),
    /// Binary expression.
    Binary {
        left: Box<ValueComponent>,
        op: BinaryOperator,
        right: Box<ValueComponent>,
    },
    /// Unary expression.
    Unary {
        op: UnaryOperator,
        operand: Box<ValueComponent>,
    },
    /// Function call.
    Function(Box<FunctionCall>),
    /// CASE expression.
    Case(Box<CaseExpression>),
    /// Tuple `(a, b, c)`, also the right-hand side of IN lists.
    Tuple(Vec<ValueComponent>),
    /// Scalar subquery.
    Subquery(Box<SelectQuery>),
    /// Parameter placeholder. `name` is empty for `?`.
    Parameter {
        name: String,
        value: Option<SqlValue>,
    },
    /// Parenthesized expression.
    Paren(Box<ValueComponent>),
    /// `x [NOT] BETWEEN low AND high`.
    Between {
        expr: Box<ValueComponent>,
        low: Box<ValueComponent>,
        high: Box<ValueComponent>,
        negated: bool,
    },
    /// `CAST(x AS type)` or `x::type`.
    Cast {
        expr: Box<ValueComponent>,
        data_type: TypeValue,
        syntax: CastSyntax,
    },
    /// `EXISTS (query)`.
    Exists(Box<SelectQuery>),
}

/// A value expression together with its comments.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueComponent {
    pub kind: ValueKind,
    pub comments: Comments,
}

impl From<ValueKind> for ValueComponent {
    fn from(kind: ValueKind) -> Self {
        Self::new(kind)
    }
}

impl Commentable for ValueComponent {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

impl ValueComponent {
    /// Wraps a value kind without comments.
    #[must_use]
    pub const fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            comments: Comments::new(),
        }
    }

    /// Creates a column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::new(ValueKind::Column(ColumnReference::new(name)))
    }

    /// Creates a qualified column reference (`table.column`).
    #[must_use]
    pub fn qualified_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(ValueKind::Column(ColumnReference::qualified(table, column)))
    }

    /// Creates a `*` wildcard.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::column("*")
    }

    /// Creates a numeric literal from anything displayable.
    #[must_use]
    pub fn number(value: impl ToString) -> Self {
        Self::new(ValueKind::Literal(Literal::Number(value.to_string())))
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ValueKind::Literal(Literal::String(value.into())))
    }

    /// Creates a boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::new(ValueKind::Literal(Literal::Boolean(value)))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::new(ValueKind::Literal(Literal::Null))
    }

    /// Creates an unbound named parameter.
    #[must_use]
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::new(ValueKind::Parameter {
            name: name.into(),
            value: None,
        })
    }

    /// Creates a function call.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::new(ValueKind::Function(Box::new(FunctionCall::new(name, args))))
    }

    /// Wraps a query as a scalar subquery.
    #[must_use]
    pub fn subquery(query: impl Into<SelectQuery>) -> Self {
        Self::new(ValueKind::Subquery(Box::new(query.into())))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOperator, right: Self) -> Self {
        Self::new(ValueKind::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        })
    }

    /// Creates an equality comparison (`self = right`).
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOperator::Eq, right)
    }

    /// Creates an inequality comparison (`self <> right`).
    #[must_use]
    pub fn not_eq(self, right: Self) -> Self {
        self.binary(BinaryOperator::NotEq, right)
    }

    /// Creates a less-than comparison.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.binary(BinaryOperator::Lt, right)
    }

    /// Creates a less-than-or-equal comparison.
    #[must_use]
    pub fn lt_eq(self, right: Self) -> Self {
        self.binary(BinaryOperator::LtEq, right)
    }

    /// Creates a greater-than comparison.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(BinaryOperator::Gt, right)
    }

    /// Creates a greater-than-or-equal comparison.
    #[must_use]
    pub fn gt_eq(self, right: Self) -> Self {
        self.binary(BinaryOperator::GtEq, right)
    }

    /// Creates a logical AND.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOperator::And, right)
    }

    /// Creates a logical OR.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOperator::Or, right)
    }

    /// Creates a logical NOT.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::new(ValueKind::Unary {
            op: UnaryOperator::Not,
            operand: Box::new(self),
        })
    }

    /// Creates `self IS NULL`.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.binary(BinaryOperator::Is, Self::null())
    }

    /// Creates `self IN (list...)`.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        self.binary(BinaryOperator::In, Self::new(ValueKind::Tuple(list)))
    }

    /// Creates `self BETWEEN low AND high`.
    #[must_use]
    pub fn between(self, low: Self, high: Self) -> Self {
        Self::new(ValueKind::Between {
            expr: Box::new(self),
            low: Box::new(low),
            high: Box::new(high),
            negated: false,
        })
    }

    /// Wraps `self` in parentheses.
    #[must_use]
    pub fn paren(self) -> Self {
        Self::new(ValueKind::Paren(Box::new(self)))
    }

    /// Returns true if this is a top-level OR expression.
    #[must_use]
    pub const fn is_or(&self) -> bool {
        matches!(
            self.kind,
            ValueKind::Binary {
                op: BinaryOperator::Or,
                ..
            }
        )
    }
}
