//! Operators and small enumerations shared by the AST.

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // Pattern matching and membership
    Like,
    NotLike,
    ILike,
    NotILike,
    In,
    NotIn,

    // IS family
    Is,
    IsNot,
    IsDistinctFrom,
    IsNotDistinctFrom,

    // String, bitwise and JSON
    Concat,
    BitAnd,
    BitOr,
    LeftShift,
    RightShift,
    JsonGet,
    JsonGetText,
}

impl BinaryOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::ILike => "ILIKE",
            Self::NotILike => "NOT ILIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::IsDistinctFrom => "IS DISTINCT FROM",
            Self::IsNotDistinctFrom => "IS NOT DISTINCT FROM",
            Self::Concat => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::JsonGet => "->",
            Self::JsonGetText => "->>",
        }
    }

    /// Returns true if the operator is spelled with words.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Or
                | Self::Like
                | Self::NotLike
                | Self::ILike
                | Self::NotILike
                | Self::In
                | Self::NotIn
                | Self::Is
                | Self::IsNot
                | Self::IsDistinctFrom
                | Self::IsNotDistinctFrom
        )
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT
    Not,
    /// Negation (-)
    Neg,
    /// Identity (+)
    Plus,
    /// Bitwise NOT (~)
    BitNot,
}

impl UnaryOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::Neg => "-",
            Self::Plus => "+",
            Self::BitNot => "~",
        }
    }
}

/// Set operators combining two queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    UnionAll,
    Intersect,
    IntersectAll,
    Except,
    ExceptAll,
}

impl SetOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::UnionAll => "UNION ALL",
            Self::Intersect => "INTERSECT",
            Self::IntersectAll => "INTERSECT ALL",
            Self::Except => "EXCEPT",
            Self::ExceptAll => "EXCEPT ALL",
        }
    }
}

/// Join kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// INNER JOIN
    Inner,
    /// LEFT OUTER JOIN
    Left,
    /// RIGHT OUTER JOIN
    Right,
    /// FULL OUTER JOIN
    Full,
    /// CROSS JOIN
    Cross,
    /// NATURAL JOIN
    Natural,
    /// `a, b` in a FROM list
    Comma,
}

impl JoinKind {
    /// Returns the SQL keywords for the join.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
            Self::Natural => "NATURAL JOIN",
            Self::Comma => ",",
        }
    }

    /// Returns true if the join requires an ON or USING condition.
    #[must_use]
    pub const fn requires_condition(&self) -> bool {
        matches!(self, Self::Inner | Self::Left | Self::Right | Self::Full)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// NULLS FIRST / NULLS LAST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

impl NullsOrder {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// Row locking mode of a `FOR ...` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    Update,
    NoKeyUpdate,
    Share,
    KeyShare,
}

impl LockMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Update => "FOR UPDATE",
            Self::NoKeyUpdate => "FOR NO KEY UPDATE",
            Self::Share => "FOR SHARE",
            Self::KeyShare => "FOR KEY SHARE",
        }
    }
}

/// How a cast was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastSyntax {
    /// `CAST(x AS type)`
    Function,
    /// `x::type`
    DoubleColon,
}

/// Window frame units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameUnits {
    Rows,
    Range,
    Groups,
}

impl FrameUnits {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rows => "ROWS",
            Self::Range => "RANGE",
            Self::Groups => "GROUPS",
        }
    }
}

/// A data type reference such as `int` or `numeric(10, 2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeValue {
    /// The type name, multi-word names joined by a single space.
    pub name: String,
    /// Type modifiers, in source spelling.
    pub args: Vec<String>,
}

impl TypeValue {
    /// Creates a type without modifiers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Adds modifiers to the type.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

/// A column reference, possibly qualified (`schema.table.column`).
///
/// A column of `*` is a wildcard (`*` or `t.*`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReference {
    /// Qualifying names, outermost first.
    pub namespaces: Vec<String>,
    /// The column name.
    pub column: String,
}

impl ColumnReference {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            namespaces: Vec::new(),
            column: column.into(),
        }
    }

    /// Creates a `table.column` reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            namespaces: vec![table.into()],
            column: column.into(),
        }
    }

    /// Returns true for `*` and `t.*`.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.column == "*"
    }

    /// Returns the table qualifier, if any.
    #[must_use]
    pub fn table(&self) -> Option<&str> {
        self.namespaces.last().map(String::as_str)
    }
}
