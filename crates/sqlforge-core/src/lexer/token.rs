//! Lexeme types for the SQL lexer.

/// SQL keywords recognised by the lexer.
///
/// Reserved keywords terminate expressions and clauses; the rest are
/// contextual and may still be used as identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Query clauses
    Select,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Limit,
    Offset,
    Window,
    For,
    Distinct,
    All,
    As,
    With,
    Values,

    // Joins
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    Natural,
    Lateral,
    On,
    Using,

    // Set operations
    Union,
    Intersect,
    Except,

    // Predicates and literals
    And,
    Or,
    Not,
    In,
    Is,
    Between,
    Like,
    Ilike,
    Exists,
    Null,
    True,
    False,

    // Conditional expressions
    Case,
    When,
    Then,
    Else,
    End,
    Cast,

    // Contextual (non-reserved)
    Asc,
    Desc,
    Nulls,
    First,
    Last,
    Recursive,
    Materialized,
    Over,
    Partition,
    Rows,
    Range,
    Groups,
    Unbounded,
    Preceding,
    Following,
    Current,
    Row,
    Update,
    Share,
    Key,
    No,
}

impl Keyword {
    /// Attempts to parse a keyword from a word (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "ORDER" => Some(Self::Order),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "WINDOW" => Some(Self::Window),
            "FOR" => Some(Self::For),
            "DISTINCT" => Some(Self::Distinct),
            "ALL" => Some(Self::All),
            "AS" => Some(Self::As),
            "WITH" => Some(Self::With),
            "VALUES" => Some(Self::Values),
            "JOIN" => Some(Self::Join),
            "INNER" => Some(Self::Inner),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "FULL" => Some(Self::Full),
            "OUTER" => Some(Self::Outer),
            "CROSS" => Some(Self::Cross),
            "NATURAL" => Some(Self::Natural),
            "LATERAL" => Some(Self::Lateral),
            "ON" => Some(Self::On),
            "USING" => Some(Self::Using),
            "UNION" => Some(Self::Union),
            "INTERSECT" => Some(Self::Intersect),
            "EXCEPT" => Some(Self::Except),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "IS" => Some(Self::Is),
            "BETWEEN" => Some(Self::Between),
            "LIKE" => Some(Self::Like),
            "ILIKE" => Some(Self::Ilike),
            "EXISTS" => Some(Self::Exists),
            "NULL" => Some(Self::Null),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "CASE" => Some(Self::Case),
            "WHEN" => Some(Self::When),
            "THEN" => Some(Self::Then),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "CAST" => Some(Self::Cast),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "NULLS" => Some(Self::Nulls),
            "FIRST" => Some(Self::First),
            "LAST" => Some(Self::Last),
            "RECURSIVE" => Some(Self::Recursive),
            "MATERIALIZED" => Some(Self::Materialized),
            "OVER" => Some(Self::Over),
            "PARTITION" => Some(Self::Partition),
            "ROWS" => Some(Self::Rows),
            "RANGE" => Some(Self::Range),
            "GROUPS" => Some(Self::Groups),
            "UNBOUNDED" => Some(Self::Unbounded),
            "PRECEDING" => Some(Self::Preceding),
            "FOLLOWING" => Some(Self::Following),
            "CURRENT" => Some(Self::Current),
            "ROW" => Some(Self::Row),
            "UPDATE" => Some(Self::Update),
            "SHARE" => Some(Self::Share),
            "KEY" => Some(Self::Key),
            "NO" => Some(Self::No),
            _ => None,
        }
    }

    /// Returns the keyword as an upper-case string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Window => "WINDOW",
            Self::For => "FOR",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::As => "AS",
            Self::With => "WITH",
            Self::Values => "VALUES",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Cross => "CROSS",
            Self::Natural => "NATURAL",
            Self::Lateral => "LATERAL",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Is => "IS",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::Ilike => "ILIKE",
            Self::Exists => "EXISTS",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Cast => "CAST",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Nulls => "NULLS",
            Self::First => "FIRST",
            Self::Last => "LAST",
            Self::Recursive => "RECURSIVE",
            Self::Materialized => "MATERIALIZED",
            Self::Over => "OVER",
            Self::Partition => "PARTITION",
            Self::Rows => "ROWS",
            Self::Range => "RANGE",
            Self::Groups => "GROUPS",
            Self::Unbounded => "UNBOUNDED",
            Self::Preceding => "PRECEDING",
            Self::Following => "FOLLOWING",
            Self::Current => "CURRENT",
            Self::Row => "ROW",
            Self::Update => "UPDATE",
            Self::Share => "SHARE",
            Self::Key => "KEY",
            Self::No => "NO",
        }
    }

    /// Returns true if the keyword can never be used as a bare identifier.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        !matches!(
            self,
            Self::Asc
                | Self::Desc
                | Self::Nulls
                | Self::First
                | Self::Last
                | Self::Recursive
                | Self::Materialized
                | Self::Over
                | Self::Partition
                | Self::Rows
                | Self::Range
                | Self::Groups
                | Self::Unbounded
                | Self::Preceding
                | Self::Following
                | Self::Current
                | Self::Row
                | Self::Update
                | Self::Share
                | Self::Key
                | Self::No
        )
    }
}

/// The classification of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    /// A recognised keyword (text keeps the source spelling).
    Keyword(Keyword),
    /// A bare or quoted identifier (text is unescaped).
    Identifier,
    /// An operator such as `=`, `<>`, `||` or `::`.
    Operator,
    /// A string literal (text is the unescaped content).
    StringLiteral,
    /// An integer or decimal literal (text is the source spelling).
    NumericLiteral,
    /// A parameter marker: `?`, `$1`, `:name`, `@name`.
    Parameter,
    /// A line or block comment (text is the trimmed body).
    Comment,
    /// `(`, `)`, `,`, `;` or `.`.
    Punctuation,
}

/// A classified unit of SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The kind of lexeme.
    pub kind: LexemeKind,
    /// The lexeme text.
    pub text: String,
    /// Byte offset of the lexeme in the source.
    pub position: usize,
}

impl Lexeme {
    /// Creates a new lexeme.
    #[must_use]
    pub fn new(kind: LexemeKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Returns the keyword if this is a keyword lexeme.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            LexemeKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns true if this lexeme is the given punctuation character.
    #[must_use]
    pub fn is_punctuation(&self, text: &str) -> bool {
        self.kind == LexemeKind::Punctuation && self.text == text
    }

    /// Returns true if this lexeme is the given operator.
    #[must_use]
    pub fn is_operator(&self, text: &str) -> bool {
        self.kind == LexemeKind::Operator && self.text == text
    }

    /// Returns true if this is a comment.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self.kind, LexemeKind::Comment)
    }
}
