//! The intermediate print-token tree.
//!
//! The builder lowers an AST into these tokens without any style knowledge;
//! the renderer decides spacing, casing, quoting and indentation from the
//! token kinds and container tags alone.

use crate::ast::SqlValue;

/// Token kinds in the print tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A keyword, emitted in lowercase and cased by the renderer.
    Keyword,
    /// A literal value, rendered verbatim (strings are already quoted).
    Value,
    /// An identifier, quoted by the renderer.
    Identifier,
    /// A parameter placeholder.
    Parameter,
    /// A binary operator, spaced by the renderer.
    Operator,
    /// A list separator.
    Comma,
    /// A single space.
    Space,
    /// A line break in multi-line mode, a space otherwise.
    Break,
    /// A comment body.
    Comment,
    /// A group of child tokens.
    Container,
    /// Text rendered verbatim.
    Raw,
}

/// Labels telling the renderer how to lay out a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerTag {
    SelectClause,
    SelectItems,
    FromClause,
    FromBody,
    JoinClause,
    JoinCondition,
    WhereClause,
    WhereBody,
    GroupByClause,
    GroupByBody,
    HavingClause,
    HavingBody,
    WindowClause,
    WindowBody,
    OrderByClause,
    OrderByBody,
    LimitClause,
    OffsetClause,
    ForClause,
    WithClause,
    WithClauseBody,
    CommonTable,
    CommonTableBody,
    ValuesQuery,
    ValuesBody,
    SimpleSelectQuery,
    BinaryQuery,
    CaseExpression,
    CaseBody,
    CaseWhen,
    CaseThenValue,
    CaseElseValue,
    BetweenExpression,
    ParenExpression,
    SubqueryBody,
    FunctionArgs,
    TupleItems,
    CommentBlock,
    WindowSpec,
}

impl ContainerTag {
    /// Returns true if the container indents its children in multi-line mode.
    #[must_use]
    pub const fn is_indented(self) -> bool {
        matches!(
            self,
            Self::SelectItems
                | Self::FromBody
                | Self::WhereBody
                | Self::GroupByBody
                | Self::HavingBody
                | Self::OrderByBody
                | Self::WindowBody
                | Self::WithClauseBody
                | Self::ValuesBody
                | Self::CaseBody
                | Self::SubqueryBody
                | Self::CommonTableBody
        )
    }

    /// Text emitted in front of an indented container in single-line mode.
    #[must_use]
    pub const fn inline_open(self) -> &'static str {
        match self {
            Self::SubqueryBody | Self::CommonTableBody => "",
            _ => " ",
        }
    }

    /// Returns true if the container's closing token goes on its own line.
    #[must_use]
    pub const fn closes_on_new_line(self) -> bool {
        matches!(
            self,
            Self::SubqueryBody | Self::CommonTableBody | Self::CaseBody
        )
    }

    /// Returns true if commas directly inside this container are list
    /// separators subject to `comma_break`.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Self::SelectItems
                | Self::GroupByBody
                | Self::OrderByBody
                | Self::WithClauseBody
                | Self::ValuesBody
                | Self::WindowBody
        )
    }

    /// Returns true if AND/OR directly inside this container are subject to
    /// `and_break`/`or_break`.
    #[must_use]
    pub const fn breaks_logical_operators(self) -> bool {
        matches!(
            self,
            Self::WhereBody | Self::HavingBody | Self::JoinCondition
        )
    }
}

/// A node of the print-token tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlPrintToken {
    pub kind: TokenKind,
    pub text: String,
    pub container_type: Option<ContainerTag>,
    pub children: Vec<SqlPrintToken>,
    /// The bound value of a parameter token.
    pub value: Option<SqlValue>,
}

impl SqlPrintToken {
    fn leaf(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            container_type: None,
            children: vec![],
            value: None,
        }
    }

    #[must_use]
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::leaf(TokenKind::Keyword, text)
    }

    #[must_use]
    pub fn value(text: impl Into<String>) -> Self {
        Self::leaf(TokenKind::Value, text)
    }

    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::leaf(TokenKind::Identifier, name)
    }

    /// Creates a parameter token; `name` is empty for anonymous markers.
    #[must_use]
    pub fn parameter(name: impl Into<String>, value: Option<SqlValue>) -> Self {
        Self {
            value,
            ..Self::leaf(TokenKind::Parameter, name)
        }
    }

    #[must_use]
    pub fn operator(text: impl Into<String>) -> Self {
        Self::leaf(TokenKind::Operator, text)
    }

    #[must_use]
    pub fn comma() -> Self {
        Self::leaf(TokenKind::Comma, ",")
    }

    #[must_use]
    pub fn space() -> Self {
        Self::leaf(TokenKind::Space, " ")
    }

    #[must_use]
    pub fn line_break() -> Self {
        Self::leaf(TokenKind::Break, "")
    }

    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Self::leaf(TokenKind::Comment, text)
    }

    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::leaf(TokenKind::Raw, text)
    }

    #[must_use]
    pub fn container(tag: ContainerTag, children: Vec<Self>) -> Self {
        Self {
            kind: TokenKind::Container,
            text: String::new(),
            container_type: Some(tag),
            children,
            value: None,
        }
    }

    /// Returns the first container with `tag` in depth-first order,
    /// including `self`.
    #[must_use]
    pub fn find(&self, tag: ContainerTag) -> Option<&Self> {
        if self.container_type == Some(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(tag))
    }

    /// Counts the leaf tokens of `kind` below this token.
    #[must_use]
    pub fn count(&self, kind: TokenKind) -> usize {
        let own = usize::from(self.kind == kind);
        own + self
            .children
            .iter()
            .map(|child| child.count(kind))
            .sum::<usize>()
    }
}
