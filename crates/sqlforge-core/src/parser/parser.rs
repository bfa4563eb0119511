//! SQL Parser implementation: lexeme cursor and statement grammar.
//!
//! Expression grammar lives in `expression.rs` as a second `impl Parser`
//! block.

use super::error::SqlParsingError;
use crate::ast::{
    BinarySelectQuery, CommentPosition, Commentable, CommonTable, CteError, Datasource, Distinct,
    FromClause, JoinClause, JoinCondition, JoinKind, LockMode, NullsOrder, OrderByItem,
    OrderDirection, SelectClause, SelectItem, SelectQuery, SetOperator, SimpleSelectQuery,
    SourceAlias, SourceExpression, TableSource, ValueComponent, ValuesQuery, WindowDefinition,
    WithClause,
};
use crate::lexer::{Keyword, Lexeme, LexemeKind, Lexer};

/// Default bound on nesting depth.
///
/// Every query, derived table and expression atom counts one level, so a
/// scalar subquery costs two. The bound keeps a debug build inside a 2 MiB
/// thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// SQL Parser.
///
/// The cursor never rests on a comment lexeme: comments are moved into a
/// pending list as the cursor advances and are picked up by the next node
/// that claims them.
pub struct Parser<'a> {
    sql: &'a str,
    lexemes: Vec<Lexeme>,
    pos: usize,
    pending_comments: Vec<String>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Tokenizes `sql` and creates a parser over it.
    pub fn new(sql: &'a str) -> Result<Self, SqlParsingError> {
        let lexemes = Lexer::new(sql)
            .tokenize()
            .map_err(|e| SqlParsingError::from_lex_error(e, sql))?;
        let mut parser = Self {
            sql,
            lexemes,
            pos: 0,
            pending_comments: Vec::new(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        };
        parser.skip_comments();
        Ok(parser)
    }

    /// Sets the maximum nesting depth of queries and expressions.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses a complete query, with an optional trailing `;`.
    pub fn parse_select(&mut self) -> Result<SelectQuery, SqlParsingError> {
        let mut query = self.parse_query()?;
        if self.check_punctuation(";") {
            self.advance();
        }
        self.expect_end()?;
        let trailing = self.take_comments();
        query.add_positioned_comments(CommentPosition::After, trailing);
        tracing::debug!(
            sql_len = self.sql.len(),
            kind = query.kind_name(),
            "parsed query"
        );
        Ok(query)
    }

    /// Parses a standalone value expression, such as a WHERE fragment.
    pub fn parse_value(&mut self) -> Result<ValueComponent, SqlParsingError> {
        let value = self.parse_expression(0)?;
        self.expect_end()?;
        Ok(value)
    }

    // --- Queries ---

    /// Parses `[WITH ...] term { set_operator term }`.
    pub(super) fn parse_query(&mut self) -> Result<SelectQuery, SqlParsingError> {
        self.enter()?;
        let header_comments = self.take_comments();

        let with_clause = if self.check_keyword(Keyword::With) {
            let position = self.position();
            Some((self.parse_with_clause()?, position))
        } else {
            None
        };

        let mut query = self.parse_query_term()?;
        while let Some(operator) = self.parse_set_operator() {
            let right = self.parse_query_term()?;
            query = SelectQuery::Binary(BinarySelectQuery::new(query, operator, right));
        }

        if let Some((with, position)) = with_clause {
            match query.leftmost_mut() {
                SelectQuery::Simple(simple) if simple.with_clause.is_none() => {
                    simple.with_clause = Some(with);
                }
                SelectQuery::Simple(_) => {
                    return Err(SqlParsingError::new(
                        "Multiple WITH clauses",
                        self.sql,
                        position,
                    ));
                }
                SelectQuery::Binary(_) | SelectQuery::Values(_) => {
                    return Err(SqlParsingError::new(
                        "WITH clause must be followed by SELECT",
                        self.sql,
                        position,
                    ));
                }
            }
        }

        prepend_header(&mut query, header_comments);
        self.leave();
        Ok(query)
    }

    /// Parses a nested query onto the heap.
    pub(super) fn parse_subquery(&mut self) -> Result<Box<SelectQuery>, SqlParsingError> {
        self.parse_query().map(Box::new)
    }

    /// Parses a SELECT, a VALUES list or a parenthesized query.
    fn parse_query_term(&mut self) -> Result<SelectQuery, SqlParsingError> {
        let header_comments = self.take_comments();
        let mut query = if self.check_punctuation("(") && self.starts_query(1, true) {
            self.advance();
            let query = self.parse_query()?;
            self.expect_punctuation(")")?;
            query
        } else if self.check_keyword(Keyword::Select) {
            SelectQuery::Simple(self.parse_simple_select()?)
        } else if self.check_keyword(Keyword::Values) {
            SelectQuery::Values(self.parse_values()?)
        } else {
            return Err(self.unexpected("SELECT or VALUES"));
        };
        prepend_header(&mut query, header_comments);
        Ok(query)
    }

    fn parse_set_operator(&mut self) -> Option<SetOperator> {
        let keyword = self.peek().and_then(Lexeme::as_keyword)?;
        if !matches!(keyword, Keyword::Union | Keyword::Intersect | Keyword::Except) {
            return None;
        }
        self.advance();

        let all = if self.check_keyword(Keyword::All) {
            self.advance();
            true
        } else {
            if self.check_keyword(Keyword::Distinct) {
                self.advance();
            }
            false
        };

        Some(match (keyword, all) {
            (Keyword::Union, false) => SetOperator::Union,
            (Keyword::Union, true) => SetOperator::UnionAll,
            (Keyword::Intersect, false) => SetOperator::Intersect,
            (Keyword::Intersect, true) => SetOperator::IntersectAll,
            (_, false) => SetOperator::Except,
            (_, true) => SetOperator::ExceptAll,
        })
    }

    /// Parses a SELECT statement.
    fn parse_simple_select(&mut self) -> Result<SimpleSelectQuery, SqlParsingError> {
        self.expect_keyword(Keyword::Select)?;

        // DISTINCT, DISTINCT ON (...) or ALL
        let distinct = if self.check_keyword(Keyword::Distinct) {
            self.advance();
            if self.check_keyword(Keyword::On) {
                self.advance();
                self.expect_punctuation("(")?;
                let values = self.parse_expression_list()?;
                self.expect_punctuation(")")?;
                Some(Distinct::DistinctOn(values))
            } else {
                Some(Distinct::Distinct)
            }
        } else {
            if self.check_keyword(Keyword::All) {
                self.advance();
            }
            None
        };

        let mut items = vec![];
        loop {
            let value = self.parse_expression(0)?;
            let alias = self.parse_optional_alias()?;
            items.push(SelectItem { value, alias });
            if !self.check_punctuation(",") {
                break;
            }
            self.advance();
        }

        let mut query = SimpleSelectQuery {
            select_clause: SelectClause { distinct, items },
            ..SimpleSelectQuery::default()
        };

        // FROM clause (optional for expressions like SELECT 1+1)
        if self.check_keyword(Keyword::From) {
            self.advance();
            query.from_clause = Some(self.parse_from_clause()?);
        }

        if self.check_keyword(Keyword::Where) {
            self.advance();
            query.where_clause = Some(self.parse_expression(0)?);
        }

        if self.check_keyword(Keyword::Group) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            query.group_by = self.parse_expression_list()?;
        }

        if self.check_keyword(Keyword::Having) {
            self.advance();
            query.having = Some(self.parse_expression(0)?);
        }

        if self.check_keyword(Keyword::Window) {
            self.advance();
            loop {
                let name = self.expect_identifier()?;
                self.expect_keyword(Keyword::As)?;
                let spec = self.parse_window_spec()?;
                query.window.push(WindowDefinition { name, spec });
                if !self.check_punctuation(",") {
                    break;
                }
                self.advance();
            }
        }

        if self.check_keyword(Keyword::Order) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            query.order_by = self.parse_order_by_list()?;
        }

        // LIMIT and OFFSET, in either order
        loop {
            if query.limit.is_none() && self.check_keyword(Keyword::Limit) {
                self.advance();
                query.limit = Some(self.parse_expression(0)?);
            } else if query.offset.is_none() && self.check_keyword(Keyword::Offset) {
                self.advance();
                query.offset = Some(self.parse_expression(0)?);
                if self.check_keyword(Keyword::Row) || self.check_keyword(Keyword::Rows) {
                    self.advance();
                }
            } else {
                break;
            }
        }

        if self.check_keyword(Keyword::For) {
            self.advance();
            query.for_clause = Some(self.parse_lock_mode()?);
        }

        Ok(query)
    }

    fn parse_lock_mode(&mut self) -> Result<LockMode, SqlParsingError> {
        let mode = match self.peek().and_then(Lexeme::as_keyword) {
            Some(Keyword::Update) => {
                self.advance();
                LockMode::Update
            }
            Some(Keyword::Share) => {
                self.advance();
                LockMode::Share
            }
            Some(Keyword::No) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                self.expect_keyword(Keyword::Update)?;
                LockMode::NoKeyUpdate
            }
            Some(Keyword::Key) => {
                self.advance();
                self.expect_keyword(Keyword::Share)?;
                LockMode::KeyShare
            }
            _ => return Err(self.unexpected("UPDATE, SHARE, NO KEY UPDATE or KEY SHARE")),
        };
        Ok(mode)
    }

    /// Parses `WITH [RECURSIVE] name [(cols)] AS [[NOT] MATERIALIZED] (query), ...`.
    fn parse_with_clause(&mut self) -> Result<WithClause, SqlParsingError> {
        self.expect_keyword(Keyword::With)?;
        let recursive = if self.check_keyword(Keyword::Recursive) {
            self.advance();
            true
        } else {
            false
        };

        let mut with = WithClause {
            recursive,
            tables: vec![],
        };
        loop {
            let position = self.position();
            let name = self.expect_identifier()?;
            if name.trim().is_empty() {
                let err = CteError::InvalidName { name };
                return Err(SqlParsingError::new(err.to_string(), self.sql, position));
            }
            if with.get(&name).is_some() {
                let err = CteError::Duplicate { cte_name: name };
                return Err(SqlParsingError::new(err.to_string(), self.sql, position));
            }

            let column_aliases = if self.check_punctuation("(") {
                self.advance();
                let columns = self.parse_identifier_list()?;
                self.expect_punctuation(")")?;
                columns
            } else {
                vec![]
            };

            self.expect_keyword(Keyword::As)?;
            let materialized = if self.check_keyword(Keyword::Materialized) {
                self.advance();
                Some(true)
            } else if self.check_keyword(Keyword::Not) {
                self.advance();
                self.expect_keyword(Keyword::Materialized)?;
                Some(false)
            } else {
                None
            };

            self.expect_punctuation("(")?;
            let query = self.parse_query()?;
            self.expect_punctuation(")")?;

            with.tables.push(CommonTable {
                name,
                column_aliases,
                query,
                materialized,
            });

            if !self.check_punctuation(",") {
                break;
            }
            self.advance();
        }
        Ok(with)
    }

    /// Parses `VALUES (...), (...)`.
    fn parse_values(&mut self) -> Result<ValuesQuery, SqlParsingError> {
        self.expect_keyword(Keyword::Values)?;
        let mut tuples = vec![];
        loop {
            self.expect_punctuation("(")?;
            tuples.push(self.parse_expression_list()?);
            self.expect_punctuation(")")?;
            if !self.check_punctuation(",") {
                break;
            }
            self.advance();
        }
        Ok(ValuesQuery::new(tuples))
    }

    // --- FROM clause ---

    fn parse_from_clause(&mut self) -> Result<FromClause, SqlParsingError> {
        let source = self.parse_source()?;
        let mut joins = vec![];

        while let Some(kind) = self.parse_join_kind()? {
            let lateral = if self.check_keyword(Keyword::Lateral) {
                self.advance();
                true
            } else {
                false
            };
            let source = self.parse_source()?;

            let condition = if self.check_keyword(Keyword::On) {
                self.advance();
                Some(JoinCondition::On(self.parse_expression(0)?))
            } else if self.check_keyword(Keyword::Using) {
                self.advance();
                self.expect_punctuation("(")?;
                let columns = self.parse_identifier_list()?;
                self.expect_punctuation(")")?;
                Some(JoinCondition::Using(columns))
            } else if kind.requires_condition() {
                return Err(SqlParsingError::new(
                    "Expected ON or USING clause",
                    self.sql,
                    self.position(),
                ));
            } else {
                None
            };

            joins.push(JoinClause {
                kind,
                lateral,
                source,
                condition,
            });
        }

        Ok(FromClause { source, joins })
    }

    /// Parses a join introducer, if one follows.
    fn parse_join_kind(&mut self) -> Result<Option<JoinKind>, SqlParsingError> {
        if self.check_punctuation(",") {
            self.advance();
            return Ok(Some(JoinKind::Comma));
        }

        let kind = match self.peek().and_then(Lexeme::as_keyword) {
            Some(Keyword::Join) => {
                self.advance();
                return Ok(Some(JoinKind::Inner));
            }
            Some(Keyword::Inner) => JoinKind::Inner,
            Some(Keyword::Left) => JoinKind::Left,
            Some(Keyword::Right) => JoinKind::Right,
            Some(Keyword::Full) => JoinKind::Full,
            Some(Keyword::Cross) => JoinKind::Cross,
            Some(Keyword::Natural) => JoinKind::Natural,
            _ => return Ok(None),
        };
        self.advance();

        match kind {
            JoinKind::Left | JoinKind::Right | JoinKind::Full
                if self.check_keyword(Keyword::Outer) =>
            {
                self.advance();
            }
            JoinKind::Natural if self.check_keyword(Keyword::Inner) => {
                self.advance();
            }
            _ => {}
        }
        self.expect_keyword(Keyword::Join)?;
        Ok(Some(kind))
    }

    /// Parses a table, derived table or table function with its alias.
    fn parse_source(&mut self) -> Result<SourceExpression, SqlParsingError> {
        let before = self.take_comments();

        let datasource = if self.check_punctuation("(") {
            if !self.starts_query(1, true) {
                return Err(self.unexpected("subquery"));
            }
            self.advance();
            self.enter()?;
            let query = self.parse_subquery()?;
            self.leave();
            self.expect_punctuation(")")?;
            Datasource::Subquery(query)
        } else {
            let mut namespaces = vec![];
            let mut name = self.expect_identifier()?;
            while self.check_punctuation(".") {
                self.advance();
                let next = self.expect_identifier()?;
                namespaces.push(std::mem::replace(&mut name, next));
            }
            if self.check_punctuation("(") {
                Datasource::Function(Box::new(self.parse_function_call(namespaces, name)?))
            } else {
                Datasource::Table(TableSource { namespaces, name })
            }
        };

        let alias = match self.parse_optional_alias()? {
            Some(name) => {
                let columns = if self.check_punctuation("(") {
                    self.advance();
                    let columns = self.parse_identifier_list()?;
                    self.expect_punctuation(")")?;
                    columns
                } else {
                    vec![]
                };
                Some(SourceAlias { name, columns })
            }
            None => None,
        };

        let mut source = SourceExpression::new(datasource);
        source.alias = alias;
        source.add_positioned_comments(CommentPosition::Before, before);
        Ok(source)
    }

    /// Parses an optional alias (`AS name` or just `name`).
    fn parse_optional_alias(&mut self) -> Result<Option<String>, SqlParsingError> {
        if self.check_keyword(Keyword::As) {
            self.advance();
            Ok(Some(self.expect_identifier()?))
        } else if self.peek().is_some_and(is_identifier) {
            Ok(Some(self.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    // --- Lists ---

    /// Parses an ORDER BY list.
    pub(super) fn parse_order_by_list(&mut self) -> Result<Vec<OrderByItem>, SqlParsingError> {
        let mut items = vec![];
        loop {
            let value = self.parse_expression(0)?;
            let direction = if self.check_keyword(Keyword::Asc) {
                self.advance();
                Some(OrderDirection::Asc)
            } else if self.check_keyword(Keyword::Desc) {
                self.advance();
                Some(OrderDirection::Desc)
            } else {
                None
            };
            let nulls = if self.check_keyword(Keyword::Nulls) {
                self.advance();
                if self.check_keyword(Keyword::First) {
                    self.advance();
                    Some(NullsOrder::First)
                } else if self.check_keyword(Keyword::Last) {
                    self.advance();
                    Some(NullsOrder::Last)
                } else {
                    return Err(self.unexpected("FIRST or LAST"));
                }
            } else {
                None
            };

            items.push(OrderByItem {
                value,
                direction,
                nulls,
            });

            if !self.check_punctuation(",") {
                break;
            }
            self.advance();
        }
        Ok(items)
    }

    /// Parses a comma-separated list of expressions.
    pub(super) fn parse_expression_list(
        &mut self,
    ) -> Result<Vec<ValueComponent>, SqlParsingError> {
        let mut values = vec![];
        loop {
            values.push(self.parse_expression(0)?);
            if !self.check_punctuation(",") {
                break;
            }
            self.advance();
        }
        Ok(values)
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> Result<Vec<String>, SqlParsingError> {
        let mut idents = vec![];
        loop {
            idents.push(self.expect_identifier()?);
            if !self.check_punctuation(",") {
                break;
            }
            self.advance();
        }
        Ok(idents)
    }

    // --- Helper methods ---

    /// The SQL text being parsed.
    pub(super) const fn sql(&self) -> &'a str {
        self.sql
    }

    /// Returns the current lexeme.
    pub(super) fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.pos)
    }

    /// Returns the `n`-th lexeme after the current one, skipping comments.
    pub(super) fn peek_nth(&self, n: usize) -> Option<&Lexeme> {
        self.lexemes
            .get(self.pos..)?
            .iter()
            .filter(|l| !l.is_comment())
            .nth(n)
    }

    /// Consumes the current lexeme and moves past any following comments.
    pub(super) fn advance(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.pos).cloned();
        if lexeme.is_some() {
            self.pos += 1;
            self.skip_comments();
        }
        lexeme
    }

    fn skip_comments(&mut self) {
        while let Some(lexeme) = self.lexemes.get(self.pos) {
            if !lexeme.is_comment() {
                break;
            }
            self.pending_comments.push(lexeme.text.clone());
            self.pos += 1;
        }
    }

    /// Takes the comments collected since they were last claimed.
    pub(super) fn take_comments(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_comments)
    }

    /// Byte offset of the current lexeme, or the input length at EOF.
    pub(super) fn position(&self) -> usize {
        self.peek().map_or(self.sql.len(), |l| l.position)
    }

    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek().and_then(Lexeme::as_keyword) == Some(keyword)
    }

    pub(super) fn check_punctuation(&self, text: &str) -> bool {
        self.peek().is_some_and(|l| l.is_punctuation(text))
    }

    pub(super) fn check_operator(&self, text: &str) -> bool {
        self.peek().is_some_and(|l| l.is_operator(text))
    }

    /// Returns true if the lexeme `offset` ahead starts a query, optionally
    /// behind further opening parentheses.
    pub(super) fn starts_query(&self, offset: usize, allow_parens: bool) -> bool {
        let mut n = offset;
        while let Some(lexeme) = self.peek_nth(n) {
            if allow_parens && lexeme.is_punctuation("(") {
                n += 1;
                continue;
            }
            return matches!(
                lexeme.as_keyword(),
                Some(Keyword::Select | Keyword::With | Keyword::Values)
            );
        }
        false
    }

    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), SqlParsingError> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    pub(super) fn expect_punctuation(&mut self, text: &str) -> Result<(), SqlParsingError> {
        if self.check_punctuation(text) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{text}'")))
        }
    }

    /// Expects and returns an identifier; non-reserved keywords qualify.
    pub(super) fn expect_identifier(&mut self) -> Result<String, SqlParsingError> {
        if self.peek().is_some_and(is_identifier) {
            if let Some(lexeme) = self.advance() {
                return Ok(lexeme.text);
            }
        }
        Err(self.unexpected("identifier"))
    }

    fn expect_end(&self) -> Result<(), SqlParsingError> {
        match self.peek() {
            Some(lexeme) => Err(SqlParsingError::unexpected(
                "end of input",
                Some(lexeme),
                self.sql,
            )),
            None => Ok(()),
        }
    }

    /// Builds an "unexpected token" error at the current lexeme.
    pub(super) fn unexpected(&self, expected: &str) -> SqlParsingError {
        SqlParsingError::unexpected(expected, self.peek(), self.sql)
    }

    /// Increments the nesting depth, failing past the configured maximum.
    pub(super) fn enter(&mut self) -> Result<(), SqlParsingError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(SqlParsingError::new(
                format!("Maximum nesting depth of {} exceeded", self.max_depth),
                self.sql,
                self.position(),
            ));
        }
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Returns true for identifiers and non-reserved keywords.
fn is_identifier(lexeme: &Lexeme) -> bool {
    match lexeme.kind {
        LexemeKind::Identifier => true,
        LexemeKind::Keyword(keyword) => !keyword.is_reserved(),
        _ => false,
    }
}

fn prepend_header(query: &mut SelectQuery, mut comments: Vec<String>) {
    if comments.is_empty() {
        return;
    }
    let header = query.header_comments_mut();
    comments.append(header);
    *header = comments;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ValueKind;

    fn parse(sql: &str) -> Result<SelectQuery, SqlParsingError> {
        Parser::new(sql)?.parse_select()
    }

    fn simple(sql: &str) -> SimpleSelectQuery {
        match parse(sql) {
            Ok(SelectQuery::Simple(q)) => q,
            other => panic!("expected simple query, got {other:?}"),
        }
    }

    #[test]
    fn test_simple_select() {
        let query = simple("SELECT id, name FROM users");
        assert_eq!(query.select_clause.items.len(), 2);
        let from = query.from_clause.unwrap();
        assert!(matches!(
            from.source.datasource,
            Datasource::Table(TableSource { ref name, .. }) if name == "users"
        ));
    }

    #[test]
    fn test_select_without_from() {
        let query = simple("SELECT 1 + 1");
        assert!(query.from_clause.is_none());
    }

    #[test]
    fn test_trailing_semicolon() {
        assert!(parse("SELECT 1;").is_ok());
        let err = parse("SELECT 1; SELECT 2").unwrap_err();
        assert!(err.message.contains("expected end of input"));
    }

    #[test]
    fn test_non_reserved_keyword_as_column() {
        let query = simple("SELECT key, rows FROM t");
        let ValueKind::Column(col) = &query.select_clause.items[1].value.kind else {
            panic!("expected column");
        };
        assert_eq!(col.column, "rows");
    }

    #[test]
    fn test_implicit_alias() {
        let query = simple("SELECT a b FROM t u");
        assert_eq!(query.select_clause.items[0].alias.as_deref(), Some("b"));
        assert_eq!(
            query.from_clause.unwrap().source.alias.unwrap().name,
            "u"
        );
    }

    #[test]
    fn test_join_requires_condition() {
        let err = parse("SELECT * FROM a LEFT JOIN b").unwrap_err();
        assert_eq!(err.message, "Expected ON or USING clause");
        assert!(parse("SELECT * FROM a CROSS JOIN b").is_ok());
    }

    #[test]
    fn test_depth_limit() {
        let sql = format!("SELECT {}1{}", "(".repeat(20), ")".repeat(20));
        let err = Parser::new(&sql)
            .unwrap()
            .with_max_depth(10)
            .parse_select()
            .unwrap_err();
        assert_eq!(err.message, "Maximum nesting depth of 10 exceeded");
        assert!(Parser::new(&sql).unwrap().parse_select().is_ok());
    }

    #[test]
    fn test_lex_error_surfaces_as_cause() {
        let err = parse("SELECT 'open").unwrap_err();
        assert_eq!(err.position, 7);
        assert!(err.cause.is_some());
    }
}
