//! Expression grammar (Pratt parsing).

use super::error::SqlParsingError;
use super::parser::Parser;
use super::pratt::{
    infix_binding_power, lexeme_to_binary_op, lexeme_to_unary_op, CAST_BINDING_POWER,
    NEGATED_PREDICATE_BINDING_POWER,
};
use crate::ast::{
    BinaryOperator, CaseExpression, CastSyntax, ColumnReference, CommentPosition, Commentable,
    FrameBound, FrameUnits, FunctionCall, Literal, OverClause, TypeValue, ValueComponent,
    ValueKind, WindowFrame, WindowSpec,
};
use crate::lexer::{Keyword, Lexeme, LexemeKind};

/// Strips the marker from a parameter lexeme: `:id` -> `id`, `$1` -> `1`,
/// `?` -> ``.
fn parameter_name(text: &str) -> String {
    text.get(1..).unwrap_or_default().to_string()
}

impl Parser<'_> {
    /// Parses an expression using Pratt parsing.
    ///
    /// At `min_bp == 0` comments left pending after the expression are
    /// attached to it as `After` comments.
    pub(super) fn parse_expression(
        &mut self,
        min_bp: u8,
    ) -> Result<ValueComponent, SqlParsingError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let Some(lexeme) = self.peek() else {
                break;
            };

            // Postfix cast
            if lexeme.is_operator("::") {
                if CAST_BINDING_POWER < min_bp {
                    break;
                }
                self.advance();
                let data_type = self.parse_data_type()?;
                lhs = ValueComponent::new(ValueKind::Cast {
                    expr: Box::new(lhs),
                    data_type,
                    syntax: CastSyntax::DoubleColon,
                });
                continue;
            }

            // NOT IN, NOT LIKE, NOT ILIKE, NOT BETWEEN
            let negated = lexeme.as_keyword() == Some(Keyword::Not)
                && matches!(
                    self.peek_nth(1).and_then(Lexeme::as_keyword),
                    Some(Keyword::In | Keyword::Like | Keyword::Ilike | Keyword::Between)
                );
            let binding_power = if negated {
                Some(NEGATED_PREDICATE_BINDING_POWER)
            } else {
                infix_binding_power(lexeme)
            };
            let Some((l_bp, r_bp)) = binding_power else {
                break;
            };
            if l_bp < min_bp {
                break;
            }

            if negated {
                self.advance();
            }
            lhs = self.parse_infix(lhs, negated, r_bp)?;
        }

        if min_bp == 0 {
            let after = self.take_comments();
            lhs.add_positioned_comments(CommentPosition::After, after);
        }
        Ok(lhs)
    }

    /// Parses the operator at the cursor and its right-hand side.
    fn parse_infix(
        &mut self,
        lhs: ValueComponent,
        negated: bool,
        r_bp: u8,
    ) -> Result<ValueComponent, SqlParsingError> {
        let Some(operator) = self.advance() else {
            return Err(self.unexpected("operator"));
        };

        match operator.as_keyword() {
            Some(Keyword::Is) => {
                let not = if self.check_keyword(Keyword::Not) {
                    self.advance();
                    true
                } else {
                    false
                };
                if self.check_keyword(Keyword::Distinct) {
                    self.advance();
                    self.expect_keyword(Keyword::From)?;
                    let rhs = self.parse_expression(r_bp)?;
                    let op = if not {
                        BinaryOperator::IsNotDistinctFrom
                    } else {
                        BinaryOperator::IsDistinctFrom
                    };
                    return Ok(lhs.binary(op, rhs));
                }
                if !(self.check_keyword(Keyword::Null)
                    || self.check_keyword(Keyword::True)
                    || self.check_keyword(Keyword::False))
                {
                    return Err(self.unexpected("NULL, TRUE, FALSE or DISTINCT FROM"));
                }
                let rhs = self.parse_prefix()?;
                let op = if not {
                    BinaryOperator::IsNot
                } else {
                    BinaryOperator::Is
                };
                Ok(lhs.binary(op, rhs))
            }
            Some(Keyword::In) => {
                let rhs = self.parse_in_list()?;
                let op = if negated {
                    BinaryOperator::NotIn
                } else {
                    BinaryOperator::In
                };
                Ok(lhs.binary(op, rhs))
            }
            Some(Keyword::Between) => {
                let low = self.parse_expression(r_bp)?;
                self.expect_keyword(Keyword::And)?;
                let high = self.parse_expression(r_bp)?;
                Ok(ValueComponent::new(ValueKind::Between {
                    expr: Box::new(lhs),
                    low: Box::new(low),
                    high: Box::new(high),
                    negated,
                }))
            }
            _ => {
                let op = match (lexeme_to_binary_op(&operator), negated) {
                    (Some(BinaryOperator::Like), true) => BinaryOperator::NotLike,
                    (Some(BinaryOperator::ILike), true) => BinaryOperator::NotILike,
                    (Some(op), false) => op,
                    _ => {
                        return Err(SqlParsingError::unexpected(
                            "operator",
                            Some(&operator),
                            self.sql(),
                        ))
                    }
                };
                let rhs = self.parse_expression(r_bp)?;
                Ok(lhs.binary(op, rhs))
            }
        }
    }

    /// Parses the right-hand side of IN: a subquery or a value list.
    fn parse_in_list(&mut self) -> Result<ValueComponent, SqlParsingError> {
        self.expect_punctuation("(")?;
        let rhs = if self.starts_query(0, false) {
            ValueKind::Subquery(self.parse_subquery()?)
        } else {
            ValueKind::Tuple(self.parse_expression_list()?)
        };
        self.expect_punctuation(")")?;
        Ok(ValueComponent::new(rhs))
    }

    /// Parses a prefix expression, claiming pending comments as `Before`.
    ///
    /// Each prefix counts as one nesting level: parentheses, unary operands,
    /// CASE branches and call arguments all recurse through here.
    fn parse_prefix(&mut self) -> Result<ValueComponent, SqlParsingError> {
        self.enter()?;
        let before = self.take_comments();

        let unary = self.peek().and_then(lexeme_to_unary_op);
        let mut value = match unary {
            Some((op, bp)) => {
                self.advance();
                let operand = self.parse_expression(bp)?;
                ValueComponent::new(ValueKind::Unary {
                    op,
                    operand: Box::new(operand),
                })
            }
            None => self.parse_primary()?,
        };

        value.add_positioned_comments(CommentPosition::Before, before);
        self.leave();
        Ok(value)
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<ValueComponent, SqlParsingError> {
        let Some(lexeme) = self.peek().cloned() else {
            return Err(self.unexpected("expression"));
        };

        let kind = match lexeme.kind {
            LexemeKind::NumericLiteral => {
                self.advance();
                ValueKind::Literal(Literal::Number(lexeme.text))
            }
            LexemeKind::StringLiteral => {
                self.advance();
                ValueKind::Literal(Literal::String(lexeme.text))
            }
            LexemeKind::Parameter => {
                self.advance();
                ValueKind::Parameter {
                    name: parameter_name(&lexeme.text),
                    value: None,
                }
            }
            LexemeKind::Keyword(Keyword::True) => {
                self.advance();
                ValueKind::Literal(Literal::Boolean(true))
            }
            LexemeKind::Keyword(Keyword::False) => {
                self.advance();
                ValueKind::Literal(Literal::Boolean(false))
            }
            LexemeKind::Keyword(Keyword::Null) => {
                self.advance();
                ValueKind::Literal(Literal::Null)
            }
            LexemeKind::Keyword(Keyword::Case) => self.parse_case_expression()?,
            LexemeKind::Keyword(Keyword::Cast) => self.parse_cast_expression()?,
            LexemeKind::Keyword(Keyword::Exists) => {
                self.advance();
                self.expect_punctuation("(")?;
                let query = self.parse_subquery()?;
                self.expect_punctuation(")")?;
                ValueKind::Exists(query)
            }
            LexemeKind::Operator if lexeme.text == "*" => {
                self.advance();
                ValueKind::Column(ColumnReference::new("*"))
            }
            LexemeKind::Punctuation if lexeme.text == "(" => self.parse_parenthesized()?,
            LexemeKind::Identifier => {
                self.advance();
                self.parse_name_expression(lexeme.text)?
            }
            // LEFT(...) and RIGHT(...) are functions despite being reserved
            LexemeKind::Keyword(Keyword::Left | Keyword::Right)
                if self.peek_nth(1).is_some_and(|l| l.is_punctuation("(")) =>
            {
                self.advance();
                self.parse_name_expression(lexeme.text)?
            }
            LexemeKind::Keyword(keyword) if !keyword.is_reserved() => {
                self.advance();
                self.parse_name_expression(lexeme.text)?
            }
            _ => return Err(self.unexpected("expression")),
        };

        Ok(ValueComponent::new(kind))
    }

    /// Parses what follows a name: qualification, `t.*` or a call.
    fn parse_name_expression(&mut self, first: String) -> Result<ValueKind, SqlParsingError> {
        let mut namespaces = vec![];
        let mut name = first;

        while self.check_punctuation(".") {
            self.advance();
            if self.check_operator("*") {
                self.advance();
                namespaces.push(name);
                return Ok(ValueKind::Column(ColumnReference {
                    namespaces,
                    column: String::from("*"),
                }));
            }
            let next = self.expect_identifier()?;
            namespaces.push(std::mem::replace(&mut name, next));
        }

        if self.check_punctuation("(") {
            let call = self.parse_function_call(namespaces, name)?;
            return Ok(ValueKind::Function(Box::new(call)));
        }

        Ok(ValueKind::Column(ColumnReference {
            namespaces,
            column: name,
        }))
    }

    /// Parses `( ... )`: a subquery, a tuple or a parenthesized expression.
    fn parse_parenthesized(&mut self) -> Result<ValueKind, SqlParsingError> {
        self.expect_punctuation("(")?;

        if self.starts_query(0, false) {
            let query = self.parse_subquery()?;
            self.expect_punctuation(")")?;
            return Ok(ValueKind::Subquery(query));
        }

        let first = self.parse_expression(0)?;
        if self.check_punctuation(",") {
            let mut items = vec![first];
            while self.check_punctuation(",") {
                self.advance();
                items.push(self.parse_expression(0)?);
            }
            self.expect_punctuation(")")?;
            return Ok(ValueKind::Tuple(items));
        }

        self.expect_punctuation(")")?;
        Ok(ValueKind::Paren(Box::new(first)))
    }

    /// Parses a function call's argument list and OVER clause.
    pub(super) fn parse_function_call(
        &mut self,
        namespaces: Vec<String>,
        name: String,
    ) -> Result<FunctionCall, SqlParsingError> {
        self.expect_punctuation("(")?;

        let distinct = if self.check_keyword(Keyword::Distinct) {
            self.advance();
            true
        } else {
            if self.check_keyword(Keyword::All) {
                self.advance();
            }
            false
        };

        let args = if self.check_punctuation(")") {
            vec![]
        } else {
            self.parse_expression_list()?
        };
        self.expect_punctuation(")")?;

        let over = if self.check_keyword(Keyword::Over) {
            self.advance();
            if self.check_punctuation("(") {
                Some(OverClause::Spec(self.parse_window_spec()?))
            } else {
                Some(OverClause::Named(self.expect_identifier()?))
            }
        } else {
            None
        };

        Ok(FunctionCall {
            namespaces,
            name,
            args,
            distinct,
            over,
        })
    }

    /// Parses `( [base] [PARTITION BY ...] [ORDER BY ...] [frame] )`.
    pub(super) fn parse_window_spec(&mut self) -> Result<WindowSpec, SqlParsingError> {
        self.expect_punctuation("(")?;
        let mut spec = WindowSpec::default();

        if self
            .peek()
            .is_some_and(|l| l.kind == LexemeKind::Identifier)
        {
            spec.base = Some(self.expect_identifier()?);
        }

        if self.check_keyword(Keyword::Partition) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            spec.partition_by = self.parse_expression_list()?;
        }

        if self.check_keyword(Keyword::Order) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            spec.order_by = self.parse_order_by_list()?;
        }

        let units = match self.peek().and_then(Lexeme::as_keyword) {
            Some(Keyword::Rows) => Some(FrameUnits::Rows),
            Some(Keyword::Range) => Some(FrameUnits::Range),
            Some(Keyword::Groups) => Some(FrameUnits::Groups),
            _ => None,
        };
        if let Some(units) = units {
            self.advance();
            spec.frame = Some(if self.check_keyword(Keyword::Between) {
                self.advance();
                let start = self.parse_frame_bound()?;
                self.expect_keyword(Keyword::And)?;
                let end = self.parse_frame_bound()?;
                WindowFrame {
                    units,
                    start,
                    end: Some(end),
                }
            } else {
                WindowFrame {
                    units,
                    start: self.parse_frame_bound()?,
                    end: None,
                }
            });
        }

        self.expect_punctuation(")")?;
        Ok(spec)
    }

    fn parse_frame_bound(&mut self) -> Result<FrameBound, SqlParsingError> {
        if self.check_keyword(Keyword::Unbounded) {
            self.advance();
            return if self.check_keyword(Keyword::Preceding) {
                self.advance();
                Ok(FrameBound::UnboundedPreceding)
            } else if self.check_keyword(Keyword::Following) {
                self.advance();
                Ok(FrameBound::UnboundedFollowing)
            } else {
                Err(self.unexpected("PRECEDING or FOLLOWING"))
            };
        }

        if self.check_keyword(Keyword::Current) {
            self.advance();
            self.expect_keyword(Keyword::Row)?;
            return Ok(FrameBound::CurrentRow);
        }

        let offset = Box::new(self.parse_expression(0)?);
        if self.check_keyword(Keyword::Preceding) {
            self.advance();
            Ok(FrameBound::Preceding(offset))
        } else if self.check_keyword(Keyword::Following) {
            self.advance();
            Ok(FrameBound::Following(offset))
        } else {
            Err(self.unexpected("PRECEDING or FOLLOWING"))
        }
    }

    /// Parses a CASE expression.
    fn parse_case_expression(&mut self) -> Result<ValueKind, SqlParsingError> {
        self.expect_keyword(Keyword::Case)?;

        // Check for simple CASE (CASE expr WHEN ...)
        let operand = if self.check_keyword(Keyword::When) || self.check_keyword(Keyword::End) {
            None
        } else {
            Some(Box::new(self.parse_expression(0)?))
        };

        // Parse WHEN/THEN clauses
        let mut when_then = vec![];
        while self.check_keyword(Keyword::When) {
            self.advance();
            let condition = self.parse_expression(0)?;
            self.expect_keyword(Keyword::Then)?;
            let value = self.parse_expression(0)?;
            when_then.push((condition, value));
        }
        if when_then.is_empty() {
            return Err(self.unexpected("WHEN"));
        }

        // Parse ELSE clause
        let else_value = if self.check_keyword(Keyword::Else) {
            self.advance();
            Some(Box::new(self.parse_expression(0)?))
        } else {
            None
        };

        self.expect_keyword(Keyword::End)?;

        Ok(ValueKind::Case(Box::new(CaseExpression {
            operand,
            when_then,
            else_value,
        })))
    }

    /// Parses a CAST expression.
    fn parse_cast_expression(&mut self) -> Result<ValueKind, SqlParsingError> {
        self.expect_keyword(Keyword::Cast)?;
        self.expect_punctuation("(")?;
        let expr = self.parse_expression(0)?;
        self.expect_keyword(Keyword::As)?;
        let data_type = self.parse_data_type()?;
        self.expect_punctuation(")")?;

        Ok(ValueKind::Cast {
            expr: Box::new(expr),
            data_type,
            syntax: CastSyntax::Function,
        })
    }

    /// Parses a data type: a name, optionally two words, with modifiers.
    fn parse_data_type(&mut self) -> Result<TypeValue, SqlParsingError> {
        let mut name = self.expect_identifier()?;

        let second_word = match name.to_ascii_lowercase().as_str() {
            "double" => Some("precision"),
            "character" | "char" | "bit" => Some("varying"),
            _ => None,
        };
        if let Some(word) = second_word {
            if self
                .peek()
                .is_some_and(|l| l.kind == LexemeKind::Identifier && l.text.eq_ignore_ascii_case(word))
            {
                if let Some(lexeme) = self.advance() {
                    name = format!("{name} {}", lexeme.text);
                }
            }
        }

        let mut args = vec![];
        if self.check_punctuation("(") {
            self.advance();
            loop {
                match self.peek() {
                    Some(l) if l.kind == LexemeKind::NumericLiteral => {
                        if let Some(lexeme) = self.advance() {
                            args.push(lexeme.text);
                        }
                    }
                    _ => args.push(self.expect_identifier()?),
                }
                if !self.check_punctuation(",") {
                    break;
                }
                self.advance();
            }
            self.expect_punctuation(")")?;
        }

        Ok(TypeValue { name, args })
    }
}
