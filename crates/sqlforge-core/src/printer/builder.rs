//! Lowers an AST into a print-token tree.

use super::token::{ContainerTag, SqlPrintToken};
use crate::ast::{
    BinaryOperator, BinarySelectQuery, CaseExpression, CastSyntax, ColumnReference,
    CommentPosition, Comments, CommonTable, Datasource, Distinct, FrameBound, FromClause,
    FunctionCall, JoinClause, JoinCondition, JoinKind, Literal, OrderByItem, OverClause,
    SelectClause, SelectItem, SelectQuery, SimpleSelectQuery, SourceExpression, TypeValue,
    UnaryOperator, ValueComponent, ValueKind, ValuesQuery, WindowFrame, WindowSpec, WithClause,
};

type Tokens = Vec<SqlPrintToken>;

/// Lowers `query` into a print-token tree.
///
/// The tree carries no style decisions: keywords are lowercase, identifiers
/// are unquoted and parameters unnumbered.
#[must_use]
pub fn to_print_tokens(query: &SelectQuery) -> SqlPrintToken {
    query_tokens(query)
}

fn query_tokens(query: &SelectQuery) -> SqlPrintToken {
    match query {
        SelectQuery::Simple(simple) => simple_query(simple),
        SelectQuery::Binary(binary) => binary_query(binary),
        SelectQuery::Values(values) => values_query(values),
    }
}

fn keyword(text: &str) -> SqlPrintToken {
    SqlPrintToken::keyword(text.to_ascii_lowercase())
}

// --- Comments ---

fn header(header_comments: &[String], comments: &Comments) -> Vec<String> {
    let mut all = header_comments.to_vec();
    all.extend(comments.leading());
    all
}

fn leading_comments(out: &mut Tokens, comments: Vec<String>) {
    if comments.is_empty() {
        return;
    }
    let mut block = vec![];
    for comment in comments {
        block.push(SqlPrintToken::comment(comment));
        block.push(SqlPrintToken::line_break());
    }
    out.push(SqlPrintToken::container(ContainerTag::CommentBlock, block));
}

fn trailing_comments(out: &mut Tokens, comments: Vec<String>) {
    if comments.is_empty() {
        return;
    }
    let mut block = vec![];
    for comment in comments {
        block.push(SqlPrintToken::line_break());
        block.push(SqlPrintToken::comment(comment));
    }
    out.push(SqlPrintToken::container(ContainerTag::CommentBlock, block));
}

// --- Queries ---

fn simple_query(query: &SimpleSelectQuery) -> SqlPrintToken {
    let mut out = vec![];
    leading_comments(&mut out, header(&query.header_comments, &query.comments));

    if let Some(with) = &query.with_clause {
        out.push(with_clause(with));
        out.push(SqlPrintToken::line_break());
    }

    out.push(select_clause(&query.select_clause));

    if let Some(from) = &query.from_clause {
        out.push(SqlPrintToken::line_break());
        out.push(from_clause(from));
    }

    if let Some(predicate) = &query.where_clause {
        out.push(SqlPrintToken::line_break());
        out.push(clause(
            ContainerTag::WhereClause,
            "where",
            ContainerTag::WhereBody,
            value_tokens(predicate),
        ));
    }

    if !query.group_by.is_empty() {
        out.push(SqlPrintToken::line_break());
        out.push(clause(
            ContainerTag::GroupByClause,
            "group by",
            ContainerTag::GroupByBody,
            value_list(&query.group_by),
        ));
    }

    if let Some(having) = &query.having {
        out.push(SqlPrintToken::line_break());
        out.push(clause(
            ContainerTag::HavingClause,
            "having",
            ContainerTag::HavingBody,
            value_tokens(having),
        ));
    }

    if !query.window.is_empty() {
        let mut body = vec![];
        for (i, definition) in query.window.iter().enumerate() {
            if i > 0 {
                body.push(SqlPrintToken::comma());
            }
            body.push(SqlPrintToken::identifier(&definition.name));
            body.push(SqlPrintToken::space());
            body.push(keyword("as"));
            body.push(SqlPrintToken::space());
            body.push(window_spec(&definition.spec));
        }
        out.push(SqlPrintToken::line_break());
        out.push(clause(
            ContainerTag::WindowClause,
            "window",
            ContainerTag::WindowBody,
            body,
        ));
    }

    if !query.order_by.is_empty() {
        out.push(SqlPrintToken::line_break());
        out.push(clause(
            ContainerTag::OrderByClause,
            "order by",
            ContainerTag::OrderByBody,
            order_by_list(&query.order_by),
        ));
    }

    if let Some(limit) = &query.limit {
        out.push(SqlPrintToken::line_break());
        out.push(inline_clause(ContainerTag::LimitClause, "limit", limit));
    }

    if let Some(offset) = &query.offset {
        out.push(SqlPrintToken::line_break());
        out.push(inline_clause(ContainerTag::OffsetClause, "offset", offset));
    }

    if let Some(lock) = query.for_clause {
        out.push(SqlPrintToken::line_break());
        out.push(SqlPrintToken::container(
            ContainerTag::ForClause,
            vec![keyword(lock.as_str())],
        ));
    }

    trailing_comments(&mut out, query.comments.get_positioned(CommentPosition::After));
    SqlPrintToken::container(ContainerTag::SimpleSelectQuery, out)
}

fn binary_query(query: &BinarySelectQuery) -> SqlPrintToken {
    let mut out = vec![];
    leading_comments(&mut out, header(&query.header_comments, &query.comments));

    if query.left.has_trailing_clauses() {
        subquery(&mut out, &query.left);
    } else {
        out.push(query_tokens(&query.left));
    }
    out.push(SqlPrintToken::line_break());
    out.push(keyword(query.operator.as_str()));
    out.push(SqlPrintToken::line_break());

    // Set operations are left associative; a nested right-hand operation
    // or a right-hand WITH needs its own parentheses.
    if matches!(*query.right, SelectQuery::Binary(_)) || query.right.has_with_clause() {
        subquery(&mut out, &query.right);
    } else {
        out.push(query_tokens(&query.right));
    }

    trailing_comments(&mut out, query.comments.get_positioned(CommentPosition::After));
    SqlPrintToken::container(ContainerTag::BinaryQuery, out)
}

fn values_query(query: &ValuesQuery) -> SqlPrintToken {
    let mut out = vec![];
    leading_comments(&mut out, header(&query.header_comments, &query.comments));

    let mut body = vec![];
    for (i, tuple) in query.tuples.iter().enumerate() {
        if i > 0 {
            body.push(SqlPrintToken::comma());
        }
        body.push(tuple_tokens(tuple));
    }
    out.push(keyword("values"));
    out.push(SqlPrintToken::container(ContainerTag::ValuesBody, body));

    trailing_comments(&mut out, query.comments.get_positioned(CommentPosition::After));
    SqlPrintToken::container(ContainerTag::ValuesQuery, out)
}

fn with_clause(with: &WithClause) -> SqlPrintToken {
    let mut out = vec![keyword("with")];
    if with.recursive {
        out.push(SqlPrintToken::space());
        out.push(keyword("recursive"));
    }

    let mut body = vec![];
    for (i, table) in with.tables.iter().enumerate() {
        if i > 0 {
            body.push(SqlPrintToken::comma());
        }
        body.push(common_table(table));
    }
    out.push(SqlPrintToken::container(ContainerTag::WithClauseBody, body));
    SqlPrintToken::container(ContainerTag::WithClause, out)
}

fn common_table(table: &CommonTable) -> SqlPrintToken {
    let mut out = vec![SqlPrintToken::identifier(&table.name)];
    if !table.column_aliases.is_empty() {
        out.push(identifier_tuple(&table.column_aliases));
    }
    out.push(SqlPrintToken::space());
    out.push(keyword("as"));
    out.push(SqlPrintToken::space());
    match table.materialized {
        Some(true) => {
            out.push(keyword("materialized"));
            out.push(SqlPrintToken::space());
        }
        Some(false) => {
            out.push(keyword("not materialized"));
            out.push(SqlPrintToken::space());
        }
        None => {}
    }
    out.push(SqlPrintToken::raw("("));
    out.push(SqlPrintToken::container(
        ContainerTag::CommonTableBody,
        vec![query_tokens(&table.query)],
    ));
    out.push(SqlPrintToken::raw(")"));
    SqlPrintToken::container(ContainerTag::CommonTable, out)
}

// --- Clauses ---

fn clause(tag: ContainerTag, name: &str, body_tag: ContainerTag, body: Tokens) -> SqlPrintToken {
    SqlPrintToken::container(
        tag,
        vec![keyword(name), SqlPrintToken::container(body_tag, body)],
    )
}

fn inline_clause(tag: ContainerTag, name: &str, value: &ValueComponent) -> SqlPrintToken {
    let mut out = vec![keyword(name), SqlPrintToken::space()];
    push_value(&mut out, value);
    SqlPrintToken::container(tag, out)
}

fn select_clause(select: &SelectClause) -> SqlPrintToken {
    let mut out = vec![keyword("select")];
    match &select.distinct {
        Some(Distinct::Distinct) => {
            out.push(SqlPrintToken::space());
            out.push(keyword("distinct"));
        }
        Some(Distinct::DistinctOn(values)) => {
            out.push(SqlPrintToken::space());
            out.push(keyword("distinct on"));
            out.push(SqlPrintToken::space());
            out.push(tuple_tokens(values));
        }
        None => {}
    }

    let mut items = vec![];
    for (i, item) in select.items.iter().enumerate() {
        if i > 0 {
            items.push(SqlPrintToken::comma());
        }
        select_item(&mut items, item);
    }
    out.push(SqlPrintToken::container(ContainerTag::SelectItems, items));
    SqlPrintToken::container(ContainerTag::SelectClause, out)
}

fn select_item(out: &mut Tokens, item: &SelectItem) {
    push_value(out, &item.value);
    if let Some(alias) = &item.alias {
        push_alias(out, alias);
    }
}

fn push_alias(out: &mut Tokens, alias: &str) {
    out.push(SqlPrintToken::space());
    out.push(keyword("as"));
    out.push(SqlPrintToken::space());
    out.push(SqlPrintToken::identifier(alias));
}

fn from_clause(from: &FromClause) -> SqlPrintToken {
    let mut body = vec![];
    source_tokens(&mut body, &from.source);
    for join in &from.joins {
        if join.kind != JoinKind::Comma {
            body.push(SqlPrintToken::line_break());
        }
        body.push(join_clause(join));
    }
    clause(ContainerTag::FromClause, "from", ContainerTag::FromBody, body)
}

fn join_clause(join: &JoinClause) -> SqlPrintToken {
    let mut out = vec![];
    if join.kind == JoinKind::Comma {
        out.push(SqlPrintToken::comma());
    } else {
        out.push(keyword(join.kind.as_str()));
        out.push(SqlPrintToken::space());
    }
    if join.lateral {
        out.push(keyword("lateral"));
        out.push(SqlPrintToken::space());
    }
    source_tokens(&mut out, &join.source);

    match &join.condition {
        Some(JoinCondition::On(predicate)) => {
            out.push(SqlPrintToken::space());
            out.push(keyword("on"));
            out.push(SqlPrintToken::space());
            out.push(SqlPrintToken::container(
                ContainerTag::JoinCondition,
                value_tokens(predicate),
            ));
        }
        Some(JoinCondition::Using(columns)) => {
            out.push(SqlPrintToken::space());
            out.push(keyword("using"));
            out.push(SqlPrintToken::space());
            out.push(identifier_tuple(columns));
        }
        None => {}
    }
    SqlPrintToken::container(ContainerTag::JoinClause, out)
}

fn source_tokens(out: &mut Tokens, source: &SourceExpression) {
    leading_comments(out, source.comments.leading());
    match &source.datasource {
        Datasource::Table(table) => {
            for namespace in &table.namespaces {
                out.push(SqlPrintToken::identifier(namespace));
                out.push(SqlPrintToken::raw("."));
            }
            out.push(SqlPrintToken::identifier(&table.name));
        }
        Datasource::Subquery(query) => subquery(out, query),
        Datasource::Function(function) => function_tokens(out, function),
    }
    if let Some(alias) = &source.alias {
        push_alias(out, &alias.name);
        if !alias.columns.is_empty() {
            out.push(identifier_tuple(&alias.columns));
        }
    }
    trailing_comments(out, source.comments.get_positioned(CommentPosition::After));
}

fn order_by_list(items: &[OrderByItem]) -> Tokens {
    let mut out = vec![];
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(SqlPrintToken::comma());
        }
        push_value(&mut out, &item.value);
        if let Some(direction) = item.direction {
            out.push(SqlPrintToken::space());
            out.push(keyword(direction.as_str()));
        }
        if let Some(nulls) = item.nulls {
            out.push(SqlPrintToken::space());
            out.push(keyword(nulls.as_str()));
        }
    }
    out
}

// --- Values ---

fn value_tokens(value: &ValueComponent) -> Tokens {
    let mut out = vec![];
    push_value(&mut out, value);
    out
}

fn value_list(values: &[ValueComponent]) -> Tokens {
    let mut out = vec![];
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(SqlPrintToken::comma());
        }
        push_value(&mut out, value);
    }
    out
}

fn tuple_tokens(values: &[ValueComponent]) -> SqlPrintToken {
    let mut out = vec![SqlPrintToken::raw("(")];
    out.extend(value_list(values));
    out.push(SqlPrintToken::raw(")"));
    SqlPrintToken::container(ContainerTag::TupleItems, out)
}

fn identifier_tuple(names: &[String]) -> SqlPrintToken {
    let mut out = vec![SqlPrintToken::raw("(")];
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push(SqlPrintToken::comma());
        }
        out.push(SqlPrintToken::identifier(name));
    }
    out.push(SqlPrintToken::raw(")"));
    SqlPrintToken::container(ContainerTag::TupleItems, out)
}

fn subquery(out: &mut Tokens, query: &SelectQuery) {
    out.push(SqlPrintToken::raw("("));
    out.push(SqlPrintToken::container(
        ContainerTag::SubqueryBody,
        vec![query_tokens(query)],
    ));
    out.push(SqlPrintToken::raw(")"));
}

/// Left binding power of a binary operator, matching the parser's table.
const fn precedence(op: BinaryOperator) -> u8 {
    match op {
        BinaryOperator::Or => 1,
        BinaryOperator::And => 3,
        BinaryOperator::Is
        | BinaryOperator::IsNot
        | BinaryOperator::IsDistinctFrom
        | BinaryOperator::IsNotDistinctFrom => 7,
        BinaryOperator::Eq
        | BinaryOperator::NotEq
        | BinaryOperator::Lt
        | BinaryOperator::LtEq
        | BinaryOperator::Gt
        | BinaryOperator::GtEq => 9,
        BinaryOperator::Like
        | BinaryOperator::NotLike
        | BinaryOperator::ILike
        | BinaryOperator::NotILike
        | BinaryOperator::In
        | BinaryOperator::NotIn => 11,
        BinaryOperator::Concat
        | BinaryOperator::BitAnd
        | BinaryOperator::BitOr
        | BinaryOperator::LeftShift
        | BinaryOperator::RightShift
        | BinaryOperator::JsonGet
        | BinaryOperator::JsonGetText => 13,
        BinaryOperator::Add | BinaryOperator::Sub => 15,
        BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => 17,
        BinaryOperator::Pow => 19,
    }
}

/// Pushes `value`, parenthesized when it is a binary expression binding
/// looser than `min_precedence`.
fn push_operand(out: &mut Tokens, value: &ValueComponent, min_precedence: u8) {
    let needs_parens = match &value.kind {
        ValueKind::Binary { op, .. } => precedence(*op) < min_precedence,
        ValueKind::Between { .. } => min_precedence > 11,
        _ => false,
    };
    if needs_parens {
        let inner = value_tokens(value);
        let mut paren = vec![SqlPrintToken::raw("(")];
        paren.extend(inner);
        paren.push(SqlPrintToken::raw(")"));
        out.push(SqlPrintToken::container(ContainerTag::ParenExpression, paren));
    } else {
        push_value(out, value);
    }
}

fn push_value(out: &mut Tokens, value: &ValueComponent) {
    leading_comments(out, value.comments.leading());

    match &value.kind {
        ValueKind::Column(column) => column_tokens(out, column),
        ValueKind::Literal(literal) => out.push(literal_token(literal)),
        ValueKind::Binary { left, op, right } => {
            let level = precedence(*op);
            push_operand(out, left, level);
            let text = if op.is_keyword() {
                op.as_str().to_ascii_lowercase()
            } else {
                op.as_str().to_string()
            };
            out.push(SqlPrintToken::operator(text));
            push_operand(out, right, level + 1);
        }
        ValueKind::Unary { op, operand } => match op {
            UnaryOperator::Not => {
                out.push(keyword("not"));
                out.push(SqlPrintToken::space());
                push_operand(out, operand, 5);
            }
            UnaryOperator::Neg | UnaryOperator::Plus | UnaryOperator::BitNot => {
                out.push(SqlPrintToken::raw(op.as_str()));
                // `- -1` must not collapse into a line comment
                if matches!(
                    operand.kind,
                    ValueKind::Unary {
                        op: UnaryOperator::Neg | UnaryOperator::Plus,
                        ..
                    }
                ) {
                    out.push(SqlPrintToken::space());
                }
                push_operand(out, operand, u8::MAX);
            }
        },
        ValueKind::Function(function) => function_tokens(out, function),
        ValueKind::Case(case) => out.push(case_tokens(case)),
        ValueKind::Tuple(items) => out.push(tuple_tokens(items)),
        ValueKind::Subquery(query) => subquery(out, query),
        ValueKind::Parameter { name, value } => {
            out.push(SqlPrintToken::parameter(name.as_str(), value.clone()));
        }
        ValueKind::Paren(inner) => {
            let mut paren = vec![SqlPrintToken::raw("(")];
            push_value(&mut paren, inner);
            paren.push(SqlPrintToken::raw(")"));
            out.push(SqlPrintToken::container(ContainerTag::ParenExpression, paren));
        }
        ValueKind::Between {
            expr,
            low,
            high,
            negated,
        } => {
            let mut between = vec![];
            push_operand(&mut between, expr, 12);
            between.push(SqlPrintToken::space());
            between.push(keyword(if *negated { "not between" } else { "between" }));
            between.push(SqlPrintToken::space());
            push_operand(&mut between, low, 12);
            between.push(SqlPrintToken::space());
            between.push(keyword("and"));
            between.push(SqlPrintToken::space());
            push_operand(&mut between, high, 12);
            out.push(SqlPrintToken::container(
                ContainerTag::BetweenExpression,
                between,
            ));
        }
        ValueKind::Cast {
            expr,
            data_type,
            syntax,
        } => match syntax {
            CastSyntax::Function => {
                out.push(keyword("cast"));
                out.push(SqlPrintToken::raw("("));
                push_value(out, expr);
                out.push(SqlPrintToken::space());
                out.push(keyword("as"));
                out.push(SqlPrintToken::space());
                type_tokens(out, data_type);
                out.push(SqlPrintToken::raw(")"));
            }
            CastSyntax::DoubleColon => {
                push_operand(out, expr, u8::MAX);
                out.push(SqlPrintToken::raw("::"));
                type_tokens(out, data_type);
            }
        },
        ValueKind::Exists(query) => {
            out.push(keyword("exists"));
            out.push(SqlPrintToken::space());
            subquery(out, query);
        }
    }

    trailing_comments(out, value.comments.get_positioned(CommentPosition::After));
}

fn column_tokens(out: &mut Tokens, column: &ColumnReference) {
    for namespace in &column.namespaces {
        out.push(SqlPrintToken::identifier(namespace));
        out.push(SqlPrintToken::raw("."));
    }
    if column.is_wildcard() {
        out.push(SqlPrintToken::raw("*"));
    } else {
        out.push(SqlPrintToken::identifier(&column.column));
    }
}

fn literal_token(literal: &Literal) -> SqlPrintToken {
    match literal {
        Literal::Number(text) => SqlPrintToken::value(text.as_str()),
        Literal::String(text) => SqlPrintToken::value(format!("'{}'", text.replace('\'', "''"))),
        Literal::Boolean(true) => keyword("true"),
        Literal::Boolean(false) => keyword("false"),
        Literal::Null => keyword("null"),
    }
}

fn type_tokens(out: &mut Tokens, data_type: &TypeValue) {
    out.push(keyword(&data_type.name));
    if !data_type.args.is_empty() {
        out.push(SqlPrintToken::raw(format!("({})", data_type.args.join(", "))));
    }
}

fn function_tokens(out: &mut Tokens, function: &FunctionCall) {
    let mut name = String::new();
    for namespace in &function.namespaces {
        name.push_str(namespace);
        name.push('.');
    }
    name.push_str(&function.name);
    out.push(SqlPrintToken::raw(name));

    let mut args = vec![SqlPrintToken::raw("(")];
    if function.distinct {
        args.push(keyword("distinct"));
        args.push(SqlPrintToken::space());
    }
    args.extend(value_list(&function.args));
    args.push(SqlPrintToken::raw(")"));
    out.push(SqlPrintToken::container(ContainerTag::FunctionArgs, args));

    match &function.over {
        Some(OverClause::Named(window)) => {
            out.push(SqlPrintToken::space());
            out.push(keyword("over"));
            out.push(SqlPrintToken::space());
            out.push(SqlPrintToken::identifier(window));
        }
        Some(OverClause::Spec(spec)) => {
            out.push(SqlPrintToken::space());
            out.push(keyword("over"));
            out.push(SqlPrintToken::space());
            out.push(window_spec(spec));
        }
        None => {}
    }
}

fn window_spec(spec: &WindowSpec) -> SqlPrintToken {
    let mut parts: Vec<Tokens> = vec![];
    if let Some(base) = &spec.base {
        parts.push(vec![SqlPrintToken::identifier(base)]);
    }
    if !spec.partition_by.is_empty() {
        let mut part = vec![keyword("partition by"), SqlPrintToken::space()];
        part.extend(value_list(&spec.partition_by));
        parts.push(part);
    }
    if !spec.order_by.is_empty() {
        let mut part = vec![keyword("order by"), SqlPrintToken::space()];
        part.extend(order_by_list(&spec.order_by));
        parts.push(part);
    }
    if let Some(frame) = &spec.frame {
        parts.push(frame_tokens(frame));
    }

    let mut out = vec![SqlPrintToken::raw("(")];
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push(SqlPrintToken::space());
        }
        out.extend(part);
    }
    out.push(SqlPrintToken::raw(")"));
    SqlPrintToken::container(ContainerTag::WindowSpec, out)
}

fn frame_tokens(frame: &WindowFrame) -> Tokens {
    let mut out = vec![keyword(frame.units.as_str()), SqlPrintToken::space()];
    match &frame.end {
        Some(end) => {
            out.push(keyword("between"));
            out.push(SqlPrintToken::space());
            bound_tokens(&mut out, &frame.start);
            out.push(SqlPrintToken::space());
            out.push(keyword("and"));
            out.push(SqlPrintToken::space());
            bound_tokens(&mut out, end);
        }
        None => bound_tokens(&mut out, &frame.start),
    }
    out
}

fn bound_tokens(out: &mut Tokens, bound: &FrameBound) {
    match bound {
        FrameBound::UnboundedPreceding => out.push(keyword("unbounded preceding")),
        FrameBound::UnboundedFollowing => out.push(keyword("unbounded following")),
        FrameBound::CurrentRow => out.push(keyword("current row")),
        FrameBound::Preceding(offset) => {
            push_value(out, offset);
            out.push(SqlPrintToken::space());
            out.push(keyword("preceding"));
        }
        FrameBound::Following(offset) => {
            push_value(out, offset);
            out.push(SqlPrintToken::space());
            out.push(keyword("following"));
        }
    }
}

fn case_tokens(case: &CaseExpression) -> SqlPrintToken {
    let mut out = vec![keyword("case")];
    if let Some(operand) = &case.operand {
        out.push(SqlPrintToken::space());
        push_value(&mut out, operand);
    }

    let mut body = vec![];
    for (i, (condition, result)) in case.when_then.iter().enumerate() {
        if i > 0 {
            body.push(SqlPrintToken::line_break());
        }
        let mut when = vec![keyword("when"), SqlPrintToken::space()];
        push_value(&mut when, condition);
        when.push(SqlPrintToken::space());
        when.push(keyword("then"));
        when.push(SqlPrintToken::space());
        when.push(SqlPrintToken::container(
            ContainerTag::CaseThenValue,
            value_tokens(result),
        ));
        body.push(SqlPrintToken::container(ContainerTag::CaseWhen, when));
    }
    if let Some(else_value) = &case.else_value {
        body.push(SqlPrintToken::line_break());
        let mut otherwise = vec![keyword("else"), SqlPrintToken::space()];
        otherwise.extend(value_tokens(else_value));
        body.push(SqlPrintToken::container(
            ContainerTag::CaseElseValue,
            otherwise,
        ));
    }

    out.push(SqlPrintToken::container(ContainerTag::CaseBody, body));
    out.push(keyword("end"));
    SqlPrintToken::container(ContainerTag::CaseExpression, out)
}
