//! Renders a print-token tree into SQL text and a parameter list.

use super::params::{ParamCollector, ParamList};
use super::style::{BreakStyle, FormatStyle, KeywordCase, WithClauseStyle};
use super::token::{ContainerTag, SqlPrintToken, TokenKind};

/// Renders `token` with `style`.
///
/// Placeholders are assigned in the order parameter tokens are met, which
/// is left to right and depth first.
#[must_use]
pub fn render(token: &SqlPrintToken, style: &FormatStyle) -> (String, ParamList) {
    let mut names = vec![];
    parameter_names(token, &mut names);
    let mut renderer = Renderer::new(style, names);
    renderer.token(token);
    renderer.finish()
}

/// Collects the names of named parameter tokens under `token`.
fn parameter_names(token: &SqlPrintToken, names: &mut Vec<String>) {
    if token.kind == TokenKind::Parameter && !token.text.is_empty() {
        names.push(token.text.clone());
    }
    for child in &token.children {
        parameter_names(child, names);
    }
}

struct Renderer<'s> {
    style: &'s FormatStyle,
    out: String,
    level: usize,
    /// Number of enclosing containers forced onto one line.
    oneline: usize,
    tags: Vec<ContainerTag>,
    params: ParamCollector,
}

impl<'s> Renderer<'s> {
    fn new(style: &'s FormatStyle, parameter_names: Vec<String>) -> Self {
        Self {
            style,
            out: String::new(),
            level: 0,
            oneline: 0,
            tags: vec![],
            params: ParamCollector::new(style.parameter_style, &style.parameter_symbol)
                .with_reserved(parameter_names),
        }
    }

    fn finish(mut self) -> (String, ParamList) {
        let len = self.out.trim_end_matches(' ').len();
        self.out.truncate(len);
        (self.out, self.params.finish())
    }

    fn multiline(&self) -> bool {
        self.style.is_multiline() && self.oneline == 0
    }

    fn innermost(&self) -> Option<ContainerTag> {
        self.tags.last().copied()
    }

    fn newline(&mut self) {
        let len = self.out.trim_end_matches([' ', self.style.indent_char]).len();
        self.out.truncate(len);
        self.out.push_str(self.style.newline.as_str());
        for _ in 0..self.level * self.style.indent_size {
            self.out.push(self.style.indent_char);
        }
    }

    fn keyword_text(&self, text: &str) -> String {
        match self.style.keyword_case {
            KeywordCase::Upper => text.to_ascii_uppercase(),
            KeywordCase::Lower | KeywordCase::Preserve => text.to_string(),
        }
    }

    const fn forces_oneline(&self, tag: ContainerTag) -> bool {
        let style = self.style;
        match tag {
            ContainerTag::CaseExpression => style.case_oneline,
            ContainerTag::JoinClause => style.join_oneline,
            ContainerTag::SubqueryBody => style.subquery_oneline,
            ContainerTag::ValuesQuery => style.values_oneline,
            ContainerTag::BetweenExpression => style.between_oneline,
            ContainerTag::ParenExpression => style.parentheses_oneline,
            ContainerTag::CommonTable => {
                matches!(style.with_clause_style, WithClauseStyle::CteOneline)
            }
            ContainerTag::WithClause => {
                matches!(style.with_clause_style, WithClauseStyle::FullOneline)
            }
            _ => false,
        }
    }

    fn token(&mut self, token: &SqlPrintToken) {
        match token.kind {
            TokenKind::Container => self.container(token),
            TokenKind::Keyword => {
                let text = self.keyword_text(&token.text);
                self.out.push_str(&text);
            }
            TokenKind::Value | TokenKind::Raw => self.out.push_str(&token.text),
            TokenKind::Identifier => match &self.style.identifier_escape {
                Some(escape) => {
                    let quoted = escape.quote(&token.text);
                    self.out.push_str(&quoted);
                }
                None => self.out.push_str(&token.text),
            },
            TokenKind::Parameter => {
                let placeholder = self.params.placeholder(&token.text, token.value.as_ref());
                self.out.push_str(&placeholder);
            }
            TokenKind::Operator => self.operator(&token.text),
            TokenKind::Comma => self.comma(),
            TokenKind::Space => self.out.push(' '),
            TokenKind::Break => {
                if self.multiline() {
                    self.newline();
                } else {
                    self.out.push(' ');
                }
            }
            TokenKind::Comment => {
                self.out.push_str("/* ");
                self.out.push_str(&token.text.replace("*/", "* /"));
                self.out.push_str(" */");
            }
        }
    }

    fn container(&mut self, token: &SqlPrintToken) {
        let Some(tag) = token.container_type else {
            for child in &token.children {
                self.token(child);
            }
            return;
        };
        if tag == ContainerTag::CommentBlock && !self.style.export_comment {
            return;
        }

        let oneline = self.forces_oneline(tag);
        if oneline {
            self.oneline += 1;
        }
        self.tags.push(tag);

        let indented = tag.is_indented() && self.multiline();
        if indented {
            self.level += 1;
            self.newline();
        } else if tag.is_indented() {
            self.out.push_str(tag.inline_open());
        }

        for child in &token.children {
            self.token(child);
        }

        if indented {
            self.level -= 1;
            if tag.closes_on_new_line() {
                self.newline();
            }
        } else if tag == ContainerTag::CaseBody {
            self.out.push(' ');
        }

        self.tags.pop();
        if oneline {
            self.oneline -= 1;
        }
    }

    fn operator(&mut self, text: &str) {
        let rendered = if text.bytes().any(|b| b.is_ascii_alphabetic()) {
            self.keyword_text(text)
        } else {
            text.to_string()
        };

        let position = match text {
            "and" => self.style.and_break,
            "or" => self.style.or_break,
            _ => BreakStyle::None,
        };
        let breaks = self.multiline()
            && self
                .innermost()
                .is_some_and(ContainerTag::breaks_logical_operators);

        match (breaks, position) {
            (true, BreakStyle::Before) => {
                self.newline();
                self.out.push_str(&rendered);
                self.out.push(' ');
            }
            (true, BreakStyle::After) => {
                self.out.push(' ');
                self.out.push_str(&rendered);
                self.newline();
            }
            _ => {
                self.out.push(' ');
                self.out.push_str(&rendered);
                self.out.push(' ');
            }
        }
    }

    fn comma(&mut self) {
        let list = self.multiline() && self.innermost().is_some_and(ContainerTag::is_list);
        match (list, self.style.comma_break) {
            (true, BreakStyle::After) => {
                self.out.push(',');
                self.newline();
            }
            (true, BreakStyle::Before) => {
                self.newline();
                self.out.push_str(", ");
            }
            _ => self.out.push_str(", "),
        }
    }
}
