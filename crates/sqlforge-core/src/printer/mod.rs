//! SQL printer.
//!
//! Formatting is two passes: [`to_print_tokens`] lowers a query into a
//! print-token tree, then [`render`] lays the tree out according to a
//! [`FormatStyle`] and collects the parameters it meets.

mod builder;
mod params;
mod renderer;
mod style;
mod token;

use tracing::debug;

use crate::ast::SelectQuery;

pub use builder::to_print_tokens;
pub use params::ParamList;
pub use renderer::render;
pub use style::{
    BreakStyle, FormatStyle, IdentifierEscape, KeywordCase, Newline, ParameterStyle, Preset,
    StyleError, WithClauseStyle,
};
pub use token::{ContainerTag, SqlPrintToken, TokenKind};

/// Formats `query` with `style`, returning the SQL text and its parameters.
#[must_use]
pub fn format(query: &SelectQuery, style: &FormatStyle) -> (String, ParamList) {
    let tokens = to_print_tokens(query);
    let (sql, params) = render(&tokens, style);
    debug!(
        kind = query.kind_name(),
        output_len = sql.len(),
        params = params.len(),
        "formatted query"
    );
    (sql, params)
}

/// A formatter bound to one style.
#[derive(Debug, Clone, Default)]
pub struct SqlFormatter {
    style: FormatStyle,
}

impl SqlFormatter {
    #[must_use]
    pub const fn new(style: FormatStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub fn from_preset(preset: Preset) -> Self {
        Self::new(preset.style())
    }

    #[must_use]
    pub const fn style(&self) -> &FormatStyle {
        &self.style
    }

    #[must_use]
    pub fn format(&self, query: &SelectQuery) -> (String, ParamList) {
        format(query, &self.style)
    }
}
