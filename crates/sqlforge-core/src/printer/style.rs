//! Formatting style configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors loading a style configuration.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("Invalid style configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),
}

/// Delimiters placed around identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierEscape {
    pub start: String,
    pub end: String,
}

impl IdentifierEscape {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Wraps `name`, doubling any embedded end delimiter.
    #[must_use]
    pub fn quote(&self, name: &str) -> String {
        let escaped = if self.end.is_empty() {
            name.to_string()
        } else {
            name.replace(&self.end, &format!("{}{}", self.end, self.end))
        };
        format!("{}{escaped}{}", self.start, self.end)
    }
}

/// How parameter placeholders are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterStyle {
    /// `$1`, `$2`, ...
    Indexed,
    /// `:name`, `@name`, ...
    Named,
    /// `?` for every occurrence.
    Anonymous,
}

/// Line separator. `Space` keeps the whole statement on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Newline {
    Space,
    Lf,
    CrLf,
}

impl Newline {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    Upper,
    Lower,
    /// Keywords are stored without their source spelling, so this renders
    /// the canonical lowercase form.
    Preserve,
}

/// Where a line break goes relative to a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakStyle {
    None,
    Before,
    After,
}

/// Layout of the WITH clause in multi-line mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WithClauseStyle {
    /// Each CTE body is laid out like any other query.
    Standard,
    /// Each CTE is kept on one line.
    CteOneline,
    /// The whole WITH clause is kept on one line.
    FullOneline,
}

/// Named style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Postgres,
    Mysql,
    SqlServer,
    Sqlite,
}

impl FromStr for Preset {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "mysql" => Ok(Self::Mysql),
            "sqlserver" => Ok(Self::SqlServer),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(StyleError::UnknownPreset(s.to_string())),
        }
    }
}

impl Preset {
    /// Returns the style of this preset.
    #[must_use]
    pub fn style(self) -> FormatStyle {
        let base = FormatStyle::new();
        match self {
            Self::Postgres => base
                .with_identifier_escape(Some(IdentifierEscape::new("\"", "\"")))
                .with_parameter_style(ParameterStyle::Indexed, "$"),
            Self::Mysql => base
                .with_identifier_escape(Some(IdentifierEscape::new("`", "`")))
                .with_parameter_style(ParameterStyle::Anonymous, "?"),
            Self::SqlServer => base
                .with_identifier_escape(Some(IdentifierEscape::new("[", "]")))
                .with_parameter_style(ParameterStyle::Named, "@"),
            Self::Sqlite => base
                .with_identifier_escape(Some(IdentifierEscape::new("\"", "\"")))
                .with_parameter_style(ParameterStyle::Named, ":"),
        }
    }
}

impl From<Preset> for FormatStyle {
    fn from(preset: Preset) -> Self {
        preset.style()
    }
}

/// Formatting options.
///
/// Deserialization fills every missing field from [`FormatStyle::default`],
/// so a partial JSON document overrides only the fields it names.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatStyle {
    /// Identifier delimiters; `None` writes identifiers bare.
    pub identifier_escape: Option<IdentifierEscape>,
    pub parameter_style: ParameterStyle,
    /// Placeholder prefix (`$`, `:`, `@`) or, in anonymous style, the whole
    /// placeholder.
    pub parameter_symbol: String,
    pub indent_char: char,
    pub indent_size: usize,
    pub newline: Newline,
    pub keyword_case: KeywordCase,
    pub comma_break: BreakStyle,
    pub and_break: BreakStyle,
    pub or_break: BreakStyle,
    /// Render comments as `/* ... */` blocks.
    pub export_comment: bool,
    pub with_clause_style: WithClauseStyle,
    pub case_oneline: bool,
    pub join_oneline: bool,
    pub subquery_oneline: bool,
    pub values_oneline: bool,
    pub between_oneline: bool,
    pub parentheses_oneline: bool,
}

impl Default for FormatStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatStyle {
    /// Creates the default style: `"` identifiers, `:name` parameters, one
    /// line, lowercase keywords.
    #[must_use]
    pub fn new() -> Self {
        Self {
            identifier_escape: Some(IdentifierEscape::new("\"", "\"")),
            parameter_style: ParameterStyle::Named,
            parameter_symbol: String::from(":"),
            indent_char: ' ',
            indent_size: 4,
            newline: Newline::Space,
            keyword_case: KeywordCase::Lower,
            comma_break: BreakStyle::None,
            and_break: BreakStyle::None,
            or_break: BreakStyle::None,
            export_comment: false,
            with_clause_style: WithClauseStyle::Standard,
            case_oneline: false,
            join_oneline: false,
            subquery_oneline: false,
            values_oneline: false,
            between_oneline: false,
            parentheses_oneline: false,
        }
    }

    /// Loads a style from JSON.
    ///
    /// A `"preset"` key selects the base style; the remaining keys override
    /// it. Without a preset the base is [`FormatStyle::default`].
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let mut document: serde_json::Value = serde_json::from_str(json)?;
        let preset = match document.as_object_mut().and_then(|o| o.remove("preset")) {
            Some(serde_json::Value::String(name)) => Some(name.parse::<Preset>()?),
            Some(other) => return Err(StyleError::UnknownPreset(other.to_string())),
            None => None,
        };

        let Some(preset) = preset else {
            return Ok(serde_json::from_value(document)?);
        };

        let mut base = serde_json::to_value(preset.style())?;
        if let (Some(base), Some(overrides)) = (base.as_object_mut(), document.as_object()) {
            for (key, value) in overrides {
                base.insert(key.clone(), value.clone());
            }
        }
        Ok(serde_json::from_value(base)?)
    }

    /// Returns true if output spans multiple lines.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.newline != Newline::Space
    }

    #[must_use]
    pub fn with_identifier_escape(mut self, escape: Option<IdentifierEscape>) -> Self {
        self.identifier_escape = escape;
        self
    }

    #[must_use]
    pub fn with_parameter_style(
        mut self,
        style: ParameterStyle,
        symbol: impl Into<String>,
    ) -> Self {
        self.parameter_style = style;
        self.parameter_symbol = symbol.into();
        self
    }

    #[must_use]
    pub const fn with_indent(mut self, indent_char: char, indent_size: usize) -> Self {
        self.indent_char = indent_char;
        self.indent_size = indent_size;
        self
    }

    #[must_use]
    pub const fn with_newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }

    #[must_use]
    pub const fn with_keyword_case(mut self, case: KeywordCase) -> Self {
        self.keyword_case = case;
        self
    }

    #[must_use]
    pub const fn with_comma_break(mut self, position: BreakStyle) -> Self {
        self.comma_break = position;
        self
    }

    #[must_use]
    pub const fn with_and_break(mut self, position: BreakStyle) -> Self {
        self.and_break = position;
        self
    }

    #[must_use]
    pub const fn with_or_break(mut self, position: BreakStyle) -> Self {
        self.or_break = position;
        self
    }

    #[must_use]
    pub const fn with_export_comment(mut self, export: bool) -> Self {
        self.export_comment = export;
        self
    }

    #[must_use]
    pub const fn with_clause_style(mut self, style: WithClauseStyle) -> Self {
        self.with_clause_style = style;
        self
    }

    #[must_use]
    pub const fn with_case_oneline(mut self, oneline: bool) -> Self {
        self.case_oneline = oneline;
        self
    }

    #[must_use]
    pub const fn with_join_oneline(mut self, oneline: bool) -> Self {
        self.join_oneline = oneline;
        self
    }

    #[must_use]
    pub const fn with_subquery_oneline(mut self, oneline: bool) -> Self {
        self.subquery_oneline = oneline;
        self
    }

    #[must_use]
    pub const fn with_values_oneline(mut self, oneline: bool) -> Self {
        self.values_oneline = oneline;
        self
    }

    #[must_use]
    pub const fn with_between_oneline(mut self, oneline: bool) -> Self {
        self.between_oneline = oneline;
        self
    }

    #[must_use]
    pub const fn with_parentheses_oneline(mut self, oneline: bool) -> Self {
        self.parentheses_oneline = oneline;
        self
    }
}
