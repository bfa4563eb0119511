//! Parameter placeholders and the parameter list returned with rendered SQL.

use serde::Serialize;

use super::style::ParameterStyle;
use crate::ast::SqlValue;

/// Values matching the placeholders of a rendered statement, left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamList {
    /// Indexed and anonymous styles: one value per placeholder number or
    /// occurrence.
    Positional(Vec<SqlValue>),
    /// Named style: one entry per distinct name.
    Named(Vec<(String, SqlValue)>),
}

impl ParamList {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Positional(values) => values.len(),
            Self::Named(entries) => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the values in placeholder order.
    #[must_use]
    pub fn values(&self) -> Vec<&SqlValue> {
        match self {
            Self::Positional(values) => values.iter().collect(),
            Self::Named(entries) => entries.iter().map(|(_, value)| value).collect(),
        }
    }

    /// Looks up a named parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        match self {
            Self::Positional(_) => None,
            Self::Named(entries) => entries
                .iter()
                .find(|(entry, _)| entry == name)
                .map(|(_, value)| value),
        }
    }
}

/// Assigns placeholders while the renderer walks the token tree.
pub(super) struct ParamCollector {
    style: ParameterStyle,
    symbol: String,
    entries: Vec<(String, SqlValue)>,
    unnamed: usize,
    /// Names written in the statement, never reused for `?` placeholders.
    reserved: Vec<String>,
}

impl ParamCollector {
    pub(super) fn new(style: ParameterStyle, symbol: &str) -> Self {
        Self {
            style,
            symbol: symbol.to_string(),
            entries: vec![],
            unnamed: 0,
            reserved: vec![],
        }
    }

    /// Reserves the names the statement already uses.
    pub(super) fn with_reserved(mut self, names: Vec<String>) -> Self {
        self.reserved = names;
        self
    }

    fn next_unnamed(&mut self) -> String {
        loop {
            self.unnamed += 1;
            let name = format!("param{}", self.unnamed);
            if !self.reserved.contains(&name) {
                return name;
            }
        }
    }

    /// Records one placeholder occurrence and returns its text.
    pub(super) fn placeholder(&mut self, name: &str, value: Option<&SqlValue>) -> String {
        let value = value.cloned().unwrap_or(SqlValue::Null);
        match self.style {
            ParameterStyle::Anonymous => {
                self.entries.push((name.to_string(), value));
                self.symbol.clone()
            }
            ParameterStyle::Indexed => {
                let index = if name.is_empty() {
                    None
                } else {
                    self.entries.iter().position(|(entry, _)| entry == name)
                };
                let index = index.unwrap_or_else(|| {
                    self.entries.push((name.to_string(), value));
                    self.entries.len() - 1
                });
                format!("{}{}", self.symbol, index + 1)
            }
            ParameterStyle::Named => {
                let name = if name.is_empty() {
                    self.next_unnamed()
                } else {
                    name.to_string()
                };
                if !self.entries.iter().any(|(entry, _)| *entry == name) {
                    self.entries.push((name.clone(), value));
                }
                format!("{}{name}", self.symbol)
            }
        }
    }

    pub(super) fn finish(self) -> ParamList {
        match self.style {
            ParameterStyle::Named => ParamList::Named(self.entries),
            ParameterStyle::Indexed | ParameterStyle::Anonymous => {
                ParamList::Positional(self.entries.into_iter().map(|(_, value)| value).collect())
            }
        }
    }
}
