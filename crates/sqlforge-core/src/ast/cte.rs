//! CTE management on simple queries.
//!
//! CTE names are unique within one WITH clause and never blank. Every
//! mutation checks both before touching the tree.

use super::clause::{CommonTable, WithClause};
use super::error::CteError;
use super::query::{SelectQuery, SimpleSelectQuery};

fn validate_name(name: &str) -> Result<(), CteError> {
    if name.trim().is_empty() {
        return Err(CteError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

impl SimpleSelectQuery {
    /// Appends a CTE to the WITH clause, creating the clause if needed.
    pub fn add_cte(
        &mut self,
        name: impl Into<String>,
        query: impl Into<SelectQuery>,
        materialized: Option<bool>,
    ) -> Result<&mut Self, CteError> {
        let name = name.into();
        validate_name(&name)?;
        if self.has_cte(&name) {
            return Err(CteError::Duplicate { cte_name: name });
        }

        tracing::debug!(cte = %name, "adding cte");
        let mut table = CommonTable::new(name, query);
        table.materialized = materialized;
        self.with_clause
            .get_or_insert_with(WithClause::default)
            .tables
            .push(table);
        Ok(self)
    }

    /// Removes a CTE. Removing the last one drops the WITH clause.
    pub fn remove_cte(&mut self, name: &str) -> Result<&mut Self, CteError> {
        let index = self
            .with_clause
            .as_ref()
            .and_then(|with| with.position(name))
            .ok_or_else(|| CteError::NotFound {
                cte_name: name.to_string(),
            })?;

        tracing::debug!(cte = %name, "removing cte");
        if let Some(with) = self.with_clause.as_mut() {
            with.tables.remove(index);
            if with.tables.is_empty() {
                self.with_clause = None;
            }
        }
        Ok(self)
    }

    /// Replaces the query of an existing CTE, keeping its position,
    /// column list and materialization hint.
    pub fn replace_cte(
        &mut self,
        name: &str,
        query: impl Into<SelectQuery>,
    ) -> Result<&mut Self, CteError> {
        validate_name(name)?;
        let table = self
            .with_clause
            .as_mut()
            .and_then(|with| with.tables.iter_mut().find(|t| t.name == name))
            .ok_or_else(|| CteError::NotFound {
                cte_name: name.to_string(),
            })?;

        tracing::debug!(cte = %name, "replacing cte");
        table.query = query.into();
        Ok(self)
    }

    /// Returns true if a CTE with this name exists.
    #[must_use]
    pub fn has_cte(&self, name: &str) -> bool {
        self.get_cte(name).is_some()
    }

    /// Returns the CTE names in declaration order.
    #[must_use]
    pub fn cte_names(&self) -> Vec<String> {
        self.with_clause
            .as_ref()
            .map(|with| with.tables.iter().map(|t| t.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns the CTE with this name.
    #[must_use]
    pub fn get_cte(&self, name: &str) -> Option<&CommonTable> {
        self.with_clause.as_ref().and_then(|with| with.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{SelectItem, ValueComponent};

    fn select(n: i64) -> SimpleSelectQuery {
        SimpleSelectQuery::new(vec![SelectItem::new(ValueComponent::number(n))])
    }

    #[test]
    fn test_add_and_list() {
        let mut query = select(0);
        query
            .add_cte("a", select(1), None)
            .unwrap()
            .add_cte("b", select(2), Some(true))
            .unwrap();
        assert_eq!(query.cte_names(), vec!["a", "b"]);
        assert_eq!(query.get_cte("b").unwrap().materialized, Some(true));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut query = select(0);
        let err = query.add_cte("   ", select(1), None).unwrap_err();
        assert!(matches!(err, CteError::InvalidName { .. }));
        assert!(query.with_clause.is_none());
    }

    #[test]
    fn test_removing_last_drops_with_clause() {
        let mut query = select(0);
        query.add_cte("a", select(1), None).unwrap();
        query.remove_cte("a").unwrap();
        assert!(query.with_clause.is_none());
        assert!(!query.has_cte("a"));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut query = select(0);
        query.add_cte("a", select(1), Some(false)).unwrap();
        query.add_cte("b", select(2), None).unwrap();
        query.replace_cte("a", select(9)).unwrap();
        assert_eq!(query.cte_names(), vec!["a", "b"]);
        let a = query.get_cte("a").unwrap();
        assert_eq!(a.query, SelectQuery::from(select(9)));
        assert_eq!(a.materialized, Some(false));
    }

    #[test]
    fn test_replace_missing() {
        let mut query = select(0);
        let err = query.replace_cte("nope", select(1)).unwrap_err();
        assert_eq!(err.to_string(), "CTE 'nope' not found");
        let err = query.replace_cte("", select(1)).unwrap_err();
        assert!(matches!(err, CteError::InvalidName { .. }));
    }
}
