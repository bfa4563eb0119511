//! Errors raised by CTE management.

/// A failed CTE mutation. Every variant carries the offending name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CteError {
    /// The name is empty or whitespace-only.
    #[error("Invalid CTE name '{name}': name must not be empty or whitespace")]
    InvalidName { name: String },

    /// A CTE with this name already exists.
    #[error("CTE '{cte_name}' already exists")]
    Duplicate { cte_name: String },

    /// No CTE with this name exists.
    #[error("CTE '{cte_name}' not found")]
    NotFound { cte_name: String },
}
