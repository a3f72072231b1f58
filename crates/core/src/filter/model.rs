//! Filter token definitions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

const ALL: &str = "all";
const COMPLETED: &str = "completed";
const UNCATEGORIZED: &str = "uncategorized";

/// The active category scope.
///
/// Renders to and parses from the string token the sidebar uses:
/// `all`, `completed`, `uncategorized`, or a category id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Completed,
    Uncategorized,
    /// Holds the category *id*, as selected from the sidebar
    Category(String),
}

impl CategoryFilter {
    /// Select a user category, keyed by its id
    pub fn for_category(category: &Category) -> Self {
        Self::Category(category.id.clone())
    }

    pub fn as_token(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Completed => COMPLETED,
            Self::Uncategorized => UNCATEGORIZED,
            Self::Category(token) => token,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(token: &str) -> Self {
        match token {
            ALL => Self::All,
            COMPLETED => Self::Completed,
            UNCATEGORIZED => Self::Uncategorized,
            other => Self::Category(other.to_string()),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(token: String) -> Self {
        match token.as_str() {
            ALL | COMPLETED | UNCATEGORIZED => Self::from(token.as_str()),
            _ => Self::Category(token),
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::Category(token) => token,
            builtin => builtin.as_token().to_string(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Heading text for the active filter.
///
/// A category token names the category with that id; an unknown id reads
/// as `All Tasks`.
pub fn filter_label(filter: &CategoryFilter, categories: &[Category]) -> String {
    match filter {
        CategoryFilter::All => "All Tasks".to_string(),
        CategoryFilter::Completed => "Completed Tasks".to_string(),
        CategoryFilter::Uncategorized => "Uncategorized Tasks".to_string(),
        CategoryFilter::Category(id) => categories
            .iter()
            .find(|c| &c.id == id)
            .map(|c| format!("{} Tasks", c.name))
            .unwrap_or_else(|| "All Tasks".to_string()),
    }
}
