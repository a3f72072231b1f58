//! Category model definitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    /// Create a category with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_name_ignores_case() {
        let category = Category::new("Work");
        assert!(category.has_name("work"));
        assert!(category.has_name("WORK"));
        assert!(!category.has_name("Home"));
    }

    #[test]
    fn test_serde_shape() {
        let category: Category = serde_json::from_str(r#"{"id": "1718", "name": "Home"}"#).unwrap();
        assert_eq!(category.id, "1718");
        assert_eq!(category.name, "Home");
    }
}
