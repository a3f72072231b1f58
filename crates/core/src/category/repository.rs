//! Category repository

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use super::model::Category;
use crate::notification::{messages, Notification};
use crate::outcome::Outcome;
use crate::storage::{PersistentStore, CATEGORIES_KEY};

/// Owns the category collection and writes it under [`CATEGORIES_KEY`]
pub struct CategoryRepository {
    categories: Arc<[Category]>,
    store: PersistentStore,
}

impl CategoryRepository {
    pub fn load(store: PersistentStore) -> Self {
        let categories: Vec<Category> = store.load(CATEGORIES_KEY, Vec::new());
        debug!("Loaded {} categories", categories.len());
        Self {
            categories: categories.into(),
            store,
        }
    }

    pub fn snapshot(&self) -> Arc<[Category]> {
        Arc::clone(&self.categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.has_name(name))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Add a category named `name` (trimmed).
    ///
    /// Blank names and names that already exist under case-insensitive
    /// comparison are rejected without touching state.
    pub fn create(&mut self, name: &str) -> Outcome<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Outcome::Rejected {
                notification: Notification::error(messages::CATEGORY_NAME_EMPTY),
            };
        }
        if let Some(existing) = self.find_by_name(name) {
            debug!("Category {:?} already exists as {}", name, existing.id);
            return Outcome::Rejected {
                notification: Notification::error(messages::CATEGORY_EXISTS),
            };
        }

        let category = Category {
            id: self.fresh_id(),
            name: name.to_string(),
        };
        let mut next = self.categories.to_vec();
        next.push(category.clone());
        self.categories = next.into();

        let persist_error = match self.store.save(CATEGORIES_KEY, &*self.categories) {
            Ok(()) => None,
            Err(e) => {
                warn!("Failed to persist categories: {}", e);
                Some(e)
            }
        };

        Outcome::Applied {
            value: category,
            notification: Notification::success(messages::CATEGORY_ADDED),
            persist_error,
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryKeyValueStore};
    use std::collections::HashSet;

    fn create_test_repo() -> (CategoryRepository, Arc<MemoryKeyValueStore>) {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let repo = CategoryRepository::load(PersistentStore::new(backend.clone()));
        (repo, backend)
    }

    #[test]
    fn test_create_category() {
        let (mut repo, backend) = create_test_repo();

        let outcome = repo.create("  Work  ");
        assert_eq!(
            outcome.notification().map(|n| n.message.as_str()),
            Some(messages::CATEGORY_ADDED)
        );
        let category = outcome.into_value().unwrap();
        assert_eq!(category.name, "Work");
        assert_eq!(repo.categories(), &[category.clone()]);

        let stored: Vec<Category> =
            serde_json::from_str(&backend.get(CATEGORIES_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, vec![category]);
    }

    #[test]
    fn test_duplicate_is_case_insensitive() {
        let (mut repo, _backend) = create_test_repo();
        assert!(repo.create("Work").is_applied());

        let outcome = repo.create("work");
        assert!(outcome.is_rejected());
        let notification = outcome.notification().unwrap();
        assert_eq!(notification.message, messages::CATEGORY_EXISTS);
        assert!(notification.is_error());
        assert_eq!(repo.len(), 1);

        assert!(repo.create(" WORK ").is_rejected());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_blank_name_rejected() {
        let (mut repo, backend) = create_test_repo();

        let outcome = repo.create("   ");
        assert!(outcome.is_rejected());
        assert!(repo.is_empty());
        assert!(backend.get(CATEGORIES_KEY).unwrap().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let (mut repo, _backend) = create_test_repo();
        for i in 0..50 {
            assert!(repo.create(&format!("Category {}", i)).is_applied());
        }
        let ids: HashSet<&str> = repo.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_failed_write_keeps_category() {
        let (mut repo, backend) = create_test_repo();
        backend.fail_writes(true);

        let outcome = repo.create("Home");
        assert!(outcome.persist_error().is_some());
        assert_eq!(repo.find_by_name("home").map(|c| c.name.as_str()), Some("Home"));
    }

    #[test]
    fn test_reload() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        {
            let mut repo = CategoryRepository::load(PersistentStore::new(backend.clone()));
            let _ = repo.create("Work");
            let _ = repo.create("Home");
        }
        let repo = CategoryRepository::load(PersistentStore::new(backend));
        let names: Vec<&str> = repo.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Work", "Home"]);
    }
}
