//! In-memory key-value storage

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::KeyValueStore;
use crate::{Error, Result};

/// Process-local store, lost when dropped.
///
/// Writes can be made to fail with [`MemoryKeyValueStore::fail_writes`],
/// which stands in for a full or unavailable backend.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Seed a raw value, bypassing the failure switch
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.into(), value.into());
        }
    }
}

fn poisoned() -> Error {
    Error::Storage("Memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Storage(format!(
                "Quota exceeded while writing {:?}",
                key
            )));
        }
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let store = MemoryKeyValueStore::new();
        assert!(store.get("tasks").unwrap().is_none());

        store.set("tasks", "[]").unwrap();
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_failing_writes_leave_value_untouched() {
        let store = MemoryKeyValueStore::new();
        store.set("tasks", "[1]").unwrap();

        store.fail_writes(true);
        assert!(matches!(store.set("tasks", "[2]"), Err(Error::Storage(_))));
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[1]"));

        store.fail_writes(false);
        store.set("tasks", "[2]").unwrap();
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[2]"));
    }
}
