//! Persistent storage
//!
//! Raw key-value backends plus the typed adapter the repositories use.

mod adapter;
mod file_store;
mod memory_store;

pub use adapter::PersistentStore;
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;

use crate::Result;

/// Storage key holding the task snapshot
pub const TASKS_KEY: &str = "tasks";

/// Storage key holding the category snapshot
pub const CATEGORIES_KEY: &str = "categories";

/// A durable map from key to raw string value
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw value under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
