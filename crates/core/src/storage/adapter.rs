//! Typed JSON adapter over a [`KeyValueStore`]

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::KeyValueStore;
use crate::Result;

/// Cloneable handle that reads and writes JSON values by key
#[derive(Clone)]
pub struct PersistentStore {
    backend: Arc<dyn KeyValueStore>,
    pretty: bool,
}

impl PersistentStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            pretty: true,
        }
    }

    /// Choose between pretty-printed and compact JSON on write
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Load the value under `key`.
    ///
    /// Returns `fallback` when the key is absent, unreadable, or holds
    /// data that does not deserialize as `T`. Never fails.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored value for {:?}, using fallback", key);
                return fallback;
            }
            Err(e) => {
                warn!("Failed to read {:?}, using fallback: {}", key, e);
                return fallback;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding malformed value for {:?}: {}", key, e);
                fallback
            }
        }
    }

    /// Serialize `value` and write it under `key`
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let content = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        self.backend.set(key, &content)?;
        debug!("Saved {:?} ({} bytes)", key, content.len());
        Ok(())
    }
}
