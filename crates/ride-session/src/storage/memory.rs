use crate::error::Result;
use crate::storage::KeyValueStore;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory key-value store.
///
/// Clones share the same underlying map, so two stores built from one
/// `MemoryStore` see each other's writes the way two page loads share one
/// browser storage scope. Used by tests and hosts without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().expect("memory store lock poisoned")
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}
