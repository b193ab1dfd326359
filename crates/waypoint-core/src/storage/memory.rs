//! In-memory key-value store.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use super::KeyValueStore;

/// Process-local store; contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Option<MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().ok()
    }
}

impl KeyValueStore for MemoryStore {
    fn is_available(&self) -> bool {
        self.entries().is_some()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries()
            .map(|mut entries| entries.insert(key.to_string(), value.to_string()))
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        self.entries()
            .map(|mut entries| entries.remove(key))
            .is_some()
    }
}
