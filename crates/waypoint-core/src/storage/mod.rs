//! Local key-value storage used as the recency cache backend.
//!
//! Storage is consumed as a small capability: string values under string
//! keys, with operations that never fail. Any backend error degrades to an
//! absent value or a `false` return and is logged.
//!
//! - [`SqliteStore`]: persistent store in a single SQLite table
//! - [`MemoryStore`]: process-local map, used in tests and ephemeral runs

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key-value storage capability.
pub trait KeyValueStore: Send + Sync {
    /// Whether the backend can currently be used.
    fn is_available(&self) -> bool;

    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, returning whether the write succeeded.
    fn set(&self, key: &str, value: &str) -> bool;

    /// Removes `key`, returning whether the removal succeeded.
    fn remove(&self, key: &str) -> bool;
}

/// Reads and decodes a JSON value from `store`.
///
/// Absent keys and the literal strings `null` and `undefined` yield `None`.
/// Values that fail to decode are removed so the next read starts clean.
pub fn get_json<T>(store: &dyn KeyValueStore, key: &str) -> Option<T>
where
    T: DeserializeOwned,
{
    let raw = store.get(key)?;
    if raw.is_empty() || raw == "null" || raw == "undefined" {
        return None;
    }

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Clearing corrupted value under '{key}': {e}");
            store.remove(key);
            None
        }
    }
}

/// Encodes `value` as JSON and stores it under `key`.
pub fn set_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(serialized) => store.set(key, &serialized),
        Err(e) => {
            warn!("Failed to encode value for '{key}': {e}");
            false
        }
    }
}
