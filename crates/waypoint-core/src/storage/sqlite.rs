//! SQLite-backed key-value store.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;
use crate::error::{DatabaseResultExt, PlannerError, Result};

/// Key-value store persisted in a single SQLite table.
///
/// A connection is opened per operation, so the store itself holds only the
/// database path and can be shared freely between tasks.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `path` and initializes the
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the parent directory cannot be
    /// created and `PlannerError::Database` if the schema cannot be applied.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let store = Self { path };
        store.connect()?;
        Ok(store)
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let connection =
            Connection::open(&self.path).db_context("Failed to open database connection")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(connection)
    }

    fn try_get(&self, key: &str) -> Result<Option<String>> {
        self.connect()?
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to read value")
    }

    fn try_set(&self, key: &str, value: &str) -> Result<()> {
        self.connect()?
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Timestamp::now().to_string()],
            )
            .db_context("Failed to write value")?;
        Ok(())
    }

    fn try_remove(&self, key: &str) -> Result<()> {
        self.connect()?
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .db_context("Failed to remove value")?;
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn is_available(&self) -> bool {
        self.connect().is_ok()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.try_get(key)
            .inspect_err(|e| warn!("Storage read of '{key}' failed: {e}"))
            .ok()
            .flatten()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.try_set(key, value)
            .inspect_err(|e| warn!("Storage write of '{key}' failed: {e}"))
            .is_ok()
    }

    fn remove(&self, key: &str) -> bool {
        self.try_remove(key)
            .inspect_err(|e| warn!("Storage removal of '{key}' failed: {e}"))
            .is_ok()
    }
}
