//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::task;

use super::Planner;
use crate::{
    client::Generator,
    config::GenerationConfig,
    error::{JoinResultExt, PlannerError, Result},
    storage::{KeyValueStore, SqliteStore},
};

/// Builder for creating and configuring Planner instances.
#[derive(Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn KeyValueStore>>,
    generator: Option<Arc<dyn Generator>>,
    config: GenerationConfig,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already constructed store instead of the SQLite database.
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Uses the given generator instead of a Gemini client built from the
    /// configuration.
    pub fn with_generator(mut self, generator: Arc<dyn Generator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Sets the generation settings.
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// A missing API key is not an error here; it surfaces when a plan is
    /// generated so that history commands keep working without one.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if no default path can be
    /// determined, `PlannerError::FileSystem` if the database directory
    /// cannot be created and `PlannerError::Database` if the schema cannot
    /// be initialized.
    pub async fn build(self) -> Result<Planner> {
        let store = match self.store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                let store = task::spawn_blocking(move || SqliteStore::open(db_path))
                    .await
                    .join_context()??;
                Arc::new(store)
            }
        };

        Ok(Planner::new(store, self.generator, self.config))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}
