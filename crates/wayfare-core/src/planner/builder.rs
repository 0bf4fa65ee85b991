//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::Planner;
use crate::{
    error::{Result, ScheduleError},
    store::{SqliteStore, StateRepository},
};

/// Builder for creating and configuring Planner instances.
#[derive(Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn StateRepository>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom session database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wayfare/sessions.db` or
    /// `~/.local/share/wayfare/sessions.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given repository instead of opening a SQLite database.
    ///
    /// Takes precedence over [`with_database_path`](Self::with_database_path).
    pub fn with_store(mut self, store: Arc<dyn StateRepository>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::FileSystem` if the database path is invalid
    /// Returns `ScheduleError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        if let Some(store) = self.store {
            return Ok(Planner::new(store));
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ScheduleError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let store = task::spawn_blocking(move || SqliteStore::new(&db_path))
            .await
            .map_err(|e| ScheduleError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Planner::new(Arc::new(store)))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfare")
            .place_data_file("sessions.db")
            .map_err(|e| ScheduleError::XdgDirectory(e.to_string()))
    }
}
