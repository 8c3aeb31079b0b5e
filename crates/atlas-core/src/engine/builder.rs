//! Builder for creating and configuring Engine instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::Engine;
use crate::{
    db::Database,
    error::{AtlasError, Result},
};

/// Builder for creating and configuring Engine instances.
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    database_path: Option<PathBuf>,
    create: bool,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/atlas/atlas.db` or `~/.local/share/atlas/atlas.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Creates the file and installs the tables when they are missing,
    /// instead of refusing to open it.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    /// Builds the configured engine after checking the database once.
    ///
    /// # Errors
    ///
    /// Returns `AtlasError::FileSystem` if the parent directory cannot be
    /// created, `AtlasError::Database` if the file cannot be opened and
    /// `AtlasError::Schema` if it lacks the required tables.
    pub async fn build(self) -> Result<Engine> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if self.create {
            if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| AtlasError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let create = self.create;
        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = if create {
                Database::create(&db_path_clone)?
            } else {
                Database::open(&db_path_clone)?
            };
            Ok::<(), AtlasError>(())
        })
        .await
        .map_err(|e| AtlasError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!("Using database {}", db_path.display());
        Ok(Engine::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("atlas")
            .place_data_file("atlas.db")
            .map_err(|e| AtlasError::XdgDirectory(e.to_string()))
    }
}
