//! High-level async API over the geographic database.
//!
//! The [`Engine`] holds nothing but the database path. Every operation opens
//! its own [`Database`] on a blocking worker thread, runs its statements and
//! drops the connection before the future resolves, so no two operations
//! share a connection and nothing stays open between calls.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Session /    │    │     Engine      │    │    Database     │
//! │      CLI        │───▶│ (search, load,  │───▶│ (one connection │
//! │                 │    │  save, save_new)│    │  per operation) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use atlas_core::{EngineBuilder, models::Continent, params::SearchContinents};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = EngineBuilder::new()
//!     .with_database_path(Some("airport.db"))
//!     .build()
//!     .await?;
//!
//! let africa = engine.save_new(Continent::new("AF", "Africa")).await?;
//! let found = engine
//!     .search(&SearchContinents {
//!         continent_code: Some("AF".to_string()),
//!         name: None,
//!     })
//!     .await?;
//! assert!(found.contains(&africa));
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

pub mod builder;
mod ops;

pub use builder::EngineBuilder;

use crate::{
    db::Database,
    error::{AtlasError, Result},
};

/// Main engine interface for searching and saving records.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) db_path: PathBuf,
}

impl Engine {
    /// Creates an engine over an already validated database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the database this engine operates on.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `f` against a freshly opened database on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::open(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(|e| AtlasError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
