//! SQLite access for continent, country and region records.
//!
//! This module owns the connection and everything that runs against it:
//! opening and validating a storage file, the generic search and point
//! lookup, and the insert/update paths with identifier allocation. All of it
//! is written once against the [`Entity`](crate::models::Entity) trait and the
//! static schema descriptors in [`crate::schema`].

use std::path::Path;

use log::debug;
use rusqlite::{Connection, OpenFlags};

use crate::error::{DatabaseResultExt, Result};

mod ids;
pub mod search;
pub mod setup;
pub mod upsert;

/// Database connection and operations handler.
///
/// A `Database` is one unit of work: it is opened for an operation and
/// dropped when the operation returns, closing the connection on every exit
/// path.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens an existing storage file and checks that it holds the expected
    /// tables. The file is never created.
    ///
    /// # Errors
    ///
    /// Returns `AtlasError::Database` if the file cannot be opened or is not
    /// a SQLite database, and `AtlasError::Schema` if a table is missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening database at {}", path.display());

        let connection = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.enable_foreign_keys()?;
        db.verify_schema(path)?;
        Ok(db)
    }

    /// Creates (or reuses) a storage file and installs the table layout.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Creating database at {}", path.display());

        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Creates a private in-memory database with the table layout.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
