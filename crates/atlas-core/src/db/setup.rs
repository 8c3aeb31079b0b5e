//! Connection setup, schema installation and the table check.

use std::path::Path;

use rusqlite::params;

use crate::{
    error::{AtlasError, DatabaseResultExt, Result},
    schema::REQUIRED_TABLES,
};

const TABLE_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)";

impl super::Database {
    /// Turns on foreign-key enforcement; SQLite keeps it off per connection
    /// unless asked.
    pub(super) fn enable_foreign_keys(&self) -> Result<()> {
        self.connection
            .execute_batch("PRAGMA foreign_keys = ON;")
            .db_context("Failed to enable foreign keys")
    }

    /// Installs the table layout from the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.enable_foreign_keys()?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }

    /// Returns the required tables that are absent from this database.
    pub fn missing_tables(&self) -> Result<Vec<&'static str>> {
        let mut stmt = self
            .connection
            .prepare(TABLE_EXISTS_SQL)
            .db_context("Failed to prepare table check")?;

        let mut missing = Vec::new();
        for table in REQUIRED_TABLES {
            let exists: bool = stmt
                .query_row(params![table], |row| row.get(0))
                .db_context("Failed to check table existence")?;
            if !exists {
                missing.push(table);
            }
        }
        Ok(missing)
    }

    /// Fails with `AtlasError::Schema` unless every required table exists.
    pub(super) fn verify_schema(&self, path: &Path) -> Result<()> {
        let missing = self.missing_tables()?;
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AtlasError::Schema {
                path: path.to_path_buf(),
                missing,
            })
        }
    }

    /// Reports whether foreign keys are enforced on this connection.
    pub fn foreign_keys_enabled(&self) -> Result<bool> {
        self.connection
            .query_row("PRAGMA foreign_keys", [], |row| row.get::<_, i64>(0))
            .map(|flag| flag == 1)
            .db_context("Failed to read foreign key setting")
    }
}
