//! Error types for the atlas engine.

use std::path::PathBuf;

use rusqlite::{ffi, ErrorCode};
use thiserror::Error;

use crate::schema::EntityKind;

/// Comprehensive error type for all engine operations.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No record of the given kind has this identifier
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: EntityKind, id: u64 },
    /// A foreign-key column does not resolve to an existing parent row
    #[error("Referential integrity violation while saving {kind}: {message}")]
    ReferentialIntegrity { kind: EntityKind, message: String },
    /// Any other constraint rejected by the storage layer (NOT NULL, CHECK, ...)
    #[error("Constraint violation while saving {kind}: {message}")]
    Constraint { kind: EntityKind, message: String },
    /// The storage file is not a database with the expected tables
    #[error("Database at '{path}' is missing required tables: {}", missing.join(", "))]
    Schema {
        path: PathBuf,
        missing: Vec<&'static str>,
    },
    /// The storage location was refused before any connection was attempted
    #[error("Cannot open '{path}': {reason}")]
    Unacceptable { path: PathBuf, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration and runtime plumbing errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> AtlasError {
        AtlasError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> AtlasError {
        AtlasError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl AtlasError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Classifies an error raised by an INSERT or UPDATE statement.
    ///
    /// SQLite reports every constraint failure with the same primary code;
    /// the extended code tells a foreign-key failure apart from the rest.
    pub fn from_write(kind: EntityKind, message: &str, source: rusqlite::Error) -> Self {
        match &source {
            rusqlite::Error::SqliteFailure(err, detail)
                if err.code == ErrorCode::ConstraintViolation =>
            {
                let detail = detail.clone().unwrap_or_else(|| err.to_string());
                if err.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY {
                    AtlasError::ReferentialIntegrity {
                        kind,
                        message: detail,
                    }
                } else {
                    AtlasError::Constraint {
                        kind,
                        message: detail,
                    }
                }
            }
            _ => Self::database(message).with_source(source),
        }
    }

    /// Returns true for the "no such identifier" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AtlasError::NotFound { .. })
    }

    /// Returns true when a foreign-key column did not resolve.
    pub fn is_referential_integrity(&self) -> bool {
        matches!(self, AtlasError::ReferentialIntegrity { .. })
    }

    /// Returns true when the request was well formed but the data refused
    /// it, as opposed to a storage or configuration fault.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AtlasError::NotFound { .. }
                | AtlasError::ReferentialIntegrity { .. }
                | AtlasError::Constraint { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| AtlasError::database(message).with_source(e))
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AtlasError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(extended_code: i32, message: &str) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            ffi::Error::new(extended_code),
            Some(message.to_string()),
        )
    }

    #[test]
    fn test_foreign_key_failure_is_referential_integrity() {
        let err = AtlasError::from_write(
            EntityKind::Region,
            "Failed to insert region",
            sqlite_failure(ffi::SQLITE_CONSTRAINT_FOREIGNKEY, "FOREIGN KEY constraint failed"),
        );
        assert!(err.is_referential_integrity());
        assert!(err.to_string().contains("region"));
    }

    #[test]
    fn test_not_null_failure_is_constraint() {
        let err = AtlasError::from_write(
            EntityKind::Country,
            "Failed to insert country",
            sqlite_failure(ffi::SQLITE_CONSTRAINT_NOTNULL, "NOT NULL constraint failed"),
        );
        assert!(matches!(err, AtlasError::Constraint { .. }));
        assert!(err.is_rejection());
    }

    #[test]
    fn test_other_failures_stay_database_errors() {
        let err = AtlasError::from_write(
            EntityKind::Continent,
            "Failed to insert continent",
            rusqlite::Error::QueryReturnedNoRows,
        );
        assert!(matches!(err, AtlasError::Database { .. }));
        assert!(!err.is_rejection());
        assert_eq!(err.to_string(), "Database error: Failed to insert continent");
    }

    #[test]
    fn test_schema_error_lists_missing_tables() {
        let err = AtlasError::Schema {
            path: PathBuf::from("/tmp/empty.db"),
            missing: vec!["country", "region"],
        };
        assert_eq!(
            err.to_string(),
            "Database at '/tmp/empty.db' is missing required tables: country, region"
        );
    }
}
