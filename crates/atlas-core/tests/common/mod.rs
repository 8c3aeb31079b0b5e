#![allow(dead_code)]

use std::path::PathBuf;

use atlas_core::{Engine, EngineBuilder};
use tempfile::TempDir;

/// Helper function to create a test engine over a fresh database
pub async fn create_test_engine() -> (TempDir, Engine) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let engine = EngineBuilder::new()
        .with_database_path(Some(&db_path))
        .create_if_missing(true)
        .build()
        .await
        .expect("Failed to create engine");
    (temp_dir, engine)
}

/// Creates an initialized database file and returns its path.
pub fn create_test_db_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("airport.db");
    atlas_core::Database::create(&db_path).expect("Failed to create test database");
    (temp_dir, db_path)
}
