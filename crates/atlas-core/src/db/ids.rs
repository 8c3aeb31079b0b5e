//! Identifier allocation for new records.

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{id_at, Entity},
};

/// Returns the next free identifier for `E`: one past the current maximum,
/// or 1 when the table is empty.
///
/// Callers must hold a write lock (an IMMEDIATE transaction) from this read
/// until the insert commits, so two writers never see the same maximum.
pub(super) fn next_id<E: Entity>(connection: &Connection) -> Result<u64> {
    connection
        .query_row(&E::schema().next_id_sql(), [], |row| id_at(row, 0))
        .db_context("Failed to allocate identifier")
}
