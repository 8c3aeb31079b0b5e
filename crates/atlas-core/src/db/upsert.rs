//! Insert and update of entity records.
//!
//! Both paths run inside an IMMEDIATE transaction, bind every data column in
//! schema order and read the stored row back before committing. A failing
//! statement drops the transaction, which rolls back, so a rejected write
//! never leaves a partial row behind.

use log::{debug, warn};
use rusqlite::{params_from_iter, types::Value, TransactionBehavior};

use super::{ids::next_id, search::find_in};
use crate::{
    error::{AtlasError, DatabaseResultExt, Result},
    models::{id_value, Entity},
};

/// Values for every data column of `record`, with the empty-string sentinel
/// of optional columns turned into NULL.
fn bind_values<E: Entity>(record: &E) -> Result<Vec<Value>> {
    Ok(E::schema()
        .data_columns()
        .iter()
        .zip(record.column_values()?)
        .map(|(column, value)| match value {
            Value::Text(text) if column.is_optional() && text.is_empty() => Value::Null,
            value => value,
        })
        .collect())
}

impl super::Database {
    /// Stores `record` as a new row under a freshly allocated identifier.
    ///
    /// Any identifier already set on `record` is ignored. Returns the record
    /// as stored, carrying its new identifier.
    ///
    /// # Errors
    ///
    /// Returns `AtlasError::ReferentialIntegrity` when a foreign-key column
    /// does not reference an existing parent row.
    pub fn insert<E: Entity>(&mut self, record: &E) -> Result<E> {
        let kind = E::kind();
        let schema = E::schema();

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let id = next_id::<E>(&tx)?;

        let mut values = Vec::with_capacity(schema.columns.len());
        values.push(id_value(schema.id_column(), id)?);
        values.extend(bind_values(record)?);

        tx.execute(&schema.insert_sql(), params_from_iter(values))
            .map_err(|e| {
                let err = AtlasError::from_write(kind, "Failed to insert record", e);
                warn!("Insert into {} rejected: {err}", schema.table);
                err
            })?;

        let saved = find_in::<E>(&tx, id)?.ok_or(AtlasError::NotFound { kind, id })?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Inserted {kind} {id}");
        Ok(saved)
    }

    /// Overwrites every data column of the row identified by `record`.
    ///
    /// Returns the record as stored.
    ///
    /// # Errors
    ///
    /// Returns `AtlasError::NotFound` when no row carries the identifier (the
    /// table is left untouched), and `AtlasError::ReferentialIntegrity` when
    /// a foreign-key column does not reference an existing parent row.
    pub fn update<E: Entity>(&mut self, record: &E) -> Result<E> {
        let kind = E::kind();
        let schema = E::schema();
        let id = record.id();

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let mut values = bind_values(record)?;
        values.push(id_value(schema.id_column(), id)?);

        let rows_affected = tx
            .execute(&schema.update_sql(), params_from_iter(values))
            .map_err(|e| {
                let err = AtlasError::from_write(kind, "Failed to update record", e);
                warn!("Update of {kind} {id} rejected: {err}");
                err
            })?;

        if rows_affected == 0 {
            return Err(AtlasError::NotFound { kind, id });
        }

        let saved = find_in::<E>(&tx, id)?.ok_or(AtlasError::NotFound { kind, id })?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Updated {kind} {id}");
        Ok(saved)
    }
}
