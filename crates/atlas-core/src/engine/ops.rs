//! Search, load and save operations for the Engine.

use super::Engine;
use crate::{
    error::Result,
    models::Entity,
    params::{Id, SearchParams},
};

impl Engine {
    /// Returns every record matching the non-empty fields of `params`.
    ///
    /// With no field present this returns the whole table.
    pub async fn search<P: SearchParams>(&self, params: &P) -> Result<Vec<P::Entity>> {
        let predicate = params.predicate()?;
        self.with_database(move |db| db.search(&predicate)).await
    }

    /// Retrieves one record by identifier.
    ///
    /// Fails with `AtlasError::NotFound` when the identifier does not exist.
    pub async fn load<E: Entity>(&self, params: &Id) -> Result<E> {
        let id = params.id;
        self.with_database(move |db| db.load::<E>(id)).await
    }

    /// Overwrites an existing record, identified by its own ID.
    pub async fn save<E: Entity>(&self, record: E) -> Result<E> {
        self.with_database(move |db| db.update(&record)).await
    }

    /// Stores a record under a newly allocated identifier.
    pub async fn save_new<E: Entity>(&self, record: E) -> Result<E> {
        self.with_database(move |db| db.insert(&record)).await
    }
}
