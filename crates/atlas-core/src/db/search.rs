//! Predicate search and point lookup.

use log::debug;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::{
    error::{AtlasError, DatabaseResultExt, Result},
    models::{sql_id, Entity},
    query::Predicate,
};

impl super::Database {
    /// Runs a search and maps every matching row into `E`.
    ///
    /// Rows come back in storage order; no ordering is imposed.
    pub fn search<E: Entity>(&self, predicate: &Predicate<E>) -> Result<Vec<E>> {
        let sql = predicate.sql();
        debug!("Searching {}: {sql}", E::kind());

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare search query")?;

        let records = stmt
            .query_map(params_from_iter(predicate.params()), |row| E::from_row(row))
            .db_context("Failed to run search query")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch search results")?;

        debug!("Search on {} matched {} rows", E::kind(), records.len());
        Ok(records)
    }

    /// Retrieves a record by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `AtlasError::NotFound` when no row has this identifier,
    /// `AtlasError::InvalidInput` when the identifier is beyond what SQLite
    /// stores, and `AtlasError::Database` for any other storage failure.
    pub fn load<E: Entity>(&self, id: u64) -> Result<E> {
        find_in(&self.connection, id)?.ok_or(AtlasError::NotFound { kind: E::kind(), id })
    }
}

/// Point lookup usable on a plain connection or inside a transaction.
pub(super) fn find_in<E: Entity>(connection: &Connection, id: u64) -> Result<Option<E>> {
    let schema = E::schema();
    let id = sql_id(schema.id_column(), id)?;

    connection
        .query_row(&schema.select_by_id_sql(), params![id], |row| E::from_row(row))
        .optional()
        .db_context("Failed to query record")
}

#[cfg(test)]
mod tests {
    use crate::{
        db::Database,
        error::AtlasError,
        models::{Continent, Country, Entity},
        query::Predicate,
    };

    fn seeded_db() -> Database {
        let mut db = Database::in_memory().expect("in-memory database");
        db.insert(&Continent::new("AF", "Africa")).expect("insert Africa");
        db.insert(&Continent::new("EU", "Europe")).expect("insert Europe");
        db.insert(&Continent::new("AF", "Afrique")).expect("insert duplicate code");
        db
    }

    #[test]
    fn test_unrestricted_search_returns_everything() {
        let db = seeded_db();
        let all = db.search(&Predicate::<Continent>::all()).expect("search");
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_search_may_return_several_matches() {
        let db = seeded_db();
        let predicate =
            Predicate::<Continent>::for_fields([("continent_code", Some("AF")), ("name", None)])
                .expect("predicate");
        let found = db.search(&predicate).expect("search");

        let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(found.len(), 2);
        assert!(names.contains(&"Africa"));
        assert!(names.contains(&"Afrique"));
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let db = seeded_db();
        let predicate = Predicate::<Country>::for_fields([("country_code", Some("ZZ"))])
            .expect("predicate");
        assert!(db.search(&predicate).expect("search").is_empty());
    }

    #[test]
    fn test_load_missing_identifier_is_not_found() {
        let db = seeded_db();
        let err = db.load::<Continent>(999).expect_err("no such continent");
        assert!(matches!(
            err,
            AtlasError::NotFound { id: 999, .. }
        ));
        assert_eq!(err.to_string(), "continent with ID 999 not found");
    }

    #[test]
    fn test_load_returns_mapped_record() {
        let db = seeded_db();
        let europe = db.load::<Continent>(2).expect("load");
        assert_eq!(europe.id(), 2);
        assert_eq!(europe.continent_code, "EU");
    }

    #[test]
    fn test_load_beyond_sqlite_range_is_invalid_input() {
        let db = seeded_db();
        let err = db.load::<Continent>(u64::MAX).expect_err("identifier out of range");

        assert!(matches!(err, AtlasError::InvalidInput { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_negative_stored_identifier_is_not_wrapped() {
        let db = seeded_db();
        db.connection
            .execute(
                "INSERT INTO continent (continent_id, continent_code, name) \
                 VALUES (-5, 'XX', 'Nowhere')",
                [],
            )
            .expect("raw insert");

        let predicate = Predicate::<Continent>::for_fields([("continent_code", Some("XX"))])
            .expect("predicate");
        let err = db
            .search(&predicate)
            .expect_err("negative identifier must not map");
        assert!(matches!(err, AtlasError::Database { .. }));
    }
}
