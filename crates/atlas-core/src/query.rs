//! Search predicate construction.
//!
//! A search request carries a fixed, ordered list of `(field, value)` pairs.
//! Only the fields that carry a non-empty value take part in the filter; they
//! are compared for equality and joined with `AND`. When no field is present
//! the predicate has no `WHERE` clause at all and matches the whole table,
//! which is how the UI browses every record of a kind.
//!
//! ```rust
//! use atlas_core::{models::Region, query::Predicate};
//!
//! let predicate = Predicate::<Region>::for_fields([
//!     ("region_code", None),
//!     ("local_code", Some("01")),
//!     ("name", Some("Adrar")),
//! ])?;
//! assert_eq!(
//!     predicate.sql(),
//!     "SELECT region_id, region_code, local_code, name, continent_id, country_id, \
//!      wikipedia_link, keywords FROM region WHERE local_code = ?1 AND name = ?2"
//! );
//! # Ok::<(), atlas_core::AtlasError>(())
//! ```

use std::marker::PhantomData;

use rusqlite::types::Value;

use crate::{
    error::{AtlasError, Result},
    models::Entity,
};

/// Equality filter over the search fields of one entity kind.
#[derive(Debug, Clone)]
pub struct Predicate<E: Entity> {
    conditions: Vec<(&'static str, String)>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Predicate<E> {
    /// A predicate matching every record.
    pub fn all() -> Self {
        Self {
            conditions: Vec::new(),
            _entity: PhantomData,
        }
    }

    /// Builds a predicate from candidate values; `None` and `""` are absent.
    ///
    /// Field names are interpolated into SQL, so only the search fields
    /// declared by the entity schema are accepted.
    pub fn for_fields<'a, I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let schema = E::schema();
        let mut conditions = Vec::new();

        for (field, value) in fields {
            let column = schema
                .search_fields
                .iter()
                .copied()
                .find(|name| *name == field)
                .ok_or_else(|| {
                    AtlasError::invalid_input(field)
                        .with_reason(format!("not a search field of {}", schema.kind))
                })?;

            if let Some(value) = value.filter(|v| !v.is_empty()) {
                conditions.push((column, value.to_string()));
            }
        }

        Ok(Self {
            conditions,
            _entity: PhantomData,
        })
    }

    /// True when no field restricts the result.
    pub fn is_unrestricted(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Names of the fields taking part in the filter, in request order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.conditions.iter().map(|(name, _)| *name)
    }

    /// Renders the full `SELECT` statement with numbered placeholders.
    pub fn sql(&self) -> String {
        let mut query = E::schema().select_sql();

        if !self.conditions.is_empty() {
            let clauses = self
                .conditions
                .iter()
                .enumerate()
                .map(|(i, (name, _))| format!("{name} = ?{}", i + 1))
                .collect::<Vec<_>>();
            query.push_str(" WHERE ");
            query.push_str(&clauses.join(" AND "));
        }

        query
    }

    /// Values bound to the placeholders of [`Predicate::sql`].
    pub fn params(&self) -> Vec<Value> {
        self.conditions
            .iter()
            .map(|(_, value)| Value::Text(value.clone()))
            .collect()
    }
}

impl<E: Entity> Default for Predicate<E> {
    fn default() -> Self {
        Self::all()
    }
}
