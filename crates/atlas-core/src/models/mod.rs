//! Data models for continents, countries and regions.
//!
//! Each model is a flat record mirroring one table row. Display
//! implementations live in [`crate::display::models`].
//!
//! All three implement [`Entity`], which ties a record type to its
//! [`EntitySchema`] and provides the positional conversion between the
//! struct and a SQL row. The generic query and upsert code in [`crate::db`]
//! only ever talks to this trait.
//!
//! # Optional fields
//!
//! `wikipedia_link` and `keywords` are `Option<String>`. When a record is
//! written, both `None` and `Some("")` are persisted as NULL, so a record
//! read back always carries `None` for them.
//!
//! ```rust
//! use atlas_core::models::Country;
//!
//! let country = Country::new("DZ", "Algeria", 1).with_keywords("desert,sahara");
//! assert_eq!(country.wikipedia_link, None);
//! assert_eq!(country.keywords.as_deref(), Some("desert,sahara"));
//! ```

use std::fmt;

use rusqlite::{types::Value, Row};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AtlasError, Result},
    schema::{EntityKind, EntitySchema},
};

pub mod continent;
pub mod country;
pub mod region;

pub use continent::Continent;
pub use country::Country;
pub use region::Region;

/// A record type stored in one entity table.
pub trait Entity: Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The schema descriptor this record is stored under.
    fn schema() -> &'static EntitySchema;

    /// The record identifier; `0` for records that were never saved.
    fn id(&self) -> u64;

    /// Returns the record with its identifier replaced.
    fn with_id(self, id: u64) -> Self;

    /// Values of every non-identifier column, in schema order.
    ///
    /// Fails with `AtlasError::InvalidInput` when a foreign key cannot be
    /// stored as a SQLite integer.
    fn column_values(&self) -> Result<Vec<Value>>;

    /// Builds the record from a row selected with
    /// [`EntitySchema::select_list`].
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Wraps the record for kind-agnostic consumers.
    fn into_record(self) -> Record;

    fn kind() -> EntityKind {
        Self::schema().kind
    }
}

/// Any one entity record, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Continent(Continent),
    Country(Country),
    Region(Region),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Continent(_) => EntityKind::Continent,
            Record::Country(_) => EntityKind::Country,
            Record::Region(_) => EntityKind::Region,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Record::Continent(c) => c.id(),
            Record::Country(c) => c.id(),
            Record::Region(r) => r.id(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Continent(c) => fmt::Display::fmt(c, f),
            Record::Country(c) => fmt::Display::fmt(c, f),
            Record::Region(r) => fmt::Display::fmt(r, f),
        }
    }
}

/// Reads an identifier or foreign-key column; negative values are refused.
pub(crate) fn id_at(row: &Row<'_>, index: usize) -> rusqlite::Result<u64> {
    let raw: i64 = row.get(index)?;
    u64::try_from(raw).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(index, raw))
}

/// Converts an identifier to the signed integer SQLite stores.
pub(crate) fn sql_id(column: &str, id: u64) -> Result<i64> {
    i64::try_from(id).map_err(|_| {
        AtlasError::invalid_input(column)
            .with_reason(format!("{id} exceeds the largest storable identifier {}", i64::MAX))
    })
}

pub(crate) fn id_value(column: &str, id: u64) -> Result<Value> {
    sql_id(column, id).map(Value::Integer)
}

pub(crate) fn text_value(text: &str) -> Value {
    Value::Text(text.to_string())
}

pub(crate) fn optional_value(text: &Option<String>) -> Value {
    match text {
        Some(text) => Value::Text(text.clone()),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests;
