//! Country model definition.

use rusqlite::{types::Value, Row};
use serde::{Deserialize, Serialize};

use super::{id_at, id_value, optional_value, text_value, Entity, Record};
use crate::{
    error::Result,
    schema::{EntitySchema, COUNTRY},
};

/// A country row, owned by one continent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    /// Unique identifier, assigned on first save
    #[serde(default)]
    pub country_id: u64,

    /// ISO-style code such as `DZ`
    pub country_code: String,

    pub name: String,

    /// Must reference an existing continent
    pub continent_id: u64,

    #[serde(default)]
    pub wikipedia_link: Option<String>,

    /// Free-form, usually comma-separated search keywords
    #[serde(default)]
    pub keywords: Option<String>,
}

impl Country {
    /// Creates an unsaved country without optional fields.
    pub fn new(country_code: impl Into<String>, name: impl Into<String>, continent_id: u64) -> Self {
        Self {
            country_id: 0,
            country_code: country_code.into(),
            name: name.into(),
            continent_id,
            wikipedia_link: None,
            keywords: None,
        }
    }

    pub fn with_wikipedia_link(mut self, link: impl Into<String>) -> Self {
        self.wikipedia_link = Some(link.into());
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }
}

impl Entity for Country {
    fn schema() -> &'static EntitySchema {
        &COUNTRY
    }

    fn id(&self) -> u64 {
        self.country_id
    }

    fn with_id(self, id: u64) -> Self {
        Self {
            country_id: id,
            ..self
        }
    }

    fn column_values(&self) -> Result<Vec<Value>> {
        Ok(vec![
            text_value(&self.country_code),
            text_value(&self.name),
            id_value("continent_id", self.continent_id)?,
            optional_value(&self.wikipedia_link),
            optional_value(&self.keywords),
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            country_id: id_at(row, 0)?,
            country_code: row.get(1)?,
            name: row.get(2)?,
            continent_id: id_at(row, 3)?,
            wikipedia_link: row.get(4)?,
            keywords: row.get(5)?,
        })
    }

    fn into_record(self) -> Record {
        Record::Country(self)
    }
}
