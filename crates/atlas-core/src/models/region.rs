//! Region model definition.

use rusqlite::{types::Value, Row};
use serde::{Deserialize, Serialize};

use super::{id_at, id_value, optional_value, text_value, Entity, Record};
use crate::{
    error::Result,
    schema::{EntitySchema, REGION},
};

/// A region row, owned by one country and one continent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    /// Unique identifier, assigned on first save
    #[serde(default)]
    pub region_id: u64,

    /// Globally unique code such as `DZ-01`
    pub region_code: String,

    /// Code within the owning country
    pub local_code: String,

    pub name: String,

    /// Must reference an existing continent
    pub continent_id: u64,

    /// Must reference an existing country
    pub country_id: u64,

    #[serde(default)]
    pub wikipedia_link: Option<String>,

    #[serde(default)]
    pub keywords: Option<String>,
}

impl Region {
    /// Creates an unsaved region without optional fields.
    pub fn new(
        region_code: impl Into<String>,
        local_code: impl Into<String>,
        name: impl Into<String>,
        continent_id: u64,
        country_id: u64,
    ) -> Self {
        Self {
            region_id: 0,
            region_code: region_code.into(),
            local_code: local_code.into(),
            name: name.into(),
            continent_id,
            country_id,
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

impl Entity for Region {
    fn schema() -> &'static EntitySchema {
        &REGION
    }

    fn id(&self) -> u64 {
        self.region_id
    }

    fn with_id(self, id: u64) -> Self {
        Self {
            region_id: id,
            ..self
        }
    }

    fn column_values(&self) -> Result<Vec<Value>> {
        Ok(vec![
            text_value(&self.region_code),
            text_value(&self.local_code),
            text_value(&self.name),
            id_value("continent_id", self.continent_id)?,
            id_value("country_id", self.country_id)?,
            optional_value(&self.wikipedia_link),
            optional_value(&self.keywords),
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            region_id: id_at(row, 0)?,
            region_code: row.get(1)?,
            local_code: row.get(2)?,
            name: row.get(3)?,
            continent_id: id_at(row, 4)?,
            country_id: id_at(row, 5)?,
            wikipedia_link: row.get(6)?,
            keywords: row.get(7)?,
        })
    }

    fn into_record(self) -> Record {
        Record::Region(self)
    }
}
