//! Continent model definition.

use rusqlite::{types::Value, Row};
use serde::{Deserialize, Serialize};

use super::{id_at, text_value, Entity, Record};
use crate::{
    error::Result,
    schema::{EntitySchema, CONTINENT},
};

/// A continent row. Continents have no optional fields and no parents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Continent {
    /// Unique identifier, assigned on first save
    #[serde(default)]
    pub continent_id: u64,

    /// Short code such as `AF`
    pub continent_code: String,

    pub name: String,
}

impl Continent {
    /// Creates an unsaved continent.
    pub fn new(continent_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            continent_id: 0,
            continent_code: continent_code.into(),
            name: name.into(),
        }
    }
}

impl Entity for Continent {
    fn schema() -> &'static EntitySchema {
        &CONTINENT
    }

    fn id(&self) -> u64 {
        self.continent_id
    }

    fn with_id(self, id: u64) -> Self {
        Self {
            continent_id: id,
            ..self
        }
    }

    fn column_values(&self) -> Result<Vec<Value>> {
        Ok(vec![text_value(&self.continent_code), text_value(&self.name)])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            continent_id: id_at(row, 0)?,
            continent_code: row.get(1)?,
            name: row.get(2)?,
        })
    }

    fn into_record(self) -> Record {
        Record::Continent(self)
    }
}
