//! Parameter structures for atlas operations.
//!
//! These structures are shared by every interface (CLI, event protocol)
//! without framework-specific derives. Interface layers wrap them with their
//! own derives and convert via `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Event Requests │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Continent, Country, Entity, Region},
    query::Predicate,
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the record to operate on
    pub id: u64,
}

/// A sparse set of search values for one entity kind.
///
/// Implementors list their fields in a fixed order; absent values are
/// `None` or the empty string.
pub trait SearchParams {
    type Entity: Entity;

    /// `(field name, candidate value)` pairs in request order.
    fn fields(&self) -> Vec<(&'static str, Option<&str>)>;

    /// Builds the search predicate for these values.
    fn predicate(&self) -> Result<Predicate<Self::Entity>> {
        Predicate::for_fields(self.fields())
    }
}

/// Parameters for searching continents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchContinents {
    #[serde(default)]
    pub continent_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl SearchParams for SearchContinents {
    type Entity = Continent;

    fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("continent_code", self.continent_code.as_deref()),
            ("name", self.name.as_deref()),
        ]
    }
}

/// Parameters for searching countries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCountries {
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl SearchParams for SearchCountries {
    type Entity = Country;

    fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("country_code", self.country_code.as_deref()),
            ("name", self.name.as_deref()),
        ]
    }
}

/// Parameters for searching regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRegions {
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub local_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl SearchParams for SearchRegions {
    type Entity = Region;

    fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("region_code", self.region_code.as_deref()),
            ("local_code", self.local_code.as_deref()),
            ("name", self.name.as_deref()),
        ]
    }
}
