//! Core library for the atlas geographic database engine.
//!
//! The crate mediates between a user interface and a SQLite database of
//! continents, countries and regions. A UI sends request events; the engine
//! turns each into parameterized statements and answers with result events.
//!
//! # Layers
//!
//! - [`schema`]: one static descriptor per entity kind (identifier, required
//!   and optional columns, foreign keys, search fields)
//! - [`models`]: the record types and the [`Entity`] trait tying them to a
//!   schema
//! - [`query`]: search predicates built from whichever fields are present
//! - [`db`]: the connection, point lookups, and the insert/update paths with
//!   identifier allocation
//! - [`engine`]: async facade opening one connection per operation
//! - [`events`] and [`session`]: request/response events and their dispatch
//! - [`display`]: markdown formatting for the CLI
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use atlas_core::{models::Country, params::SearchCountries, EngineBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = EngineBuilder::new()
//!     .with_database_path(Some("airport.db"))
//!     .build()
//!     .await?;
//!
//! // An empty optional field is stored as NULL.
//! let algeria = engine
//!     .save_new(Country {
//!         wikipedia_link: Some(String::new()),
//!         ..Country::new("DZ", "Algeria", 1).with_keywords("desert,sahara")
//!     })
//!     .await?;
//! assert_eq!(algeria.wikipedia_link, None);
//!
//! let matches = engine
//!     .search(&SearchCountries {
//!         country_code: Some("DZ".to_string()),
//!         name: None,
//!     })
//!     .await?;
//! for country in &matches {
//!     println!("{country}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod events;
pub mod models;
pub mod params;
pub mod query;
pub mod schema;
pub mod session;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, OperationStatus, Records, UpdateResult};
pub use engine::{Engine, EngineBuilder};
pub use error::{AtlasError, Result};
pub use events::{LoadFailure, Request, Response, SaveFailure};
pub use models::{Continent, Country, Entity, Record, Region};
pub use params::{Id, SearchContinents, SearchCountries, SearchParams, SearchRegions};
pub use query::Predicate;
pub use schema::{EntityKind, EntitySchema};
pub use session::Session;
