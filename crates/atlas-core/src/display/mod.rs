//! Display formatting for records and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context for lists and for the outcome of a save.
//! All output is markdown, rendered by the CLI either richly or as plain
//! text.
//!
//! ```rust
//! use atlas_core::{
//!     display::{CreateResult, Records},
//!     models::{Continent, Entity},
//! };
//!
//! let africa = Continent::new("AF", "Africa").with_id(1);
//! let output = format!("{}", CreateResult::new(africa.clone()));
//! assert!(output.contains("Created continent with ID: 1"));
//!
//! let listing = format!("{}", Records(vec![africa]));
//! assert!(listing.contains("# 1. Africa"));
//! assert_eq!(format!("{}", Records::<Continent>(vec![])), "No continents found.\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Records;
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;
