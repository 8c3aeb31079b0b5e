//! Request and response events exchanged with a user interface.
//!
//! The UI sends one [`Request`] at a time and receives zero or more
//! [`Response`] events back. Both are internally tagged with a `type` field
//! so they travel as plain JSON objects:
//!
//! ```json
//! {"type": "search_countries", "country_code": "DZ"}
//! {"type": "search_result", "record": {"kind": "country", "country_id": 3, ...}}
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    error::AtlasError,
    models::{Continent, Country, Record, Region},
    params::{SearchContinents, SearchCountries, SearchRegions},
    schema::EntityKind,
};

/// Everything a UI can ask the engine to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    OpenDatabase { path: PathBuf },
    CloseDatabase,
    Quit,

    SearchContinents(SearchContinents),
    LoadContinent { id: u64 },
    SaveContinent { continent: Continent },
    SaveNewContinent { continent: Continent },

    SearchCountries(SearchCountries),
    LoadCountry { id: u64 },
    SaveCountry { country: Country },
    SaveNewCountry { country: Country },

    SearchRegions(SearchRegions),
    LoadRegion { id: u64 },
    SaveRegion { region: Region },
    SaveNewRegion { region: Region },
}

/// Why a point lookup produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFailure {
    NotFound,
    Storage,
}

/// Why a save was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveFailure {
    /// A foreign key does not reference an existing parent row
    ReferentialIntegrity,
    /// The record to update does not exist
    NotFound,
    /// Another storage constraint rejected the row
    Constraint,
    Storage,
}

/// Everything the engine can tell a UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    DatabaseOpened {
        path: PathBuf,
    },
    DatabaseOpenFailed {
        message: String,
    },
    DatabaseClosed,
    EndApplication,

    /// One matching record; a search yields one event per match.
    SearchResult {
        record: Record,
    },
    Loaded {
        record: Record,
    },
    LoadFailed {
        kind: EntityKind,
        reason: LoadFailure,
        message: String,
    },
    Saved {
        record: Record,
    },
    SaveFailed {
        kind: EntityKind,
        reason: SaveFailure,
        message: String,
    },

    /// A request that could not be handled at all.
    Error {
        message: String,
    },
}

impl Response {
    /// Converts a failed point lookup into its response.
    pub fn load_failed(kind: EntityKind, err: &AtlasError) -> Self {
        let reason = match err {
            AtlasError::NotFound { .. } => LoadFailure::NotFound,
            _ => LoadFailure::Storage,
        };
        Response::LoadFailed {
            kind,
            reason,
            message: err.to_string(),
        }
    }

    /// Converts a failed insert or update into its response.
    pub fn save_failed(kind: EntityKind, err: &AtlasError) -> Self {
        let reason = match err {
            AtlasError::ReferentialIntegrity { .. } => SaveFailure::ReferentialIntegrity,
            AtlasError::NotFound { .. } => SaveFailure::NotFound,
            AtlasError::Constraint { .. } => SaveFailure::Constraint,
            _ => SaveFailure::Storage,
        };
        Response::SaveFailed {
            kind,
            reason,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_json() {
        let request: Request =
            serde_json::from_str(r#"{"type": "search_regions", "name": "Adrar"}"#)
                .expect("deserialize");
        assert_eq!(
            request,
            Request::SearchRegions(SearchRegions {
                name: Some("Adrar".into()),
                ..Default::default()
            })
        );

        let request: Request = serde_json::from_str(
            r#"{"type": "save_new_continent", "continent": {"continent_code": "AF", "name": "Africa"}}"#,
        )
        .expect("deserialize");
        assert_eq!(
            request,
            Request::SaveNewContinent {
                continent: Continent::new("AF", "Africa")
            }
        );
    }

    #[test]
    fn test_unit_requests_from_json() {
        let request: Request = serde_json::from_str(r#"{"type": "quit"}"#).expect("deserialize");
        assert_eq!(request, Request::Quit);
    }

    #[test]
    fn test_response_to_json() {
        let response = Response::SaveFailed {
            kind: EntityKind::Region,
            reason: SaveFailure::ReferentialIntegrity,
            message: "FOREIGN KEY constraint failed".into(),
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["type"], "save_failed");
        assert_eq!(json["kind"], "region");
        assert_eq!(json["reason"], "referential_integrity");
    }

    #[test]
    fn test_failure_classification() {
        let not_found = AtlasError::NotFound {
            kind: EntityKind::Country,
            id: 7,
        };
        assert!(matches!(
            Response::load_failed(EntityKind::Country, &not_found),
            Response::LoadFailed {
                reason: LoadFailure::NotFound,
                ..
            }
        ));
        assert!(matches!(
            Response::save_failed(EntityKind::Country, &not_found),
            Response::SaveFailed {
                reason: SaveFailure::NotFound,
                ..
            }
        ));

        let config = AtlasError::Configuration {
            message: "boom".into(),
        };
        assert!(matches!(
            Response::load_failed(EntityKind::Country, &config),
            Response::LoadFailed {
                reason: LoadFailure::Storage,
                ..
            }
        ));
    }
}
