//! Request dispatch for an interactive front end.
//!
//! A [`Session`] tracks which database file is open and turns every
//! [`Request`] into the response events a UI expects. Storage failures never
//! escape as errors: each is converted into a `LoadFailed`, `SaveFailed`,
//! `DatabaseOpenFailed` or `Error` event.

use std::path::Path;

use log::{info, warn};

use crate::{
    engine::{Engine, EngineBuilder},
    error::{AtlasError, Result},
    events::{Request, Response},
    models::{Continent, Country, Entity, Region},
    params::{Id, SearchParams},
};

/// File extension a storage file must carry to be opened.
pub const DATABASE_EXTENSION: &str = "db";

/// Dispatcher holding the currently open database, if any.
#[derive(Debug, Default)]
pub struct Session {
    engine: Option<Engine>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session on an engine that is already open.
    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine: Some(engine),
        }
    }

    pub fn is_open(&self) -> bool {
        self.engine.is_some()
    }

    /// Handles one request and returns the events it produces, in order.
    pub async fn process(&mut self, request: Request) -> Vec<Response> {
        match request {
            Request::OpenDatabase { path } => vec![self.open(&path).await],
            Request::CloseDatabase => {
                self.engine = None;
                vec![Response::DatabaseClosed]
            }
            Request::Quit => {
                self.engine = None;
                vec![Response::EndApplication]
            }

            Request::SearchContinents(params) => self.search(&params).await,
            Request::LoadContinent { id } => self.load::<Continent>(id).await,
            Request::SaveContinent { continent } => self.save(continent).await,
            Request::SaveNewContinent { continent } => self.save_new(continent).await,

            Request::SearchCountries(params) => self.search(&params).await,
            Request::LoadCountry { id } => self.load::<Country>(id).await,
            Request::SaveCountry { country } => self.save(country).await,
            Request::SaveNewCountry { country } => self.save_new(country).await,

            Request::SearchRegions(params) => self.search(&params).await,
            Request::LoadRegion { id } => self.load::<Region>(id).await,
            Request::SaveRegion { region } => self.save(region).await,
            Request::SaveNewRegion { region } => self.save_new(region).await,
        }
    }

    async fn open(&mut self, path: &Path) -> Response {
        match Self::open_engine(path).await {
            Ok(engine) => {
                info!("Opened database {}", path.display());
                self.engine = Some(engine);
                Response::DatabaseOpened {
                    path: path.to_path_buf(),
                }
            }
            Err(err) => {
                warn!("Refused to open {}: {err}", path.display());
                // A failed open leaves no database open, even if one was before
                self.engine = None;
                Response::DatabaseOpenFailed {
                    message: err.to_string(),
                }
            }
        }
    }

    /// Accepts only `.db` files that contain the expected tables.
    async fn open_engine(path: &Path) -> Result<Engine> {
        let has_extension = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DATABASE_EXTENSION));
        if !has_extension {
            return Err(AtlasError::Unacceptable {
                path: path.to_path_buf(),
                reason: format!("expected a .{DATABASE_EXTENSION} file"),
            });
        }

        EngineBuilder::new()
            .with_database_path(Some(path))
            .build()
            .await
    }

    fn engine(&self) -> std::result::Result<&Engine, Vec<Response>> {
        self.engine.as_ref().ok_or_else(|| {
            vec![Response::Error {
                message: "No database is open".to_string(),
            }]
        })
    }

    async fn search<P: SearchParams>(&self, params: &P) -> Vec<Response> {
        let engine = match self.engine() {
            Ok(engine) => engine,
            Err(responses) => return responses,
        };

        match engine.search(params).await {
            Ok(records) => records
                .into_iter()
                .map(|record| Response::SearchResult {
                    record: record.into_record(),
                })
                .collect(),
            Err(err) => {
                warn!("Search on {} failed: {err}", <P::Entity as Entity>::kind());
                vec![Response::Error {
                    message: err.to_string(),
                }]
            }
        }
    }

    async fn load<E: Entity>(&self, id: u64) -> Vec<Response> {
        let engine = match self.engine() {
            Ok(engine) => engine,
            Err(responses) => return responses,
        };

        let response = match engine.load::<E>(&Id { id }).await {
            Ok(record) => Response::Loaded {
                record: record.into_record(),
            },
            Err(err) => Response::load_failed(E::kind(), &err),
        };
        vec![response]
    }

    async fn save<E: Entity>(&self, record: E) -> Vec<Response> {
        let engine = match self.engine() {
            Ok(engine) => engine,
            Err(responses) => return responses,
        };

        let response = match engine.save(record).await {
            Ok(saved) => Response::Saved {
                record: saved.into_record(),
            },
            Err(err) => Response::save_failed(E::kind(), &err),
        };
        vec![response]
    }

    async fn save_new<E: Entity>(&self, record: E) -> Vec<Response> {
        let engine = match self.engine() {
            Ok(engine) => engine,
            Err(responses) => return responses,
        };

        let response = match engine.save_new(record).await {
            Ok(saved) => Response::Saved {
                record: saved.into_record(),
            },
            Err(err) => Response::save_failed(E::kind(), &err),
        };
        vec![response]
    }
}
