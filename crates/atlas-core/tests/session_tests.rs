mod common;

use atlas_core::{
    models::{Continent, Country, Region},
    params::{SearchContinents, SearchCountries},
    EntityKind, LoadFailure, Record, Request, Response, SaveFailure, Session,
};
use tempfile::TempDir;

use common::create_test_db_file;

/// Helper function to create a session with an open database
async fn create_open_session() -> (TempDir, Session) {
    let (temp_dir, db_path) = create_test_db_file();
    let mut session = Session::new();
    let responses = session
        .process(Request::OpenDatabase { path: db_path.clone() })
        .await;
    assert_eq!(responses, vec![Response::DatabaseOpened { path: db_path }]);
    (temp_dir, session)
}

/// Sends one save request and returns the saved record.
async fn save(session: &mut Session, request: Request) -> Record {
    match session.process(request).await.as_slice() {
        [Response::Saved { record }] => record.clone(),
        other => panic!("Expected a single Saved event, got {other:?}"),
    }
}

#[tokio::test]
async fn test_open_requires_db_extension() {
    let (_temp_dir, db_path) = create_test_db_file();
    let renamed = db_path.with_extension("sqlite");
    std::fs::rename(&db_path, &renamed).expect("Failed to rename database");

    let mut session = Session::new();
    let responses = session
        .process(Request::OpenDatabase { path: renamed })
        .await;

    assert!(matches!(
        responses.as_slice(),
        [Response::DatabaseOpenFailed { .. }]
    ));
    assert!(!session.is_open());
}

#[tokio::test]
async fn test_failed_open_closes_previous_database() {
    let (temp_dir, mut session) = create_open_session().await;
    let missing = temp_dir.path().join("other.db");

    let responses = session
        .process(Request::OpenDatabase { path: missing })
        .await;
    assert!(matches!(
        responses.as_slice(),
        [Response::DatabaseOpenFailed { .. }]
    ));
    assert!(!session.is_open());

    let responses = session
        .process(Request::SearchContinents(SearchContinents::default()))
        .await;
    assert_eq!(
        responses,
        vec![Response::Error {
            message: "No database is open".to_string()
        }]
    );
}

#[tokio::test]
async fn test_open_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("absent.db");

    let mut session = Session::new();
    let responses = session
        .process(Request::OpenDatabase {
            path: db_path.clone(),
        })
        .await;

    assert!(matches!(
        responses.as_slice(),
        [Response::DatabaseOpenFailed { .. }]
    ));
    assert!(!db_path.exists());
}

#[tokio::test]
async fn test_requests_without_database_report_error() {
    let mut session = Session::new();

    let responses = session
        .process(Request::SearchContinents(SearchContinents::default()))
        .await;
    assert_eq!(
        responses,
        vec![Response::Error {
            message: "No database is open".to_string()
        }]
    );

    let responses = session.process(Request::LoadRegion { id: 1 }).await;
    assert!(matches!(responses.as_slice(), [Response::Error { .. }]));
}

#[tokio::test]
async fn test_search_emits_one_event_per_match() {
    let (_temp_dir, mut session) = create_open_session().await;
    for (code, name) in [("AF", "Africa"), ("EU", "Europe"), ("AS", "Asia")] {
        save(
            &mut session,
            Request::SaveNewContinent {
                continent: Continent::new(code, name),
            },
        )
        .await;
    }

    let responses = session
        .process(Request::SearchContinents(SearchContinents::default()))
        .await;
    assert_eq!(responses.len(), 3);
    assert!(responses
        .iter()
        .all(|r| matches!(r, Response::SearchResult { record } if record.kind() == EntityKind::Continent)));

    let responses = session
        .process(Request::SearchContinents(SearchContinents {
            continent_code: Some("XX".to_string()),
            name: None,
        }))
        .await;
    assert!(responses.is_empty());
}

#[tokio::test]
async fn test_saved_country_matches_later_search() {
    let (_temp_dir, mut session) = create_open_session().await;
    let africa = save(
        &mut session,
        Request::SaveNewContinent {
            continent: Continent::new("AF", "Africa"),
        },
    )
    .await;

    let mut algeria = Country::new("DZ", "Algeria", africa.id()).with_keywords("desert,sahara");
    algeria.wikipedia_link = Some(String::new());
    let saved = save(&mut session, Request::SaveNewCountry { country: algeria }).await;

    match &saved {
        Record::Country(country) => {
            assert_eq!(country.country_id, 1);
            assert_eq!(country.wikipedia_link, None);
        }
        other => panic!("Expected a country, got {other:?}"),
    }

    let responses = session
        .process(Request::SearchCountries(SearchCountries {
            country_code: Some("DZ".to_string()),
            name: None,
        }))
        .await;
    assert_eq!(responses, vec![Response::SearchResult { record: saved }]);
}

#[tokio::test]
async fn test_load_missing_record_reports_not_found() {
    let (_temp_dir, mut session) = create_open_session().await;

    let responses = session.process(Request::LoadCountry { id: 12 }).await;
    match responses.as_slice() {
        [Response::LoadFailed { kind, reason, .. }] => {
            assert_eq!(*kind, EntityKind::Country);
            assert_eq!(*reason, LoadFailure::NotFound);
        }
        other => panic!("Expected LoadFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_region_with_unknown_continent_fails_to_save() {
    let (_temp_dir, mut session) = create_open_session().await;
    let africa = save(
        &mut session,
        Request::SaveNewContinent {
            continent: Continent::new("AF", "Africa"),
        },
    )
    .await;
    let algeria = save(
        &mut session,
        Request::SaveNewCountry {
            country: Country::new("DZ", "Algeria", africa.id()),
        },
    )
    .await;

    let responses = session
        .process(Request::SaveNewRegion {
            region: Region::new("DZ-01", "01", "Adrar", 999, algeria.id()),
        })
        .await;
    match responses.as_slice() {
        [Response::SaveFailed { kind, reason, .. }] => {
            assert_eq!(*kind, EntityKind::Region);
            assert_eq!(*reason, SaveFailure::ReferentialIntegrity);
        }
        other => panic!("Expected SaveFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_of_missing_record_reports_not_found() {
    let (_temp_dir, mut session) = create_open_session().await;

    let mut antarctica = Continent::new("AN", "Antarctica");
    antarctica.continent_id = 7;
    let responses = session
        .process(Request::SaveContinent {
            continent: antarctica,
        })
        .await;

    assert!(matches!(
        responses.as_slice(),
        [Response::SaveFailed {
            reason: SaveFailure::NotFound,
            ..
        }]
    ));
}

#[tokio::test]
async fn test_close_and_quit() {
    let (_temp_dir, mut session) = create_open_session().await;

    assert_eq!(
        session.process(Request::CloseDatabase).await,
        vec![Response::DatabaseClosed]
    );
    assert!(!session.is_open());

    let responses = session.process(Request::LoadContinent { id: 1 }).await;
    assert!(matches!(responses.as_slice(), [Response::Error { .. }]));

    assert_eq!(
        session.process(Request::Quit).await,
        vec![Response::EndApplication]
    );
}
