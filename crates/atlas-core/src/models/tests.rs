use rusqlite::types::Value;

use super::{Continent, Country, Entity, Record, Region};
use crate::{error::AtlasError, schema::EntityKind};

fn create_test_region() -> Region {
    Region::new("DZ-01", "01", "Adrar", 1, 4).with_keywords("oasis")
}

#[test]
fn test_column_values_follow_schema_order() {
    let region = create_test_region();
    let values = region.column_values().expect("column values");

    assert_eq!(values.len(), Region::schema().data_columns().len());
    assert_eq!(
        values,
        vec![
            Value::Text("DZ-01".into()),
            Value::Text("01".into()),
            Value::Text("Adrar".into()),
            Value::Integer(1),
            Value::Integer(4),
            Value::Null,
            Value::Text("oasis".into()),
        ]
    );
}

#[test]
fn test_with_id_keeps_other_fields() {
    let country = Country::new("DZ", "Algeria", 1).with_wikipedia_link("https://en.wikipedia.org/wiki/Algeria");
    let saved = country.clone().with_id(42);

    assert_eq!(saved.id(), 42);
    assert_eq!(saved.country_code, country.country_code);
    assert_eq!(saved.wikipedia_link, country.wikipedia_link);
}

#[test]
fn test_unsaved_records_have_zero_id() {
    assert_eq!(Continent::new("AF", "Africa").id(), 0);
    assert_eq!(Country::new("DZ", "Algeria", 1).id(), 0);
    assert_eq!(create_test_region().id(), 0);
}

#[test]
fn test_record_kind_and_id() {
    let record = Continent::new("AF", "Africa").with_id(1).into_record();
    assert_eq!(record.kind(), EntityKind::Continent);
    assert_eq!(record.id(), 1);
    assert_eq!(Region::kind(), EntityKind::Region);
}

#[test]
fn test_record_serializes_with_kind_tag() {
    let record = Continent::new("AF", "Africa").with_id(1).into_record();
    let json = serde_json::to_value(&record).expect("serialize record");

    assert_eq!(json["kind"], "continent");
    assert_eq!(json["continent_id"], 1);
    assert_eq!(json["continent_code"], "AF");
}

#[test]
fn test_country_deserializes_without_optional_fields() {
    let country: Country = serde_json::from_str(
        r#"{"country_code": "DZ", "name": "Algeria", "continent_id": 1}"#,
    )
    .expect("deserialize country");

    assert_eq!(country.country_id, 0);
    assert_eq!(country.wikipedia_link, None);
    assert_eq!(country.keywords, None);

    let record: Record = serde_json::from_str(
        r#"{"kind": "country", "country_id": 3, "country_code": "DZ", "name": "Algeria", "continent_id": 1, "keywords": ""}"#,
    )
    .expect("deserialize record");
    match record {
        Record::Country(country) => assert_eq!(country.keywords.as_deref(), Some("")),
        other => panic!("unexpected record {other:?}"),
    }
}

#[test]
fn test_foreign_key_beyond_sqlite_range_is_rejected() {
    let region = Region::new("DZ-01", "01", "Adrar", 1, u64::MAX);

    match region.column_values() {
        Err(AtlasError::InvalidInput { field, .. }) => assert_eq!(field, "country_id"),
        other => panic!("Expected invalid input, got {other:?}"),
    }
}
