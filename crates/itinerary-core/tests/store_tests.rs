mod common;

use itinerary_core::{
    ItineraryError, KeyValueStore, LoadOutcome, SqliteStore, Trip, TripGateway,
    store::TRIP_KEY,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary store for testing
fn create_test_store() -> (NamedTempFile, SqliteStore) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let store = SqliteStore::new(temp_file.path()).expect("Failed to create test store");
    (temp_file, store)
}

#[test]
fn test_store_initialization() {
    let (temp_file, store) = create_test_store();
    assert!(temp_file.path().exists());
    assert!(store.get(TRIP_KEY).unwrap().is_none());
}

#[test]
fn test_values_survive_reopen() {
    let (temp_file, mut store) = create_test_store();
    store.set("greeting", "hello").unwrap();
    drop(store);

    let reopened = SqliteStore::new(temp_file.path()).expect("Failed to reopen store");
    assert_eq!(reopened.get("greeting").unwrap().as_deref(), Some("hello"));
    assert!(reopened.updated_at("greeting").unwrap().is_some());
}

#[test]
fn test_gateway_round_trip_through_sqlite() {
    let (temp_file, store) = create_test_store();
    let mut gateway = TripGateway::new(store);

    let trip = Trip::create("Oslo", Some("NOK"), 4).unwrap();
    gateway.save(&trip).unwrap();
    drop(gateway);

    let gateway = TripGateway::new(SqliteStore::new(temp_file.path()).unwrap());
    assert_eq!(gateway.load().unwrap(), Some(trip));
}

#[test]
fn test_gateway_malformed_blob() {
    let (_temp_file, mut store) = create_test_store();
    store.set(TRIP_KEY, r#"{"name": "Half a trip""#).unwrap();
    let gateway = TripGateway::new(store);

    assert!(gateway.load().unwrap().is_none());
    let err = gateway.try_load().unwrap_err();
    assert!(matches!(err, ItineraryError::MalformedData { .. }));
}

#[test]
fn test_gateway_rejects_tripless_shapes() {
    let (_temp_file, mut store) = create_test_store();
    for blob in ["null", "42", r#"{"name":"x","currency":"USD","days":[]}"#] {
        store.set(TRIP_KEY, blob).unwrap();
        let err = Trip::deserialize(&store.get(TRIP_KEY).unwrap().unwrap()).unwrap_err();
        assert!(
            matches!(err, ItineraryError::MalformedData { .. }),
            "blob {blob} should be malformed"
        );
    }
}

#[test]
fn test_session_recovers_from_corrupt_database_content() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    {
        let mut store = SqliteStore::new(&db_path).unwrap();
        store.set(TRIP_KEY, "<<garbage>>").unwrap();
    }

    let session = common::open_session(&temp_dir, Default::default());
    assert!(matches!(session.outcome(), LoadOutcome::Recovered { .. }));
    assert_eq!(session.trip().currency, "EUR");

    let store = SqliteStore::new(&db_path).unwrap();
    let stored = Trip::deserialize(&store.get(TRIP_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(&stored, session.trip());
}
