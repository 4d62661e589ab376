use itinerary_core::{CreateTrip, Locale, Session, SessionBuilder, SqliteStore};
use tempfile::TempDir;

/// Locale used by every test session so results do not depend on the host.
pub fn test_locale() -> Locale {
    Locale {
        currency: "EUR".to_string(),
        timezone: None,
    }
}

/// Helper function to create a test session backed by a temporary database
pub fn create_test_session() -> (TempDir, Session<SqliteStore>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let session = open_session(&temp_dir, CreateTrip::default());
    (temp_dir, session)
}

/// Opens (or reopens) the session stored in `temp_dir`
pub fn open_session(temp_dir: &TempDir, fallback: CreateTrip) -> Session<SqliteStore> {
    SessionBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_fallback(fallback)
        .with_locale(test_locale())
        .build()
        .expect("Failed to open session")
}
