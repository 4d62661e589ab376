//! Persistence for trip snapshots.
//!
//! Storage is split into two layers:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │      Trip       │    │   TripGateway   │    │  KeyValueStore  │
//! │ (domain value)  │◀──▶│ (JSON blob at   │◀──▶│ (SqliteStore or │
//! │                 │    │  "currentTrip") │    │  MemoryStore)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! [`KeyValueStore`] knows nothing about trips; it stores strings under
//! string keys. [`TripGateway`] owns the well-known key and the snapshot
//! format, and decides how malformed data surfaces.

use crate::error::Result;

pub mod gateway;
pub mod memory;
pub mod sqlite;

pub use gateway::{TripGateway, TRIP_KEY};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// String storage keyed by string.
pub trait KeyValueStore {
    /// Reads the value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes the value under `key`. Returns whether a value was present.
    fn remove(&mut self, key: &str) -> Result<bool>;
}
