//! Trip snapshots on top of a key-value store.

use log::{debug, warn};

use super::KeyValueStore;
use crate::{
    error::{ItineraryError, Result},
    models::Trip,
};

/// Key under which the current trip is stored.
pub const TRIP_KEY: &str = "currentTrip";

/// Saves and loads the current trip as a JSON snapshot.
pub struct TripGateway<S> {
    store: S,
}

impl<S: KeyValueStore> TripGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes the trip's snapshot, replacing the previous one.
    pub fn save(&mut self, trip: &Trip) -> Result<()> {
        let blob = trip.serialize()?;
        self.store.set(TRIP_KEY, &blob)?;
        debug!("Saved trip '{}' ({} bytes)", trip.name, blob.len());
        Ok(())
    }

    /// Loads the stored trip.
    ///
    /// Returns `Ok(None)` when nothing is stored and also when the stored
    /// snapshot cannot be parsed; the latter is logged. Store failures are
    /// still errors.
    pub fn load(&self) -> Result<Option<Trip>> {
        match self.try_load() {
            Err(ItineraryError::MalformedData { reason }) => {
                warn!("Ignoring malformed trip snapshot: {reason}");
                Ok(None)
            }
            other => other,
        }
    }

    /// Loads the stored trip, surfacing `MalformedData` for a bad snapshot.
    pub fn try_load(&self) -> Result<Option<Trip>> {
        match self.raw()? {
            Some(blob) => Trip::deserialize(&blob).map(Some),
            None => Ok(None),
        }
    }

    /// The stored snapshot text, unparsed.
    pub fn raw(&self) -> Result<Option<String>> {
        self.store.get(TRIP_KEY)
    }

    /// Deletes the stored snapshot. Returns whether one existed.
    pub fn clear(&mut self) -> Result<bool> {
        self.store.remove(TRIP_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_missing_snapshot_is_absent() {
        let gateway = TripGateway::new(MemoryStore::new());
        assert!(gateway.load().unwrap().is_none());
        assert!(gateway.try_load().unwrap().is_none());
        assert!(gateway.raw().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let mut gateway = TripGateway::new(MemoryStore::new());
        let trip = Trip::create("Lisbon", Some("EUR"), 2).unwrap();
        gateway.save(&trip).unwrap();

        assert_eq!(gateway.load().unwrap(), Some(trip));
        assert!(gateway.raw().unwrap().unwrap().contains("\"segmentBoundaries\""));
        assert!(gateway.clear().unwrap());
        assert!(gateway.load().unwrap().is_none());
    }

    #[test]
    fn test_malformed_snapshot() {
        let mut store = MemoryStore::new();
        store.set(TRIP_KEY, "{not json").unwrap();
        let gateway = TripGateway::new(store);

        assert!(gateway.load().unwrap().is_none());
        assert!(matches!(
            gateway.try_load(),
            Err(ItineraryError::MalformedData { .. })
        ));
        // The bad snapshot is left in place
        assert_eq!(gateway.raw().unwrap().as_deref(), Some("{not json"));
    }
}
