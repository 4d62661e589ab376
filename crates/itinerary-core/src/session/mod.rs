//! The session: one current trip bound to its store.
//!
//! A [`Session`] is what interface layers talk to. It loads the stored trip
//! (or creates one), keeps it consistent, and writes it back after every
//! mutation:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interface     │    │     Session     │    │   TripGateway   │
//! │  (CLI handler)  │───▶│ (Trip + engine) │───▶│ (KeyValueStore) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every mutation runs fully in memory first. The snapshot is written only
//! once it has succeeded, so a rejected operation leaves both the trip and
//! the store untouched.
//!
//! # Opening
//!
//! [`Session::open`] never fails because of stored content: a missing
//! snapshot yields [`LoadOutcome::Created`] and a malformed one yields
//! [`LoadOutcome::Recovered`], both with a fresh trip built from the fallback
//! parameters. Whatever was loaded is reconciled before use.
//!
//! ```rust
//! use itinerary_core::{
//!     params::{CreateItem, CreateTrip, MoveItem},
//!     session::{LoadOutcome, Session},
//!     store::MemoryStore,
//! };
//!
//! let fallback = CreateTrip {
//!     currency: Some("EUR".to_string()),
//!     ..CreateTrip::default()
//! };
//! let mut session = Session::open(MemoryStore::new(), &fallback).unwrap();
//! assert_eq!(session.outcome(), &LoadOutcome::Created);
//!
//! let item = session
//!     .add_item(&CreateItem {
//!         title: "Museum".to_string(),
//!         ..CreateItem::default()
//!     })
//!     .unwrap();
//! let placement = session
//!     .move_item(&MoveItem {
//!         id: item.id.to_string(),
//!         day: 2,
//!         segment: "evening".to_string(),
//!     })
//!     .unwrap();
//! assert_eq!(placement.start_time.to_string(), "17:00");
//! ```

use jiff::civil::Date;
use log::{debug, info, warn};

use crate::{
    config::Locale,
    engine::{place, reconcile, Placement, ReconcileReport},
    error::{ItineraryError, Result},
    models::{Item, ItemStatus, SegmentId, Trip},
    params::{CreateItem, CreateTrip, ItemRef, MoveItem, SetStartDate, UpdateItem},
    store::{KeyValueStore, TripGateway},
};

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;

/// How the session obtained its trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The stored snapshot was read.
    Loaded,
    /// Nothing was stored; a new trip was created.
    Created,
    /// The stored snapshot was unreadable and was replaced by a new trip.
    Recovered { reason: String },
}

/// The current trip and the gateway it is persisted through.
pub struct Session<S> {
    gateway: TripGateway<S>,
    trip: Trip,
    outcome: LoadOutcome,
    opening_report: ReconcileReport,
}

impl<S: KeyValueStore> Session<S> {
    /// Opens a session using locale defaults detected from the environment.
    pub fn open(store: S, fallback: &CreateTrip) -> Result<Self> {
        Self::open_with_locale(store, fallback, &Locale::detect())
    }

    /// Opens a session with explicit locale defaults for a fallback trip.
    ///
    /// # Errors
    ///
    /// Returns store errors, and `InvalidInput` when a fallback trip is
    /// needed but `fallback` is not a valid trip.
    pub fn open_with_locale(store: S, fallback: &CreateTrip, locale: &Locale) -> Result<Self> {
        let mut gateway = TripGateway::new(store);

        let (mut trip, outcome) = match gateway.try_load() {
            Ok(Some(trip)) => (trip, LoadOutcome::Loaded),
            Ok(None) => (
                Trip::create_with_locale(fallback, locale)?,
                LoadOutcome::Created,
            ),
            Err(ItineraryError::MalformedData { reason }) => {
                warn!("Stored trip is malformed, starting a new one: {reason}");
                (
                    Trip::create_with_locale(fallback, locale)?,
                    LoadOutcome::Recovered { reason },
                )
            }
            Err(e) => return Err(e),
        };

        let opening_report = reconcile(&mut trip);
        if outcome != LoadOutcome::Loaded || !opening_report.is_clean() {
            gateway.save(&trip)?;
        }
        info!(
            "Opened trip '{}' ({:?}, {} days, {} items)",
            trip.name,
            outcome,
            trip.day_count(),
            trip.item_count()
        );

        Ok(Self {
            gateway,
            trip,
            outcome,
            opening_report,
        })
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    pub fn outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    /// Repairs applied while opening.
    pub fn opening_report(&self) -> &ReconcileReport {
        &self.opening_report
    }

    pub fn gateway(&self) -> &TripGateway<S> {
        &self.gateway
    }

    /// Applies a move gesture.
    pub fn move_item(&mut self, params: &MoveItem) -> Result<Placement> {
        let id = self.trip.resolve_id(&params.id)?;
        let segment = SegmentId::from(params.segment.as_str());
        let placement = place(&mut self.trip, &id, params.day, &segment)?;
        self.persist()?;
        Ok(placement)
    }

    pub fn add_item(&mut self, params: &CreateItem) -> Result<Item> {
        let item = self.trip.add_item(params)?;
        self.persist()?;
        Ok(item)
    }

    pub fn update_item(&mut self, params: &UpdateItem) -> Result<Item> {
        let item = self.trip.update_item(params)?;
        self.persist()?;
        Ok(item)
    }

    /// Soft-deletes an item. It stays in its bucket with status `Removed`.
    pub fn remove_item(&mut self, params: &ItemRef) -> Result<Item> {
        self.change_status(params, ItemStatus::Removed)
    }

    pub fn restore_item(&mut self, params: &ItemRef) -> Result<Item> {
        self.change_status(params, ItemStatus::Active)
    }

    fn change_status(&mut self, params: &ItemRef, status: ItemStatus) -> Result<Item> {
        let id = self.trip.resolve_id(&params.id)?;
        let item = self.trip.set_status(&id, status)?;
        self.persist()?;
        Ok(item)
    }

    pub fn set_start_date(&mut self, params: &SetStartDate) -> Result<Option<Date>> {
        self.trip.set_start_date(params.date);
        self.persist()?;
        Ok(self.trip.start_date)
    }

    /// Runs a reconcile pass, saving only if something was repaired.
    pub fn reconcile(&mut self) -> Result<ReconcileReport> {
        let report = reconcile(&mut self.trip);
        if !report.is_clean() {
            self.persist()?;
        }
        Ok(report)
    }

    /// Replaces the current trip with a new one.
    pub fn reset(&mut self, params: &CreateTrip) -> Result<&Trip> {
        self.reset_with_locale(params, &Locale::detect())
    }

    pub fn reset_with_locale(&mut self, params: &CreateTrip, locale: &Locale) -> Result<&Trip> {
        self.trip = Trip::create_with_locale(params, locale)?;
        self.persist()?;
        Ok(&self.trip)
    }

    /// Replaces the current trip with one read from a snapshot.
    ///
    /// The snapshot is reconciled before it becomes current. A malformed
    /// snapshot is rejected and the current trip kept.
    pub fn import(&mut self, blob: &str) -> Result<ReconcileReport> {
        let mut trip = Trip::deserialize(blob)?;
        let report = reconcile(&mut trip);
        self.trip = trip;
        self.persist()?;
        Ok(report)
    }

    /// The current trip as an indented snapshot.
    pub fn export(&self) -> Result<String> {
        self.trip.serialize_pretty()
    }

    fn persist(&mut self) -> Result<()> {
        debug!("Persisting trip '{}'", self.trip.name);
        self.gateway.save(&self.trip)
    }
}
