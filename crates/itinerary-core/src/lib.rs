//! Core library for the itinerary planner.
//!
//! This crate holds the trip model, the placement and reconciliation engine,
//! snapshot persistence and the markdown display layer.
//!
//! # Display Architecture
//!
//! Output is produced with [`std::fmt::Display`]:
//!
//! - **Domain Models** ([`models`]): items, categories, segments and the trip
//!   header format themselves
//! - **Display Wrappers** ([`display`]): the schedule view, compact item
//!   cards and operation results
//! - **Terminal Rendering**: markdown output via the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use itinerary_core::{
//!     display::ScheduleView,
//!     params::{CreateItem, CreateTrip, MoveItem},
//!     SessionBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open the trip stored at a custom path, creating a 4-day trip if none
//! // exists yet
//! let mut session = SessionBuilder::new()
//!     .with_database_path(Some("trip.db"))
//!     .with_fallback(CreateTrip {
//!         name: "Kyoto".to_string(),
//!         days: 4,
//!         ..CreateTrip::default()
//!     })
//!     .build()?;
//!
//! let item = session.add_item(&CreateItem {
//!     title: "Fushimi Inari".to_string(),
//!     ..CreateItem::default()
//! })?;
//!
//! // Drag it to the afternoon of the second day
//! session.move_item(&MoveItem {
//!     id: item.id.to_string(),
//!     day: 1,
//!     segment: "afternoon".to_string(),
//! })?;
//!
//! println!("{}", ScheduleView::full(session.trip()));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use config::Locale;
pub use display::{CreateResult, MoveResult, Notice, ReconcileResult, ScheduleView, UpdateResult};
pub use engine::{place, reconcile, Placement, ReconcileReport};
pub use error::{ItineraryError, Result};
pub use models::{Category, ClockTime, Day, Item, ItemId, ItemStatus, SegmentId, Trip};
pub use params::{CreateItem, CreateTrip, ItemRef, MoveItem, SetStartDate, UpdateItem};
pub use session::{LoadOutcome, Session, SessionBuilder};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, TripGateway};
