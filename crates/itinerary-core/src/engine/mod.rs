//! Itinerary consistency engine.
//!
//! Three operations keep the schedule coherent:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   reconcile     │    │     place       │    │   projection    │
//! │ (repair buckets │───▶│ (move + snap    │───▶│ (items_for,     │
//! │  after load)    │    │  start time)    │    │  schedule)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`reconcile`] restores the invariant that every item stored in
//!   `days[k]` has day index `k`. Run it after loading and after any edit
//!   made outside the engine.
//! - [`place`] moves one item to a `(day, segment)` slot. Preconditions are
//!   checked before anything is touched.
//! - [`items_for`] and [`schedule`] are pure read views for renderers.
//!
//! All three run synchronously on a `&Trip`/`&mut Trip`; callers persist the
//! trip after a mutation completes and re-render from it.
//!
//! ```rust
//! use itinerary_core::{engine, models::{ItemId, SegmentId, Trip}, params::CreateItem};
//!
//! let mut trip = Trip::create("Kyoto", Some("JPY"), 3).unwrap();
//! let item = trip
//!     .add_item(&CreateItem {
//!         title: "Fushimi Inari".to_string(),
//!         ..CreateItem::default()
//!     })
//!     .unwrap();
//!
//! let placement = engine::place(&mut trip, &item.id, 2, &SegmentId::from("evening")).unwrap();
//! assert_eq!(placement.start_time.to_string(), "17:00");
//! assert_eq!(engine::items_for(&trip, 2, "evening").len(), 1);
//! ```

pub mod placement;
pub mod projection;
pub mod reconcile;


pub use placement::{place, Placement};
pub use projection::{day_schedule, items_for, removed_items, schedule, DaySchedule, SegmentSlot};
pub use reconcile::{reconcile, ReconcileReport, Relocation};
