//! Data models for trips, days, items, segments and categories.
//!
//! The [`Trip`] aggregate owns every [`Day`], and each day owns the [`Item`]s
//! stored in its bucket. Segments and categories are reference data held by
//! the trip. Display implementations live in [`crate::display::models`].
//!
//! The serialized form of these models is the persisted blob, so field names
//! follow the blob's camelCase spelling:
//!
//! ```rust
//! use itinerary_core::models::Trip;
//!
//! let blob = r#"{
//!     "name": "Lisbon",
//!     "currency": "EUR",
//!     "segmentBoundaries": {"morning": ["08:00", "12:00"]},
//!     "categories": [],
//!     "days": [{"date": null, "items": []}],
//!     "startDate": null,
//!     "timezone": "Europe/Lisbon"
//! }"#;
//!
//! let trip = Trip::deserialize(blob).unwrap();
//! assert_eq!(trip.day_count(), 1);
//! assert!(trip.segment_boundaries.contains("morning"));
//! ```

pub mod category;
pub mod day;
pub mod item;
pub mod segment;
pub mod trip;


pub use category::Category;
pub use day::Day;
pub use item::{Item, ItemId, ItemStatus};
pub use segment::{ClockTime, SegmentId, SegmentTable, TimeSegment};
pub use trip::Trip;
