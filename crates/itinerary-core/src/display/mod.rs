//! Markdown formatting of trips, schedules and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Views that need context the model does not carry, such as the trip's
//! currency or the segment table, are newtype wrappers:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views & Result  │    │   Markdown      │
//! │  (Trip, Item)   │───▶│    Wrappers     │───▶│    Output       │
//! │  + projection   │    │                 │    │  (terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: schedule and list views ([`ScheduleView`], [`ItemList`],
//!   [`SegmentList`], [`CategoryList`])
//! - [`results`]: operation outcomes ([`CreateResult`], [`MoveResult`],
//!   [`ReconcileResult`]) and one-line [`Notice`]s
//! - [`labels`]: small formatting helpers for days, times and costs
//!
//! ```rust
//! use itinerary_core::{display::ScheduleView, models::Trip, params::CreateItem};
//!
//! let mut trip = Trip::create("Oslo", Some("NOK"), 2).unwrap();
//! trip.add_item(&CreateItem {
//!     title: "Fjord cruise".to_string(),
//!     cost: Some(450.0),
//!     ..CreateItem::default()
//! })
//! .unwrap();
//!
//! let output = ScheduleView::full(&trip).to_string();
//! assert!(output.contains("## Day 1"));
//! assert!(output.contains("### Morning (08:00-12:00)"));
//! assert!(output.contains("Fjord cruise"));
//! assert!(output.contains("450.00 NOK"));
//! ```

pub mod collections;
pub mod labels;
pub mod models;
pub mod results;

pub use collections::{CategoryList, ItemList, ScheduleView, SegmentList};
pub use labels::{Cost, DayLabel, Timing};
pub use models::ItemCard;
pub use results::{CreateResult, MoveResult, Notice, ReconcileResult, UpdateResult};
