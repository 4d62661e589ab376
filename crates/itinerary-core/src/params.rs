//! Parameter structures for itinerary operations
//!
//! These structures carry requests from an interface layer (the CLI today)
//! into the core without any framework-specific derives. Interface crates
//! define their own argument types and convert into these with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │ Trip / Session  │
//! │  (clap derives) │───▶│ (serde derives) │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Day indices here are zero-based. Item identifiers are plain strings so
//! callers can pass a unique prefix; the trip resolves them.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::item::DEFAULT_DURATION_MINUTES;

/// Parameters for creating a new trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrip {
    /// Name of the trip
    pub name: String,
    /// ISO 4217 currency code; the locale default applies when absent
    pub currency: Option<String>,
    /// Number of days in the trip
    pub days: usize,
    /// Optional calendar date of the first day
    pub start_date: Option<Date>,
}

impl Default for CreateTrip {
    fn default() -> Self {
        Self {
            name: "My Trip".to_string(),
            currency: None,
            days: 3,
            start_date: None,
        }
    }
}

/// Parameters for operations that address a single item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRef {
    /// Full identifier or unique prefix of the item
    pub id: String,
}

/// Parameters for adding an item to a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    /// Title of the item (required)
    pub title: String,
    /// Category key
    pub category: String,
    /// Zero-based index of the day to schedule on
    pub day: usize,
    /// Segment identifier to schedule in
    pub segment: String,
    /// Duration in minutes, must be positive
    pub duration_minutes: u32,
    pub cost: Option<f64>,
    pub description: Option<String>,
    pub map_url: Option<String>,
    pub contact_number: Option<String>,
    pub notes: Option<String>,
}

impl Default for CreateItem {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: "activity".to_string(),
            day: 0,
            segment: crate::models::segment::MORNING.to_string(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            cost: None,
            description: None,
            map_url: None,
            contact_number: None,
            notes: None,
        }
    }
}

/// Parameters for editing an item's details.
///
/// Only fields that are `Some` are changed. Placement is not editable here;
/// use [`MoveItem`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    /// Full identifier or unique prefix of the item
    pub id: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub duration_minutes: Option<u32>,
    pub cost: Option<f64>,
    /// Clears the cost; takes precedence over `cost`
    #[serde(default)]
    pub clear_cost: bool,
    pub description: Option<String>,
    pub map_url: Option<String>,
    pub contact_number: Option<String>,
    pub notes: Option<String>,
}

/// A move gesture: the item and the (day, segment) slot it was dropped on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveItem {
    /// Full identifier or unique prefix of the item
    pub id: String,
    /// Zero-based index of the target day
    pub day: usize,
    /// Identifier of the target segment
    pub segment: String,
}

/// Parameters for setting or clearing the trip's start date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetStartDate {
    pub date: Option<Date>,
}
