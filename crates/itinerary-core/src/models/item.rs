//! Item model definition and related functionality.

use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    category::deserialize_category_key,
    segment::{ClockTime, SegmentId},
};

/// Duration given to items created without one.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Opaque item identifier.
///
/// Generated identifiers are the simple (hyphen-free) form of a random v4
/// UUID, so two generated identifiers collide with negligible probability.
/// Identifiers never change once an item exists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, enough to address an item in a single trip.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visibility of an item in schedule views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Item is scheduled and rendered
    #[default]
    Active,

    /// Item is soft-deleted: kept in storage, hidden from views
    Removed,
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ItemStatus::Active),
            "removed" => Ok(ItemStatus::Removed),
            _ => Err(format!("Invalid item status: {s}")),
        }
    }
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Removed => "removed",
        }
    }
}

/// A schedulable unit of itinerary content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable identifier
    pub id: ItemId,

    pub title: String,

    /// Key of the item's category
    #[serde(deserialize_with = "deserialize_category_key")]
    pub category: String,

    /// Index of the day this item is scheduled on
    pub day_index: usize,

    /// Segment of the day this item is scheduled in
    pub segment: SegmentId,

    pub duration_minutes: NonZeroU32,

    #[serde(default)]
    pub status: ItemStatus,

    /// Snapped to the segment start on every placement
    #[serde(default)]
    pub start_time: Option<ClockTime>,

    #[serde(default)]
    pub cost: Option<f64>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub map_url: String,

    #[serde(default)]
    pub contact_number: String,

    #[serde(default)]
    pub notes: String,
}

impl Item {
    /// Creates an active item with a fresh identifier and no start time.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        day_index: usize,
        segment: impl Into<SegmentId>,
        duration_minutes: NonZeroU32,
    ) -> Self {
        Self {
            id: ItemId::generate(),
            title: title.into(),
            category: category.into(),
            day_index,
            segment: segment.into(),
            duration_minutes,
            status: ItemStatus::Active,
            start_time: None,
            cost: None,
            description: String::new(),
            map_url: String::new(),
            contact_number: String::new(),
            notes: String::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ItemStatus::Active
    }

    /// Start time plus duration, when the item has a start time and does not
    /// run past midnight.
    pub fn end_time(&self) -> Option<ClockTime> {
        self.start_time?.checked_add_minutes(self.duration_minutes.get())
    }
}
