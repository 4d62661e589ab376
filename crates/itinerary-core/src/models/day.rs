//! Day model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Item;

/// One day of a trip and the items stored in its bucket.
///
/// Every item in `items` is expected to carry this day's index. External
/// edits can break that; [`crate::engine::reconcile`] restores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Explicit calendar date, overriding the one derived from the trip start
    #[serde(default)]
    pub date: Option<Date>,

    /// Items in this day's bucket, in insertion order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Day {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_active())
    }
}
