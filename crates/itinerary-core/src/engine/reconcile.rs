//! Repair pass for the bucket/day-index invariant.

use std::collections::HashSet;

use crate::models::{Item, ItemId, Trip};

/// An item moved to the bucket its day index names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub id: ItemId,
    /// Bucket the item was stored in
    pub from_day: usize,
    /// Bucket the item now lives in
    pub to_day: usize,
}

/// What a reconcile pass changed or found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileReport {
    /// Misplaced items moved into their own day's bucket
    pub relocated: Vec<Relocation>,
    /// Items whose day index is outside the trip; removed from the schedule
    pub orphaned: Vec<Item>,
    /// Later copies of an identifier already stored elsewhere; removed
    pub duplicates: Vec<ItemId>,
    /// Items referring to a segment the trip does not define; left in place
    pub unknown_segments: Vec<ItemId>,
}

impl ReconcileReport {
    /// True when the pass left the trip untouched.
    pub fn is_clean(&self) -> bool {
        self.relocated.is_empty() && self.orphaned.is_empty() && self.duplicates.is_empty()
    }

    /// Number of structural changes made.
    pub fn change_count(&self) -> usize {
        self.relocated.len() + self.orphaned.len() + self.duplicates.len()
    }
}

/// Restores "every item in `days[k]` has `day_index == k`".
///
/// Consistent items keep their bucket and relative order. Misplaced items are
/// collected in day then position order and appended to the bucket their own
/// day index names, so a single pass is enough and a second pass is a no-op.
/// Items whose day index is out of range are removed and handed back in
/// [`ReconcileReport::orphaned`].
///
/// When an identifier is stored more than once, the first copy in day order
/// wins and the rest are dropped.
pub fn reconcile(trip: &mut Trip) -> ReconcileReport {
    let mut report = ReconcileReport::default();
    let mut seen: HashSet<ItemId> = HashSet::new();
    let mut misplaced: Vec<(usize, Item)> = Vec::new();

    for (day_index, day) in trip.days.iter_mut().enumerate() {
        let stored = std::mem::take(&mut day.items);
        for item in stored {
            if !seen.insert(item.id.clone()) {
                log::warn!("Dropping duplicate copy of item {} from day {day_index}", item.id);
                report.duplicates.push(item.id);
            } else if item.day_index == day_index {
                day.items.push(item);
            } else {
                misplaced.push((day_index, item));
            }
        }
    }

    let day_count = trip.days.len();
    for (from_day, item) in misplaced {
        match trip.days.get_mut(item.day_index) {
            Some(day) => {
                log::debug!(
                    "Relocating item {} from day {from_day} to day {}",
                    item.id,
                    item.day_index
                );
                report.relocated.push(Relocation {
                    id: item.id.clone(),
                    from_day,
                    to_day: item.day_index,
                });
                day.items.push(item);
            }
            None => {
                log::warn!(
                    "Item {} has day index {} outside a trip of {day_count} days; removing it",
                    item.id,
                    item.day_index
                );
                report.orphaned.push(item);
            }
        }
    }

    report.unknown_segments = trip
        .items()
        .filter(|item| !trip.segment_boundaries.contains(item.segment.as_str()))
        .map(|item| item.id.clone())
        .collect();
    for id in &report.unknown_segments {
        log::warn!("Item {id} refers to a segment missing from the segment table");
    }

    report
}
