//! Read-only views of a trip for rendering layers.

use jiff::civil::Date;

use crate::models::{Item, TimeSegment, Trip};

/// Active items placed in `(day, segment)`, in bucket order.
///
/// An out-of-range day yields no items.
pub fn items_for<'a>(trip: &'a Trip, day: usize, segment: &str) -> Vec<&'a Item> {
    trip.day(day)
        .map(|day| {
            day.active_items()
                .filter(|item| item.segment == segment)
                .collect()
        })
        .unwrap_or_default()
}

/// One segment of one day and the active items placed in it.
#[derive(Debug, Clone)]
pub struct SegmentSlot<'a> {
    pub segment: &'a TimeSegment,
    pub items: Vec<&'a Item>,
}

/// One day of the schedule, with a slot for every segment in table order.
#[derive(Debug, Clone)]
pub struct DaySchedule<'a> {
    pub index: usize,
    pub date: Option<Date>,
    pub slots: Vec<SegmentSlot<'a>>,
}

impl DaySchedule<'_> {
    pub fn item_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.items.len()).sum()
    }

    /// Human-facing day number, starting at 1.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Projection of a single day.
pub fn day_schedule(trip: &Trip, index: usize) -> Option<DaySchedule<'_>> {
    trip.day(index)?;
    let slots = trip
        .segment_boundaries
        .iter()
        .map(|segment| SegmentSlot {
            segment,
            items: items_for(trip, index, segment.id.as_str()),
        })
        .collect();
    Some(DaySchedule {
        index,
        date: trip.day_date(index),
        slots,
    })
}

/// Projection of every day in the trip.
pub fn schedule(trip: &Trip) -> Vec<DaySchedule<'_>> {
    (0..trip.day_count())
        .filter_map(|index| day_schedule(trip, index))
        .collect()
}

/// Soft-deleted items, in day order.
pub fn removed_items(trip: &Trip) -> Vec<&Item> {
    trip.items().filter(|item| !item.is_active()).collect()
}
