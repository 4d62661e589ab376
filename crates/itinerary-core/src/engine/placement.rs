//! Moving items between (day, segment) slots.

use crate::{
    error::{ItineraryError, Result},
    models::{ClockTime, ItemId, SegmentId, Trip},
};

/// Record of a completed placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub item_id: ItemId,
    /// Bucket the item was found in
    pub from_day: usize,
    pub from_segment: SegmentId,
    pub to_day: usize,
    pub to_segment: SegmentId,
    /// Start time assigned by snapping to the target segment
    pub start_time: ClockTime,
}

impl Placement {
    /// Whether the item ended up in the slot it started in.
    pub fn is_same_slot(&self) -> bool {
        self.from_day == self.to_day && self.from_segment == self.to_segment
    }
}

/// Places an item into `(target_day, target_segment)`.
///
/// The item is taken out of the bucket it is physically stored in, given the
/// new day index and segment, snapped to the segment's start time and
/// appended to the target day. The start time is overwritten on every call,
/// including a move into the slot the item already occupies.
///
/// # Errors
///
/// Returns `ItineraryError::ItemNotFound` if no item has `item_id`, and
/// `ItineraryError::InvalidDestination` if the day index or segment is not
/// part of the trip. The trip is unchanged on error.
pub fn place(
    trip: &mut Trip,
    item_id: &ItemId,
    target_day: usize,
    target_segment: &SegmentId,
) -> Result<Placement> {
    let (from_day, position) = trip
        .locate(item_id)
        .ok_or_else(|| ItineraryError::item_not_found(item_id.as_str()))?;
    trip.check_destination(target_day, target_segment.as_str())?;

    let start_time = trip.segment_boundaries.snap_start(target_segment.as_str());

    let mut item = trip.days[from_day].items.remove(position);
    let from_segment = std::mem::replace(&mut item.segment, target_segment.clone());
    item.day_index = target_day;
    item.start_time = Some(start_time);
    trip.days[target_day].items.push(item);

    log::debug!(
        "Placed item {item_id} from day {from_day} {from_segment} to day {target_day} {target_segment} at {start_time}"
    );

    Ok(Placement {
        item_id: item_id.clone(),
        from_day,
        from_segment,
        to_day: target_day,
        to_segment: target_segment.clone(),
        start_time,
    })
}
