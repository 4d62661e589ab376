//! Collection views: the schedule and simple lists.

use std::fmt;

use super::{labels::DayLabel, models::ItemCard};
use crate::{
    engine::{day_schedule, schedule, DaySchedule},
    models::{Category, Item, SegmentTable, Trip},
};

/// Markdown view of a trip's schedule: every requested day with one section
/// per segment, listing the active items placed there.
///
/// The trip header is included for the full schedule and omitted for a
/// single day.
pub struct ScheduleView<'a> {
    trip: &'a Trip,
    days: Vec<DaySchedule<'a>>,
    with_header: bool,
}

impl<'a> ScheduleView<'a> {
    /// Header plus every day.
    pub fn full(trip: &'a Trip) -> Self {
        Self {
            trip,
            days: schedule(trip),
            with_header: true,
        }
    }

    /// A single day, or `None` if the index is out of range.
    pub fn day(trip: &'a Trip, index: usize) -> Option<Self> {
        Some(Self {
            trip,
            days: vec![day_schedule(trip, index)?],
            with_header: false,
        })
    }

    pub fn days(&self) -> &[DaySchedule<'a>] {
        &self.days
    }
}

impl fmt::Display for ScheduleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.with_header {
            write!(f, "{}", self.trip)?;
            writeln!(f)?;
        }

        for day in &self.days {
            writeln!(
                f,
                "## {}",
                DayLabel {
                    index: day.index,
                    date: day.date,
                }
            )?;
            writeln!(f)?;
            for slot in &day.slots {
                writeln!(f, "### {}", slot.segment)?;
                writeln!(f)?;
                if slot.items.is_empty() {
                    writeln!(f, "_Nothing planned._")?;
                } else {
                    for item in &slot.items {
                        write!(
                            f,
                            "{}",
                            ItemCard {
                                item,
                                currency: &self.trip.currency,
                            }
                        )?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Compact list of items, such as the soft-deleted ones.
pub struct ItemList<'a> {
    pub items: Vec<&'a Item>,
    pub currency: &'a str,
}

impl fmt::Display for ItemList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "No items found.");
        }
        for item in &self.items {
            write!(
                f,
                "{}",
                ItemCard {
                    item,
                    currency: self.currency,
                }
            )?;
        }
        Ok(())
    }
}

/// The trip's segment table.
pub struct SegmentList<'a>(pub &'a SegmentTable);

impl fmt::Display for SegmentList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.0 {
            writeln!(
                f,
                "- `{}` {}, {} min",
                segment.id,
                segment,
                segment.duration_minutes()
            )?;
        }
        Ok(())
    }
}

/// The trip's category table.
pub struct CategoryList<'a>(pub &'a [Category]);

impl fmt::Display for CategoryList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No categories defined.");
        }
        for category in self.0 {
            write!(f, "{category}")?;
        }
        Ok(())
    }
}
