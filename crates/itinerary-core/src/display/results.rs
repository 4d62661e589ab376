//! Result wrapper types for displaying operation outcomes.

use std::{fmt, path::Path};

use jiff::civil::Date;

use super::labels::DayLabel;
use crate::{
    engine::{Placement, ReconcileReport},
    models::{Item, Trip},
};

/// Wrapper type for displaying the result of create operations.
///
/// ```rust
/// use itinerary_core::{display::CreateResult, models::Trip, params::CreateItem};
///
/// let mut trip = Trip::create("Bergen", Some("NOK"), 1).unwrap();
/// let item = trip
///     .add_item(&CreateItem {
///         title: "Fish market".to_string(),
///         ..CreateItem::default()
///     })
///     .unwrap();
///
/// let output = CreateResult::new(item).to_string();
/// assert!(output.starts_with("Added item with ID: "));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added item with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
pub struct UpdateResult<T> {
    pub resource: T,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for UpdateResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated item {}", self.resource.id.short())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of a placement.
pub struct MoveResult<'a> {
    pub placement: &'a Placement,
    pub title: &'a str,
}

impl fmt::Display for MoveResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let placement = self.placement;
        writeln!(
            f,
            "Moved **{}** from {} {} to {} {}, starting at {}",
            self.title,
            DayLabel {
                index: placement.from_day,
                date: None
            },
            placement.from_segment,
            DayLabel {
                index: placement.to_day,
                date: None
            },
            placement.to_segment,
            placement.start_time
        )
    }
}

/// Outcome of a reconcile pass.
pub struct ReconcileResult<'a>(pub &'a ReconcileReport);

impl fmt::Display for ReconcileResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        if report.is_clean() && report.unknown_segments.is_empty() {
            return writeln!(f, "Schedule is consistent.");
        }

        if report.is_clean() {
            writeln!(f, "No items needed repair.")?;
        } else {
            writeln!(f, "Repaired {} item(s).", report.change_count())?;
        }
        for relocation in &report.relocated {
            writeln!(
                f,
                "- Moved `{}` from {} to {}",
                relocation.id.short(),
                DayLabel {
                    index: relocation.from_day,
                    date: None
                },
                DayLabel {
                    index: relocation.to_day,
                    date: None
                }
            )?;
        }
        for item in &report.orphaned {
            writeln!(
                f,
                "- Removed **{}** `{}`: day index {} does not exist",
                item.title,
                item.id.short(),
                item.day_index
            )?;
        }
        for id in &report.duplicates {
            writeln!(f, "- Dropped duplicate copy of `{}`", id.short())?;
        }
        for id in &report.unknown_segments {
            writeln!(f, "- `{}` refers to an unknown segment", id.short())?;
        }
        Ok(())
    }
}

/// One-line confirmation of a change to a single item or to the stored trip.
pub enum Notice<'a> {
    Removed(&'a Item),
    Restored(&'a Item),
    StartDate(Option<Date>),
    Exported(&'a Path),
    Imported(&'a Trip),
    /// The stored snapshot was unreadable and a new trip replaced it.
    Recovered { reason: &'a str },
}

impl fmt::Display for Notice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |item: &Item| {
            format!(
                "{} {}",
                DayLabel {
                    index: item.day_index,
                    date: None
                },
                item.segment
            )
        };
        match self {
            Self::Removed(item) => writeln!(
                f,
                "Removed **{}** `{}` from {}",
                item.title,
                item.id.short(),
                slot(item)
            ),
            Self::Restored(item) => writeln!(
                f,
                "Restored **{}** `{}` to {}",
                item.title,
                item.id.short(),
                slot(item)
            ),
            Self::StartDate(Some(date)) => writeln!(f, "Trip starts on {date}"),
            Self::StartDate(None) => writeln!(f, "Start date cleared"),
            Self::Exported(path) => writeln!(f, "Exported trip to {}", path.display()),
            Self::Imported(trip) => writeln!(
                f,
                "Imported '{}' ({} days, {} items)",
                trip.name,
                trip.day_count(),
                trip.item_count()
            ),
            Self::Recovered { reason } => writeln!(
                f,
                "Stored trip could not be read ({reason}); started a new one."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::Relocation,
        models::{ClockTime, ItemId, SegmentId},
    };

    #[test]
    fn test_move_result() {
        let placement = Placement {
            item_id: ItemId::new("abcdef123456"),
            from_day: 0,
            from_segment: SegmentId::from("morning"),
            to_day: 2,
            to_segment: SegmentId::from("evening"),
            start_time: ClockTime::new(17, 0).unwrap(),
        };
        let output = MoveResult {
            placement: &placement,
            title: "Opera",
        }
        .to_string();
        assert_eq!(
            output,
            "Moved **Opera** from Day 1 morning to Day 3 evening, starting at 17:00\n"
        );
    }

    #[test]
    fn test_item_notices_name_the_slot() {
        let mut item = Item::new(
            "Museum",
            "activity",
            1,
            "afternoon",
            std::num::NonZeroU32::new(90).unwrap(),
        );
        item.id = ItemId::new("0123456789abcdef");

        assert_eq!(
            Notice::Removed(&item).to_string(),
            "Removed **Museum** `01234567` from Day 2 afternoon\n"
        );
        assert_eq!(
            Notice::Restored(&item).to_string(),
            "Restored **Museum** `01234567` to Day 2 afternoon\n"
        );
    }

    #[test]
    fn test_trip_notices() {
        let date = jiff::civil::date(2025, 3, 30);
        assert_eq!(
            Notice::StartDate(Some(date)).to_string(),
            "Trip starts on 2025-03-30\n"
        );
        assert_eq!(
            Notice::StartDate(None).to_string(),
            "Start date cleared\n"
        );
        assert_eq!(
            Notice::Exported(Path::new("trip.json")).to_string(),
            "Exported trip to trip.json\n"
        );

        let trip = Trip::create("Lisbon", Some("EUR"), 4).unwrap();
        assert_eq!(
            Notice::Imported(&trip).to_string(),
            "Imported 'Lisbon' (4 days, 0 items)\n"
        );

        let recovered = Notice::Recovered {
            reason: "EOF while parsing",
        }
        .to_string();
        assert!(recovered.starts_with("Stored trip could not be read (EOF while parsing)"));
    }

    #[test]
    fn test_reconcile_result() {
        let clean = ReconcileReport::default();
        assert_eq!(
            ReconcileResult(&clean).to_string(),
            "Schedule is consistent.\n"
        );

        let report = ReconcileReport {
            relocated: vec![Relocation {
                id: ItemId::new("1234567890"),
                from_day: 0,
                to_day: 1,
            }],
            duplicates: vec![ItemId::new("feedfacecafe")],
            ..ReconcileReport::default()
        };
        let output = ReconcileResult(&report).to_string();
        assert!(output.starts_with("Repaired 2 item(s)."));
        assert!(output.contains("- Moved `12345678` from Day 1 to Day 2"));
        assert!(output.contains("duplicate copy of `feedface`"));
    }
}
