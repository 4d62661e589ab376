//! Display implementations for domain models.
//!
//! All output is markdown. [`Item`]'s own `Display` is the detailed view;
//! [`ItemCard`] is the compact one-line form used inside schedules.

use std::fmt;

use super::labels::{Cost, DayLabel, Timing};
use crate::models::{Category, Item, ItemStatus, TimeSegment, Trip};

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} (`{}`)", self.title, self.id.short())?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(
            f,
            "- Slot: {}, {}",
            DayLabel {
                index: self.day_index,
                date: None
            },
            self.segment
        )?;
        writeln!(f, "- Time: {}", Timing(self))?;
        if let Some(end) = self.end_time() {
            writeln!(f, "- Ends: {end}")?;
        }
        if let Some(cost) = self.cost {
            writeln!(f, "- Cost: {cost:.2}")?;
        }
        if self.status == ItemStatus::Removed {
            writeln!(f, "- Status: {}", self.status)?;
        }
        if !self.map_url.is_empty() {
            writeln!(f, "- Map: {}", self.map_url)?;
        }
        if !self.contact_number.is_empty() {
            writeln!(f, "- Contact: {}", self.contact_number)?;
        }
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "#### Notes")?;
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }
        Ok(())
    }
}

/// Compact list entry for an item, with its cost in the trip currency.
pub struct ItemCard<'a> {
    pub item: &'a Item,
    pub currency: &'a str,
}

impl fmt::Display for ItemCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** `{}` {} | {} | {}",
            self.item.title,
            self.item.id.short(),
            self.item.category,
            Timing(self.item),
            Cost {
                amount: self.item.cost,
                currency: self.currency,
            }
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.icon.is_empty() {
            writeln!(f, "- **{}** `{}` ({})", self.name, self.key, self.color)
        } else {
            writeln!(
                f,
                "- {} **{}** `{}` ({})",
                self.icon, self.name, self.key, self.color
            )
        }
    }
}

impl fmt::Display for TimeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.label(), self.start, self.end)
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Currency: {}", self.currency)?;
        if let Some(timezone) = &self.timezone {
            writeln!(f, "- Timezone: {timezone}")?;
        }
        match (self.day_date(0), self.day_date(self.day_count().saturating_sub(1))) {
            (Some(first), Some(last)) if first != last => {
                writeln!(f, "- Dates: {first} to {last}")?;
            }
            (Some(first), _) => writeln!(f, "- Date: {first}")?,
            _ => {}
        }
        let active = self.items().filter(|item| item.is_active()).count();
        writeln!(f, "- Days: {}", self.day_count())?;
        writeln!(f, "- Items: {active}")?;
        writeln!(
            f,
            "- Total cost: {}",
            Cost {
                amount: Some(self.total_cost()),
                currency: &self.currency,
            }
        )
    }
}
