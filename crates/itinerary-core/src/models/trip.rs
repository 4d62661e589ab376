//! Trip aggregate: the single owner of days and items.

use std::num::NonZeroU32;

use jiff::{civil::Date, ToSpan};
use serde::{Deserialize, Serialize};

use super::{
    category::default_categories, segment::SegmentTable, Category, Day, Item, ItemId, ItemStatus,
    SegmentId,
};
use crate::{
    config::{normalize_currency, Locale},
    error::{ItineraryError, Result},
    params::{CreateItem, CreateTrip, UpdateItem},
};

/// Upper bound on the number of days a trip may span.
pub const MAX_DAYS: usize = 366;

/// A multi-day trip and everything scheduled in it.
///
/// The day sequence has a fixed length for the lifetime of an instance.
/// Items are placed through [`crate::engine::place`] and repaired through
/// [`crate::engine::reconcile`]; this type only exposes operations that keep
/// each item in its current bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub name: String,

    /// ISO 4217 currency code used for item costs
    pub currency: String,

    #[serde(default)]
    pub segment_boundaries: SegmentTable,

    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    pub(crate) days: Vec<Day>,

    /// Calendar date of the first day
    #[serde(default)]
    pub start_date: Option<Date>,

    /// IANA timezone the trip's wall-clock times refer to
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Trip {
    /// Creates a trip with `day_count` empty days, the default segments and
    /// categories. The currency falls back to the detected locale.
    pub fn create(name: &str, currency: Option<&str>, day_count: usize) -> Result<Self> {
        let params = CreateTrip {
            name: name.to_string(),
            currency: currency.map(String::from),
            days: day_count,
            start_date: None,
        };
        Self::create_with_locale(&params, &Locale::detect())
    }

    /// Creates a trip from parameters, using the detected locale for
    /// defaults.
    pub fn from_params(params: &CreateTrip) -> Result<Self> {
        Self::create_with_locale(params, &Locale::detect())
    }

    /// Creates a trip from parameters with explicit locale defaults.
    pub fn create_with_locale(params: &CreateTrip, locale: &Locale) -> Result<Self> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(ItineraryError::invalid_input("name").with_reason("cannot be empty"));
        }
        if params.days == 0 || params.days > MAX_DAYS {
            return Err(ItineraryError::invalid_input("days")
                .with_reason(format!("must be between 1 and {MAX_DAYS}, got {}", params.days)));
        }
        let currency = match &params.currency {
            Some(code) => normalize_currency(code)?,
            None => locale.currency.clone(),
        };

        Ok(Self {
            name: name.to_string(),
            currency,
            segment_boundaries: SegmentTable::default(),
            categories: default_categories(),
            days: vec![Day::new(); params.days],
            start_date: params.start_date,
            timezone: locale.timezone.clone(),
        })
    }

    /// Snapshot of every field as a JSON blob.
    pub fn serialize(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented snapshot, for export and hand editing.
    pub fn serialize_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuilds a trip from a snapshot.
    ///
    /// The day count comes from the snapshot's day array. Items are taken as
    /// stored, including any whose day index disagrees with their bucket; run
    /// [`crate::engine::reconcile`] before placing or rendering.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::MalformedData` when the blob is not valid
    /// JSON, does not have the trip structure, or has no days.
    pub fn deserialize(blob: &str) -> Result<Self> {
        let trip: Self =
            serde_json::from_str(blob).map_err(|e| ItineraryError::malformed(e.to_string()))?;
        if trip.days.is_empty() {
            return Err(ItineraryError::malformed("trip has no days"));
        }
        Ok(trip)
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Option<&Day> {
        self.days.get(index)
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// All items across all days, in day order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.days.iter().flat_map(|day| day.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.days.iter().map(|day| day.items.len()).sum()
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items().find(|item| &item.id == id)
    }

    /// Bucket index and position of the first stored item with `id`.
    pub(crate) fn locate(&self, id: &ItemId) -> Option<(usize, usize)> {
        self.days.iter().enumerate().find_map(|(day_index, day)| {
            day.items
                .iter()
                .position(|item| &item.id == id)
                .map(|position| (day_index, position))
        })
    }

    fn item_mut(&mut self, id: &ItemId) -> Result<&mut Item> {
        let (day, position) = self
            .locate(id)
            .ok_or_else(|| ItineraryError::item_not_found(id.as_str()))?;
        Ok(&mut self.days[day].items[position])
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.key == key)
    }

    /// Resolves a full identifier or a unique identifier prefix.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::ItemNotFound` when nothing matches and
    /// `ItineraryError::InvalidInput` when the prefix is empty or matches
    /// more than one item.
    pub fn resolve_id(&self, text: &str) -> Result<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ItineraryError::invalid_input("id").with_reason("cannot be empty"));
        }
        if let Some(item) = self.items().find(|item| item.id.as_str() == text) {
            return Ok(item.id.clone());
        }

        let mut matches: Vec<&ItemId> = self
            .items()
            .map(|item| &item.id)
            .filter(|id| id.as_str().starts_with(text))
            .collect();
        matches.sort();
        matches.dedup();

        match matches.as_slice() {
            [] => Err(ItineraryError::item_not_found(text)),
            [id] => Ok((*id).clone()),
            many => Err(ItineraryError::invalid_input("id").with_reason(format!(
                "prefix '{text}' matches {} items",
                many.len()
            ))),
        }
    }

    /// Checks that `(day, segment)` names a slot in this trip.
    pub(crate) fn check_destination(&self, day: usize, segment: &str) -> Result<()> {
        if day >= self.days.len() {
            return Err(ItineraryError::invalid_destination(
                "day",
                format!(
                    "index {day} is out of range for a trip of {} days",
                    self.days.len()
                ),
            ));
        }
        if !self.segment_boundaries.contains(segment) {
            return Err(ItineraryError::invalid_destination(
                "segment",
                format!("unknown segment '{segment}'"),
            ));
        }
        Ok(())
    }

    fn check_category(&self, key: &str) -> Result<()> {
        if self.category(key).is_none() {
            return Err(ItineraryError::invalid_input("category")
                .with_reason(format!("unknown category '{key}'")));
        }
        Ok(())
    }

    /// Adds a new active item to the given slot, without a start time.
    pub fn add_item(&mut self, params: &CreateItem) -> Result<Item> {
        let title = params.title.trim();
        if title.is_empty() {
            return Err(ItineraryError::invalid_input("title").with_reason("cannot be empty"));
        }
        self.check_destination(params.day, &params.segment)?;
        self.check_category(&params.category)?;
        let duration = positive_duration(params.duration_minutes)?;
        check_cost(params.cost)?;

        let mut item = Item::new(
            title,
            params.category.as_str(),
            params.day,
            SegmentId::from(params.segment.as_str()),
            duration,
        );
        item.cost = params.cost;
        item.description = params.description.clone().unwrap_or_default();
        item.map_url = params.map_url.clone().unwrap_or_default();
        item.contact_number = params.contact_number.clone().unwrap_or_default();
        item.notes = params.notes.clone().unwrap_or_default();

        log::debug!("Adding item {} to day {} {}", item.id, item.day_index, item.segment);
        self.days[params.day].items.push(item.clone());
        Ok(item)
    }

    /// Edits an item's descriptive fields in place.
    pub fn update_item(&mut self, params: &UpdateItem) -> Result<Item> {
        let id = self.resolve_id(&params.id)?;

        let title = match &params.title {
            Some(title) if title.trim().is_empty() => {
                return Err(ItineraryError::invalid_input("title").with_reason("cannot be empty"))
            }
            Some(title) => Some(title.trim().to_string()),
            None => None,
        };
        if let Some(category) = &params.category {
            self.check_category(category)?;
        }
        let duration = params.duration_minutes.map(positive_duration).transpose()?;
        check_cost(params.cost)?;

        let item = self.item_mut(&id)?;
        if let Some(title) = title {
            item.title = title;
        }
        if let Some(category) = &params.category {
            item.category.clone_from(category);
        }
        if let Some(duration) = duration {
            item.duration_minutes = duration;
        }
        if params.clear_cost {
            item.cost = None;
        } else if params.cost.is_some() {
            item.cost = params.cost;
        }
        if let Some(description) = &params.description {
            item.description.clone_from(description);
        }
        if let Some(map_url) = &params.map_url {
            item.map_url.clone_from(map_url);
        }
        if let Some(contact_number) = &params.contact_number {
            item.contact_number.clone_from(contact_number);
        }
        if let Some(notes) = &params.notes {
            item.notes.clone_from(notes);
        }
        Ok(item.clone())
    }

    /// Soft-deletes (`Removed`) or restores (`Active`) an item.
    pub fn set_status(&mut self, id: &ItemId, status: ItemStatus) -> Result<Item> {
        let item = self.item_mut(id)?;
        item.status = status;
        Ok(item.clone())
    }

    pub fn set_start_date(&mut self, date: Option<Date>) {
        self.start_date = date;
    }

    /// Calendar date of a day: its explicit date, else the trip start date
    /// offset by the day index.
    pub fn day_date(&self, index: usize) -> Option<Date> {
        let day = self.days.get(index)?;
        day.date.or_else(|| {
            let offset = i64::try_from(index).ok()?;
            self.start_date?.checked_add(offset.days()).ok()
        })
    }

    /// Sum of the costs of all active items.
    pub fn total_cost(&self) -> f64 {
        self.items()
            .filter(|item| item.is_active())
            .filter_map(|item| item.cost)
            .sum()
    }
}

fn positive_duration(minutes: u32) -> Result<NonZeroU32> {
    NonZeroU32::new(minutes).ok_or_else(|| {
        ItineraryError::invalid_input("duration_minutes").with_reason("must be greater than zero")
    })
}

fn check_cost(cost: Option<f64>) -> Result<()> {
    match cost {
        Some(cost) if !cost.is_finite() || cost < 0.0 => Err(ItineraryError::invalid_input("cost")
            .with_reason(format!("must be a non-negative number, got {cost}"))),
        _ => Ok(()),
    }
}
