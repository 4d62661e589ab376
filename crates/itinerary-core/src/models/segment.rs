//! Time-of-day segments and the wall-clock times that bound them.

use std::{fmt, str::FromStr};

use jiff::{civil::Time, ToSpan};
use serde::{
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::error::{ItineraryError, Result};

/// Identifier of the default morning segment.
pub const MORNING: &str = "morning";
/// Identifier of the default afternoon segment.
pub const AFTERNOON: &str = "afternoon";
/// Identifier of the default evening segment.
pub const EVENING: &str = "evening";

/// Start time used when a segment has no boundary entry.
pub const FALLBACK_START: ClockTime = ClockTime(jiff::civil::time(8, 0, 0, 0));

/// Wall-clock time with minute precision, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(Time);

impl ClockTime {
    /// Creates a clock time from an hour (0-23) and minute (0-59).
    pub fn new(hour: i8, minute: i8) -> Result<Self> {
        Time::new(hour, minute, 0, 0)
            .map(Self)
            .map_err(|e| ItineraryError::invalid_input("time").with_reason(e.to_string()))
    }

    /// Adds whole minutes, returning `None` when the result passes midnight.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        self.0
            .checked_add(i64::from(minutes).minutes())
            .ok()
            .map(Self)
    }

    /// Minutes from `self` until `later`. Negative when `later` is earlier.
    pub fn minutes_until(self, later: Self) -> i32 {
        let minutes = |t: Time| i32::from(t.hour()) * 60 + i32::from(t.minute());
        minutes(later.0) - minutes(self.0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%H:%M"))
    }
}

impl FromStr for ClockTime {
    type Err = ItineraryError;

    fn from_str(s: &str) -> Result<Self> {
        Time::strptime("%H:%M", s.trim())
            .map(Self)
            .map_err(|e| {
                ItineraryError::invalid_input("time")
                    .with_reason(format!("expected HH:MM, got '{s}': {e}"))
            })
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Identifier of a time segment, such as `morning`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(String);

impl SegmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SegmentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SegmentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for SegmentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SegmentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A named window of the day with fixed start and end times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSegment {
    pub id: SegmentId,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeSegment {
    /// Creates a segment, rejecting windows that end at or before they start.
    pub fn new(id: impl Into<SegmentId>, start: ClockTime, end: ClockTime) -> Result<Self> {
        let id = id.into();
        if id.as_str().trim().is_empty() {
            return Err(ItineraryError::invalid_input("segment").with_reason("identifier cannot be empty"));
        }
        if start >= end {
            return Err(ItineraryError::invalid_input("segment").with_reason(format!(
                "segment '{id}' must end after it starts ({start} >= {end})"
            )));
        }
        Ok(Self { id, start, end })
    }

    /// Title-cased identifier for headings (`morning` -> `Morning`).
    pub fn label(&self) -> String {
        let mut chars = self.id.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Length of the window in minutes.
    pub fn duration_minutes(&self) -> i32 {
        self.start.minutes_until(self.end)
    }
}

/// Ordered lookup table of the segments a trip schedules into.
///
/// Declaration order is preserved and is the order segments are rendered in.
/// Serialized as an object mapping each identifier to `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTable(Vec<TimeSegment>);

impl SegmentTable {
    /// Builds a table, rejecting duplicate identifiers.
    pub fn new(segments: Vec<TimeSegment>) -> Result<Self> {
        for (position, segment) in segments.iter().enumerate() {
            if segments[..position].iter().any(|s| s.id == segment.id) {
                return Err(ItineraryError::invalid_input("segment")
                    .with_reason(format!("duplicate segment '{}'", segment.id)));
            }
        }
        Ok(Self(segments))
    }

    pub fn get(&self, id: &str) -> Option<&TimeSegment> {
        self.0.iter().find(|segment| segment.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Start boundary of the segment, if the table defines it.
    pub fn start_of(&self, id: &str) -> Option<ClockTime> {
        self.get(id).map(|segment| segment.start)
    }

    /// Start boundary used when snapping an item into `id`.
    ///
    /// Falls back to [`FALLBACK_START`] and logs when the table has no entry
    /// for the segment.
    pub fn snap_start(&self, id: &str) -> ClockTime {
        self.start_of(id).unwrap_or_else(|| {
            log::warn!(
                "{}; using {FALLBACK_START}",
                ItineraryError::SegmentBoundaryMissing {
                    segment: id.to_string()
                }
            );
            FALLBACK_START
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeSegment> {
        self.0.iter()
    }

}

impl Default for SegmentTable {
    fn default() -> Self {
        let window = |id: &str, start: i8, end: i8| TimeSegment {
            id: SegmentId::from(id),
            start: ClockTime(jiff::civil::time(start, 0, 0, 0)),
            end: ClockTime(jiff::civil::time(end, 0, 0, 0)),
        };
        Self(vec![
            window(MORNING, 8, 12),
            window(AFTERNOON, 12, 17),
            window(EVENING, 17, 22),
        ])
    }
}

impl<'a> IntoIterator for &'a SegmentTable {
    type Item = &'a TimeSegment;
    type IntoIter = std::slice::Iter<'a, TimeSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for SegmentTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for segment in &self.0 {
            map.serialize_entry(&segment.id, &(segment.start, segment.end))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SegmentTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = SegmentTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of segment identifiers to [start, end] pairs")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut segments = Vec::with_capacity(access.size_hint().unwrap_or(3));
                while let Some((id, (start, end))) =
                    access.next_entry::<SegmentId, (ClockTime, ClockTime)>()?
                {
                    segments.push(TimeSegment::new(id, start, end).map_err(de::Error::custom)?);
                }
                SegmentTable::new(segments).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
