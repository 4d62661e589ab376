//! Formatting helpers for day headings, item timing and costs.

use std::fmt;

use jiff::civil::Date;

use crate::models::Item;

/// Heading label for a day: `Day 2 (2025-06-02, Mon)` or `Day 2`.
pub struct DayLabel {
    pub index: usize,
    pub date: Option<Date>,
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.index + 1)?;
        if let Some(date) = self.date {
            write!(f, " ({})", date.strftime("%Y-%m-%d, %a"))?;
        }
        Ok(())
    }
}

/// Item timing: `08:00 (60 min)` when a start time is set, else `60 min`.
pub struct Timing<'a>(pub &'a Item);

impl fmt::Display for Timing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0.duration_minutes;
        match self.0.start_time {
            Some(start) => write!(f, "{start} ({minutes} min)"),
            None => write!(f, "{minutes} min"),
        }
    }
}

/// Optional amount in a currency: `12.50 EUR`, or `-` when absent.
pub struct Cost<'a> {
    pub amount: Option<f64>,
    pub currency: &'a str,
}

impl fmt::Display for Cost<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount {
            Some(amount) => write!(f, "{amount:.2} {}", self.currency),
            None => f.write_str("-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::models::ClockTime;

    #[test]
    fn test_day_label() {
        let plain = DayLabel {
            index: 0,
            date: None,
        };
        assert_eq!(plain.to_string(), "Day 1");

        let dated = DayLabel {
            index: 1,
            date: Some(jiff::civil::date(2025, 6, 2)),
        };
        assert_eq!(dated.to_string(), "Day 2 (2025-06-02, Mon)");
    }

    #[test]
    fn test_timing() {
        let mut item = Item::new("Swim", "activity", 0, "morning", NonZeroU32::new(45).unwrap());
        assert_eq!(Timing(&item).to_string(), "45 min");
        item.start_time = Some(ClockTime::new(8, 0).unwrap());
        assert_eq!(Timing(&item).to_string(), "08:00 (45 min)");
    }

    #[test]
    fn test_cost() {
        let cost = Cost {
            amount: Some(12.5),
            currency: "EUR",
        };
        assert_eq!(cost.to_string(), "12.50 EUR");
        let none = Cost {
            amount: None,
            currency: "EUR",
        };
        assert_eq!(none.to_string(), "-");
    }
}
