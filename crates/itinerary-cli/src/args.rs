//! Command-line interface definitions using clap
//!
//! Each command that carries parameters has an argument wrapper with clap
//! derives and a `From` conversion into the matching core parameter type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```
//!
//! Day numbers on the command line start at 1; the conversions turn them
//! into the zero-based indices the core works with.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use itinerary_core::params::{
    CreateItem, CreateTrip, ItemRef, MoveItem, SetStartDate, UpdateItem,
};
use jiff::civil::Date;

/// Plan a multi-day trip from the terminal
///
/// A trip is a fixed number of days, each split into morning, afternoon and
/// evening. Items (activities, meals, transport, overnight stays) are placed
/// into those slots and start when their slot starts. Run without a command
/// to show the whole schedule.
#[derive(Parser)]
#[command(version, about, name = "itin")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/itinerary/itinerary.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a new trip, replacing the current one
    Init(InitArgs),
    /// Show the full schedule
    #[command(alias = "s")]
    Show,
    /// Show a single day
    #[command(alias = "d")]
    Day(DayArgs),
    /// Add an item to the schedule
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// Edit an item's details
    #[command(alias = "e")]
    Edit(EditItemArgs),
    /// Move an item to another day and segment
    #[command(alias = "mv")]
    Move(MoveItemArgs),
    /// Remove an item (it can be restored later)
    #[command(alias = "rm")]
    Remove(ItemIdArgs),
    /// Restore a removed item
    Restore(ItemIdArgs),
    /// List removed items
    Trash,
    /// Repair items stored on the wrong day
    Reconcile,
    /// List the segments of the day
    Segments,
    /// List the item categories
    Categories,
    /// Set or clear the date of the first day
    StartDate(StartDateArgs),
    /// Print the trip as JSON
    Export(ExportArgs),
    /// Replace the trip with one read from a JSON file
    Import(ImportArgs),
}

/// Parses a 1-based day number.
fn parse_day_number(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("day numbers start at 1".to_string()),
        Ok(day) => Ok(day),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(ClapArgs)]
pub struct InitArgs {
    /// Name of the trip
    #[arg(default_value = "My Trip")]
    pub name: String,
    /// Number of days
    #[arg(short, long, default_value_t = 3)]
    pub days: usize,
    /// ISO 4217 currency code. Defaults to the locale's currency
    #[arg(short, long)]
    pub currency: Option<String>,
    /// Date of the first day (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<Date>,
}

impl From<InitArgs> for CreateTrip {
    fn from(val: InitArgs) -> Self {
        CreateTrip {
            name: val.name,
            currency: val.currency,
            days: val.days,
            start_date: val.start_date,
        }
    }
}

#[derive(ClapArgs)]
pub struct DayArgs {
    /// Day number, starting at 1
    #[arg(value_parser = parse_day_number)]
    pub day: usize,
}

impl DayArgs {
    pub fn index(&self) -> usize {
        self.day - 1
    }
}

/// Add an item to the schedule
///
/// New items have no start time until they are moved.
#[derive(ClapArgs)]
pub struct AddItemArgs {
    /// Title of the item
    pub title: String,
    /// Day number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = parse_day_number)]
    pub day: usize,
    /// Segment of the day (morning, afternoon, evening)
    #[arg(short, long, default_value = "morning")]
    pub segment: String,
    /// Category key (activity, meal, transport, overnight, other)
    #[arg(short, long, default_value = "activity")]
    pub category: String,
    /// Duration in minutes
    #[arg(short = 'm', long, default_value_t = 60)]
    pub duration: u32,
    /// Cost in the trip currency
    #[arg(long)]
    pub cost: Option<f64>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Link to a map location
    #[arg(long)]
    pub map_url: Option<String>,
    /// Phone number to reach the venue
    #[arg(long)]
    pub contact: Option<String>,
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddItemArgs> for CreateItem {
    fn from(val: AddItemArgs) -> Self {
        CreateItem {
            title: val.title,
            category: val.category,
            day: val.day - 1,
            segment: val.segment,
            duration_minutes: val.duration,
            cost: val.cost,
            description: val.description,
            map_url: val.map_url,
            contact_number: val.contact,
            notes: val.notes,
        }
    }
}

/// Edit an item's details
///
/// Only the given fields change. Use `move` to change the day or segment.
#[derive(ClapArgs)]
pub struct EditItemArgs {
    /// Item ID or a unique prefix of it
    pub id: String,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub category: Option<String>,
    /// Duration in minutes
    #[arg(short = 'm', long)]
    pub duration: Option<u32>,
    #[arg(long, conflicts_with = "clear_cost")]
    pub cost: Option<f64>,
    /// Remove the item's cost
    #[arg(long)]
    pub clear_cost: bool,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(long)]
    pub map_url: Option<String>,
    #[arg(long)]
    pub contact: Option<String>,
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<EditItemArgs> for UpdateItem {
    fn from(val: EditItemArgs) -> Self {
        UpdateItem {
            id: val.id,
            title: val.title,
            category: val.category,
            duration_minutes: val.duration,
            cost: val.cost,
            clear_cost: val.clear_cost,
            description: val.description,
            map_url: val.map_url,
            contact_number: val.contact,
            notes: val.notes,
        }
    }
}

/// Move an item to another day and segment
///
/// The item starts when the target segment starts.
#[derive(ClapArgs)]
pub struct MoveItemArgs {
    /// Item ID or a unique prefix of it
    pub id: String,
    /// Target day number, starting at 1
    #[arg(value_parser = parse_day_number)]
    pub day: usize,
    /// Target segment (morning, afternoon, evening)
    pub segment: String,
}

impl From<MoveItemArgs> for MoveItem {
    fn from(val: MoveItemArgs) -> Self {
        MoveItem {
            id: val.id,
            day: val.day - 1,
            segment: val.segment,
        }
    }
}

#[derive(ClapArgs)]
pub struct ItemIdArgs {
    /// Item ID or a unique prefix of it
    pub id: String,
}

impl From<ItemIdArgs> for ItemRef {
    fn from(val: ItemIdArgs) -> Self {
        ItemRef { id: val.id }
    }
}

#[derive(ClapArgs)]
pub struct StartDateArgs {
    /// Date of the first day (YYYY-MM-DD)
    #[arg(required_unless_present = "clear")]
    pub date: Option<Date>,
    /// Clear the start date
    #[arg(long, conflicts_with = "date")]
    pub clear: bool,
}

impl From<StartDateArgs> for SetStartDate {
    fn from(val: StartDateArgs) -> Self {
        SetStartDate {
            date: if val.clear { None } else { val.date },
        }
    }
}

#[derive(ClapArgs)]
pub struct ExportArgs {
    /// Write to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs)]
pub struct ImportArgs {
    /// JSON file produced by `export`
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_numbers_are_one_based() {
        assert_eq!(parse_day_number("1"), Ok(1));
        assert!(parse_day_number("0").is_err());
        assert!(parse_day_number("-2").is_err());

        let params = MoveItem::from(MoveItemArgs {
            id: "abc".to_string(),
            day: 3,
            segment: "evening".to_string(),
        });
        assert_eq!(params.day, 2);
        assert_eq!(DayArgs { day: 1 }.index(), 0);
    }

    #[test]
    fn test_parse_move_command() {
        let args = Args::parse_from(["itin", "--no-color", "move", "ab12", "2", "afternoon"]);
        assert!(args.no_color);
        match args.command {
            Some(Commands::Move(mv)) => {
                let params = MoveItem::from(mv);
                assert_eq!(params.id, "ab12");
                assert_eq!(params.day, 1);
                assert_eq!(params.segment, "afternoon");
            }
            _ => panic!("expected move command"),
        }
    }

    #[test]
    fn test_start_date_clear() {
        let args = Args::parse_from(["itin", "start-date", "--clear"]);
        match args.command {
            Some(Commands::StartDate(sd)) => assert_eq!(SetStartDate::from(sd).date, None),
            _ => panic!("expected start-date command"),
        }

        let args = Args::parse_from(["itin", "start-date", "2025-07-01"]);
        match args.command {
            Some(Commands::StartDate(sd)) => assert_eq!(
                SetStartDate::from(sd).date,
                Some(jiff::civil::date(2025, 7, 1))
            ),
            _ => panic!("expected start-date command"),
        }
    }
}
