//! Command handlers: run a command against the session and render the result.

use std::fs;

use anyhow::{bail, Context, Result};
use itinerary_core::{
    display::{CategoryList, ItemList, SegmentList},
    engine::removed_items,
    params::{CreateItem, CreateTrip, ItemRef, MoveItem, SetStartDate, UpdateItem},
    store::TRIP_KEY,
    CreateResult, LoadOutcome, MoveResult, Notice, ReconcileResult, ScheduleView, Session,
    SqliteStore, UpdateResult,
};
use log::debug;

use crate::{
    args::{Commands, DayArgs, ExportArgs, ImportArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    session: Session<SqliteStore>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: Session<SqliteStore>, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    /// Reports how the trip was opened when it is worth mentioning.
    pub fn report_opening(&self) -> Result<()> {
        if let LoadOutcome::Recovered { reason } = self.session.outcome() {
            eprint!("{}", Notice::Recovered { reason: reason.as_str() });
        }
        let report = self.session.opening_report();
        if !report.is_clean() {
            self.renderer.render(&ReconcileResult(report).to_string())?;
        }
        Ok(())
    }

    pub fn handle(mut self, command: Commands) -> Result<()> {
        use Commands::*;

        match command {
            Init(args) => self.init(&args.into()),
            Show => self.show(),
            Day(args) => self.show_day(&args),
            Add(args) => self.add_item(&args.into()),
            Edit(args) => self.edit_item(&args.into()),
            Move(args) => self.move_item(&args.into()),
            Remove(args) => self.remove_item(&args.into()),
            Restore(args) => self.restore_item(&args.into()),
            Trash => self.trash(),
            Reconcile => self.reconcile(),
            Segments => self
                .renderer
                .render(&SegmentList(&self.session.trip().segment_boundaries).to_string()),
            Categories => self
                .renderer
                .render(&CategoryList(&self.session.trip().categories).to_string()),
            StartDate(args) => self.set_start_date(&args.into()),
            Export(args) => self.export(&args),
            Import(args) => self.import(&args),
        }
    }

    fn init(&mut self, params: &CreateTrip) -> Result<()> {
        let trip = self
            .session
            .reset(params)
            .context("Failed to create trip")?;
        self.renderer.render(&trip.to_string())
    }

    fn show(&self) -> Result<()> {
        let mut output = ScheduleView::full(self.session.trip()).to_string();
        let saved_at = self
            .session
            .gateway()
            .store()
            .updated_at(TRIP_KEY)
            .context("Failed to read when the trip was saved")?;
        if let Some(saved_at) = saved_at {
            output.push_str(&format!(
                "\n_Last saved {}_\n",
                saved_at.strftime("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        self.renderer.render(&output)
    }

    fn show_day(&self, args: &DayArgs) -> Result<()> {
        let trip = self.session.trip();
        match ScheduleView::day(trip, args.index()) {
            Some(view) => self.renderer.render(&view.to_string()),
            None => bail!(
                "Day {} does not exist; the trip has {} days",
                args.day,
                trip.day_count()
            ),
        }
    }

    fn add_item(&mut self, params: &CreateItem) -> Result<()> {
        let item = self
            .session
            .add_item(params)
            .context("Failed to add item")?;
        self.renderer.render(&CreateResult::new(item).to_string())
    }

    fn edit_item(&mut self, params: &UpdateItem) -> Result<()> {
        let item = self
            .session
            .update_item(params)
            .with_context(|| format!("Failed to edit item {}", params.id))?;
        self.renderer.render(&UpdateResult::new(item).to_string())
    }

    fn move_item(&mut self, params: &MoveItem) -> Result<()> {
        let placement = self
            .session
            .move_item(params)
            .with_context(|| format!("Failed to move item {}", params.id))?;
        let title = self
            .session
            .trip()
            .item(&placement.item_id)
            .map(|item| item.title.clone())
            .unwrap_or_default();
        debug!("Moved {} (same slot: {})", placement.item_id, placement.is_same_slot());

        let mut output = MoveResult {
            placement: &placement,
            title: &title,
        }
        .to_string();
        if let Some(day) = ScheduleView::day(self.session.trip(), placement.to_day) {
            output.push('\n');
            output.push_str(&day.to_string());
        }
        self.renderer.render(&output)
    }

    fn remove_item(&mut self, params: &ItemRef) -> Result<()> {
        let item = self
            .session
            .remove_item(params)
            .with_context(|| format!("Failed to remove item {}", params.id))?;
        let mut output = Notice::Removed(&item).to_string();
        output.push_str(&format!(
            "Restore it with `itin restore {}`.\n",
            item.id.short()
        ));
        self.renderer.render(&output)
    }

    fn restore_item(&mut self, params: &ItemRef) -> Result<()> {
        let item = self
            .session
            .restore_item(params)
            .with_context(|| format!("Failed to restore item {}", params.id))?;
        self.renderer.render(&Notice::Restored(&item).to_string())
    }

    fn trash(&self) -> Result<()> {
        let trip = self.session.trip();
        let list = ItemList {
            items: removed_items(trip),
            currency: &trip.currency,
        };
        self.renderer.render(&format!("# Removed items\n\n{list}"))
    }

    fn reconcile(&mut self) -> Result<()> {
        let report = self
            .session
            .reconcile()
            .context("Failed to reconcile trip")?;
        self.renderer.render(&ReconcileResult(&report).to_string())
    }

    fn set_start_date(&mut self, params: &SetStartDate) -> Result<()> {
        let date = self
            .session
            .set_start_date(params)
            .context("Failed to set start date")?;
        self.renderer.render(&Notice::StartDate(date).to_string())
    }

    fn export(&self, args: &ExportArgs) -> Result<()> {
        let blob = self.session.export().context("Failed to export trip")?;
        match &args.output {
            Some(path) => {
                fs::write(path, format!("{blob}\n"))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                self.renderer.render(&Notice::Exported(path).to_string())
            }
            // JSON goes out untouched by markdown styling
            None => {
                println!("{blob}");
                Ok(())
            }
        }
    }

    fn import(&mut self, args: &ImportArgs) -> Result<()> {
        let blob = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let report = self
            .session
            .import(&blob)
            .with_context(|| format!("Failed to import {}", args.file.display()))?;

        let mut output = Notice::Imported(self.session.trip()).to_string();
        if !report.is_clean() {
            output.push('\n');
            output.push_str(&ReconcileResult(&report).to_string());
        }
        self.renderer.render(&output)
    }
}
