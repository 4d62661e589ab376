//! Itinerary CLI Application
//!
//! Command-line interface for planning multi-day trips.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use itinerary_core::SessionBuilder;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let session = SessionBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open itinerary")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Itinerary started");

    let cli = Cli::new(session, renderer);
    cli.report_opening()?;
    cli.handle(command.unwrap_or(Commands::Show))
}
