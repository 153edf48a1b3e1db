//! medslot CLI application
//!
//! Command-line front end for the medslot booking core: time conversion
//! helpers plus demo seeding and patient appointment listings.

mod args;
mod cli;
mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use medslot_core::{time::resolve_display_timezone, Booking, BookingBuilder};
use renderer::TerminalRenderer;
use Commands::*;

async fn open_booking(database_file: Option<PathBuf>, timezone: Option<String>) -> Result<Booking> {
    BookingBuilder::new()
        .with_database_path(database_file)
        .with_display_timezone(timezone)
        .build()
        .await
        .context("Failed to initialize booking service")
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        timezone,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("medslot started");

    match command {
        Time { command } => {
            let display = resolve_display_timezone(timezone.as_deref())
                .context("Failed to resolve display time zone")?;
            Cli::new(renderer, display).handle_time_command(command)
        }
        Seed => {
            let booking = open_booking(database_file, timezone).await?;
            Cli::new(renderer, booking.display_timezone().clone())
                .seed(&booking)
                .await
        }
        Appointments(args) => {
            let booking = open_booking(database_file, timezone).await?;
            Cli::new(renderer, booking.display_timezone().clone())
                .appointments(&booking, args)
                .await
        }
    }
}
