use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AppointmentsArgs, TimeCommands};

/// Appointment times and listings for the medslot booking app
///
/// Appointment times are stored as IST wall-clock strings
/// (`YYYY-MM-DDTHH:mm:ss`). The `time` commands convert and format them; the
/// database commands seed demo data and list a patient's appointments.
#[derive(Parser)]
#[command(version, about, name = "medslot")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/medslot/medslot.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// IANA time zone used to display times. Defaults to the system zone
    #[arg(long, global = true, env = "MEDSLOT_TIMEZONE")]
    pub timezone: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the medslot CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Convert and format appointment times
    #[command(alias = "t")]
    Time {
        #[command(subcommand)]
        command: TimeCommands,
    },
    /// Replace the database contents with demo data
    Seed,
    /// List the calling patient's appointments by status
    #[command(alias = "a")]
    Appointments(AppointmentsArgs),
}
