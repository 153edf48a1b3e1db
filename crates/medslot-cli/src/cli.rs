//! Command handlers and their clap argument types.
//!
//! Each handler turns parsed arguments into calls on `medslot_core` and hands
//! the resulting markdown to the [`TerminalRenderer`].

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::{tz::TimeZone, Timestamp};
use log::debug;
use medslot_core::{
    display::AppointmentTabs,
    time::{
        format_date_ist, format_time_ist, format_time_range, parse_date, parse_storage_string,
        reference_timezone, timezone, to_storage_string, user_timezone, DisplayStyle,
    },
    AppointmentStatus, Booking, Role, StaticIdentity,
};

use crate::renderer::TerminalRenderer;

/// Time conversion commands. None of them touch the database.
#[derive(Subcommand)]
pub enum TimeCommands {
    /// Convert an instant into the IST storage form
    Store {
        /// RFC 3339 instant such as 2025-07-21T09:00:00Z, or "now"
        instant: String,
        /// Zone whose wall clock is written. Defaults to Asia/Kolkata
        #[arg(long)]
        zone: Option<String>,
    },
    /// Parse a storage string and show what it means
    Parse {
        /// Naive IST wall-clock value, YYYY-MM-DDTHH:mm[:ss]
        value: String,
    },
    /// Format a stored time or instant for display
    #[command(alias = "f")]
    Format {
        /// Storage string, RFC 3339 instant, date or RFC 2822 text
        input: String,
        #[arg(long, value_enum, default_value_t = StyleArg::DateTime)]
        style: StyleArg,
        /// Render in IST regardless of the display zone
        #[arg(long)]
        ist: bool,
    },
    /// Format a start and end time as "h:mm AM - h:mm PM"
    Range { start: String, end: String },
    /// Print the zone used when none is configured
    Zone,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StyleArg {
    Time,
    Date,
    DateShort,
    DateTime,
}

impl From<StyleArg> for DisplayStyle {
    fn from(val: StyleArg) -> Self {
        match val {
            StyleArg::Time => DisplayStyle::Time,
            StyleArg::Date => DisplayStyle::Date,
            StyleArg::DateShort => DisplayStyle::DateShort,
            StyleArg::DateTime => DisplayStyle::DateTime,
        }
    }
}

#[derive(Args)]
pub struct AppointmentsArgs {
    /// Principal of the signed-in patient
    #[arg(long = "as", env = "MEDSLOT_PRINCIPAL")]
    pub principal: Option<String>,

    /// Tab to show instead of the first non-empty one
    #[arg(long)]
    pub status: Option<AppointmentStatus>,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs commands against a display zone and, for database commands, a
/// [`Booking`] service.
pub struct Cli {
    renderer: TerminalRenderer,
    timezone: TimeZone,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, timezone: TimeZone) -> Self {
        Self { renderer, timezone }
    }

    pub fn handle_time_command(&self, command: TimeCommands) -> Result<()> {
        match command {
            TimeCommands::Store { instant, zone } => self.store(&instant, zone.as_deref()),
            TimeCommands::Parse { value } => self.parse(&value),
            TimeCommands::Format { input, style, ist } => self.format(&input, style.into(), ist),
            TimeCommands::Range { start, end } => {
                let range = format_time_range(start.as_str(), end.as_str(), &self.timezone)
                    .context("Failed to format time range")?;
                self.renderer.render(&range)
            }
            TimeCommands::Zone => self.renderer.render(&user_timezone()),
        }
    }

    fn store(&self, instant: &str, zone: Option<&str>) -> Result<()> {
        let timestamp = if instant.eq_ignore_ascii_case("now") {
            Timestamp::now()
        } else {
            parse_date(instant).with_context(|| format!("Failed to read instant '{instant}'"))?
        };
        let local = match zone {
            Some(name) => timezone(name)?,
            None => reference_timezone()?,
        };
        debug!("Storing {timestamp} using the wall clock of {local:?}");
        self.renderer.render(&to_storage_string(timestamp, &local)?)
    }

    fn parse(&self, value: &str) -> Result<()> {
        let stored = parse_storage_string(value)?;
        let instant = stored.to_timestamp()?;
        let display = DisplayStyle::DateTime.render(stored, &self.timezone)?;
        let zone = self.timezone.iana_name().unwrap_or("local");

        let markdown = format!(
            "- **Stored:** {stored}\n- **Instant:** {instant}\n- **Display:** {display} ({zone})\n"
        );
        self.renderer.render(&markdown)
    }

    fn format(&self, input: &str, style: DisplayStyle, ist: bool) -> Result<()> {
        let text = match (ist, style) {
            (true, DisplayStyle::Time) => format_time_ist(parse_date(input)?)?,
            (true, DisplayStyle::Date) => format_date_ist(parse_date(input)?)?,
            (true, style) => style.render(input, &reference_timezone()?)?,
            (false, style) => style.render(input, &self.timezone)?,
        };
        self.renderer.render(&text)
    }

    /// Replaces the database contents with demo data around today in IST.
    pub async fn seed(&self, booking: &Booking) -> Result<()> {
        let today = Timestamp::now().to_zoned(reference_timezone()?).date();
        let summary = booking.seed(today).await.context("Failed to seed")?;
        self.renderer.render(&summary.to_string())
    }

    pub async fn appointments(&self, booking: &Booking, args: AppointmentsArgs) -> Result<()> {
        let identity = match args.principal {
            Some(principal) => StaticIdentity::new(principal),
            None => StaticIdentity::anonymous(),
        };
        let listing = booking
            .patient_appointments(&identity)
            .await
            .context("Failed to load appointments")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&listing)?);
            return Ok(());
        }

        let tabs = AppointmentTabs::new(&listing, Role::Patient, &self.timezone);
        let tabs = tabs.with_active(args.status);
        self.renderer.render(&tabs.to_string())
    }
}
