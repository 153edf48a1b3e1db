//! High-level booking API.
//!
//! [`Booking`] sits between front ends (the CLI, tests) and the database. It
//! resolves the caller through an [`crate::identity::Identity`], enforces
//! role checks, and runs the blocking SQLite work off the async runtime.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Identity     │───▶│     Booking     │───▶│    Database     │
//! │ (who is asking) │    │ (role checks,   │    │   (via db/)     │
//! │                 │    │  spawn_blocking)│    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use medslot_core::{BookingBuilder, StaticIdentity};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let booking = BookingBuilder::new()
//!     .with_database_path(Some("/tmp/medslot.db"))
//!     .with_display_timezone(Some("Asia/Kolkata"))
//!     .build()
//!     .await?;
//!
//! let listing = booking
//!     .patient_appointments(&StaticIdentity::new("patient_alice_clerk_id"))
//!     .await?;
//! println!("{} appointments", listing.appointments.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use jiff::tz::TimeZone;

pub mod builder;
pub mod patient_ops;
pub mod seed_ops;


pub use builder::BookingBuilder;

/// Main booking interface.
pub struct Booking {
    pub(crate) db_path: PathBuf,
    display_timezone: TimeZone,
}

impl Booking {
    /// Creates a new booking service over the given database.
    pub(crate) fn new(db_path: PathBuf, display_timezone: TimeZone) -> Self {
        Self {
            db_path,
            display_timezone,
        }
    }

    /// Zone appointment times are rendered in.
    pub fn display_timezone(&self) -> &TimeZone {
        &self.display_timezone
    }
}
