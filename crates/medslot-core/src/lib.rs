//! Core library for the medslot appointment-booking application.
//!
//! The heart of the crate is [`time`]: appointment times are stored as naive
//! IST wall-clock strings and rendered for each viewer in their own zone.
//! Around it sit the domain [`models`], SQLite persistence in [`db`], the
//! async [`booking`] service and markdown [`display`] wrappers.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use medslot_core::{BookingBuilder, StaticIdentity, display::AppointmentTabs, models::Role};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let booking = BookingBuilder::new()
//!     .with_database_path(Some("medslot.db"))
//!     .with_display_timezone(Some("Asia/Kolkata"))
//!     .build()
//!     .await?;
//!
//! let listing = booking
//!     .patient_appointments(&StaticIdentity::new("patient_alice_clerk_id"))
//!     .await?;
//! let tabs = AppointmentTabs::new(&listing, Role::Patient, booking.display_timezone());
//! println!("{tabs}");
//! # Ok(())
//! # }
//! ```

pub mod booking;
pub mod db;
pub mod display;
pub mod error;
pub mod identity;
pub mod models;
pub mod time;

// Re-export commonly used types
pub use booking::{Booking, BookingBuilder};
pub use db::Database;
pub use error::{BookingError, Result};
pub use identity::{Identity, StaticIdentity};
pub use models::{Appointment, AppointmentStatus, PatientAppointments, Role, StatusCount};
pub use time::{DateInput, StoredTime};
