//! Markdown rendering of appointment listings and operation results.
//!
//! Wrappers hold references to domain data plus the display zone, and
//! implement [`std::fmt::Display`] so the CLI renderer (or any other front
//! end) gets ready-to-print markdown.
//!
//! - [`appointments`]: the status tab view of a patient's appointments
//! - [`seed`]: summary printed after seeding

pub mod appointments;
pub mod seed;

pub use appointments::{AppointmentCard, AppointmentTabs};
