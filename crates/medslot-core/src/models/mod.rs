//! Data models for users, appointments and the credit ledger.
//!
//! Times that people book against ([`Appointment::start_time`],
//! [`Availability::end_time`], ...) are [`crate::time::StoredTime`] values:
//! IST wall-clock fields, never instants. Bookkeeping times such as
//! [`NewPayout::processed_at`] are plain [`jiff::Timestamp`]s.
//!
//! Display of appointment listings lives in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use medslot_core::models::{AppointmentStatus, PatientAppointments, StatusCount};
//!
//! let listing = PatientAppointments {
//!     appointments: vec![],
//!     counts: vec![StatusCount { status: AppointmentStatus::Scheduled, count: 2 }],
//! };
//! assert_eq!(listing.count_for(AppointmentStatus::Scheduled), 2);
//! assert_eq!(listing.count_for(AppointmentStatus::Cancelled), 0);
//! ```

pub mod appointment;
pub mod ledger;
pub mod status;
pub mod summary;
pub mod user;

#[cfg(test)]
mod tests;

pub use appointment::{
    Appointment, DoctorSummary, NewAppointment, PatientAppointments, StatusCount,
};
pub use ledger::{
    Availability, CreditTransaction, NewAvailability, NewCreditTransaction, NewPayout, Payout,
    CREDIT_VALUE_USD, PLATFORM_FEE_PER_CREDIT_USD,
};
pub use status::{
    AppointmentStatus, AvailabilityStatus, PayoutStatus, Role, TransactionType, VerificationStatus,
};
pub use summary::SeedSummary;
pub use user::{NewUser, User};
