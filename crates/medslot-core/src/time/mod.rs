//! Local-time storage and display.
//!
//! Appointment and availability times are persisted as naive wall-clock
//! strings (`YYYY-MM-DDTHH:mm:ss`) in a single reference zone, IST. This
//! module converts between instants and that form, and renders either one
//! for people in whatever zone they are in.
//!
//! ```text
//! Timestamp ──to_storage_string──▶ "2025-07-21T14:30:00" ──parse──▶ StoredTime
//!                                                                       │
//!        "July 21, 2025 at 2:30 PM" ◀──format_*(input, display zone)────┘
//! ```
//!
//! # Zones
//!
//! Two zones are involved and they never mix:
//!
//! - the **reference zone** gives stored fields their meaning and is fixed
//!   ([`REFERENCE_TIMEZONE`]);
//! - the **display zone** only controls rendering and is passed in by the
//!   caller, usually resolved once with [`resolve_display_timezone`].
//!
//! # Examples
//!
//! ```rust
//! use medslot_core::time::{format_date_time, format_time_range, timezone};
//!
//! let tz = timezone("Asia/Kolkata")?;
//! assert_eq!(
//!     format_date_time("2025-07-21T14:30:00", &tz)?,
//!     "July 21, 2025 at 2:30 PM"
//! );
//! assert_eq!(
//!     format_time_range("2025-07-21T14:30:00", "2025-07-21T15:30:00", &tz)?,
//!     "2:30 PM - 3:30 PM"
//! );
//! # Ok::<(), medslot_core::BookingError>(())
//! ```

pub mod format;
pub mod input;
pub mod stored;
pub mod zone;

pub use format::{
    format_date, format_date_ist, format_date_short, format_date_time, format_time,
    format_time_ist, format_time_range, DisplayStyle,
};
pub use input::{parse_date, parse_generic, safe_parse_date, DateInput};
pub use stored::{parse_storage_string, to_storage_string, StoredTime, STORAGE_YEARS};
pub use zone::{
    current_time_in_timezone, reference_timezone, resolve_display_timezone, timezone,
    user_timezone, REFERENCE_TIMEZONE,
};
