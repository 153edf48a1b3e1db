//! Time zone lookup and resolution of the display zone.

use jiff::{tz::TimeZone, Timestamp};
use log::debug;

use crate::error::{BookingError, Result};

/// IANA identifier of the zone every stored time is written in (IST).
pub const REFERENCE_TIMEZONE: &str = "Asia/Kolkata";

/// Looks up a time zone by IANA identifier.
pub fn timezone(name: &str) -> Result<TimeZone> {
    TimeZone::get(name).map_err(|source| BookingError::UnknownTimezone {
        name: name.to_string(),
        source,
    })
}

/// The reference zone, [`REFERENCE_TIMEZONE`].
pub fn reference_timezone() -> Result<TimeZone> {
    timezone(REFERENCE_TIMEZONE)
}

/// IANA name of the zone configured for this process, or `"UTC"` when the
/// system zone has no name.
pub fn user_timezone() -> String {
    TimeZone::system().iana_name().unwrap_or("UTC").to_string()
}

/// Resolves the zone output is rendered in.
///
/// An explicit name wins; otherwise the system zone is used.
pub fn resolve_display_timezone(name: Option<&str>) -> Result<TimeZone> {
    match name {
        Some(name) => timezone(name),
        None => {
            let tz = TimeZone::system();
            debug!(
                "Using system time zone {} for display",
                tz.iana_name().unwrap_or("<unnamed>")
            );
            Ok(tz)
        }
    }
}

/// Returns the current instant.
///
/// The zone argument has no effect: an instant is the same everywhere, and
/// rendering it in a zone is the job of the format functions.
pub fn current_time_in_timezone(_timezone: &TimeZone) -> Timestamp {
    Timestamp::now()
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    #[test]
    fn test_reference_zone_is_ist() {
        let tz = reference_timezone().unwrap();
        assert_eq!(tz.iana_name(), Some("Asia/Kolkata"));
        let ts: Timestamp = "2025-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(tz.to_offset(ts).seconds(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn test_unknown_timezone_is_reported() {
        let err = timezone("Mars/Olympus_Mons").unwrap_err();
        let BookingError::UnknownTimezone { name, .. } = &err else {
            panic!("expected UnknownTimezone, got {err:?}");
        };
        assert_eq!(name, "Mars/Olympus_Mons");
    }

    #[test]
    fn test_explicit_display_zone_wins() {
        let tz = resolve_display_timezone(Some("America/New_York")).unwrap();
        assert_eq!(tz.iana_name(), Some("America/New_York"));
    }

    #[test]
    fn test_user_timezone_is_not_empty() {
        assert!(!user_timezone().is_empty());
    }

    #[test]
    fn test_current_time_ignores_zone() {
        let new_york = current_time_in_timezone(&timezone("America/New_York").unwrap());
        let kolkata = current_time_in_timezone(&timezone("Asia/Kolkata").unwrap());
        let gap = kolkata.duration_since(new_york);
        assert!(gap >= SignedDuration::ZERO);
        assert!(gap < SignedDuration::from_secs(1));
    }
}
