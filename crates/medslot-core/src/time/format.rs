//! Human-readable rendering of appointment times.
//!
//! Every function resolves its input through [`DateInput::resolve`] and
//! renders the resulting instant in the requested zone, so a stored time
//! written in IST shows the correct wall clock in any display zone.

use jiff::{fmt::strtime, tz::TimeZone, Timestamp};

use super::{input::DateInput, zone::reference_timezone};
use crate::error::{BookingError, Result};

/// The field sets the format functions produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    /// `2:30 PM`
    Time,
    /// `Monday, July 21, 2025`
    Date,
    /// `Monday, July 21`
    DateShort,
    /// `July 21, 2025 at 2:30 PM`
    DateTime,
}

impl DisplayStyle {
    /// The strftime pattern for this style.
    pub fn pattern(&self) -> &'static str {
        match self {
            DisplayStyle::Time => "%-I:%M %p",
            DisplayStyle::Date => "%A, %B %-d, %Y",
            DisplayStyle::DateShort => "%A, %B %-d",
            DisplayStyle::DateTime => "%B %-d, %Y at %-I:%M %p",
        }
    }

    /// Renders `input` in `tz`.
    pub fn render<'a>(&self, input: impl Into<DateInput<'a>>, tz: &TimeZone) -> Result<String> {
        let timestamp = input.into().resolve()?;
        render_instant(*self, timestamp, tz)
    }
}

fn render_instant(style: DisplayStyle, timestamp: Timestamp, tz: &TimeZone) -> Result<String> {
    let zoned = timestamp.to_zoned(tz.clone());
    strtime::format(style.pattern(), &zoned)
        .map_err(|e| BookingError::time(format!("Cannot format {timestamp}"), e))
}

/// Time only, e.g. `2:30 PM`.
pub fn format_time<'a>(input: impl Into<DateInput<'a>>, tz: &TimeZone) -> Result<String> {
    DisplayStyle::Time.render(input, tz)
}

/// Weekday and full date, e.g. `Monday, July 21, 2025`.
pub fn format_date<'a>(input: impl Into<DateInput<'a>>, tz: &TimeZone) -> Result<String> {
    DisplayStyle::Date.render(input, tz)
}

/// Weekday, month and day, e.g. `Monday, July 21`.
pub fn format_date_short<'a>(input: impl Into<DateInput<'a>>, tz: &TimeZone) -> Result<String> {
    DisplayStyle::DateShort.render(input, tz)
}

/// Date and time, e.g. `July 21, 2025 at 2:30 PM`.
pub fn format_date_time<'a>(input: impl Into<DateInput<'a>>, tz: &TimeZone) -> Result<String> {
    DisplayStyle::DateTime.render(input, tz)
}

/// Start and end times joined by `" - "`, both rendered in `tz`.
pub fn format_time_range<'a, 'b>(
    start: impl Into<DateInput<'a>>,
    end: impl Into<DateInput<'b>>,
    tz: &TimeZone,
) -> Result<String> {
    let start = format_time(start, tz)?;
    let end = format_time(end, tz)?;
    Ok(format!("{start} - {end}"))
}

/// Time of an instant in the reference zone, whatever the caller's zone.
pub fn format_time_ist(timestamp: Timestamp) -> Result<String> {
    render_instant(DisplayStyle::Time, timestamp, &reference_timezone()?)
}

/// Date of an instant in the reference zone, whatever the caller's zone.
pub fn format_date_ist(timestamp: Timestamp) -> Result<String> {
    render_instant(DisplayStyle::Date, timestamp, &reference_timezone()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{stored::StoredTime, zone::timezone};

    fn kolkata() -> TimeZone {
        timezone("Asia/Kolkata").unwrap()
    }

    fn new_york() -> TimeZone {
        timezone("America/New_York").unwrap()
    }

    #[test]
    fn test_format_date_time_from_storage_string() {
        assert_eq!(
            format_date_time("2025-07-21T14:30:00", &kolkata()).unwrap(),
            "July 21, 2025 at 2:30 PM"
        );
    }

    #[test]
    fn test_each_style_from_storage_string() {
        let input = "2025-07-21T09:05:00";
        assert_eq!(format_time(input, &kolkata()).unwrap(), "9:05 AM");
        assert_eq!(
            format_date(input, &kolkata()).unwrap(),
            "Monday, July 21, 2025"
        );
        assert_eq!(
            format_date_short(input, &kolkata()).unwrap(),
            "Monday, July 21"
        );
    }

    #[test]
    fn test_midnight_and_noon_use_twelve() {
        assert_eq!(
            format_time("2025-07-21T00:15:00", &kolkata()).unwrap(),
            "12:15 AM"
        );
        assert_eq!(
            format_time("2025-07-21T12:00:00", &kolkata()).unwrap(),
            "12:00 PM"
        );
    }

    #[test]
    fn test_storage_string_is_converted_to_display_zone() {
        // 14:30 IST is 05:00 in New York during daylight saving time.
        assert_eq!(
            format_date_time("2025-07-21T14:30:00", &new_york()).unwrap(),
            "July 21, 2025 at 5:00 AM"
        );
    }

    #[test]
    fn test_zulu_string_takes_generic_path() {
        assert_eq!(
            format_time("2025-07-21T14:30:00Z", &kolkata()).unwrap(),
            "8:00 PM"
        );
        assert_eq!(
            format_time("2025-07-21T14:30:00Z", &TimeZone::UTC).unwrap(),
            "2:30 PM"
        );
    }

    #[test]
    fn test_instant_and_stored_inputs() {
        let ts: Timestamp = "2025-07-21T09:00:00Z".parse().unwrap();
        assert_eq!(format_time(ts, &kolkata()).unwrap(), "2:30 PM");

        let stored: StoredTime = "2025-07-21T14:30:00".parse().unwrap();
        assert_eq!(format_time(stored, &kolkata()).unwrap(), "2:30 PM");
    }

    #[test]
    fn test_time_range_joins_both_ends() {
        let tz = kolkata();
        let (start, end) = ("2025-07-21T14:30:00", "2025-07-21T15:30:00");
        let range = format_time_range(start, end, &tz).unwrap();
        assert_eq!(range, "2:30 PM - 3:30 PM");
        assert_eq!(
            range,
            format!(
                "{} - {}",
                format_time(start, &tz).unwrap(),
                format_time(end, &tz).unwrap()
            )
        );
    }

    #[test]
    fn test_formatting_is_repeatable() {
        let tz = new_york();
        let first = format_date_time("2025-03-09T12:00:00", &tz).unwrap();
        let second = format_date_time("2025-03-09T12:00:00", &tz).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ist_variants_ignore_caller_zone() {
        let ts: Timestamp = "2025-07-21T20:00:00Z".parse().unwrap();
        assert_eq!(format_time_ist(ts).unwrap(), "1:30 AM");
        assert_eq!(format_date_ist(ts).unwrap(), "Tuesday, July 22, 2025");
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(format_time("2025-07-21T99:00:00", &kolkata()).is_err());
        assert!(format_date("yesterday", &kolkata()).is_err());
    }
}
