//! Routing of date inputs to the naive or the generic parser.

use jiff::{civil, fmt::rfc2822, tz::TimeZone, Timestamp, Zoned};
use log::warn;

use super::stored::{parse_storage_string, StoredTime};
use crate::error::{BookingError, Result};

/// Anything the format functions accept as a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// An absolute instant
    Instant(Timestamp),
    /// Already parsed wall-clock fields in the reference zone
    Stored(StoredTime),
    /// Raw text, routed by [`DateInput::is_storage_text`]
    Text(&'a str),
}

impl DateInput<'_> {
    /// Whether this input is text that takes the naive storage-string path:
    /// it contains `T` and no `Z`.
    pub fn is_storage_text(&self) -> bool {
        matches!(self, DateInput::Text(text) if text.contains('T') && !text.contains('Z'))
    }

    /// Resolves the input to an instant.
    ///
    /// Storage text is read as wall-clock time in the reference zone. Other
    /// text goes through [`parse_generic`].
    pub fn resolve(&self) -> Result<Timestamp> {
        match *self {
            DateInput::Instant(ts) => Ok(ts),
            DateInput::Stored(stored) => stored.to_timestamp(),
            DateInput::Text(text) if self.is_storage_text() => {
                parse_storage_string(text)?.to_timestamp()
            }
            DateInput::Text(text) => parse_generic(text),
        }
    }
}

impl From<Timestamp> for DateInput<'_> {
    fn from(value: Timestamp) -> Self {
        DateInput::Instant(value)
    }
}

impl From<&Zoned> for DateInput<'_> {
    fn from(value: &Zoned) -> Self {
        DateInput::Instant(value.timestamp())
    }
}

impl From<StoredTime> for DateInput<'_> {
    fn from(value: StoredTime) -> Self {
        DateInput::Stored(value)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        DateInput::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        DateInput::Text(value.as_str())
    }
}

/// Parses text that carries its own offset, or a bare date.
///
/// Accepted forms, tried in order: an RFC 3339 / ISO 8601 instant with `Z`
/// or a numeric offset, a `YYYY-MM-DD` date (taken as UTC midnight) and an
/// RFC 2822 date-time.
pub fn parse_generic(text: &str) -> Result<Timestamp> {
    let trimmed = text.trim();
    if let Ok(ts) = trimmed.parse::<Timestamp>() {
        return Ok(ts);
    }
    if let Ok(date) = trimmed.parse::<civil::Date>() {
        return date
            .to_zoned(TimeZone::UTC)
            .map(|zoned| zoned.timestamp())
            .map_err(|e| BookingError::unparsable(text, e.to_string()));
    }
    rfc2822::parse(trimmed)
        .map(|zoned| zoned.timestamp())
        .map_err(|_| BookingError::unparsable(text, "not a recognized date format"))
}

/// Resolves an input to an instant, reporting failures.
pub fn parse_date<'a>(input: impl Into<DateInput<'a>>) -> Result<Timestamp> {
    input.into().resolve()
}

/// Resolves an input to an instant, substituting the current time when the
/// input is missing or unparsable.
///
/// Callers cannot tell a substituted "now" from a real one; use
/// [`parse_date`] when the difference matters. Each substitution is logged.
pub fn safe_parse_date(input: Option<DateInput<'_>>) -> Timestamp {
    let Some(input) = input else {
        warn!("No date given, substituting the current time");
        return Timestamp::now();
    };
    match input.resolve() {
        Ok(ts) => ts,
        Err(e) => {
            warn!("{e}; substituting the current time");
            Timestamp::now()
        }
    }
}
