//! Naive wall-clock values persisted as `YYYY-MM-DDTHH:mm:ss` strings.
//!
//! A [`StoredTime`] carries the six civil fields of an appointment or
//! availability slot exactly as they were written. The text form has no
//! offset and no `Z`; its meaning is always wall-clock time in the reference
//! zone ([`super::REFERENCE_TIMEZONE`]). Keeping the fields in a dedicated
//! type makes that assumption visible wherever a stored time travels.

use std::{fmt, ops::RangeInclusive, str::FromStr};

use jiff::{civil, tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

use super::zone::reference_timezone;
use crate::error::{BookingError, Result};

/// Years the four-digit storage form can carry.
pub const STORAGE_YEARS: RangeInclusive<i16> = 0..=9999;

/// Wall-clock fields in the reference time zone, second precision.
///
/// Ordering follows the civil fields, which is also the lexical order of
/// the storage string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct StoredTime(civil::DateTime);

impl StoredTime {
    /// Builds a stored time from civil fields.
    ///
    /// Sub-second precision is dropped. Years outside [`STORAGE_YEARS`] have
    /// no storage string and are rejected.
    pub fn new(datetime: civil::DateTime) -> Result<Self> {
        let year = datetime.year();
        if !STORAGE_YEARS.contains(&year) {
            let reason = format!("{year} is outside 0000..=9999");
            return Err(BookingError::invalid_input("year").with_reason(reason));
        }
        let date = datetime.date();
        let truncated = date.at(datetime.hour(), datetime.minute(), datetime.second(), 0);
        Ok(Self(truncated))
    }

    /// Builds a stored time from the six numeric fields, validating ranges.
    pub fn from_fields(
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
    ) -> Result<Self> {
        let datetime = civil::DateTime::new(year, month, day, hour, minute, second, 0)
            .map_err(|e| {
                BookingError::unparsable(
                    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}"),
                    e.to_string(),
                )
            })?;
        Self::new(datetime)
    }

    /// Projects an instant onto the wall clock of `local`.
    ///
    /// No zone conversion is applied to the result: the fields are whatever
    /// `local` shows at that instant. Instants whose local year falls
    /// outside [`STORAGE_YEARS`] are rejected.
    pub fn from_timestamp(timestamp: Timestamp, local: &TimeZone) -> Result<Self> {
        Self::new(timestamp.to_zoned(local.clone()).datetime())
    }

    /// The civil fields as written.
    pub fn datetime(&self) -> civil::DateTime {
        self.0
    }

    /// Resolves the fields as wall-clock time in the reference zone.
    pub fn to_timestamp(&self) -> Result<Timestamp> {
        self.to_timestamp_in(&reference_timezone()?)
    }

    /// Resolves the fields as wall-clock time in an arbitrary zone.
    ///
    /// Gaps and folds use the "compatible" disambiguation strategy.
    pub fn to_timestamp_in(&self, tz: &TimeZone) -> Result<Timestamp> {
        self.0
            .to_zoned(tz.clone())
            .map(|zoned| zoned.timestamp())
            .map_err(|e| BookingError::time(format!("Cannot resolve {self} in time zone"), e))
    }
}

impl fmt::Display for StoredTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = self.0;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        )
    }
}

impl FromStr for StoredTime {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        parse_storage_string(s)
    }
}

impl From<StoredTime> for String {
    fn from(value: StoredTime) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for StoredTime {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self> {
        parse_storage_string(&value)
    }
}

/// Serializes the wall-clock fields of `timestamp` as observed in `local`.
pub fn to_storage_string(timestamp: Timestamp, local: &TimeZone) -> Result<String> {
    Ok(StoredTime::from_timestamp(timestamp, local)?.to_string())
}

/// Parses a `YYYY-MM-DDTHH:mm[:ss]` string into its civil fields.
///
/// The text is split on the first `T`; the date on `-` into exactly three
/// numbers and the time on `:` into two or three. Missing or empty seconds
/// count as zero.
pub fn parse_storage_string(input: &str) -> Result<StoredTime> {
    let fail = |reason: &str| BookingError::unparsable(input, reason);

    let (date_part, time_part) = input
        .split_once('T')
        .ok_or_else(|| fail("missing 'T' separator"))?;

    let date_fields: Vec<&str> = date_part.split('-').collect();
    let [year, month, day] = date_fields.as_slice() else {
        return Err(fail("date must be YYYY-MM-DD"));
    };

    let time_fields: Vec<&str> = time_part.split(':').collect();
    let (hour, minute, second) = match time_fields.as_slice() {
        [hour, minute] => (*hour, *minute, ""),
        [hour, minute, second] => (*hour, *minute, *second),
        _ => return Err(fail("time must be HH:mm or HH:mm:ss")),
    };

    let year = number::<i16>(input, year, "year")?;
    let month = number::<i8>(input, month, "month")?;
    let day = number::<i8>(input, day, "day")?;
    let hour = number::<i8>(input, hour, "hour")?;
    let minute = number::<i8>(input, minute, "minute")?;
    let second = if second.is_empty() {
        0
    } else {
        number::<i8>(input, second, "second")?
    };

    civil::DateTime::new(year, month, day, hour, minute, second, 0)
        .map(StoredTime)
        .map_err(|e| fail(&e.to_string()))
}

/// Reads one all-digit field of `input`.
fn number<T: FromStr>(input: &str, text: &str, field: &str) -> Result<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BookingError::unparsable(input, format!("{field} is not a number")));
    }
    text.parse()
        .map_err(|_| BookingError::unparsable(input, format!("{field} out of range")))
}
