//! Row decoding helpers shared by the query modules.

use std::{fmt::Display, str::FromStr};

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

use crate::{
    error::{BookingError, Result},
    time::StoredTime,
};

/// Reads a TEXT column and parses it with [`FromStr`].
pub(crate) fn parse_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text: String = row.get(idx)?;
    text.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("Invalid value '{text}': {e}").into(),
        )
    })
}

/// Reads a nullable TEXT column and parses it with [`FromStr`].
pub(crate) fn parse_optional_column<T>(row: &Row, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let text: Option<String> = row.get(idx)?;
    match text {
        Some(_) => parse_column(row, idx).map(Some),
        None => Ok(None),
    }
}

/// Reads an INTEGER primary or foreign key.
pub(crate) fn id_column(row: &Row, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Current instant in the RFC 3339 form used for bookkeeping columns.
pub(crate) fn now_string() -> String {
    Timestamp::now().to_string()
}

/// Rejects a time range whose end does not come after its start.
pub(crate) fn ensure_ordered(start: StoredTime, end: StoredTime) -> Result<()> {
    if end <= start {
        let reason = format!("{end} is not after {start}");
        return Err(BookingError::invalid_input("end_time").with_reason(reason));
    }
    Ok(())
}
