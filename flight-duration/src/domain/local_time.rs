//! Wall-clock datetimes as supplied by callers.
//!
//! Callers give departure and arrival times as `YYYY-MM-DDTHH:MM` in the
//! local time of the airport concerned. This module only checks and parses
//! that shape; attaching a timezone happens in the duration calculator.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Error returned when parsing an invalid local datetime string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocalDateTimeError {
    /// The string does not have the `YYYY-MM-DDTHH:MM` shape.
    #[error("expected YYYY-MM-DDTHH:MM")]
    Format,

    /// The shape is right but no such date or time exists.
    #[error("no such date or time: {0}")]
    Calendar(&'static str),
}

/// A naive local datetime with minute precision.
///
/// # Examples
///
/// ```
/// use flight_duration::domain::LocalDateTime;
///
/// let dt = LocalDateTime::parse("2023-05-01T10:30").unwrap();
/// assert_eq!(dt.to_string(), "2023-05-01T10:30");
///
/// // Seconds, offsets and spaces are all rejected
/// assert!(LocalDateTime::parse("2023-05-01T10:30:00").is_err());
/// assert!(LocalDateTime::parse("2023-05-01T10:30+02:00").is_err());
/// assert!(LocalDateTime::parse("2023-05-01 10:30").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalDateTime(NaiveDateTime);

impl LocalDateTime {
    /// Parse from exactly `YYYY-MM-DDTHH:MM`.
    ///
    /// Every digit position must hold an ASCII digit. A string with the
    /// right shape that names a non-existent date (month 13, 30 February)
    /// or time (hour 24) fails with [`LocalDateTimeError::Calendar`].
    pub fn parse(s: &str) -> Result<Self, LocalDateTimeError> {
        let bytes = s.as_bytes();
        if bytes.len() != 16 {
            return Err(LocalDateTimeError::Format);
        }

        if bytes[4] != b'-' || bytes[7] != b'-' || bytes[10] != b'T' || bytes[13] != b':' {
            return Err(LocalDateTimeError::Format);
        }

        let year = parse_digits(&bytes[0..4]).ok_or(LocalDateTimeError::Format)?;
        let month = parse_digits(&bytes[5..7]).ok_or(LocalDateTimeError::Format)?;
        let day = parse_digits(&bytes[8..10]).ok_or(LocalDateTimeError::Format)?;
        let hour = parse_digits(&bytes[11..13]).ok_or(LocalDateTimeError::Format)?;
        let minute = parse_digits(&bytes[14..16]).ok_or(LocalDateTimeError::Format)?;

        // Four ASCII digits always fit in an i32
        let date = NaiveDate::from_ymd_opt(year as i32, month, day)
            .ok_or(LocalDateTimeError::Calendar("invalid date"))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(LocalDateTimeError::Calendar("invalid time"))?;

        Ok(Self(date.and_time(time)))
    }

    /// Returns the underlying naive datetime.
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalDateTime({})", self)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M"))
    }
}

/// Parse a run of ASCII digits. Signs and whitespace are rejected.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(10)?;
        Some(acc * 10 + digit)
    })
}
