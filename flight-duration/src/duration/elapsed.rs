//! Elapsed time between two instants, in day/hour/minute buckets.

use std::fmt;

use chrono::{DateTime, TimeZone};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// A non-negative span of whole minutes split into days, hours and minutes.
///
/// Days are plain 24-hour days and keep growing for long spans; there are
/// no month or year buckets.
///
/// # Examples
///
/// ```
/// use flight_duration::duration::ElapsedDuration;
///
/// let d = ElapsedDuration::from_minutes(8 * 60 + 15);
/// assert_eq!(d.to_string(), "P0DT8H15M");
///
/// let d = ElapsedDuration::from_minutes(40 * 24 * 60 + 1);
/// assert_eq!(d.to_string(), "P40DT0H1M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ElapsedDuration {
    days: i64,
    hours: i64,
    minutes: i64,
}

impl ElapsedDuration {
    /// Split a number of minutes into buckets.
    ///
    /// The sign is dropped: only the magnitude is kept.
    pub fn from_minutes(total: i64) -> Self {
        let total = total.saturating_abs();
        Self {
            days: total / MINUTES_PER_DAY,
            hours: (total % MINUTES_PER_DAY) / MINUTES_PER_HOUR,
            minutes: total % MINUTES_PER_HOUR,
        }
    }

    /// Absolute elapsed time between two instants, in either order.
    ///
    /// Leftover seconds (possible only with historical offsets that are
    /// not whole minutes) are truncated.
    pub fn between<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> Self {
        let delta = b.naive_utc().signed_duration_since(a.naive_utc());
        Self::from_minutes(delta.num_minutes())
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Total length in minutes.
    pub fn total_minutes(&self) -> i64 {
        self.days * MINUTES_PER_DAY + self.hours * MINUTES_PER_HOUR + self.minutes
    }
}

impl fmt::Display for ElapsedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}DT{}H{}M", self.days, self.hours, self.minutes)
    }
}
