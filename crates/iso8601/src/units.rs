//! Unit constants and grammar slots
//!
//! All durations in this crate are signed 64-bit nanosecond counts. The
//! calendar units are fixed approximations: a day is always 24 hours, a week
//! 7 days and a year 365 days. Leap years and calendars are not considered.

use std::fmt;

/// One nanosecond.
pub const NANOSECOND: i64 = 1;
/// One microsecond in nanoseconds.
pub const MICROSECOND: i64 = 1_000 * NANOSECOND;
/// One millisecond in nanoseconds.
pub const MILLISECOND: i64 = 1_000 * MICROSECOND;
/// One second in nanoseconds.
pub const SECOND: i64 = 1_000 * MILLISECOND;
/// One minute in nanoseconds.
pub const MINUTE: i64 = 60 * SECOND;
/// One hour in nanoseconds.
pub const HOUR: i64 = 60 * MINUTE;
/// One day (24 hours) in nanoseconds.
pub const DAY: i64 = 24 * HOUR;
/// One week (7 days) in nanoseconds.
pub const WEEK: i64 = 7 * DAY;
/// One year (365 days) in nanoseconds.
pub const YEAR: i64 = 365 * DAY;

/// A designator slot of the ISO8601 duration grammar.
///
/// Variants are declared in grammar order, so the derived `Ord` matches the
/// order in which designators may appear in a duration string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Every slot, in grammar order.
    pub const ALL: [Self; 7] =
        [Self::Year, Self::Month, Self::Week, Self::Day, Self::Hour, Self::Minute, Self::Second];

    /// Capture group name used by the grammar pattern.
    pub const fn group_name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }

    /// Designator letter that terminates the slot's number.
    pub const fn designator(self) -> char {
        match self {
            Self::Year => 'Y',
            Self::Month | Self::Minute => 'M',
            Self::Week => 'W',
            Self::Day => 'D',
            Self::Hour => 'H',
            Self::Second => 'S',
        }
    }

    /// Length of one unit in nanoseconds.
    ///
    /// Months have no fixed length and return `None`.
    pub const fn nanos(self) -> Option<i64> {
        match self {
            Self::Year => Some(YEAR),
            Self::Month => None,
            Self::Week => Some(WEEK),
            Self::Day => Some(DAY),
            Self::Hour => Some(HOUR),
            Self::Minute => Some(MINUTE),
            Self::Second => Some(SECOND),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_name())
    }
}
