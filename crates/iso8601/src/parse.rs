//! ISO8601 duration parsing
//!
//! Parses strings of the form `P[n]Y[n]M[n]W[n]D[T[n]H[n]M[n]S]` into a
//! nanosecond count. The grammar is matched by a single anchored pattern;
//! the element rules the pattern cannot express are checked afterwards:
//!
//! - at most one element may carry a fraction, and it must be the last one
//! - month elements are rejected with [`DurationError::NoMonth`]
//! - a week element must be the only element
//! - at least one element must be present

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::decimal::Decimal;
use crate::error::{DurationError, DurationResult};
use crate::units::Unit;

/// Anchored grammar for ISO8601 durations, one named group per unit.
///
/// Digit classes are ASCII-only and designators are case-sensitive.
pub const ISO8601_DURATION_PATTERN: &str = concat!(
    r"^P",
    r"(?:(?P<year>[0-9]+(?:[.,][0-9]+)?)Y)?",
    r"(?:(?P<month>[0-9]+(?:[.,][0-9]+)?)M)?",
    r"(?:(?P<week>[0-9]+(?:[.,][0-9]+)?)W)?",
    r"(?:(?P<day>[0-9]+(?:[.,][0-9]+)?)D)?",
    r"(?:T",
    r"(?:(?P<hour>[0-9]+(?:[.,][0-9]+)?)H)?",
    r"(?:(?P<minute>[0-9]+(?:[.,][0-9]+)?)M)?",
    r"(?:(?P<second>[0-9]+(?:[.,][0-9]+)?)S)?",
    r")?$",
);

static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(ISO8601_DURATION_PATTERN).expect("DURATION_REGEX should compile - this is a bug")
});

/// Parse an ISO8601 duration into a nanosecond count
///
/// Leading and trailing whitespace is ignored. Years are 365 days and
/// weeks 7 days. Month elements (e.g. `"P1M"`) are not supported.
///
/// # Errors
///
/// Returns [`DurationError::NoMonth`] when a month element is present and
/// [`DurationError::BadFormat`] for every other invalid input, including
/// totals that overflow `i64`.
///
/// # Examples
///
/// ```
/// use pulsearc_iso8601::{parse, DurationError, HOUR, SECOND};
///
/// assert_eq!(parse("PT1H30S").unwrap(), HOUR + 30 * SECOND);
/// assert_eq!(parse("PT0.5S").unwrap(), 500_000_000);
/// assert_eq!(parse("P1M"), Err(DurationError::NoMonth));
/// assert_eq!(parse("P1S"), Err(DurationError::BadFormat));
/// ```
pub fn parse(s: &str) -> DurationResult<i64> {
    let caps = DURATION_REGEX.captures(s.trim()).ok_or(DurationError::BadFormat)?;
    accumulate(&caps)
}

/// Parse an ISO8601 duration into a [`std::time::Duration`]
///
/// # Errors
///
/// Same as [`parse`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use pulsearc_iso8601::parse_std;
///
/// assert_eq!(parse_std("PT1M").unwrap(), Duration::from_secs(60));
/// ```
pub fn parse_std(s: &str) -> DurationResult<Duration> {
    let nanos = u64::try_from(parse(s)?).map_err(|_| DurationError::BadFormat)?;
    Ok(Duration::from_nanos(nanos))
}

fn accumulate(caps: &Captures<'_>) -> DurationResult<i64> {
    let mut total: i64 = 0;
    let mut elements = 0usize;
    let mut saw_week = false;
    let mut saw_fraction = false;

    for unit in Unit::ALL {
        let Some(part) = caps.name(unit.group_name()) else {
            continue;
        };

        let value = Decimal::parse(part.as_str())?;

        // A fraction ends the string: nothing may follow it.
        if saw_fraction {
            return Err(DurationError::BadFormat);
        }
        saw_fraction = value.has_fraction;

        let Some(unit_nanos) = unit.nanos() else {
            return Err(DurationError::NoMonth);
        };

        total = value
            .whole
            .checked_mul(unit_nanos)
            .and_then(|whole| total.checked_add(whole))
            .and_then(|t| t.checked_add(value.frac_nanos(unit_nanos)))
            .ok_or(DurationError::BadFormat)?;

        #[cfg(feature = "observability")]
        tracing::trace!(%unit, whole = value.whole, frac = value.frac, "duration element");

        saw_week |= unit == Unit::Week;
        elements += 1;
    }

    if elements == 0 {
        return Err(DurationError::BadFormat);
    }

    // Weeks cannot be combined with any other unit.
    if saw_week && elements > 1 {
        return Err(DurationError::BadFormat);
    }

    #[cfg(feature = "observability")]
    tracing::debug!(total, elements, "parsed ISO8601 duration");

    Ok(total)
}
