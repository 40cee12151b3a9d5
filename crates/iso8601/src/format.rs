//! ISO8601 duration formatting
//!
//! Decomposes a nanosecond count greedily from years down to seconds and
//! emits only the designators needed to reconstruct the value exactly.
//! Weeks and months are never emitted.

use std::fmt::Write;
use std::time::Duration;

use crate::error::{DurationError, DurationResult};
use crate::units::{Unit, DAY, HOUR, MICROSECOND, MILLISECOND, MINUTE, SECOND, YEAR};

/// Format a nanosecond count as an ISO8601 duration
///
/// Zero is rendered as `"P0Y"`. Fractional seconds use 3, 6 or 9 digits,
/// whichever is the shortest exact representation.
///
/// # Errors
///
/// Returns [`DurationError::NoNegative`] for negative values.
///
/// # Examples
///
/// ```
/// use pulsearc_iso8601::{format, DAY, HOUR, MILLISECOND, MINUTE};
///
/// assert_eq!(format(0).unwrap(), "P0Y");
/// assert_eq!(format(HOUR + MINUTE).unwrap(), "PT1H1M");
/// assert_eq!(format(10 * DAY + HOUR + 1001 * MILLISECOND).unwrap(), "P10DT1H1.001S");
/// ```
pub fn format(d: i64) -> DurationResult<String> {
    if d < 0 {
        return Err(DurationError::NoNegative);
    }

    let mut out = String::from("P");
    if d == 0 {
        out.push_str("0Y");
    } else {
        write_components(&mut out, d);
    }

    #[cfg(feature = "observability")]
    tracing::trace!(nanos = d, formatted = %out, "formatted ISO8601 duration");

    Ok(out)
}

/// Format a [`std::time::Duration`] as an ISO8601 duration
///
/// # Errors
///
/// Returns [`DurationError::BadFormat`] when the duration exceeds
/// `i64::MAX` nanoseconds.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use pulsearc_iso8601::format_std;
///
/// assert_eq!(format_std(Duration::from_millis(1500)).unwrap(), "PT1.500S");
/// ```
pub fn format_std(d: Duration) -> DurationResult<String> {
    let nanos = i64::try_from(d.as_nanos()).map_err(|_| DurationError::BadFormat)?;
    format(nanos)
}

// Writes the designators for a positive `d`. Each step returns once the
// remainder reaches zero; the seconds step always terminates.
fn write_components(out: &mut String, mut d: i64) {
    if take(out, &mut d, Unit::Year, YEAR) {
        return;
    }
    if take(out, &mut d, Unit::Day, DAY) {
        return;
    }

    // The remainder is non-zero and below one day here, so at least one
    // time element always follows.
    out.push('T');

    if take(out, &mut d, Unit::Hour, HOUR) {
        return;
    }
    if take(out, &mut d, Unit::Minute, MINUTE) {
        return;
    }
    write_seconds(out, d);
}

// Emits `{q}{designator}` when `d` holds at least one `unit` and reports
// whether the remainder is now zero.
fn take(out: &mut String, d: &mut i64, unit: Unit, unit_nanos: i64) -> bool {
    let q = *d / unit_nanos;
    if q >= 1 {
        let _ = write!(out, "{q}{}", unit.designator());
        *d -= q * unit_nanos;
    }
    *d == 0
}

fn write_seconds(out: &mut String, d: i64) {
    let secs = d / SECOND;
    let nanos = d % SECOND;

    let _ = if nanos == 0 {
        write!(out, "{secs}S")
    } else if nanos % MILLISECOND == 0 {
        write!(out, "{secs}.{:03}S", nanos / MILLISECOND)
    } else if nanos % MICROSECOND == 0 {
        write!(out, "{secs}.{:06}S", nanos / MICROSECOND)
    } else {
        write!(out, "{secs}.{nanos:09}S")
    };
}
