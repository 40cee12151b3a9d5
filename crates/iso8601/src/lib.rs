//! ISO8601 duration parsing and formatting.
//!
//! Converts between the ISO8601 duration notation (e.g. `P1Y2DT3H4M5S`) and
//! a signed 64-bit count of nanoseconds.
//!
//! - **[`parse`]**: text to nanoseconds, with [`parse_std`] for
//!   [`std::time::Duration`]
//! - **[`format`]**: nanoseconds to text, with [`format_std`]
//! - **[`units`]**: unit constants (a year is always 365 days)
//!
//! Months are rejected because they have no fixed length, and negative
//! durations cannot be formatted. Round trips preserve the value but not the
//! original text: `P2W` formats back as `P14D`.
//!
//! ```rust
//! use pulsearc_iso8601::{format, parse, DAY, MINUTE};
//!
//! let nanos = parse("P2DT30M").unwrap();
//! assert_eq!(nanos, 2 * DAY + 30 * MINUTE);
//! assert_eq!(format(nanos).unwrap(), "P2DT30M");
//! ```
//!
//! # Feature Tiers
//!
//! - `serde`: `#[serde(with = "...")]` adapters in [`serde`](crate::serde)
//! - `observability`: `tracing` events for parsed elements and output

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

mod decimal;
pub mod error;
pub mod format;
pub mod parse;
#[cfg(feature = "serde")]
pub mod serde;
pub mod units;

// Re-export commonly used items
pub use error::{DurationError, DurationResult};
pub use format::{format, format_std};
pub use parse::{parse, parse_std, ISO8601_DURATION_PATTERN};
pub use units::{
    Unit, DAY, HOUR, MICROSECOND, MILLISECOND, MINUTE, NANOSECOND, SECOND, WEEK, YEAR,
};
