//! Error types for duration parsing and formatting

use thiserror::Error;

/// Result alias used throughout the crate
pub type DurationResult<T> = Result<T, DurationError>;

/// Errors returned by [`parse`](crate::parse) and [`format`](crate::format)
///
/// Every error is terminal. Variants carry no payload so callers can match
/// and compare them directly.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationError {
    /// The input does not follow the ISO8601 duration grammar, holds a
    /// malformed number, misplaces a fraction, combines weeks with other
    /// units, has no elements, or does not fit the duration value type.
    #[error("bad format string")]
    BadFormat,

    /// The input contains a month element, which has no fixed length.
    #[error("no month elements allowed")]
    NoMonth,

    /// Formatting was requested for a negative duration.
    #[error("cannot format negative duration")]
    NoNegative,
}

#[cfg(test)]
mod tests {
    //! Unit tests for error.
    use super::*;

    /// Error messages are stable strings.
    #[test]
    fn test_error_display() {
        assert_eq!(DurationError::BadFormat.to_string(), "bad format string");
        assert_eq!(DurationError::NoMonth.to_string(), "no month elements allowed");
        assert_eq!(DurationError::NoNegative.to_string(), "cannot format negative duration");
    }

    /// Variants are distinguishable values.
    #[test]
    fn test_error_variants_distinct() {
        assert_ne!(DurationError::BadFormat, DurationError::NoMonth);
        assert_ne!(DurationError::NoMonth, DurationError::NoNegative);
    }
}
