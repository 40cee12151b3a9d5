//! Decimal component parsing
//!
//! Splits a matched number such as `12`, `1.5` or `0,25` into its integer
//! and fractional parts. Both `.` and `,` are accepted as the separator.

use crate::error::{DurationError, DurationResult};

/// Integer and fractional parts of one numeric duration element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Decimal {
    /// Integer part, always non-negative.
    pub whole: i64,
    /// Fractional part in `[0, 1)`.
    pub frac: f64,
    /// Whether a separator was present, even if the fraction is zero.
    pub has_fraction: bool,
}

impl Decimal {
    /// Parse `digits[(.|,)digits]`.
    ///
    /// Any numeric failure, including an integer part that overflows `i64`,
    /// is reported as [`DurationError::BadFormat`].
    pub(crate) fn parse(s: &str) -> DurationResult<Self> {
        let Some((whole, frac)) = s.split_once(['.', ',']) else {
            return Ok(Self { whole: parse_whole(s)?, frac: 0.0, has_fraction: false });
        };

        Ok(Self { whole: parse_whole(whole)?, frac: parse_frac(frac)?, has_fraction: true })
    }

    /// Nanoseconds contributed by the fractional part for a unit of `unit_nanos`.
    ///
    /// Rounded to the nearest nanosecond.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub(crate) fn frac_nanos(&self, unit_nanos: i64) -> i64 {
        (self.frac * unit_nanos as f64).round() as i64
    }
}

fn parse_whole(digits: &str) -> DurationResult<i64> {
    if !is_ascii_digits(digits) {
        return Err(DurationError::BadFormat);
    }
    digits.parse::<i64>().map_err(|_| DurationError::BadFormat)
}

fn parse_frac(digits: &str) -> DurationResult<f64> {
    if !is_ascii_digits(digits) {
        return Err(DurationError::BadFormat);
    }
    format!("0.{digits}").parse::<f64>().map_err(|_| DurationError::BadFormat)
}

// `str::parse` would otherwise accept a leading `+`.
fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    //! Unit tests for decimal.
    use super::*;

    /// Plain integers have no fraction.
    #[test]
    fn test_parse_integer() {
        let d = Decimal::parse("42").unwrap();
        assert_eq!(d.whole, 42);
        assert_eq!(d.frac, 0.0);
        assert!(!d.has_fraction);
    }

    /// Both separators split the number the same way.
    #[test]
    fn test_parse_separators() {
        let dot = Decimal::parse("1.5").unwrap();
        let comma = Decimal::parse("1,5").unwrap();
        assert_eq!(dot, comma);
        assert_eq!(dot.whole, 1);
        assert_eq!(dot.frac, 0.5);
        assert!(dot.has_fraction);
    }

    /// A zero fraction still counts as a fraction.
    #[test]
    fn test_parse_zero_fraction() {
        let d = Decimal::parse("1.0").unwrap();
        assert_eq!(d.frac, 0.0);
        assert!(d.has_fraction);
    }

    /// Malformed sub-parts are rejected.
    #[test]
    fn test_parse_invalid() {
        for input in ["", ".5", "5.", "+5", "1.+5", "1.2.3", "a", "9223372036854775808"] {
            assert_eq!(Decimal::parse(input), Err(DurationError::BadFormat), "{input}");
        }
    }

    /// `i64::MAX` is still a valid integer part.
    #[test]
    fn test_parse_max_whole() {
        assert_eq!(Decimal::parse("9223372036854775807").unwrap().whole, i64::MAX);
    }

    /// Fractions scale to the nearest nanosecond.
    #[test]
    fn test_frac_nanos() {
        let d = Decimal::parse("0.001").unwrap();
        assert_eq!(d.frac_nanos(1_000_000_000), 1_000_000);

        let d = Decimal::parse("0.123456789").unwrap();
        assert_eq!(d.frac_nanos(1_000_000_000), 123_456_789);
    }
}
