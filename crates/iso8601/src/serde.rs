//! Serde adapters for ISO8601 duration fields
//!
//! Each submodule provides `serialize`/`deserialize` functions for use with
//! `#[serde(with = "...")]`, storing the duration as an ISO8601 string.
//!
//! # Usage
//! ```rust
//! use std::time::Duration;
//!
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Policy {
//!     #[serde(with = "pulsearc_iso8601::serde::iso8601_std")]
//!     retention: Duration,
//!     #[serde(with = "pulsearc_iso8601::serde::iso8601")]
//!     grace_nanos: i64,
//! }
//!
//! let json = r#"{"retention":"P30D","grace_nanos":"PT1H"}"#;
//! let policy: Policy = serde_json::from_str(json).unwrap();
//! assert_eq!(policy.retention, Duration::from_secs(30 * 86_400));
//! assert_eq!(serde_json::to_string(&policy).unwrap(), json);
//! ```

/// Serde serialization result type
type SerializeResult<S> = Result<<S as ::serde::Serializer>::Ok, <S as ::serde::Serializer>::Error>;

/// `i64` nanosecond count stored as an ISO8601 string
pub mod iso8601 {
    use ::serde::{de, ser, Deserialize, Deserializer, Serializer};

    use super::SerializeResult;

    /// Serialize a nanosecond count as an ISO8601 string
    pub fn serialize<S>(nanos: &i64, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        let s = crate::format(*nanos).map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_str(&s)
    }

    /// Deserialize an ISO8601 string into a nanosecond count
    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        crate::parse(&s).map_err(de::Error::custom)
    }
}

/// [`std::time::Duration`] stored as an ISO8601 string
pub mod iso8601_std {
    use std::time::Duration;

    use ::serde::{de, ser, Deserialize, Deserializer, Serializer};

    use super::SerializeResult;

    /// Serialize a Duration as an ISO8601 string
    pub fn serialize<S>(duration: &Duration, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        let s = crate::format_std(*duration).map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_str(&s)
    }

    /// Deserialize an ISO8601 string into a Duration
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        crate::parse_std(&s).map_err(de::Error::custom)
    }
}

/// `Option<Duration>` stored as an ISO8601 string or null
pub mod iso8601_option {
    use std::time::Duration;

    use ::serde::{de, ser, Deserialize, Deserializer, Serializer};

    use super::SerializeResult;

    /// Serialize an optional Duration as an ISO8601 string or none
    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => {
                let s = crate::format_std(*d).map_err(<S::Error as ser::Error>::custom)?;
                serializer.serialize_some(&s)
            }
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional ISO8601 string into an optional Duration
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| crate::parse_std(&s).map_err(de::Error::custom))
            .transpose()
    }
}
