//! Integration tests for the `serde` adapters.
//!
//! These tests decode a realistic configuration document whose durations
//! are written as ISO8601 strings and confirm it encodes back to values that
//! parse to the same durations.

#![cfg(feature = "serde")]

use std::time::Duration;

use pulsearc_iso8601::{parse, HOUR};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct RetentionPolicy {
    name: String,
    #[serde(with = "pulsearc_iso8601::serde::iso8601_std")]
    keep_for: Duration,
    #[serde(with = "pulsearc_iso8601::serde::iso8601")]
    compaction_nanos: i64,
    #[serde(with = "pulsearc_iso8601::serde::iso8601_option", default)]
    grace: Option<Duration>,
}

/// Verifies a policy list decodes and re-encodes by value.
#[test]
fn test_policy_round_trip() {
    let json = r#"[
        {"name":"hot","keep_for":"P2W","compaction_nanos":"PT1H","grace":"PT0.5S"},
        {"name":"cold","keep_for":"P1Y","compaction_nanos":"P1D","grace":null}
    ]"#;

    let policies: Vec<RetentionPolicy> = serde_json::from_str(json).expect("valid policies");
    assert_eq!(policies[0].keep_for, Duration::from_secs(14 * 86_400));
    assert_eq!(policies[0].compaction_nanos, HOUR);
    assert_eq!(policies[0].grace, Some(Duration::from_millis(500)));
    assert_eq!(policies[1].keep_for, Duration::from_secs(365 * 86_400));
    assert_eq!(policies[1].grace, None);

    let encoded = serde_json::to_value(&policies).expect("policies encode");
    assert_eq!(encoded[0]["keep_for"], "P14D");
    assert_eq!(encoded[0]["grace"], "PT0.500S");
    assert_eq!(encoded[1]["keep_for"], "P1Y");

    let keep_for = encoded[0]["keep_for"].as_str().expect("string field");
    assert_eq!(parse(keep_for), Ok(14 * pulsearc_iso8601::DAY));

    let decoded: Vec<RetentionPolicy> = serde_json::from_value(encoded).expect("policies decode");
    assert_eq!(decoded, policies);
}

/// Ensures invalid durations are reported through serde's error type.
#[test]
fn test_policy_rejects_month() {
    let json = r#"{"name":"bad","keep_for":"P1M","compaction_nanos":"PT1H"}"#;
    let err = serde_json::from_str::<RetentionPolicy>(json).unwrap_err();
    assert!(err.to_string().contains("no month elements allowed"), "{err}");
}

/// Ensures std durations beyond the nanosecond range fail to encode.
#[test]
fn test_policy_rejects_out_of_range() {
    let policy = RetentionPolicy {
        name: "forever".to_string(),
        keep_for: Duration::MAX,
        compaction_nanos: HOUR,
        grace: None,
    };
    let err = serde_json::to_string(&policy).unwrap_err();
    assert!(err.to_string().contains("bad format string"), "{err}");
}
