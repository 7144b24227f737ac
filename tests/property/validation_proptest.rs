//! Property tests for input normalization

use campus_connect::shared::validation::{normalize_url, parse_date};
use chrono::NaiveDate;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalized_urls_are_https_and_stable(
        host in "[a-v]{1,10}\\.(com|org|dev)",
        path in "(/[a-z]{1,6}){0,3}/?",
        www in any::<bool>(),
    ) {
        let raw = format!("http://{}{}{}", if www { "www." } else { "" }, host, path);
        let normalized = normalize_url(&raw).unwrap();

        prop_assert!(normalized.starts_with("https://"));
        prop_assert!(!normalized.contains("://www."));
        prop_assert!(!normalized.ends_with('/'));
        prop_assert_eq!(normalize_url(&normalized), Some(normalized.clone()));
    }

    #[test]
    fn utm_parameters_never_survive(key in "[a-z]{1,6}", value in "[a-z0-9]{1,6}") {
        let raw = format!("https://example.com/p?utm_{}={}&{}={}", key, value, key, value);
        let normalized = normalize_url(&raw).unwrap();
        prop_assert!(!normalized.contains("utm_"));
        let expected = format!("{}={}", key, value);
        prop_assert!(normalized.ends_with(&expected));
    }

    #[test]
    fn iso_dates_parse(y in 1970i32..2100, m in 1u32..=12, d in 1u32..=28) {
        let expected = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        prop_assert_eq!(parse_date(&format!("{:04}-{:02}-{:02}", y, m, d)), Some(expected));
        prop_assert_eq!(
            parse_date(&format!("{:04}-{:02}-{:02}T12:00:00Z", y, m, d)),
            Some(expected)
        );
    }
}
