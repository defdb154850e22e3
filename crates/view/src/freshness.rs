//! "New" badge classification.

use chrono::{DateTime, Utc};

use shelfscan_catalog::PostedAt;

/// Seven days in milliseconds.
pub const FRESHNESS_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// `true` while the product is younger than the freshness window.
///
/// Age is measured on millisecond epoch values. Posting dates in the future have a
/// negative age and are therefore new.
pub fn is_new(posted: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    is_new_within(posted, now, FRESHNESS_WINDOW_MS)
}

pub fn is_new_within(posted: DateTime<Utc>, now: DateTime<Utc>, window_ms: i64) -> bool {
    let age_ms = now
        .timestamp_millis()
        .saturating_sub(posted.timestamp_millis());
    age_ms < window_ms
}

/// Classify a boundary-parsed posting date. Unparseable dates are never new.
pub fn is_posted_new(posted: &PostedAt, now: DateTime<Utc>, window_ms: i64) -> bool {
    posted
        .instant()
        .is_some_and(|at| is_new_within(at, now, window_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let week = Duration::milliseconds(FRESHNESS_WINDOW_MS);
        let one_ms = Duration::milliseconds(1);

        assert!(is_new(now() - week + one_ms, now()));
        assert!(!is_new(now() - week, now()));
        assert!(!is_new(now() - week - one_ms, now()));
    }

    #[test]
    fn posted_now_is_new() {
        assert!(is_new(now(), now()));
    }

    #[test]
    fn future_posting_is_new() {
        assert!(is_new(now() + Duration::days(30), now()));
    }

    #[test]
    fn unparseable_is_not_new() {
        let posted = PostedAt::Unparseable("soon".to_string());
        assert!(!is_posted_new(&posted, now(), FRESHNESS_WINDOW_MS));
    }

    #[test]
    fn parsed_posting_uses_window() {
        let posted = PostedAt::At(now() - Duration::days(2));
        assert!(is_posted_new(&posted, now(), FRESHNESS_WINDOW_MS));
        assert!(!is_posted_new(
            &posted,
            now(),
            Duration::days(1).num_milliseconds()
        ));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: classification agrees with the millisecond age rule.
            #[test]
            fn agrees_with_age_rule(age_ms in -10 * FRESHNESS_WINDOW_MS..10 * FRESHNESS_WINDOW_MS) {
                let posted = now() - Duration::milliseconds(age_ms);
                prop_assert_eq!(is_new(posted, now()), age_ms < FRESHNESS_WINDOW_MS);
            }

            /// Property: classification is referentially transparent.
            #[test]
            fn repeated_calls_agree(age_ms in any::<i32>()) {
                let posted = now() - Duration::milliseconds(i64::from(age_ms));
                prop_assert_eq!(is_new(posted, now()), is_new(posted, now()));
            }
        }
    }
}
