//! Common types

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub type EntityId = Uuid;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Calendar day of a timestamp as `YYYY-MM-DD`, taken in UTC.
///
/// Equal to the date prefix of the ISO-8601 rendering, so two timestamps
/// share a day key exactly when their UTC date strings match.
pub fn utc_day_key(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_key_matches_rfc3339_prefix() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 9, 23, 59, 59).unwrap();
        assert_eq!(utc_day_key(&ts), "2026-03-09");
        assert!(ts.to_rfc3339().starts_with(&utc_day_key(&ts)));
    }
}
