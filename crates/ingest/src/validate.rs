//! Structural validation of raw CSV records

use serde::Deserialize;
use thiserror::Error;
use traffic_types::Observation;

use crate::timestamp::parse_timestamp;

/// One CSV row as read from the source file, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Raw timestamp string, format detected at validation time
    pub timestamp: String,
    /// Vehicle count; signed so that negative inputs can be rejected
    /// with a diagnostic instead of failing deserialization
    pub cars_count: i64,
}

/// Why a raw record was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("timestamp is missing or empty")]
    MissingTimestamp,

    #[error("unable to parse timestamp '{0}'")]
    UnparseableTimestamp(String),

    #[error("cars count cannot be negative: {0}")]
    NegativeCount(i64),

    #[error("cars count out of range: {0}")]
    CountOutOfRange(i64),
}

/// Validate a raw record, constructing an [`Observation`] on success.
///
/// Pure: no side effects, no logging. The caller decides how to handle
/// a rejection (typically a warning and a skip).
pub fn validate(record: &RawRecord) -> Result<Observation, RejectReason> {
    let trimmed = record.timestamp.trim();
    if trimmed.is_empty() {
        return Err(RejectReason::MissingTimestamp);
    }

    let timestamp = parse_timestamp(trimmed)
        .ok_or_else(|| RejectReason::UnparseableTimestamp(trimmed.to_string()))?;

    if record.cars_count < 0 {
        return Err(RejectReason::NegativeCount(record.cars_count));
    }
    let count = u32::try_from(record.cars_count)
        .map_err(|_| RejectReason::CountOutOfRange(record.cars_count))?;

    Ok(Observation::new(timestamp, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(timestamp: &str, cars_count: i64) -> RawRecord {
        RawRecord {
            timestamp: timestamp.to_string(),
            cars_count,
        }
    }

    #[test]
    fn test_valid_record() {
        let obs = validate(&record("2021-12-01T10:30:00", 25)).unwrap();
        assert_eq!(
            obs.timestamp,
            NaiveDate::from_ymd_opt(2021, 12, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
        assert_eq!(obs.count, 25);
    }

    #[test]
    fn test_zero_count_is_valid() {
        let obs = validate(&record("2021-12-01T10:30:00", 0)).unwrap();
        assert_eq!(obs.count, 0);
    }

    #[test]
    fn test_negative_count_rejected() {
        assert_eq!(
            validate(&record("2021-12-01T10:30:00", -5)),
            Err(RejectReason::NegativeCount(-5))
        );
    }

    #[test]
    fn test_empty_timestamp_rejected() {
        assert_eq!(
            validate(&record("  ", 5)),
            Err(RejectReason::MissingTimestamp)
        );
    }

    #[test]
    fn test_unparseable_timestamp_rejected() {
        assert_eq!(
            validate(&record("yesterday", 5)),
            Err(RejectReason::UnparseableTimestamp("yesterday".to_string()))
        );
    }

    #[test]
    fn test_count_beyond_u32_rejected() {
        let too_big = i64::from(u32::MAX) + 1;
        assert_eq!(
            validate(&record("2021-12-01T10:30:00", too_big)),
            Err(RejectReason::CountOutOfRange(too_big))
        );
    }
}
