//! Timestamp parsing for backend payloads
//!
//! The backend emits ISO-8601 strings in a few shapes: RFC 3339 with an
//! offset, `Z`-suffixed, or naive. Naive values are interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a backend timestamp, returning `None` when it is not recognisable.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parses_offset_and_zulu_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 11, 6, 12, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2025-11-06T12:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-11-06T12:30:00+00:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-11-06T14:30:00+02:00"), Some(expected));
    }

    #[test]
    fn test_parses_naive_forms_as_utc() {
        let expected = Utc.with_ymd_and_hms(2025, 11, 6, 12, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2025-11-06T12:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-11-06 12:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-11-06T12:30"), Some(expected));

        let with_fraction = parse_timestamp("2025-11-06T12:30:00.250000").unwrap();
        assert_eq!(with_fraction.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parses_date_only_as_midnight() {
        assert_eq!(
            parse_timestamp("2025-11-06"),
            Some(Utc.with_ymd_and_hms(2025, 11, 6, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2025-13-40T99:00:00Z"), None);
    }
}
