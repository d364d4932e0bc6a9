use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Naive layouts accepted in lenient mode, interpreted as UTC
const LENIENT_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// How permissive timestamp parsing should be
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampMode {
    /// RFC 3339 date-times with an explicit offset only
    #[default]
    Strict,
    /// Also accept naive date-times and bare dates as UTC
    Lenient,
}

/// Parse a decimal integer with an optional leading sign.
///
/// Any other character (whitespace, units, separators) makes the parse fail.
pub fn parse_int(field: &str) -> Option<i64> {
    field.parse::<i64>().ok()
}

/// Parse a log timestamp into a UTC instant
pub fn parse_timestamp(field: &str, mode: TimestampMode) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(field) {
        return Some(dt.with_timezone(&Utc));
    }

    if mode == TimestampMode::Strict {
        return None;
    }

    for format in LENIENT_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(field, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(field, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
