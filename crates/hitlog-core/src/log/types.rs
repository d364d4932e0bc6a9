use super::coerce::parse_int;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of fields for a line to describe a full request
pub const RECORD_FIELDS: usize = 5;

/// Number of fields needed before the status code can be read
pub const STATUS_FIELDS: usize = 4;

/// A non-blank line of the access log, split on single spaces
///
/// Field layout: `<timestamp> <method> <path> <status> <response_ms> [...]`.
/// Anything past the fifth field is carried along but never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine<'a> {
    /// 1-based line number in the original input
    pub number: usize,
    pub fields: Vec<&'a str>,
}

impl<'a> LogLine<'a> {
    pub fn new(number: usize, fields: Vec<&'a str>) -> Self {
        Self { number, fields }
    }

    pub fn timestamp(&self) -> Option<&'a str> {
        self.fields.first().copied()
    }

    /// Status code, if the line has a status field and it is an integer
    pub fn status(&self) -> Option<i64> {
        if self.fields.len() < STATUS_FIELDS {
            return None;
        }
        parse_int(self.fields[3])
    }

    /// Response time in milliseconds; negative values are rejected
    pub fn response_time_ms(&self) -> Option<u64> {
        if self.fields.len() < RECORD_FIELDS {
            return None;
        }
        parse_int(self.fields[4]).and_then(|ms| u64::try_from(ms).ok())
    }

    /// Interpret the line as a full request record.
    ///
    /// Returns `None` unless the line has at least five fields and both the
    /// status and response time parse as integers.
    pub fn record(&self) -> Option<LogRecord<'a>> {
        if self.fields.len() < RECORD_FIELDS {
            return None;
        }

        let status = self.status()?;
        let response_time_ms = self.response_time_ms()?;

        Some(LogRecord {
            timestamp: self.fields[0],
            method: self.fields[1],
            path: self.fields[2],
            status,
            response_time_ms,
        })
    }
}

/// A well-formed request record borrowed from its source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub timestamp: &'a str,
    pub method: &'a str,
    pub path: &'a str,
    pub status: i64,
    pub response_time_ms: u64,
}

impl LogRecord<'_> {
    pub fn endpoint(&self) -> EndpointKey {
        EndpointKey::new(self.method, self.path)
    }
}

/// Endpoint identity: the literal `"<METHOD> <PATH>"`, case-sensitive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointKey(String);

impl EndpointKey {
    pub fn new(method: &str, path: &str) -> Self {
        Self(format!("{} {}", method, path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
