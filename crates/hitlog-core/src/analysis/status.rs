use super::Aggregator;
use crate::log::LogLine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status-code class used for bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// `[200, 300)`
    Success,
    /// `[400, 500)`
    ClientError,
    /// `[500, 600)`
    ServerError,
    /// Everything else, including 1xx and 3xx
    Other,
}

impl StatusClass {
    /// Report order
    pub const ALL: [StatusClass; 4] = [
        StatusClass::Success,
        StatusClass::ClientError,
        StatusClass::ServerError,
        StatusClass::Other,
    ];

    pub fn of(status: i64) -> Self {
        match status {
            200..=299 => StatusClass::Success,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Success => "2xx",
            StatusClass::ClientError => "4xx",
            StatusClass::ServerError => "5xx",
            StatusClass::Other => "other",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBuckets {
    #[serde(rename = "2xx")]
    pub success: usize,
    #[serde(rename = "4xx")]
    pub client_error: usize,
    #[serde(rename = "5xx")]
    pub server_error: usize,
    pub other: usize,
}

impl StatusBuckets {
    pub fn get(&self, class: StatusClass) -> usize {
        match class {
            StatusClass::Success => self.success,
            StatusClass::ClientError => self.client_error,
            StatusClass::ServerError => self.server_error,
            StatusClass::Other => self.other,
        }
    }

    pub fn record(&mut self, status: i64) {
        match StatusClass::of(status) {
            StatusClass::Success => self.success += 1,
            StatusClass::ClientError => self.client_error += 1,
            StatusClass::ServerError => self.server_error += 1,
            StatusClass::Other => self.other += 1,
        }
    }

    /// Buckets in report order
    pub fn iter(&self) -> impl Iterator<Item = (StatusClass, usize)> + '_ {
        StatusClass::ALL.into_iter().map(|class| (class, self.get(class)))
    }

    pub fn total(&self) -> usize {
        self.success + self.client_error + self.server_error + self.other
    }
}

/// Buckets every line whose status field parses as an integer
#[derive(Default)]
pub struct StatusCounter {
    buckets: StatusBuckets,
}

impl Aggregator for StatusCounter {
    type Output = StatusBuckets;

    fn observe(&mut self, line: &LogLine<'_>) {
        match line.status() {
            Some(status) => self.buckets.record(status),
            None => tracing::trace!("Line {}: no parseable status code", line.number),
        }
    }

    fn finish(self) -> Self::Output {
        self.buckets
    }
}
