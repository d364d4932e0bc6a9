use super::Aggregator;
use crate::log::{LogLine, TimestampMode, parse_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observed time span and raw traffic volume
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeStats {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Every non-blank line, parseable or not
    pub total_requests: usize,
}

/// Earliest and latest parsed timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn duration_seconds(&self) -> f64 {
        let span = self.end - self.start;
        match span.num_microseconds() {
            Some(micros) => micros as f64 / 1_000_000.0,
            // Spans too wide for microseconds fall back to milliseconds
            None => span.num_milliseconds() as f64 / 1000.0,
        }
    }
}

impl TimeStats {
    pub fn range(&self) -> Option<TimeRange> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(TimeRange { start, end }),
            _ => None,
        }
    }
}

pub struct TimeTracker {
    mode: TimestampMode,
    stats: TimeStats,
}

impl TimeTracker {
    pub fn new(mode: TimestampMode) -> Self {
        Self {
            mode,
            stats: TimeStats::default(),
        }
    }
}

impl Default for TimeTracker {
    fn default() -> Self {
        Self::new(TimestampMode::default())
    }
}

impl Aggregator for TimeTracker {
    type Output = TimeStats;

    fn observe(&mut self, line: &LogLine<'_>) {
        self.stats.total_requests += 1;

        let Some(ts) = line
            .timestamp()
            .and_then(|field| parse_timestamp(field, self.mode))
        else {
            tracing::trace!("Line {}: unparseable timestamp", line.number);
            return;
        };

        self.stats.start_time = Some(self.stats.start_time.map_or(ts, |s| s.min(ts)));
        self.stats.end_time = Some(self.stats.end_time.map_or(ts, |e| e.max(ts)));
    }

    fn finish(self) -> Self::Output {
        self.stats
    }
}
