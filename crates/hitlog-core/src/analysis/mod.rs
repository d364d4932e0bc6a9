mod builder;
mod endpoint;
mod status;
mod time;

pub use builder::ReportBuilder;
pub use endpoint::{EndpointLatency, EndpointStats};
pub use status::{StatusBuckets, StatusClass, StatusCounter};
pub use time::{TimeRange, TimeStats, TimeTracker};

use crate::log::{LogLine, LogReader, TimestampMode, Tokenizer};
use serde::Serialize;

/// Number of endpoints kept in each ranking unless configured otherwise
pub const DEFAULT_TOP_N: usize = 3;

/// A single-pass accumulator fed with every non-blank log line
pub trait Aggregator {
    type Output;

    fn observe(&mut self, line: &LogLine<'_>);

    fn finish(self) -> Self::Output;
}

/// Tunables for a single analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Length of the slowest / most-active rankings
    pub top_n: usize,
    pub timestamp_mode: TimestampMode,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            timestamp_mode: TimestampMode::default(),
        }
    }
}

/// Fixed-shape result of analyzing one access log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub time_stats: TimeStats,
    pub status_buckets: StatusBuckets,
    pub duration_seconds: f64,
    /// `+inf` when there are requests but no measurable duration
    pub requests_per_second: f64,
    /// Highest average latency first
    pub slowest_endpoints: Vec<EndpointStats>,
    /// Highest request count first
    pub most_active_endpoints: Vec<EndpointStats>,
    pub total_requests: usize,
}

impl SummaryReport {
    /// Share of all non-blank lines, in percent.
    ///
    /// The denominator is `total_requests`, malformed lines included, so
    /// the status bucket shares need not add up to 100.
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total_requests == 0 {
            return 0.0;
        }
        (count as f64 / self.total_requests as f64) * 100.0
    }

    pub fn time_range(&self) -> Option<TimeRange> {
        self.time_stats.range()
    }
}

/// Analyze a raw access log with default options
pub fn analyze(log: &[u8]) -> SummaryReport {
    analyze_with(log, &AnalysisOptions::default())
}

/// Analyze a raw access log.
///
/// Never fails on log content: malformed lines only drop out of the
/// aggregates whose fields they cannot supply.
pub fn analyze_with(log: &[u8], options: &AnalysisOptions) -> SummaryReport {
    let text = LogReader::decode(log);
    analyze_str(&text, options)
}

/// Analyze an already-decoded access log
pub fn analyze_str(log: &str, options: &AnalysisOptions) -> SummaryReport {
    tracing::debug!(
        "Analyzing access log ({} bytes, timestamps: {:?})",
        log.len(),
        options.timestamp_mode
    );

    let mut time = TimeTracker::new(options.timestamp_mode);
    let mut status = StatusCounter::default();
    let mut endpoints = EndpointLatency::default();

    for line in Tokenizer::new(log) {
        time.observe(&line);
        status.observe(&line);
        endpoints.observe(&line);
    }

    ReportBuilder::new(options.top_n).build(time.finish(), status.finish(), endpoints.finish())
}
