use super::{DEFAULT_TOP_N, EndpointStats, StatusBuckets, SummaryReport, TimeStats};

/// Derives rates and rankings from finished aggregates
pub struct ReportBuilder {
    top_n: usize,
}

impl ReportBuilder {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn build(
        &self,
        time_stats: TimeStats,
        status_buckets: StatusBuckets,
        endpoints: Vec<EndpointStats>,
    ) -> SummaryReport {
        let total_requests = time_stats.total_requests;

        let duration_seconds = time_stats
            .range()
            .map(|range| range.duration_seconds())
            .unwrap_or(0.0);

        // A zero duration with traffic yields +inf; an empty log gets 0
        let requests_per_second = if total_requests == 0 {
            0.0
        } else {
            total_requests as f64 / duration_seconds
        };

        // sort_by is stable, so ties keep first-observation order
        let mut slowest_endpoints = endpoints.clone();
        slowest_endpoints.sort_by(|a, b| b.average_ms.total_cmp(&a.average_ms));
        slowest_endpoints.truncate(self.top_n);

        let mut most_active_endpoints = endpoints;
        most_active_endpoints.sort_by(|a, b| b.count.cmp(&a.count));
        most_active_endpoints.truncate(self.top_n);

        tracing::info!(
            "Analysis complete: {} requests over {:.2}s, {} bucketed",
            total_requests,
            duration_seconds,
            status_buckets.total()
        );

        SummaryReport {
            time_stats,
            status_buckets,
            duration_seconds,
            requests_per_second,
            slowest_endpoints,
            most_active_endpoints,
            total_requests,
        }
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}
