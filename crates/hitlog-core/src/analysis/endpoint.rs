use super::Aggregator;
use crate::log::{EndpointKey, LogLine};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Latency and volume for one `"<METHOD> <PATH>"` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointStats {
    pub endpoint: EndpointKey,
    pub count: usize,
    pub total_ms: u64,
    pub min_ms: u64,
    pub max_ms: u64,
    /// `total_ms / count`, kept current on every observation
    pub average_ms: f64,
}

impl EndpointStats {
    fn new(endpoint: EndpointKey, response_time_ms: u64) -> Self {
        Self {
            endpoint,
            count: 1,
            total_ms: response_time_ms,
            min_ms: response_time_ms,
            max_ms: response_time_ms,
            average_ms: response_time_ms as f64,
        }
    }

    fn observe(&mut self, response_time_ms: u64) {
        self.count += 1;
        self.total_ms = self.total_ms.saturating_add(response_time_ms);
        self.min_ms = self.min_ms.min(response_time_ms);
        self.max_ms = self.max_ms.max(response_time_ms);
        self.average_ms = self.total_ms as f64 / self.count as f64;
    }
}

/// Per-endpoint accumulator.
///
/// Entries are kept in first-observation order; rankings rely on that
/// order to break ties.
#[derive(Debug, Default)]
pub struct EndpointLatency {
    entries: Vec<EndpointStats>,
    index: HashMap<EndpointKey, usize>,
}

impl Aggregator for EndpointLatency {
    type Output = Vec<EndpointStats>;

    fn observe(&mut self, line: &LogLine<'_>) {
        let Some(record) = line.record() else {
            tracing::trace!("Line {}: skipped for endpoint statistics", line.number);
            return;
        };

        let key = record.endpoint();
        match self.index.get(&key) {
            Some(&idx) => self.entries[idx].observe(record.response_time_ms),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries
                    .push(EndpointStats::new(key, record.response_time_ms));
            }
        }
    }

    fn finish(self) -> Self::Output {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::Tokenizer;

    fn collect(input: &str) -> Vec<EndpointStats> {
        let mut latency = EndpointLatency::default();
        for line in Tokenizer::new(input) {
            latency.observe(&line);
        }
        latency.finish()
    }

    #[test]
    fn test_accumulates_per_endpoint() {
        let stats = collect(
            "t GET /a 200 10\n\
             t GET /a 500 30\n\
             t POST /a 201 5\n\
             t GET /a 404 20\n",
        );

        assert_eq!(stats.len(), 2);

        let get = &stats[0];
        assert_eq!(get.endpoint.as_str(), "GET /a");
        assert_eq!(get.count, 3);
        assert_eq!(get.total_ms, 60);
        assert_eq!(get.min_ms, 10);
        assert_eq!(get.max_ms, 30);
        assert_eq!(get.average_ms, 20.0);

        assert_eq!(stats[1].endpoint.as_str(), "POST /a");
        assert_eq!(stats[1].count, 1);
    }

    #[test]
    fn test_preserves_first_observation_order() {
        let stats = collect("t GET /b 200 1\nt GET /a 200 1\nt GET /b 200 1\n");
        let order: Vec<_> = stats.iter().map(|s| s.endpoint.as_str()).collect();
        assert_eq!(order, vec!["GET /b", "GET /a"]);
    }

    #[test]
    fn test_requires_both_numeric_fields() {
        let stats = collect("t GET /a OK 10\nt GET /a 200 slow\nt GET /a 200\n");
        assert!(stats.is_empty());
    }

    #[test]
    fn test_average_within_min_and_max() {
        let stats = collect("t GET /a 200 3\nt GET /a 200 4\nt GET /a 200 9\n");
        let e = &stats[0];
        assert!(e.min_ms as f64 <= e.average_ms && e.average_ms <= e.max_ms as f64);
        assert_eq!(e.average_ms, e.total_ms as f64 / e.count as f64);
    }
}
