mod table;
mod text;

pub use table::format_table;
pub use text::format;

use crate::Result;
use crate::analysis::{AnalysisOptions, SummaryReport, analyze_with};
use std::io::Write;

/// Analyze a raw log and write the text report to `sink`
pub fn run<W: Write>(log: &[u8], sink: &mut W) -> Result<()> {
    run_with(log, &AnalysisOptions::default(), sink)
}

pub fn run_with<W: Write>(log: &[u8], options: &AnalysisOptions, sink: &mut W) -> Result<()> {
    let report = analyze_with(log, options);
    format(&report, sink)
}

/// Write the report as pretty-printed JSON.
///
/// Non-finite rates have no JSON representation and are written as `null`.
pub fn format_json<W: Write>(report: &SummaryReport, sink: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *sink, report)?;
    sink.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_run_writes_report() {
        let mut out = Vec::new();
        run(b"2024-01-01T00:00:00Z GET /a 200 10\n", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(" Time Range\n"));
        assert!(text.contains("Total Requests:1\n"));
    }

    #[test]
    fn test_json_renders_infinite_rate_as_null() {
        let report = analyze(b"2024-01-01T00:00:00Z GET /a 200 10\n");
        let mut out = Vec::new();
        format_json(&report, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["total_requests"], 1);
        assert!(json["requests_per_second"].is_null());
        assert_eq!(json["status_buckets"]["2xx"], 1);
        assert_eq!(json["slowest_endpoints"][0]["endpoint"], "GET /a");
        assert_eq!(json["time_stats"]["start_time"], "2024-01-01T00:00:00Z");
    }
}
