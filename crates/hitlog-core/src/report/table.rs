use crate::Result;
use crate::analysis::SummaryReport;
use chrono::SecondsFormat;
use std::io::Write;

/// Write the report as `Metric,Value` rows followed by ranking rows.
///
/// Rates are written with Rust's float formatting, so an unbounded rate
/// shows up as `inf`.
pub fn format_table<W: Write>(report: &SummaryReport, sink: &mut W) -> Result<()> {
    writeln!(sink, "Metric,Value")?;

    if let Some(range) = report.time_range() {
        writeln!(
            sink,
            "Start Time,{}",
            range.start.to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
        writeln!(
            sink,
            "End Time,{}",
            range.end.to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
    }

    writeln!(sink, "Duration (s),{:.2}", report.duration_seconds)?;
    writeln!(sink, "Total Requests,{}", report.total_requests)?;
    writeln!(sink, "Requests/Second,{:.2}", report.requests_per_second)?;

    for (class, count) in report.status_buckets.iter() {
        writeln!(sink, "{},{}", class, count)?;
    }

    writeln!(sink)?;
    writeln!(sink, "Ranking,Rank,Endpoint,Requests,Average (ms),Min (ms),Max (ms)")?;

    let rankings = [
        ("Slowest", &report.slowest_endpoints),
        ("Most Active", &report.most_active_endpoints),
    ];
    for (name, endpoints) in rankings {
        for (i, e) in endpoints.iter().enumerate() {
            writeln!(
                sink,
                "{},{},{},{},{:.2},{},{}",
                name,
                i + 1,
                e.endpoint,
                e.count,
                e.average_ms,
                e.min_ms,
                e.max_ms
            )?;
        }
    }

    Ok(())
}
