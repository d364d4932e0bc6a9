use crate::Result;
use crate::analysis::{EndpointStats, SummaryReport};
use chrono::{DateTime, SecondsFormat, Utc};
use std::io::Write;

/// Write the human-readable summary report.
///
/// Sections appear in a fixed order separated by one blank line. The time
/// range section is omitted when no timestamp could be parsed (including an
/// empty log); every other section is always present.
pub fn format<W: Write>(report: &SummaryReport, sink: &mut W) -> Result<()> {
    if let Some(range) = report.time_range() {
        writeln!(sink, " Time Range")?;
        writeln!(sink, "Start Time: {}", iso_instant(&range.start))?;
        writeln!(sink, "End Time:   {}", iso_instant(&range.end))?;
        writeln!(sink, "Duration:   {:.2} seconds", report.duration_seconds)?;
        writeln!(sink)?;
    }

    writeln!(sink, " Q1")?;
    writeln!(sink, "Total Requests:{}", report.total_requests)?;
    writeln!(sink)?;

    writeln!(sink, " Q2")?;
    for (class, count) in report.status_buckets.iter() {
        writeln!(
            sink,
            "{}: {} requests ({:.1}%)",
            class,
            count,
            report.percentage(count)
        )?;
    }
    writeln!(sink)?;

    writeln!(sink, " Q3")?;
    write_ranked(sink, &report.slowest_endpoints, |sink, endpoint| {
        writeln!(sink, "   Average: {:.2}ms", endpoint.average_ms)?;
        writeln!(sink, "   Min: {}ms", endpoint.min_ms)?;
        writeln!(sink, "   Max: {}ms", endpoint.max_ms)?;
        writeln!(sink, "   Requests: {}", endpoint.count)
    })?;
    writeln!(sink)?;

    writeln!(sink, " Q4")?;
    write_ranked(sink, &report.most_active_endpoints, |sink, endpoint| {
        writeln!(
            sink,
            "   Requests: {} ({:.1}% of total traffic)",
            endpoint.count,
            report.percentage(endpoint.count)
        )?;
        writeln!(
            sink,
            "   Average Response Time: {:.2}ms",
            endpoint.average_ms
        )
    })?;

    sink.flush()?;
    Ok(())
}

/// Numbered list with a blank line between items but not after the last
fn write_ranked<W, F>(sink: &mut W, endpoints: &[EndpointStats], mut details: F) -> Result<()>
where
    W: Write,
    F: FnMut(&mut W, &EndpointStats) -> std::io::Result<()>,
{
    for (i, endpoint) in endpoints.iter().enumerate() {
        if i > 0 {
            writeln!(sink)?;
        }
        writeln!(sink, "{}. {}", i + 1, endpoint.endpoint)?;
        details(sink, endpoint)?;
    }
    Ok(())
}

fn iso_instant(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
