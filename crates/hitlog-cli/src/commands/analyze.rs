use crate::OutputFormat;
use crate::source::LogSource;
use anyhow::Result;
use hitlog_core::analysis::{AnalysisOptions, SummaryReport, analyze_with};
use hitlog_core::report;
use std::io::{self, Write};
use std::time::Duration;

/// Acquire the log from `source` and analyze it
pub fn analyze_source(
    source: &LogSource,
    options: &AnalysisOptions,
    timeout: Duration,
) -> Result<SummaryReport> {
    tracing::debug!("Reading access log: {}", source);

    let log = source.read(timeout)?;
    Ok(analyze_with(&log, options))
}

/// Render a report in the requested format
pub fn write_report<W: Write>(report: &SummaryReport, format: OutputFormat, sink: &mut W) -> Result<()> {
    match format {
        OutputFormat::Pretty => report::format(report, sink)?,
        OutputFormat::Json => report::format_json(report, sink)?,
        OutputFormat::Table => report::format_table(report, sink)?,
    }
    Ok(())
}

pub fn execute(
    source: &LogSource,
    options: &AnalysisOptions,
    format: OutputFormat,
    timeout: Duration,
) -> Result<()> {
    tracing::info!("Analyzing access log: {}", source);

    let report = analyze_source(source, options, timeout)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&report, format, &mut out)?;

    tracing::debug!("Wrote {} report", format.as_str());
    Ok(())
}
