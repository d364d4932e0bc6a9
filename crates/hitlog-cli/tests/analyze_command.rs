use hitlog_cli::OutputFormat;
use hitlog_cli::commands::analyze::{analyze_source, write_report};
use hitlog_cli::source::LogSource;
use hitlog_core::analysis::AnalysisOptions;
use hitlog_core::log::TimestampMode;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Helper to get path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

const TIMEOUT: Duration = Duration::from_secs(5);

/// Test that analyze_source reads a log file and returns the summary
#[test]
fn test_analyze_source_returns_summary() {
    // Arrange
    let source = LogSource::File(fixture_path("sample.log"));

    // Act
    let report = analyze_source(&source, &AnalysisOptions::default(), TIMEOUT)
        .expect("Should analyze fixture log");

    // Assert
    assert_eq!(report.total_requests, 9);
    assert_eq!(report.status_buckets.success, 4);
    assert_eq!(report.status_buckets.client_error, 2);
    assert_eq!(report.status_buckets.server_error, 1);
    assert_eq!(report.status_buckets.other, 1);
    assert_eq!(report.duration_seconds, 10.0);
    assert_eq!(report.requests_per_second, 0.9);
    assert_eq!(report.slowest_endpoints.len(), 3);
    assert_eq!(report.most_active_endpoints[0].endpoint.as_str(), "GET /api/users");
}

/// Test that the pretty format matches the golden report byte for byte
#[test]
fn test_pretty_output_matches_expected() {
    let source = LogSource::File(fixture_path("sample.log"));
    let report = analyze_source(&source, &AnalysisOptions::default(), TIMEOUT).unwrap();

    let mut out = Vec::new();
    write_report(&report, OutputFormat::Pretty, &mut out).unwrap();

    let expected = std::fs::read_to_string(fixture_path("sample.expected.txt")).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

/// Test the JSON rendering of a report
#[test]
fn test_json_output() {
    let source = LogSource::File(fixture_path("sample.log"));
    let report = analyze_source(&source, &AnalysisOptions::default(), TIMEOUT).unwrap();

    let mut out = Vec::new();
    write_report(&report, OutputFormat::Json, &mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["total_requests"], 9);
    assert_eq!(json["status_buckets"]["4xx"], 2);
    assert_eq!(json["slowest_endpoints"][2]["endpoint"], "DELETE /api/orders/7");
    assert_eq!(json["most_active_endpoints"][0]["count"], 3);
}

#[test]
fn test_table_output() {
    let source = LogSource::File(fixture_path("sample.log"));
    let report = analyze_source(&source, &AnalysisOptions::default(), TIMEOUT).unwrap();

    let mut out = Vec::new();
    write_report(&report, OutputFormat::Table, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Total Requests,9\n"));
    assert!(text.contains("Requests/Second,0.90\n"));
    assert!(text.contains("Most Active,1,GET /api/users,3,100.00,40,200\n"));
}

/// Test that lenient mode recovers naive timestamps and bare dates
#[test]
fn test_lenient_timestamps() {
    let source = LogSource::File(fixture_path("naive-timestamps.log"));

    let strict = analyze_source(&source, &AnalysisOptions::default(), TIMEOUT).unwrap();
    assert!(strict.time_range().is_none());
    assert_eq!(strict.total_requests, 3);

    let options = AnalysisOptions {
        timestamp_mode: TimestampMode::Lenient,
        ..AnalysisOptions::default()
    };
    let lenient = analyze_source(&source, &options, TIMEOUT).unwrap();
    let range = lenient.time_range().unwrap();

    // The bare date is midnight, so it becomes the start of the range
    assert_eq!(range.start.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    assert_eq!(range.end.to_rfc3339(), "2024-03-01T08:00:30+00:00");
    assert_eq!(lenient.duration_seconds, 28_830.0);
}

/// Test that ranking length follows the configured top_n
#[test]
fn test_custom_top_n() {
    let source = LogSource::File(fixture_path("sample.log"));
    let options = AnalysisOptions {
        top_n: 5,
        ..AnalysisOptions::default()
    };

    let report = analyze_source(&source, &options, TIMEOUT).unwrap();
    assert_eq!(report.slowest_endpoints.len(), 5);
    assert_eq!(report.most_active_endpoints.len(), 5);
    assert_eq!(
        report.slowest_endpoints[4].endpoint.as_str(),
        "GET /static/app.js"
    );
}

#[test]
fn test_crlf_log_matches_lf_log() {
    let lf = std::fs::read_to_string(fixture_path("sample.log")).unwrap();
    let crlf = lf.replace('\n', "\r\n");

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(crlf.as_bytes()).unwrap();

    let options = AnalysisOptions::default();
    let from_lf = analyze_source(&LogSource::File(fixture_path("sample.log")), &options, TIMEOUT).unwrap();
    let from_crlf =
        analyze_source(&LogSource::File(file.path().to_path_buf()), &options, TIMEOUT).unwrap();

    assert_eq!(from_lf, from_crlf);
}

#[test]
fn test_missing_file_fails() {
    let source = LogSource::File(fixture_path("does-not-exist.log"));
    assert!(analyze_source(&source, &AnalysisOptions::default(), TIMEOUT).is_err());
}
