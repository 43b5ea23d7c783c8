use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use weblog_core::analysis::{AnalysisPeriod, AnalysisReport};

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

#[allow(deprecated)]
fn get_weblog_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("weblog")
}

fn june_2019() -> AnalysisPeriod {
    AnalysisPeriod::new(2019, 6).unwrap()
}

/// Test that analyze_log reads a log file and returns the hourly statistics
#[test]
fn test_analyze_log_returns_hourly_stats() {
    // Arrange
    let fixture = fixture_path("weblog.txt");

    // Act
    let result = weblog_cli::commands::analyze::analyze_log(&fixture, june_2019());

    // Assert
    assert!(result.is_ok(), "Should successfully analyze log file");

    let report: AnalysisReport = result.unwrap();
    assert_eq!(report.total_accesses, 8);
    assert_eq!(report.hour_counts.iter().sum::<u64>(), 8);
    assert_eq!(report.hour_counts[3], 3);
    assert_eq!(report.busiest_hour, 3);
    assert_eq!(report.quietest_hour, 1);
    assert_eq!(report.busiest_two_hour, 3);
    assert_eq!(report.quietest_two_hour, 1);
}

/// Day and month results are stamped with the requested period
#[test]
fn test_analyze_log_day_and_month_results() {
    let fixture = fixture_path("weblog.txt");

    let report = weblog_cli::commands::analyze::analyze_log(&fixture, june_2019()).unwrap();

    assert_eq!(
        report.busiest_day.map(|d| d.to_string()),
        Some("2019 06 01 00 00".to_string())
    );
    assert_eq!(report.quietest_day.to_string(), "2019 06 01 00 00");
    assert_eq!(report.monthly_totals, [248; 12]);
    assert_eq!(report.busiest_month.to_string(), "2019 01 01 00 00");
    assert_eq!(report.average_per_month, 248.0);
}

#[test]
fn test_analyze_log_empty_file() {
    let fixture = fixture_path("empty.txt");

    let report = weblog_cli::commands::analyze::analyze_log(&fixture, june_2019()).unwrap();

    assert_eq!(report.total_accesses, 0);
    assert_eq!(report.busiest_hour, 0);
    assert!(report.busiest_day.is_none());
}

#[test]
fn test_analyze_log_malformed_line_fails() {
    let fixture = fixture_path("malformed.txt");

    let result = weblog_cli::commands::analyze::analyze_log(&fixture, june_2019());

    let err = result.unwrap_err().to_string();
    assert!(err.contains("line 2"), "unexpected error: {}", err);
}

#[test]
fn test_analyze_log_missing_file_fails() {
    let result =
        weblog_cli::commands::analyze::analyze_log(&fixture_path("missing.txt"), june_2019());
    assert!(result.is_err());
}

#[test]
fn test_resolve_period_uses_explicit_values() {
    let period = weblog_cli::commands::analyze::resolve_period(Some(2001), Some(9)).unwrap();
    assert_eq!(period.year(), 2001);
    assert_eq!(period.month(), 9);
}

#[test]
fn test_resolve_period_rejects_bad_month() {
    assert!(weblog_cli::commands::analyze::resolve_period(Some(2001), Some(13)).is_err());
}

#[test]
fn test_analyze_command_pretty_output() {
    let mut cmd = Command::new(get_weblog_bin());
    cmd.arg("analyze")
        .arg(fixture_path("weblog.txt"))
        .arg("--year")
        .arg("2019")
        .arg("--month")
        .arg("6")
        .arg("--hours");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hr: Count"))
        .stdout(predicate::str::contains("3: 3"))
        .stdout(predicate::str::contains("Total Accesses:      8"))
        .stdout(predicate::str::contains("Busiest Hour:        3"))
        .stdout(predicate::str::contains("Busiest Day:         2019 06 01 00 00"))
        .stdout(predicate::str::contains("Average Per Month:   248.00"));
}

#[test]
fn test_analyze_command_json_output() {
    let mut cmd = Command::new(get_weblog_bin());
    cmd.arg("--format")
        .arg("json")
        .arg("analyze")
        .arg(fixture_path("weblog.txt"))
        .env("WEBLOG_YEAR", "2019")
        .env("WEBLOG_MONTH", "6");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["total_accesses"], 8);
    assert_eq!(json["busiest_hour"], 3);
    assert_eq!(json["period"]["year"], 2019);
    assert_eq!(json["busiest_day"]["day"], 1);
    assert_eq!(json["monthly_totals"].as_array().unwrap().len(), 12);
}

#[test]
fn test_analyze_command_table_output() {
    let mut cmd = Command::new(get_weblog_bin());
    cmd.arg("analyze")
        .arg(fixture_path("weblog.txt"))
        .arg("--format")
        .arg("table")
        .arg("--year")
        .arg("2019");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Metric,Value"))
        .stdout(predicate::str::contains("Total Accesses,8"))
        .stdout(predicate::str::contains("Month 12,248"));
}

#[test]
fn test_analyze_command_missing_file() {
    let mut cmd = Command::new(get_weblog_bin());
    cmd.arg("analyze").arg("/nonexistent/weblog.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open log file"));
}

#[test]
fn test_analyze_command_rejects_bad_month() {
    let mut cmd = Command::new(get_weblog_bin());
    cmd.arg("analyze")
        .arg(fixture_path("weblog.txt"))
        .arg("--month")
        .arg("13");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
