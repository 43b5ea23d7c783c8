use crate::OutputFormat;
use anyhow::{Context, Result};
use chrono::Datelike;
use std::path::Path;
use weblog_core::analysis::{AnalysisPeriod, AnalysisReport, HourlyAnalyzer};
use weblog_core::log::{LogEntry, LogfileReader};

/// Build the analysis period, filling gaps from the local clock
pub fn resolve_period(year: Option<u32>, month: Option<u32>) -> Result<AnalysisPeriod> {
    let today = chrono::Local::now().date_naive();
    let year = year.unwrap_or(today.year().max(0) as u32);
    let month = month.unwrap_or(today.month());

    AnalysisPeriod::new(year, month).context("Invalid analysis period")
}

/// Analyze a log file and return structured results
pub fn analyze_log(file: &Path, period: AnalysisPeriod) -> Result<AnalysisReport> {
    tracing::debug!("Reading log file: {}", file.display());

    let reader = LogfileReader::open(file)
        .with_context(|| format!("Cannot open log file {}", file.display()))?;

    let mut analyzer = HourlyAnalyzer::new();
    analyzer.analyze_hourly_data(reader)?;

    Ok(analyzer.report(period))
}

pub fn execute(file: &Path, period: AnalysisPeriod, hours: bool, format: OutputFormat) -> Result<()> {
    tracing::info!("Analyzing log file: {}", file.display());
    tracing::debug!("Output format: {}", format.as_str());

    let report = analyze_log(file, period)?;

    match format {
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Table => output_table(&report)?,
        OutputFormat::Pretty => output_pretty(&report, hours)?,
    }

    Ok(())
}

fn output_pretty(report: &AnalysisReport, include_hours: bool) -> Result<()> {
    use console::style;

    println!("\n{}", style("Access Log Report").bold().cyan());
    println!("{}", style("=================").cyan());

    if include_hours {
        println!("\n{}", style("Hr: Count").bold());
        for (hour, count) in report.hour_counts.iter().enumerate() {
            println!("  {}: {}", hour, count);
        }
    }

    println!("\n{}", style("Hours:").bold());
    println!("  Total Accesses:      {}", report.total_accesses);
    println!("  Busiest Hour:        {}", report.busiest_hour);
    println!("  Quietest Hour:       {}", report.quietest_hour);
    println!("  Busiest Two Hours:   {}", report.busiest_two_hour);
    println!("  Quietest Two Hours:  {}", report.quietest_two_hour);

    println!("\n{}", style("Days:").bold());
    println!("  Busiest Day:         {}", display_day(report.busiest_day.as_ref()));
    println!("  Quietest Day:        {}", report.quietest_day);

    println!("\n{}", style("Months:").bold());
    for (month, total) in report.monthly_totals.iter().enumerate() {
        println!("  Month {:>2}:            {}", month + 1, total);
    }
    println!("  Busiest Month:       {}", report.busiest_month);
    println!("  Quietest Month:      {}", report.quietest_month);
    println!("  Average Per Month:   {:.2}", report.average_per_month);

    println!(); // trailing newline
    Ok(())
}

fn output_json(report: &AnalysisReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

fn output_table(report: &AnalysisReport) -> Result<()> {
    println!("Metric,Value");
    for (hour, count) in report.hour_counts.iter().enumerate() {
        println!("Hour {},{}", hour, count);
    }
    println!("Total Accesses,{}", report.total_accesses);
    println!("Busiest Hour,{}", report.busiest_hour);
    println!("Quietest Hour,{}", report.quietest_hour);
    println!("Busiest Two Hours,{}", report.busiest_two_hour);
    println!("Quietest Two Hours,{}", report.quietest_two_hour);
    println!("Busiest Day,{}", display_day(report.busiest_day.as_ref()));
    println!("Quietest Day,{}", report.quietest_day);
    for (month, total) in report.monthly_totals.iter().enumerate() {
        println!("Month {},{}", month + 1, total);
    }
    println!("Busiest Month,{}", report.busiest_month);
    println!("Quietest Month,{}", report.quietest_month);
    println!("Average Per Month,{:.2}", report.average_per_month);

    Ok(())
}

fn display_day(day: Option<&LogEntry>) -> String {
    day.map(|d| d.to_string())
        .unwrap_or_else(|| "none".to_string())
}
