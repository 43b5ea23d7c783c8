mod hourly;
mod period;

pub use hourly::{HOURS_PER_DAY, HourlyAnalyzer, MONTHS_PER_YEAR};
pub use period::AnalysisPeriod;

use crate::log::LogEntry;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub period: AnalysisPeriod,
    pub hour_counts: [u64; HOURS_PER_DAY],
    pub total_accesses: u64,
    pub busiest_hour: u32,
    pub quietest_hour: u32,
    pub busiest_two_hour: u32,
    pub quietest_two_hour: u32,
    pub busiest_day: Option<LogEntry>,
    pub quietest_day: LogEntry,
    pub monthly_totals: [u64; MONTHS_PER_YEAR],
    pub busiest_month: LogEntry,
    pub quietest_month: LogEntry,
    pub average_per_month: f64,
}
