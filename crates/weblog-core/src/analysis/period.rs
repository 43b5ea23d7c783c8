use crate::log::LogEntry;
use crate::{Error, Result};
use serde::Serialize;

/// The year and month that day and month results are reported against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisPeriod {
    year: u32,
    month: u32,
}

impl AnalysisPeriod {
    pub fn new(year: u32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidEntry(format!(
                "month {} out of range 1-12",
                month
            )));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Midnight of `day` within this period's month
    pub(crate) fn day(&self, day: u32) -> LogEntry {
        LogEntry::start_of_day(self.year, self.month, day)
    }

    /// First day of `month` within this period's year
    pub(crate) fn month_start(&self, month: u32) -> LogEntry {
        LogEntry::start_of_day(self.year, month, 1)
    }
}
