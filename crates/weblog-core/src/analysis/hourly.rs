use super::{AnalysisPeriod, AnalysisReport};
use crate::Result;
use crate::log::LogEntry;

pub const HOURS_PER_DAY: usize = 24;
pub const MONTHS_PER_YEAR: usize = 12;

/// Days scanned by `busiest_day` and `total_accesses_per_month`
const DAYS_PER_MONTH: u32 = 31;
/// Days scanned by `quietest_day`
const QUIET_DAYS_PER_MONTH: u32 = 30;

/// Hour-of-day access histogram.
///
/// Entries are bucketed by hour only. Day and month queries have no finer
/// data to work from, so every day of every month is attributed the full
/// histogram total. See [`HourlyAnalyzer::daily_accesses`].
#[derive(Debug, Clone, Default)]
pub struct HourlyAnalyzer {
    hour_counts: [u64; HOURS_PER_DAY],
    total_accesses: u64,
}

impl HourlyAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one access in its hour bucket
    pub fn accumulate(&mut self, entry: &LogEntry) {
        self.hour_counts[entry.hour() as usize] += 1;
        self.total_accesses += 1;
    }

    /// Accumulate every entry from a reader, stopping at the first error
    pub fn analyze_hourly_data<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<LogEntry>>,
    {
        tracing::debug!("Accumulating hourly access counts");

        for entry in entries {
            self.accumulate(&entry?);
        }

        if self.total_accesses == 0 {
            tracing::warn!("Log contains no entries");
        }

        tracing::info!(
            "Hourly analysis complete: {} accesses",
            self.total_accesses
        );

        Ok(())
    }

    pub fn hour_counts(&self) -> &[u64; HOURS_PER_DAY] {
        &self.hour_counts
    }

    pub fn total_accesses(&self) -> u64 {
        self.total_accesses
    }

    /// Hour with the most accesses; the earliest hour wins a tie
    pub fn busiest_hour(&self) -> u32 {
        first_max(self.hour_counts.iter().copied()) as u32
    }

    /// Hour with the fewest accesses; the earliest hour wins a tie
    pub fn quietest_hour(&self) -> u32 {
        first_min(self.hour_counts.iter().copied()) as u32
    }

    /// First hour of the busiest pair of adjacent hours (0-1 through 22-23)
    pub fn busiest_two_hour(&self) -> u32 {
        first_max(self.two_hour_sums()) as u32
    }

    /// First hour of the quietest pair of adjacent hours
    pub fn quietest_two_hour(&self) -> u32 {
        first_min(self.two_hour_sums()) as u32
    }

    /// Busiest day of the period's month, or `None` if nothing was counted.
    ///
    /// All days tie, so this is day 1 whenever there is any traffic.
    pub fn busiest_day(&self, period: AnalysisPeriod) -> Option<LogEntry> {
        let mut busiest = None;
        let mut max_accesses = 0;

        for day in 1..=DAYS_PER_MONTH {
            let accesses = self.daily_accesses(day);
            if accesses > max_accesses {
                max_accesses = accesses;
                busiest = Some(period.day(day));
            }
        }

        busiest
    }

    /// Quietest day of the period's month. All days tie, so this is day 1.
    pub fn quietest_day(&self, period: AnalysisPeriod) -> LogEntry {
        let mut quietest = period.day(1);
        let mut min_accesses = u64::MAX;

        for day in 1..=QUIET_DAYS_PER_MONTH {
            let accesses = self.daily_accesses(day);
            if accesses < min_accesses {
                min_accesses = accesses;
                quietest = period.day(day);
            }
        }

        quietest
    }

    /// Accesses per calendar month, January first.
    ///
    /// Each month sums 31 days of [`daily_accesses`](Self::daily_accesses),
    /// so all twelve values equal 31 times the total.
    pub fn total_accesses_per_month(&self) -> [u64; MONTHS_PER_YEAR] {
        let mut totals = [0u64; MONTHS_PER_YEAR];
        for total in totals.iter_mut() {
            *total = (1..=DAYS_PER_MONTH).map(|day| self.daily_accesses(day)).sum();
        }
        totals
    }

    pub fn busiest_month(&self, period: AnalysisPeriod) -> LogEntry {
        let month = first_max(self.total_accesses_per_month().into_iter());
        period.month_start(month as u32 + 1)
    }

    pub fn quietest_month(&self, period: AnalysisPeriod) -> LogEntry {
        let month = first_min(self.total_accesses_per_month().into_iter());
        period.month_start(month as u32 + 1)
    }

    pub fn average_accesses_per_month(&self) -> f64 {
        let totals = self.total_accesses_per_month();
        totals.iter().sum::<u64>() as f64 / totals.len() as f64
    }

    /// Snapshot every query result for the given period
    pub fn report(&self, period: AnalysisPeriod) -> AnalysisReport {
        AnalysisReport {
            period,
            hour_counts: self.hour_counts,
            total_accesses: self.total_accesses,
            busiest_hour: self.busiest_hour(),
            quietest_hour: self.quietest_hour(),
            busiest_two_hour: self.busiest_two_hour(),
            quietest_two_hour: self.quietest_two_hour(),
            busiest_day: self.busiest_day(period),
            quietest_day: self.quietest_day(period),
            monthly_totals: self.total_accesses_per_month(),
            busiest_month: self.busiest_month(period),
            quietest_month: self.quietest_month(period),
            average_per_month: self.average_accesses_per_month(),
        }
    }

    /// Accesses attributed to one day of a month.
    ///
    /// Only hours are tracked, so every day sees the whole histogram.
    fn daily_accesses(&self, _day: u32) -> u64 {
        self.hour_counts.iter().sum()
    }

    fn two_hour_sums(&self) -> impl Iterator<Item = u64> + '_ {
        self.hour_counts.windows(2).map(|pair| pair[0] + pair[1])
    }
}

/// Index of the first maximum; later equal values never replace it
fn first_max(values: impl Iterator<Item = u64>) -> usize {
    first_by(values, |candidate, best| candidate > best)
}

/// Index of the first minimum; later equal values never replace it
fn first_min(values: impl Iterator<Item = u64>) -> usize {
    first_by(values, |candidate, best| candidate < best)
}

fn first_by(mut values: impl Iterator<Item = u64>, better: impl Fn(u64, u64) -> bool) -> usize {
    let Some(mut best) = values.next() else {
        return 0;
    };
    let mut best_index = 0;

    for (index, value) in values.enumerate() {
        if better(value, best) {
            best = value;
            best_index = index + 1;
        }
    }

    best_index
}
