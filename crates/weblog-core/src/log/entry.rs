use crate::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of whitespace-separated fields on a log line
const FIELD_COUNT: usize = 5;

/// A single access record: the time a request hit the server.
///
/// Entries order chronologically, field by field from year down to minute.
/// Construction goes through [`LogEntry::new`] so `hour` is always a valid
/// histogram index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LogEntry {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl LogEntry {
    /// Create an entry, rejecting out-of-range calendar fields
    pub fn new(year: u32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        check_range("month", month, 1, 12)?;
        check_range("day", day, 1, 31)?;
        check_range("hour", hour, 0, 23)?;
        check_range("minute", minute, 0, 59)?;

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Midnight at the start of the given day.
    ///
    /// Callers guarantee `month` and `day` are in range.
    pub(crate) fn start_of_day(year: u32, month: u32, day: u32) -> Self {
        debug_assert!((1..=12).contains(&month) && (1..=31).contains(&day));
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
        }
    }

    /// Parse one log line, reporting the failure reason as plain text
    pub(crate) fn parse_line(line: &str) -> std::result::Result<Self, String> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != FIELD_COUNT {
            return Err(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            ));
        }

        let mut values = [0u32; FIELD_COUNT];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field
                .parse()
                .map_err(|_| format!("'{}' is not a number", field))?;
        }

        let [year, month, day, hour, minute] = values;
        Self::new(year, month, day, hour, minute).map_err(|e| match e {
            Error::InvalidEntry(reason) => reason,
            other => other.to_string(),
        })
    }
}

fn check_range(name: &str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        return Err(Error::InvalidEntry(format!(
            "{} {} out of range {}-{}",
            name, value, min, max
        )));
    }
    Ok(())
}

impl FromStr for LogEntry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_line(s).map_err(Error::InvalidEntry)
    }
}

impl fmt::Display for LogEntry {
    /// Same layout as a log line, e.g. `2019 06 01 00 10`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} {:02} {:02} {:02} {:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
