use super::entry::LogEntry;
use crate::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes synthetic access logs for a single year
pub struct LogfileCreator {
    year: u32,
    rng: StdRng,
}

impl LogfileCreator {
    pub fn new(year: u32) -> Self {
        Self {
            year,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed seed so the same entries are produced on every run
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Generate `count` random entries, sorted chronologically
    pub fn create_entries(&mut self, count: usize) -> Result<Vec<LogEntry>> {
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            entries.push(self.random_entry()?);
        }
        entries.sort();
        Ok(entries)
    }

    /// Write `count` random entries to `path`, one per line
    pub fn create_file(&mut self, path: &Path, count: usize) -> Result<()> {
        tracing::debug!("Writing {} entries to: {}", count, path.display());

        let entries = self.create_entries(count)?;
        let mut writer = BufWriter::new(File::create(path)?);
        for entry in &entries {
            writeln!(writer, "{}", entry)?;
        }
        writer.flush()?;

        tracing::info!(
            "Successfully wrote log file with {} entries to {}",
            entries.len(),
            path.display()
        );

        Ok(())
    }

    fn random_entry(&mut self) -> Result<LogEntry> {
        // Days stop at 28 so every month is valid
        LogEntry::new(
            self.year,
            self.rng.random_range(1..=12),
            self.rng.random_range(1..=28),
            self.rng.random_range(0..24),
            self.rng.random_range(0..60),
        )
    }
}
