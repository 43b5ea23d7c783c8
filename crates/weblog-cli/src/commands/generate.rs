use anyhow::Result;
use std::path::Path;
use weblog_core::log::LogfileCreator;

pub const DEFAULT_ENTRIES: usize = 255;

/// Write a synthetic access log with `entries` records for `year`
pub fn execute(file: &Path, entries: usize, year: u32, seed: Option<u64>) -> Result<()> {
    tracing::info!("Generating log file: {}", file.display());

    let mut creator = LogfileCreator::new(year);
    if let Some(seed) = seed {
        creator = creator.with_seed(seed);
    }
    creator.create_file(file, entries)?;

    println!("Wrote {} entries to {}", entries, file.display());
    Ok(())
}
