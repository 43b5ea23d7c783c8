use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;
use weblog_core::log::LogfileReader;

/// Print the raw lines of a log file without parsing them
pub fn execute(file: &Path) -> Result<()> {
    tracing::debug!("Dumping log file: {}", file.display());

    let mut reader = LogfileReader::open(file)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    reader.print_data(&mut out)?;
    out.flush()?;

    Ok(())
}
