use super::entry::LogEntry;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Write};
use std::path::Path;

/// Sequential reader over the entries of an access log.
///
/// Consumed once, front to back. The underlying file is closed when the
/// reader is dropped.
pub struct LogfileReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl LogfileReader<BufReader<File>> {
    /// Open a log file from the given path
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("Opening log file: {}", path.display());

        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> LogfileReader<R> {
    /// Read log lines from any buffered source
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Copy every remaining line to `out` exactly as read
    pub fn print_data<W: Write>(&mut self, out: &mut W) -> Result<()> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_number += 1;
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for LogfileReader<R> {
    type Item = Result<LogEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(LogEntry::parse_line(&line).map_err(|reason| Error::Parse {
                line: self.line_number,
                reason,
            }));
        }
    }
}
