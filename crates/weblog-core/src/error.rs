use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse log line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Invalid log entry: {0}")]
    InvalidEntry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
