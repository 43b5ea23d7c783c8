mod creator;
mod entry;
mod reader;

pub use creator::LogfileCreator;
pub use entry::LogEntry;
pub use reader::LogfileReader;
