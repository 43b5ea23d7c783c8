pub mod analyze;
pub mod completion;
pub mod dump;
pub mod generate;
