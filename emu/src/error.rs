use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    /// 0-based line index and the offending text.
    #[error("Invalid number format at line {}: `{}`", .0 + 1, .1)]
    ParseWord(usize, String, #[source] ParseIntError),

    #[error("Memory overflow: ignored {0} additional words (capacity {1})")]
    MemoryOverflow(usize, usize),

    #[error("Failed to parse config: {0}")]
    Config(String, #[source] serde_yaml::Error),
}
