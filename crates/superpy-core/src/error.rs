use std::io;

use superpy_domain::DateParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Parse failure: {0}")]
    Parse(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<DateParseError> for CoreError {
    fn from(err: DateParseError) -> Self {
        CoreError::Parse(err.to_string())
    }
}
