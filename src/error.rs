//! All error types for the lockit crate.
//!
//! These are returned from all fallible operations (parsing, serialization,
//! tree scanning, reconciliation).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("malformed input at line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("invalid data: {0}")]
    DataMismatch(String),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Creates a new malformed-input error for the given 1-based line
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Error::Malformed {
            line,
            message: message.into(),
        }
    }
}
