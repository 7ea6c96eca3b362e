use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("{parser} failed to read {}: {source}", path.display())]
    Io {
        parser: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{parser} could not decode input as {encoding}: {message}")]
    Decode {
        parser: &'static str,
        encoding: &'static str,
        message: String,
    },

    #[error("{parser} CSV error: {source}")]
    Csv {
        parser: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("{parser} line {line} has {found} fields, expected {expected}")]
    FieldCount {
        parser: &'static str,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{parser} line {line} invalid: {message}")]
    DataRow {
        parser: &'static str,
        line: u64,
        message: String,
    },

    #[error("{parser} file did not contain any data rows")]
    EmptyData { parser: &'static str },
}
