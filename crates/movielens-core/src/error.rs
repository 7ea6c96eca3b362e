use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Parser(#[from] movielens_parser::ParserError),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Invalid config file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("movie_id {movie_id} appears on movie rows {first_row} and {row}")]
    DuplicateMovie {
        movie_id: u32,
        first_row: usize,
        row: usize,
    },

    #[error("timestamp {seconds} is outside the representable range")]
    Timestamp { seconds: i64 },

    #[error("join produced no rows: none of {ratings} ratings matched a movie")]
    EmptyJoin { ratings: usize },

    #[error("failed to move output into place at {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
