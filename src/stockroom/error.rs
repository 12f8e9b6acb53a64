use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("cannot read {value:?} as a {wanted}")]
    Conversion { wanted: &'static str, value: String },

    #[error("record on line {line} does not have 5 comma-separated fields")]
    Malformed { line: usize },

    #[error("inventory file unavailable: {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StockError>;
