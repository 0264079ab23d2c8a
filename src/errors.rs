use std::path::PathBuf;

use thiserror::Error;

pub type MensaResult<T> = Result<T, MensaError>;

#[derive(Debug, Error)]
pub enum MensaError {
    #[error("could not get file: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server answered with status {status} for {url}")]
    HttpStatus { status: u16, url: String },
    #[error("meal plan is not valid Windows-1252 text")]
    Decode,
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),
    #[error("cannot access the user {0} directory")]
    NoUserDir(&'static str),
}

impl MensaError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MensaError::Io {
            path: path.into(),
            source,
        }
    }
}
