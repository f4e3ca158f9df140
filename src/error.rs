//! CLI error type.

use std::path::PathBuf;

use uploader::{ConfigError, Rejection, SelectError, StartError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error(transparent)]
    Start(#[from] StartError),
    #[error("{name}: {reason}")]
    Rejected { name: String, reason: Rejection },
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Upload(String),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
