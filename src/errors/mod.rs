use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Precondition errors
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    // Live integration errors
    #[error("{0} not implemented yet")]
    NotImplemented(String),

    #[error("Live source failed: {0}")]
    Live(String),

    // Serialization errors
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error")]
    Io(#[from] std::io::Error),
}

pub type DigestResult<T> = Result<T, DigestError>;
