use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotError {
    #[error("invalid filename: {0} (require *.json)")]
    InvalidName(String),

    #[error("file exists, cannot override: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("key already cached: {0}")]
    DuplicateKey(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid root directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("read failure: {0}")]
    ReadFailure(std::io::Error),
}

pub type Result<T> = std::result::Result<T, JotError>;
