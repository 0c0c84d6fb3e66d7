//! Error types for frontpage-fetch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid scan URL: {0}")]
    InvalidUrl(String),

    #[error("{code} - {reason}")]
    Status { code: u16, reason: String },

    #[error("validation failed for {}", path.display())]
    Validation { path: PathBuf },

    #[error("network error: {0}")]
    Network(String),

    #[error("file I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("download task failed: {0}")]
    TaskFailed(String),
}

impl FetchError {
    /// HTTP status code carried by a [`FetchError::Status`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
