use thiserror::Error;

use crate::export::{CsvError, ImportError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed CSV: {0}")]
    Csv(#[from] CsvError),

    #[error("Records import failed: {0}")]
    Import(#[from] ImportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
