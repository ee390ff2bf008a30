use std::sync::PoisonError;
use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// I/O error while reading or writing the document file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document file exists but does not hold a valid document
    #[error("Malformed data file: {0}")]
    Malformed(String),

    /// The in-memory document could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Lock(error.to_string())
    }
}
