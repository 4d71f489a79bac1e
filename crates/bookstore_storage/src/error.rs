//! Error types for storage operations.

use std::io;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backend holds no snapshot yet.
    #[error("storage is empty: no snapshot has been written")]
    Empty,
}

impl StorageError {
    /// Returns true if the error means the snapshot does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io(err) => err.kind() == io::ErrorKind::NotFound,
            Self::Empty => true,
        }
    }
}
