//! Error types for catalog operations.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in catalog operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No book with the given id.
    #[error("book not found: {id:?}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A book with the given id already exists.
    #[error("book already exists: {id:?}")]
    DuplicateId {
        /// The conflicting id.
        id: String,
    },

    /// Copy counts cannot be negative.
    #[error("cannot set copies to negative number: {copies}")]
    NegativeCopies {
        /// The rejected value.
        copies: i64,
    },

    /// `sync` was called without a path on a catalog that has none.
    #[error("no path to sync to: catalog was not loaded from a file")]
    NoPath,

    /// Reading or writing the snapshot failed.
    #[error("storage error: {0}")]
    Storage(#[from] bookstore_storage::StorageError),

    /// The snapshot could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] bookstore_codec::CodecError),
}

impl CoreError {
    /// Creates a not found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates a duplicate id error.
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Creates a negative copies error.
    pub fn negative_copies(copies: i64) -> Self {
        Self::NegativeCopies { copies }
    }

    /// Returns true if this error means the requested book does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
