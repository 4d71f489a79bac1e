//! In-memory storage backend for testing.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;

/// An in-memory storage backend.
///
/// This backend keeps the snapshot in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Catalogs that never need to reach the disk
///
/// # Example
///
/// ```rust
/// use bookstore_storage::{InMemoryBackend, StorageBackend};
///
/// let backend = InMemoryBackend::new();
/// assert!(backend.read_all().is_err());
/// backend.write_all(b"test data").unwrap();
/// assert_eq!(backend.data(), Some(b"test data".to_vec()));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    data: RwLock<Option<Vec<u8>>>,
}

impl InMemoryBackend {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory backend holding an existing snapshot.
    ///
    /// Useful for feeding hand-written documents to a loader.
    #[must_use]
    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: RwLock::new(Some(data.into())),
        }
    }

    /// Returns a copy of the stored snapshot, if any.
    #[must_use]
    pub fn data(&self) -> Option<Vec<u8>> {
        self.data.read().clone()
    }
}

impl StorageBackend for InMemoryBackend {
    fn read_all(&self) -> StorageResult<Vec<u8>> {
        self.data.read().clone().ok_or(StorageError::Empty)
    }

    fn write_all(&self, data: &[u8]) -> StorageResult<()> {
        *self.data.write() = Some(data.to_vec());
        Ok(())
    }
}
