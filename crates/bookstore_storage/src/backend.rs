//! Storage backend trait definition.

use crate::error::StorageResult;

/// A whole-snapshot storage backend.
///
/// A backend holds one opaque document. The catalog owns the format of that
/// document; backends only move bytes.
///
/// # Invariants
///
/// - `read_all` returns exactly the bytes of the last successful `write_all`
/// - A failed `write_all` leaves the previous snapshot readable
/// - Backends must be `Send + Sync` so a catalog can be shared across threads
///
/// # Implementors
///
/// - [`super::InMemoryBackend`] - For testing
/// - [`super::FileBackend`] - For persistent storage
pub trait StorageBackend: Send + Sync {
    /// Reads the complete stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshot exists (missing file, empty in-memory backend)
    /// - An I/O error occurs
    fn read_all(&self) -> StorageResult<Vec<u8>>;

    /// Replaces the stored snapshot with `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn write_all(&self, data: &[u8]) -> StorageResult<()>;
}
