//! File-based storage backend for persistent catalogs.

use crate::backend::StorageBackend;
use crate::error::StorageResult;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A file-based storage backend.
///
/// The snapshot lives in a single file. Each write goes to its own
/// uniquely named temporary file in the same directory, which is then
/// renamed over the target, so readers never observe a half-written
/// catalog and concurrent writers never share a temporary file.
///
/// # Durability
///
/// - With `sync_on_write` (the default) the temporary file is `fsync`ed
///   before the rename
/// - Without it, data is handed to the OS and durability is left to it
///
/// # Thread Safety
///
/// Concurrent writes to the same path, from one backend or many, all
/// succeed; the last rename wins. Writers in other processes are not
/// coordinated beyond that.
///
/// # Example
///
/// ```no_run
/// use bookstore_storage::{FileBackend, StorageBackend};
/// use std::path::Path;
///
/// let backend = FileBackend::create(Path::new("catalog.json"));
/// backend.write_all(b"{}").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
    sync_on_write: bool,
    create_dirs: bool,
}

impl FileBackend {
    /// Opens the snapshot file at `path` for reading and writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be inspected.
    pub fn open(path: &Path) -> StorageResult<Self> {
        fs::metadata(path)?;
        Ok(Self::create(path))
    }

    /// Targets `path` without requiring it to exist yet.
    ///
    /// The file is created by the first `write_all`.
    #[must_use]
    pub fn create(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            sync_on_write: true,
            create_dirs: false,
        }
    }

    /// Sets whether writes are flushed to disk before they become visible.
    #[must_use]
    pub const fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }

    /// Sets whether missing parent directories are created on write.
    #[must_use]
    pub const fn create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl StorageBackend for FileBackend {
    fn read_all(&self) -> StorageResult<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }

    fn write_all(&self, data: &[u8]) -> StorageResult<()> {
        let dir = self.parent_dir();
        if self.create_dirs {
            fs::create_dir_all(dir)?;
        }

        // Dropped (and removed) on any error before persist.
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(data)?;
        temp.flush()?;
        if self.sync_on_write {
            temp.as_file().sync_all()?;
        }
        temp.persist(&self.path).map_err(io::Error::from)?;
        Ok(())
    }
}
