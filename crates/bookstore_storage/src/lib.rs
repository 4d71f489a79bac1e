//! # Bookstore Storage
//!
//! Snapshot storage backends for the bookstore catalog.
//!
//! Backends are **opaque byte stores** holding exactly one document: the
//! whole catalog, written and read in one piece. They do not interpret the
//! bytes they hold.
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - For testing and ephemeral catalogs
//! - [`FileBackend`] - For persistent catalogs on the local file system
//!
//! ## Example
//!
//! ```rust
//! use bookstore_storage::{InMemoryBackend, StorageBackend};
//!
//! let backend = InMemoryBackend::new();
//! backend.write_all(b"{}").unwrap();
//! assert_eq!(backend.read_all().unwrap(), b"{}");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
