//! # Bookstore Core
//!
//! An embedded catalog of book records.
//!
//! This crate provides:
//! - [`Book`], the record type, with its copy-count validation
//! - [`Catalog`], a thread-safe store keyed by book id
//! - Whole-catalog persistence to a JSON file through [`Catalog::load`]
//!   and [`Catalog::sync`]
//!
//! ## Example
//!
//! ```rust
//! use bookstore_core::{Book, Catalog};
//!
//! let catalog = Catalog::new();
//! catalog.add(Book::new("abc", "White Heat", "Dominic Sandbrook", 1)).unwrap();
//! catalog.set_copies("abc", 5).unwrap();
//! assert_eq!(catalog.get_copies("abc").unwrap(), 5);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod catalog;
pub mod codec;
mod config;
mod error;

pub use book::Book;
pub use catalog::Catalog;
pub use config::Config;
pub use error::{CoreError, CoreResult};

pub use bookstore_storage::{FileBackend, InMemoryBackend, StorageBackend, StorageError};
