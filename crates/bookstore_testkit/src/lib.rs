//! # Bookstore Testkit
//!
//! Test utilities for the bookstore catalog.
//!
//! This crate provides:
//! - Fixtures: the standard two-book catalog and temporary catalog files
//! - Property-based test generators using proptest
//! - Catalog documents in every shape the loader has to handle
//!
//! ## Usage
//!
//! ```rust
//! use bookstore_testkit::prelude::*;
//!
//! let catalog = test_catalog();
//! assert_test_books(catalog.get_all());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use vectors::*;
