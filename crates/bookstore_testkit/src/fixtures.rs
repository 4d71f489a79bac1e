//! Test fixtures and catalog helpers.

use bookstore_core::{Book, Catalog};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The books every fixture catalog starts with, sorted by id.
pub fn test_books() -> Vec<Book> {
    vec![
        Book::new(
            "abc",
            "In the Company of Cheerful Ladies",
            "Alexander McCall Smith",
            1,
        ),
        Book::new("xyz", "White Heat", "Dominic Sandbrook", 2),
    ]
}

/// Creates an in-memory catalog holding [`test_books`].
pub fn test_catalog() -> Catalog {
    let catalog = Catalog::new();
    for book in test_books() {
        catalog.add(book).expect("fixture ids are unique");
    }
    catalog
}

/// Sorts books by id.
pub fn sorted_by_id(mut books: Vec<Book>) -> Vec<Book> {
    books.sort_by(|a, b| a.id.cmp(&b.id));
    books
}

/// Asserts that `books` holds exactly [`test_books`], in any order.
#[track_caller]
pub fn assert_test_books(books: Vec<Book>) {
    assert_eq!(sorted_by_id(books), test_books());
}

/// A catalog file in a temporary directory, removed on drop.
pub struct TestCatalogFile {
    path: PathBuf,
    _temp_dir: TempDir,
}

impl TestCatalogFile {
    /// Creates a temporary directory with no catalog file in it yet.
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        Self {
            path: temp_dir.path().join("catalog.json"),
            _temp_dir: temp_dir,
        }
    }

    /// Creates a catalog file holding `contents`.
    pub fn with_contents(contents: impl AsRef<[u8]>) -> Self {
        let file = Self::empty();
        fs::write(&file.path, contents).expect("Failed to write catalog file");
        file
    }

    /// Creates a catalog file holding [`test_books`].
    pub fn with_test_books() -> Self {
        let file = Self::empty();
        test_catalog()
            .sync(Some(file.path()))
            .expect("Failed to write catalog file");
        file
    }

    /// Returns the catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the catalog from the file.
    pub fn load(&self) -> Catalog {
        Catalog::load(&self.path).expect("Failed to load catalog")
    }

    /// Returns the raw file contents.
    pub fn contents(&self) -> String {
        fs::read_to_string(&self.path).expect("Failed to read catalog file")
    }
}
