//! The catalog store.

use crate::book::Book;
use crate::codec;
use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use bookstore_storage::{FileBackend, StorageBackend};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A thread-safe set of books keyed by id.
///
/// All operations take `&self`; share a catalog between threads by
/// reference or through an `Arc<Catalog>`. Lookups and `sync` take a shared
/// lock, `add` and `set_copies` take an exclusive one, so every mutation is
/// validated and applied as a single atomic step.
///
/// The catalog remembers the path it was loaded from (or created for).
/// That path is fixed for the lifetime of the catalog.
///
/// # Invariants
///
/// - Every key equals the `id` of the book stored under it
/// - No two books share an id
/// - Books are never removed
pub struct Catalog {
    books: RwLock<HashMap<String, Book>>,
    path: Option<PathBuf>,
    config: Config,
}

impl Catalog {
    /// Creates an empty catalog with no associated path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty catalog using the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self::from_parts(HashMap::new(), None, config)
    }

    /// Creates an empty catalog that syncs to `path` by default.
    ///
    /// Nothing is read from or written to `path` until [`Catalog::sync`].
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::from_parts(HashMap::new(), Some(path.into()), Config::default())
    }

    /// Loads a catalog from the file at `path`.
    ///
    /// The returned catalog remembers `path` as its sync target.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Storage`] if the file cannot be opened or read
    /// - [`CoreError::Codec`] if the content is not a valid catalog document
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        Self::load_with_config(path, Config::default())
    }

    /// Loads a catalog from the file at `path` with the given configuration.
    ///
    /// # Errors
    ///
    /// See [`Catalog::load`].
    pub fn load_with_config(path: impl AsRef<Path>, config: Config) -> CoreResult<Self> {
        let path = path.as_ref();
        let backend = FileBackend::open(path)?;
        let books = Self::read_books(&backend)?;
        debug!(path = %path.display(), count = books.len(), "loaded catalog");
        Ok(Self::from_parts(books, Some(path.to_path_buf()), config))
    }

    /// Loads a catalog from an arbitrary storage backend.
    ///
    /// The returned catalog has no path.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Storage`] if the backend holds no snapshot
    /// - [`CoreError::Codec`] if the snapshot is not a valid catalog document
    pub fn load_from(backend: &dyn StorageBackend) -> CoreResult<Self> {
        let books = Self::read_books(backend)?;
        debug!(count = books.len(), "loaded catalog from backend");
        Ok(Self::from_parts(books, None, Config::default()))
    }

    fn from_parts(books: HashMap<String, Book>, path: Option<PathBuf>, config: Config) -> Self {
        Self {
            books: RwLock::new(books),
            path,
            config,
        }
    }

    fn read_books(backend: &dyn StorageBackend) -> CoreResult<HashMap<String, Book>> {
        let bytes = backend.read_all()?;
        codec::decode(&bytes)
    }

    /// Returns the path this catalog was loaded from or created for.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the catalog configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Adds a book.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateId`] if a book with the same id exists;
    /// the catalog is left unchanged.
    pub fn add(&self, book: Book) -> CoreResult<()> {
        let mut books = self.books.write();
        if books.contains_key(&book.id) {
            return Err(CoreError::duplicate_id(book.id));
        }
        books.insert(book.id.clone(), book);
        Ok(())
    }

    /// Returns a copy of the book with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Book> {
        self.books.read().get(id).cloned()
    }

    /// Returns a snapshot of every book.
    ///
    /// The order is unspecified; sort the result if a stable order matters.
    #[must_use]
    pub fn get_all(&self) -> Vec<Book> {
        self.books.read().values().cloned().collect()
    }

    /// Returns the copy count of the book with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if there is no such book.
    pub fn get_copies(&self, id: &str) -> CoreResult<u64> {
        self.books
            .read()
            .get(id)
            .map(|book| book.copies)
            .ok_or_else(|| CoreError::not_found(id))
    }

    /// Sets the copy count of the book with the given id.
    ///
    /// A negative count is rejected before the id is looked up, so the
    /// error is the same whether or not the book exists.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NegativeCopies`] if `copies` is below zero
    /// - [`CoreError::NotFound`] if there is no such book
    pub fn set_copies(&self, id: &str, copies: i64) -> CoreResult<()> {
        if copies < 0 {
            return Err(CoreError::negative_copies(copies));
        }
        let mut books = self.books.write();
        let book = books.get_mut(id).ok_or_else(|| CoreError::not_found(id))?;
        book.set_copies(copies)
    }

    /// Returns true if a book with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.books.read().contains_key(id)
    }

    /// Returns the number of books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    /// Returns true if the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.read().is_empty()
    }

    /// Writes the whole catalog to `path`, or to the catalog's own path.
    ///
    /// The snapshot is taken under one shared lock acquisition, so it never
    /// mixes states from concurrent mutations. The file is replaced
    /// atomically; concurrent syncs to the same path all succeed and the
    /// last one to finish wins.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NoPath`] if `path` is `None` and the catalog has no path
    /// - [`CoreError::Storage`] if the file cannot be written
    pub fn sync(&self, path: Option<&Path>) -> CoreResult<()> {
        let target = path.or(self.path.as_deref()).ok_or(CoreError::NoPath)?;
        let backend = FileBackend::create(target)
            .sync_on_write(self.config.sync_on_write)
            .create_dirs(self.config.create_dirs);
        self.sync_to(&backend)?;
        debug!(path = %target.display(), "synced catalog");
        Ok(())
    }

    /// Writes the whole catalog to an arbitrary storage backend.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] if the backend write fails.
    pub fn sync_to(&self, backend: &dyn StorageBackend) -> CoreResult<()> {
        let bytes = {
            let books = self.books.read();
            codec::encode(&books, self.config.pretty)?
        };
        backend.write_all(&bytes)?;
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("len", &self.len())
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_storage::InMemoryBackend;

    fn test_catalog() -> Catalog {
        let catalog = Catalog::new();
        catalog
            .add(Book::new(
                "abc",
                "In the Company of Cheerful Ladies",
                "Alexander McCall Smith",
                1,
            ))
            .unwrap();
        catalog
            .add(Book::new("xyz", "White Heat", "Dominic Sandbrook", 2))
            .unwrap();
        catalog
    }

    fn sorted(mut books: Vec<Book>) -> Vec<Book> {
        books.sort_by(|a, b| a.id.cmp(&b.id));
        books
    }

    #[test]
    fn new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.get_all().is_empty());
        assert!(catalog.is_empty());
        assert!(catalog.path().is_none());
    }

    #[test]
    fn get_finds_book_by_id() {
        let catalog = test_catalog();
        let book = catalog.get("abc").unwrap();
        assert_eq!(
            book,
            Book::new(
                "abc",
                "In the Company of Cheerful Ladies",
                "Alexander McCall Smith",
                1
            )
        );
    }

    #[test]
    fn get_missing_returns_none() {
        assert!(test_catalog().get("nonexistent ID").is_none());
    }

    #[test]
    fn get_returns_a_copy() {
        let catalog = test_catalog();
        let mut book = catalog.get("abc").unwrap();
        book.copies = 99;
        assert_eq!(catalog.get_copies("abc").unwrap(), 1);
    }

    #[test]
    fn add_inserts_new_book() {
        let catalog = test_catalog();
        assert!(!catalog.contains("123"));

        let book = Book::new("123", "The Prize of all the Oceans", "Glyn Williams", 2);
        catalog.add(book.clone()).unwrap();

        assert_eq!(catalog.get("123"), Some(book));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn add_duplicate_fails_and_leaves_catalog_unchanged() {
        let catalog = test_catalog();
        let before = sorted(catalog.get_all());

        let err = catalog
            .add(Book::new("abc", "Something Else", "Someone", 40))
            .unwrap_err();

        assert!(matches!(err, CoreError::DuplicateId { ref id } if id == "abc"));
        assert_eq!(sorted(catalog.get_all()), before);
    }

    #[test]
    fn get_all_returns_every_book() {
        let books = sorted(test_catalog().get_all());
        let ids: Vec<_> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["abc", "xyz"]);
    }

    #[test]
    fn set_copies_updates_book() {
        let catalog = test_catalog();
        catalog.set_copies("abc", 2).unwrap();
        assert_eq!(catalog.get("abc").unwrap().copies, 2);
        assert_eq!(catalog.get_copies("abc").unwrap(), 2);
    }

    #[test]
    fn set_copies_to_zero() {
        let catalog = test_catalog();
        catalog.set_copies("xyz", 0).unwrap();
        assert_eq!(catalog.get_copies("xyz").unwrap(), 0);
    }

    #[test]
    fn set_copies_negative_rejected_for_existing_id() {
        let catalog = test_catalog();
        let err = catalog.set_copies("abc", -1).unwrap_err();
        assert!(matches!(err, CoreError::NegativeCopies { copies: -1 }));
        assert_eq!(catalog.get_copies("abc").unwrap(), 1);
    }

    #[test]
    fn set_copies_negative_rejected_before_lookup() {
        let catalog = test_catalog();
        let err = catalog.set_copies("missing", -5).unwrap_err();
        assert!(matches!(err, CoreError::NegativeCopies { copies: -5 }));
    }

    #[test]
    fn set_copies_unknown_id_not_found() {
        let err = test_catalog().set_copies("missing", 3).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn get_copies_unknown_id_not_found() {
        let err = test_catalog().get_copies("missing").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { ref id } if id == "missing"));
    }

    #[test]
    fn sync_without_path_fails() {
        let err = test_catalog().sync(None).unwrap_err();
        assert!(matches!(err, CoreError::NoPath));
    }

    #[test]
    fn backend_roundtrip() {
        let catalog = test_catalog();
        let backend = InMemoryBackend::new();
        catalog.sync_to(&backend).unwrap();

        let loaded = Catalog::load_from(&backend).unwrap();
        assert_eq!(sorted(loaded.get_all()), sorted(catalog.get_all()));
        assert!(loaded.path().is_none());
    }

    #[test]
    fn load_from_empty_backend_fails() {
        let err = Catalog::load_from(&InMemoryBackend::new()).unwrap_err();
        assert!(matches!(err, CoreError::Storage(_)));
    }

    #[test]
    fn load_from_garbage_fails() {
        let backend = InMemoryBackend::with_data("not a catalog");
        let err = Catalog::load_from(&backend).unwrap_err();
        assert!(matches!(err, CoreError::Codec(_)));
    }

    #[test]
    fn pretty_config_writes_indented_document() {
        let catalog = Catalog::with_config(Config::new().pretty(true));
        catalog.add(Book::new("abc", "T", "A", 1)).unwrap();

        let backend = InMemoryBackend::new();
        catalog.sync_to(&backend).unwrap();

        let text = String::from_utf8(backend.data().unwrap()).unwrap();
        assert!(text.starts_with("{\n  \"abc\": {"));
    }

    #[test]
    fn debug_output() {
        let debug = format!("{:?}", test_catalog());
        assert!(debug.contains("Catalog"));
        assert!(debug.contains("len: 2"));
    }
}
