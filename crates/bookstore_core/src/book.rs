//! The book record.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single book in the catalog.
///
/// The `id` is the book's only identity: two books with the same id are the
/// same catalog entry. Copy counts are unsigned, so a stored book can never
/// hold a negative count; [`Book::set_copies`] is the checked way to apply a
/// signed value coming from user input.
///
/// Catalog files written by older tools use capitalized field names
/// (`ID`, `Title`, `Author`, `Copies`). Both spellings are accepted when
/// reading; the lowercase form is always written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// Stable unique key.
    #[serde(alias = "ID", default)]
    pub id: String,
    /// Title.
    #[serde(alias = "Title")]
    pub title: String,
    /// Author.
    #[serde(alias = "Author")]
    pub author: String,
    /// Number of copies in stock.
    #[serde(alias = "Copies")]
    pub copies: u64,
}

impl Book {
    /// Creates a book.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            copies,
        }
    }

    /// Sets the copy count.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NegativeCopies`] if `copies` is below zero; the
    /// book is left unchanged.
    pub fn set_copies(&mut self, copies: i64) -> CoreResult<()> {
        self.copies = u64::try_from(copies).map_err(|_| CoreError::negative_copies(copies))?;
        Ok(())
    }

    /// Renders the book as `"<title> by <author> (copies: <copies>)"`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} (copies: {})",
            self.title, self.author, self.copies
        )
    }
}
