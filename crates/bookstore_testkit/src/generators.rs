//! Property-based test generators using proptest.
//!
//! Provides strategies for generating books and catalogs that respect the
//! catalog invariants.

use bookstore_core::{Book, Catalog};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Strategy for generating book ids.
pub fn book_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_-]{1,12}").expect("Invalid regex")
}

/// Strategy for generating free text (titles, authors), including
/// characters that need escaping in JSON.
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[A-Za-z ]{0,32}").expect("Invalid regex"),
        ".{0,32}",
        Just("quote \" backslash \\ newline \n".to_string()),
    ]
}

/// Strategy for generating a single book.
pub fn book_strategy() -> impl Strategy<Value = Book> {
    (book_id_strategy(), text_strategy(), text_strategy(), any::<u64>())
        .prop_map(|(id, title, author, copies)| Book::new(id, title, author, copies))
}

/// Strategy for generating a set of books with unique ids, sorted by id.
pub fn books_strategy(max: usize) -> impl Strategy<Value = Vec<Book>> {
    prop::collection::vec(book_strategy(), 0..=max).prop_map(|books| {
        let unique: BTreeMap<String, Book> =
            books.into_iter().map(|b| (b.id.clone(), b)).collect();
        unique.into_values().collect()
    })
}

/// Strategy for generating copy counts as user input, negatives included.
pub fn copies_input_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        3 => 0..1_000i64,
        1 => i64::MIN..0,
        1 => Just(0i64),
    ]
}

/// Builds a catalog from books with unique ids.
pub fn catalog_from(books: &[Book]) -> Catalog {
    let catalog = Catalog::new();
    for book in books {
        catalog.add(book.clone()).expect("generated ids are unique");
    }
    catalog
}
