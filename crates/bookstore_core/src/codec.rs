//! Catalog document encoding.
//!
//! A catalog is persisted as one JSON object keyed by book id:
//!
//! ```text
//! {"abc":{"id":"abc","title":"T1","author":"A1","copies":1},
//!  "xyz":{"id":"xyz","title":"T2","author":"A2","copies":2}}
//! ```
//!
//! Each entry repeats its id. When reading, the outer key is authoritative:
//! an entry whose embedded `id` is missing or differs from its key is stored
//! under the key with its `id` rewritten to match.

use crate::book::Book;
use crate::error::CoreResult;
use bookstore_codec::{from_json, to_canonical_json, to_pretty_json};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Encodes a set of books keyed by id.
///
/// Entries are written in id order so equal catalogs produce equal bytes.
///
/// # Errors
///
/// Returns [`crate::CoreError::Codec`] if encoding fails.
pub fn encode(books: &HashMap<String, Book>, pretty: bool) -> CoreResult<Vec<u8>> {
    let ordered: BTreeMap<&str, &Book> = books.iter().map(|(id, b)| (id.as_str(), b)).collect();
    let bytes = if pretty {
        to_pretty_json(&ordered)?
    } else {
        to_canonical_json(&ordered)?
    };
    Ok(bytes)
}

/// Decodes a catalog document.
///
/// # Errors
///
/// Returns [`crate::CoreError::Codec`] if the bytes are not a JSON object of
/// book entries, or if any entry has a missing or mistyped field or a
/// negative copy count.
pub fn decode(bytes: &[u8]) -> CoreResult<HashMap<String, Book>> {
    let raw: HashMap<String, Book> = from_json(bytes)?;
    Ok(raw
        .into_iter()
        .map(|(key, mut book)| {
            if book.id != key {
                if !book.id.is_empty() {
                    warn!(key = %key, embedded = %book.id, "entry id disagrees with key, using key");
                }
                book.id.clone_from(&key);
            }
            (key, book)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use bookstore_codec::CodecError;

    fn sample() -> HashMap<String, Book> {
        [
            Book::new("xyz", "T2", "A2", 2),
            Book::new("abc", "T1", "A1", 1),
        ]
        .into_iter()
        .map(|b| (b.id.clone(), b))
        .collect()
    }

    #[test]
    fn encode_is_sorted_and_keeps_embedded_id() {
        let bytes = encode(&sample(), false).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"abc":{"id":"abc","title":"T1","author":"A1","copies":1},"#,
                r#""xyz":{"id":"xyz","title":"T2","author":"A2","copies":2}}"#,
                "\n"
            )
        );
    }

    #[test]
    fn encode_empty() {
        assert_eq!(encode(&HashMap::new(), false).unwrap(), b"{}\n");
    }

    #[test]
    fn pretty_decodes_to_same_books() {
        let bytes = encode(&sample(), true).unwrap();
        assert!(bytes.contains(&b'\n'));
        assert_eq!(decode(&bytes).unwrap(), sample());
    }

    #[test]
    fn decode_reference_document() {
        let doc = br#"{"abc":{"id":"abc","title":"T1","author":"A1","copies":1},
 "xyz":{"id":"xyz","title":"T2","author":"A2","copies":2}}"#;
        assert_eq!(decode(doc).unwrap(), sample());
    }

    #[test]
    fn decode_legacy_capitalized_document() {
        let doc = br#"{"abc":{"ID":"abc","Title":"T1","Author":"A1","Copies":1},"xyz":{"ID":"xyz","Title":"T2","Author":"A2","Copies":2}}"#;
        assert_eq!(decode(doc).unwrap(), sample());
    }

    #[test]
    fn outer_key_wins_over_embedded_id() {
        let doc = br#"{"abc":{"id":"other","title":"T1","author":"A1","copies":1}}"#;
        let books = decode(doc).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books["abc"].id, "abc");
        assert!(!books.contains_key("other"));
    }

    #[test]
    fn missing_embedded_id_is_filled_from_key() {
        let doc = br#"{"abc":{"title":"T1","author":"A1","copies":1}}"#;
        assert_eq!(decode(doc).unwrap()["abc"].id, "abc");
    }

    #[test]
    fn negative_copies_rejected() {
        let doc = br#"{"abc":{"id":"abc","title":"T1","author":"A1","copies":-1}}"#;
        let err = decode(doc).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Codec(CodecError::InvalidStructure { .. })
        ));
    }

    #[test]
    fn structural_errors_rejected() {
        let docs: [&[u8]; 5] = [
            b"[]",
            b"null",
            b"{\"abc\": 1}",
            b"{\"abc\": {\"id\": \"abc\"}}",
            b"{\"abc\": {\"id\": \"abc\", \"title\": 1, \"author\": \"A\", \"copies\": 1}}",
        ];
        for doc in docs {
            assert!(
                matches!(decode(doc), Err(CoreError::Codec(_))),
                "accepted {}",
                String::from_utf8_lossy(doc)
            );
        }
    }

    #[test]
    fn malformed_json_rejected() {
        let err = decode(b"{\"abc\":").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Codec(CodecError::DecodingFailed { .. })
        ));
    }
}
