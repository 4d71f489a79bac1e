//! Catalog documents for loader tests.
//!
//! Each constant is a complete catalog file in one of the shapes the loader
//! must handle. Valid documents describe the same books as
//! [`crate::fixtures::test_books`].

/// The document written for [`crate::fixtures::test_books`].
pub const CANONICAL_DOC: &str = concat!(
    r#"{"abc":{"id":"abc","title":"In the Company of Cheerful Ladies","author":"Alexander McCall Smith","copies":1},"#,
    r#""xyz":{"id":"xyz","title":"White Heat","author":"Dominic Sandbrook","copies":2}}"#,
    "\n"
);

/// The same books as written by older tools, with capitalized field names.
pub const LEGACY_DOC: &str = concat!(
    r#"{"abc":{"ID":"abc","Title":"In the Company of Cheerful Ladies","Author":"Alexander McCall Smith","Copies":1},"#,
    r#""xyz":{"ID":"xyz","Title":"White Heat","Author":"Dominic Sandbrook","Copies":2}}"#,
    "\n"
);

/// An entry whose embedded id disagrees with its key (`xyz` claims `zzz`).
pub const MISMATCHED_ID_DOC: &str = concat!(
    r#"{"abc":{"id":"abc","title":"In the Company of Cheerful Ladies","author":"Alexander McCall Smith","copies":1},"#,
    r#""xyz":{"id":"zzz","title":"White Heat","author":"Dominic Sandbrook","copies":2}}"#
);

/// An empty catalog.
pub const EMPTY_DOC: &str = "{}";

/// Documents that must be rejected, each with a short description.
pub const INVALID_DOCS: &[(&str, &str)] = &[
    ("empty file", ""),
    ("truncated", r#"{"abc":{"id":"abc","#),
    ("top-level array", "[]"),
    ("top-level null", "null"),
    ("entry is a number", r#"{"abc":1}"#),
    ("missing title", r#"{"abc":{"id":"abc","author":"A","copies":1}}"#),
    ("missing copies", r#"{"abc":{"id":"abc","title":"T","author":"A"}}"#),
    (
        "negative copies",
        r#"{"abc":{"id":"abc","title":"T","author":"A","copies":-1}}"#,
    ),
    (
        "fractional copies",
        r#"{"abc":{"id":"abc","title":"T","author":"A","copies":1.5}}"#,
    ),
    (
        "copies as string",
        r#"{"abc":{"id":"abc","title":"T","author":"A","copies":"1"}}"#,
    ),
    ("trailing data", r#"{} {}"#),
];

/// Asserts that two catalog documents hold the same JSON value, ignoring
/// whitespace and key order.
#[track_caller]
pub fn assert_same_document(actual: &str, expected: &str) {
    let actual: serde_json::Value = serde_json::from_str(actual).expect("actual is not JSON");
    let expected: serde_json::Value =
        serde_json::from_str(expected).expect("expected is not JSON");
    assert_eq!(actual, expected);
}
