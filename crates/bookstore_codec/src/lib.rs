//! # Bookstore Codec
//!
//! Deterministic JSON encoding/decoding for the bookstore catalog.
//!
//! Encoding is deterministic as long as the value being encoded has a
//! deterministic iteration order: use ordered maps (`BTreeMap`) for keyed
//! collections. Struct fields are written in declaration order.
//!
//! ## Document Rules
//!
//! - Output is UTF-8 JSON followed by a single trailing newline
//! - Compact output by default, two-space indentation with [`to_pretty_json`]
//! - Malformed input is a [`CodecError::DecodingFailed`]
//! - Well-formed input of the wrong shape is a [`CodecError::InvalidStructure`]
//!
//! ## Usage
//!
//! ```
//! use bookstore_codec::{from_json, to_canonical_json};
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! map.insert("b".to_string(), 2u64);
//! map.insert("a".to_string(), 1u64);
//!
//! let bytes = to_canonical_json(&map).unwrap();
//! assert_eq!(bytes, b"{\"a\":1,\"b\":2}\n");
//!
//! let decoded: BTreeMap<String, u64> = from_json(&bytes).unwrap();
//! assert_eq!(decoded, map);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;

pub use error::{CodecError, CodecResult};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes `value` as compact JSON.
///
/// # Errors
///
/// Returns [`CodecError::EncodingFailed`] if the value cannot be represented
/// as JSON (for example a map with non-string keys).
pub fn to_canonical_json<T: Serialize + ?Sized>(value: &T) -> CodecResult<Vec<u8>> {
    let mut bytes =
        serde_json::to_vec(value).map_err(|e| CodecError::encoding_failed(e.to_string()))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Encodes `value` as indented JSON.
///
/// # Errors
///
/// Returns [`CodecError::EncodingFailed`] if the value cannot be represented
/// as JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> CodecResult<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| CodecError::encoding_failed(e.to_string()))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decodes a JSON document.
///
/// Surrounding whitespace is accepted; trailing data after the document is
/// not.
///
/// # Errors
///
/// Returns [`CodecError::DecodingFailed`] for malformed or truncated input
/// and [`CodecError::InvalidStructure`] when the document does not match `T`.
pub fn from_json<T: DeserializeOwned>(bytes: &[u8]) -> CodecResult<T> {
    Ok(serde_json::from_slice(bytes)?)
}
