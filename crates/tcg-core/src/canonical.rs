//! # Canonical Serialization: JCS Byte Production
//!
//! `CanonicalBytes` is the sole construction path for bytes that are hashed
//! into a catalogue fingerprint. Its inner field is private; the only
//! constructor applies float rejection and then RFC 8785 (JSON
//! Canonicalization Scheme) serialization via `serde_jcs`: sorted keys,
//! compact separators, deterministic byte sequence.
//!
//! Floats are rejected outright; catalogues carry no numeric amounts.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - No floating-point numbers.
/// - Sorted object keys, compact separators (RFC 8785).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalize a serializable value.
    ///
    /// # Errors
    ///
    /// `FloatRejected` if the value contains a non-integer number;
    /// `SerializationFailed` if serialization fails.
    pub fn new(value: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let tree = serde_json::to_value(value)?;
        if let Some(float) = first_float(&tree) {
            return Err(CanonicalizationError::FloatRejected(float));
        }
        Ok(Self(serde_jcs::to_vec(&tree)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// The first non-integer number in depth-first order, if any.
fn first_float(tree: &Value) -> Option<f64> {
    match tree {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => n.as_f64(),
        Value::Array(items) => items.iter().find_map(first_float),
        Value::Object(map) => map.values().find_map(first_float),
        _ => None,
    }
}
