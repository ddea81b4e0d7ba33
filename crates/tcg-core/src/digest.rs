//! # Content Digest
//!
//! `ContentDigest` identifies a catalogue version. It can only be computed
//! from `CanonicalBytes`, which the signature of [`sha256_digest()`]
//! enforces.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// The hash algorithm used to produce a content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestAlgorithm {
    /// SHA-256.
    Sha256,
}

impl DigestAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content digest with its algorithm tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    pub algorithm: DigestAlgorithm,
    pub bytes: [u8; 32],
}

impl ContentDigest {
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 32]) -> Self {
        Self { algorithm, bytes }
    }

    /// Lowercase hex, without the algorithm prefix.
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(self.bytes.len() * 2);
        for byte in self.bytes {
            // Writing to a String cannot fail.
            let _ = write!(hex, "{byte:02x}");
        }
        hex
    }

    /// Compare against a hex string, ignoring ASCII case and an optional
    /// `sha256:` prefix.
    pub fn matches_hex(&self, candidate: &str) -> bool {
        let bare = candidate
            .split_once(':')
            .filter(|(algorithm, _)| *algorithm == self.algorithm.as_str())
            .map_or(candidate, |(_, hex)| hex);
        bare.eq_ignore_ascii_case(&self.to_hex())
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

/// SHA-256 over canonical bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    ContentDigest::new(DigestAlgorithm::Sha256, Sha256::digest(data.as_bytes()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn digest_of(value: serde_json::Value) -> ContentDigest {
        sha256_digest(&CanonicalBytes::new(&value).unwrap())
    }

    #[test]
    fn test_empty_object_vector() {
        assert_eq!(
            digest_of(json!({})).to_hex(),
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn test_mapping_change_changes_digest() {
        let before = digest_of(json!({"resells": {"yes": ["reseller"], "no": []}}));
        let after = digest_of(json!({"resells": {"yes": ["reseller", "carriage-service-provider"], "no": []}}));
        assert_ne!(before, after);
    }

    #[test]
    fn test_key_order_does_not_change_digest() {
        let a = digest_of(json!({"id": "offshore", "step": 2}));
        let b = digest_of(json!({"step": 2, "id": "offshore"}));
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_is_prefixed_hex() {
        let shown = digest_of(json!({"id": "offshore"})).to_string();
        let (algorithm, hex) = shown.split_once(':').unwrap();
        assert_eq!(algorithm, "sha256");
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_matches_hex_forms() {
        let digest = digest_of(json!({"id": "equipment"}));
        let hex = digest.to_hex();
        assert!(digest.matches_hex(&hex));
        assert!(digest.matches_hex(&hex.to_uppercase()));
        assert!(digest.matches_hex(&format!("sha256:{hex}")));
        assert!(!digest.matches_hex(&format!("md5:{hex}")));
        assert!(!digest.matches_hex(&hex[..63]));
        assert!(!digest.matches_hex(""));
    }
}
