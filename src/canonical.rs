//! Canonical serialization for stable fingerprints.
//!
//! Fingerprints identify a piece of configuration (such as the deployed rule
//! table) across processes and restarts.
//!
//! ## Determinism Guarantees
//!
//! - Struct fields serialize in declaration order
//! - Vectors and arrays serialize in index order
//! - No HashMap in fingerprinted data

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Serialize a value to canonical JSON bytes.
///
/// Values that cannot be represented as JSON yield an empty byte string.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).unwrap_or_default()
}

/// xxHash64 of the canonical bytes of `value`.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&to_canonical_bytes(value), 0)
}

/// [`canonical_hash`] as 16 lowercase hex characters.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        label: &'static str,
        patterns: Vec<&'static str>,
    }

    #[test]
    fn test_determinism() {
        let s = Sample { label: "Role", patterns: vec!["act as"] };
        assert_eq!(canonical_hash(&s), canonical_hash(&s));
    }

    #[test]
    fn test_order_sensitive() {
        let a = Sample { label: "Role", patterns: vec!["act as", "role:"] };
        let b = Sample { label: "Role", patterns: vec!["role:", "act as"] };
        assert_ne!(canonical_hash_hex(&a), canonical_hash_hex(&b));
    }
}
