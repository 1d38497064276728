//! Canonical config hashing.
//!
//! The hash stamps generated artifacts so a table can be traced back to the
//! exact config that produced it.

use crate::config::PrebakeConfig;
use crate::error::ConfigError;

/// Computes the canonical BLAKE3 hash of a config.
///
/// The hash is computed as:
/// ```text
/// config_hash = hex(BLAKE3(canonical_json(config)))
/// ```
///
/// `serde_json` objects are ordered maps, so serializing through
/// [`serde_json::Value`] yields lexicographically sorted keys with no
/// whitespace.
///
/// # Example
/// ```
/// use azbake_spec::{PrebakeConfig, canonical_config_hash};
///
/// let hash = canonical_config_hash(&PrebakeConfig::default()).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_config_hash(config: &PrebakeConfig) -> Result<String, ConfigError> {
    let value = serde_json::to_value(config)?;
    let canonical = serde_json::to_string(&value)?;
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        let a = canonical_config_hash(&PrebakeConfig::default()).unwrap();
        let b = canonical_config_hash(&PrebakeConfig::default()).unwrap();
        assert_eq!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_tracks_seed() {
        let a = canonical_config_hash(&PrebakeConfig::builder().seed(1).build()).unwrap();
        let b = canonical_config_hash(&PrebakeConfig::builder().seed(2).build()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_ignores_json_key_order() {
        let a = PrebakeConfig::from_json(r#"{"seed": 5, "bucket_count": 8}"#).unwrap();
        let b = PrebakeConfig::from_json(r#"{"bucket_count": 8, "seed": 5}"#).unwrap();
        assert_eq!(
            canonical_config_hash(&a).unwrap(),
            canonical_config_hash(&b).unwrap()
        );
    }
}
