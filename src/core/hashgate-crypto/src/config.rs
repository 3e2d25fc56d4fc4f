//! Provider configuration.
//!
//! Controls which algorithms the built-in provider will serve and whether it
//! enforces a hard cap on HMAC key length. Loaded from JSON, e.g.
//!
//! ```json
//! { "enabled_digests": ["sha256", "ripemd160"], "hmac_enabled": true, "max_key_len": 1024 }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithm::DigestAlgorithm;
use crate::error::CryptoError;

/// Runtime configuration for [`crate::RustCryptoProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// Digest algorithms the provider will compute (default: all).
    pub enabled_digests: Vec<DigestAlgorithm>,
    /// Whether HMAC-SHA512 is available (default: true).
    pub hmac_enabled: bool,
    /// Upper bound on HMAC key length in bytes (default: none).
    pub max_key_len: Option<usize>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderConfig {
    /// Creates a configuration with every algorithm enabled and no key cap.
    pub fn new() -> Self {
        Self {
            enabled_digests: DigestAlgorithm::ALL.to_vec(),
            hmac_enabled: true,
            max_key_len: None,
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, CryptoError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CryptoError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CryptoError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CryptoError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Rejects duplicate digest entries.
    pub fn validate(&self) -> Result<(), CryptoError> {
        let mut seen = HashSet::new();
        for algo in &self.enabled_digests {
            if !seen.insert(*algo) {
                return Err(CryptoError::InvalidConfig(format!(
                    "digest '{}' listed more than once",
                    algo
                )));
            }
        }
        Ok(())
    }

    /// Whether `algo` is enabled.
    pub fn is_enabled(&self, algo: DigestAlgorithm) -> bool {
        self.enabled_digests.contains(&algo)
    }
}
