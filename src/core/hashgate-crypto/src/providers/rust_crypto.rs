//! Provider backed by the RustCrypto hash and MAC crates.

use hmac::{Hmac, Mac};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};
use tracing::debug;

use crate::algorithm::DigestAlgorithm;
use crate::config::ProviderConfig;
use crate::provider::CryptoProvider;
use crate::status::ProviderStatus;

type HmacSha512 = Hmac<Sha512>;

/// Default in-process provider.
///
/// Holds only an immutable [`ProviderConfig`], so a single instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct RustCryptoProvider {
    config: ProviderConfig,
}

impl RustCryptoProvider {
    /// Creates a provider with every algorithm enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider restricted by `config`.
    pub fn with_config(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn digest_allowed(&self, algo: DigestAlgorithm) -> bool {
        if self.config.is_enabled(algo) {
            true
        } else {
            debug!(algorithm = %algo, "digest disabled by provider config");
            false
        }
    }
}

impl CryptoProvider for RustCryptoProvider {
    fn sha256(&self, input: &[u8], out: &mut [u8; 32]) -> bool {
        if !self.digest_allowed(DigestAlgorithm::Sha256) {
            return false;
        }
        out.copy_from_slice(&Sha256::digest(input));
        true
    }

    fn sha512(&self, input: &[u8], out: &mut [u8; 64]) -> bool {
        if !self.digest_allowed(DigestAlgorithm::Sha512) {
            return false;
        }
        out.copy_from_slice(&Sha512::digest(input));
        true
    }

    fn ripemd160(&self, input: &[u8], out: &mut [u8; 20]) -> bool {
        if !self.digest_allowed(DigestAlgorithm::Ripemd160) {
            return false;
        }
        out.copy_from_slice(&Ripemd160::digest(input));
        true
    }

    fn hmac_sha512(&self, message: &[u8], key: &[u8], out: &mut [u8; 64]) -> ProviderStatus {
        if !self.config.hmac_enabled {
            debug!("hmac-sha512 disabled by provider config");
            return ProviderStatus::NOT_SUPPORTED;
        }

        if let Some(max) = self.config.max_key_len {
            if key.len() > max {
                debug!(key_len = key.len(), max, "hmac key exceeds provider cap");
                return ProviderStatus::INVALID_ARGUMENT;
            }
        }

        let Ok(mut mac) = HmacSha512::new_from_slice(key) else {
            return ProviderStatus::INVALID_ARGUMENT;
        };
        mac.update(message);
        out.copy_from_slice(&mac.finalize().into_bytes());

        ProviderStatus::SUCCESS
    }
}
