//! The cryptographic provider seam.
//!
//! A provider implements the actual algorithms. Its entry points keep the
//! provider's native conventions (booleans for digests, a status code for
//! HMAC); the adapters in [`crate::digest`] and [`crate::mac`] normalize
//! them. Implementations must be safe to call from several threads at once.

use std::sync::Arc;

use crate::status::ProviderStatus;

/// External implementation of the hash and MAC algorithms.
pub trait CryptoProvider: Send + Sync {
    /// Writes SHA-256 of `input` into `out`. Returns `false` on failure.
    fn sha256(&self, input: &[u8], out: &mut [u8; 32]) -> bool;

    /// Writes SHA-512 of `input` into `out`. Returns `false` on failure.
    fn sha512(&self, input: &[u8], out: &mut [u8; 64]) -> bool;

    /// Writes RIPEMD-160 of `input` into `out`. Returns `false` on failure.
    fn ripemd160(&self, input: &[u8], out: &mut [u8; 20]) -> bool;

    /// Writes HMAC-SHA512 of `message` under `key` into `out`.
    fn hmac_sha512(&self, message: &[u8], key: &[u8], out: &mut [u8; 64]) -> ProviderStatus;
}

impl<P: CryptoProvider + ?Sized> CryptoProvider for &P {
    fn sha256(&self, input: &[u8], out: &mut [u8; 32]) -> bool {
        (**self).sha256(input, out)
    }

    fn sha512(&self, input: &[u8], out: &mut [u8; 64]) -> bool {
        (**self).sha512(input, out)
    }

    fn ripemd160(&self, input: &[u8], out: &mut [u8; 20]) -> bool {
        (**self).ripemd160(input, out)
    }

    fn hmac_sha512(&self, message: &[u8], key: &[u8], out: &mut [u8; 64]) -> ProviderStatus {
        (**self).hmac_sha512(message, key, out)
    }
}

impl<P: CryptoProvider + ?Sized> CryptoProvider for Box<P> {
    fn sha256(&self, input: &[u8], out: &mut [u8; 32]) -> bool {
        (**self).sha256(input, out)
    }

    fn sha512(&self, input: &[u8], out: &mut [u8; 64]) -> bool {
        (**self).sha512(input, out)
    }

    fn ripemd160(&self, input: &[u8], out: &mut [u8; 20]) -> bool {
        (**self).ripemd160(input, out)
    }

    fn hmac_sha512(&self, message: &[u8], key: &[u8], out: &mut [u8; 64]) -> ProviderStatus {
        (**self).hmac_sha512(message, key, out)
    }
}

impl<P: CryptoProvider + ?Sized> CryptoProvider for Arc<P> {
    fn sha256(&self, input: &[u8], out: &mut [u8; 32]) -> bool {
        (**self).sha256(input, out)
    }

    fn sha512(&self, input: &[u8], out: &mut [u8; 64]) -> bool {
        (**self).sha512(input, out)
    }

    fn ripemd160(&self, input: &[u8], out: &mut [u8; 20]) -> bool {
        (**self).ripemd160(input, out)
    }

    fn hmac_sha512(&self, message: &[u8], key: &[u8], out: &mut [u8; 64]) -> ProviderStatus {
        (**self).hmac_sha512(message, key, out)
    }
}
