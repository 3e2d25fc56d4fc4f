//! MAC adapter: HMAC with SHA-512.
//!
//! The provider reports HMAC outcomes as a signed status code. Zero is
//! success; [`crate::ProviderStatus::INVALID_ARGUMENT`] and
//! [`crate::ProviderStatus::BUFFER_TOO_SMALL`] become
//! [`CryptoError::InvalidArgument`]; every other code becomes
//! [`CryptoError::ProviderFailure`] carrying the raw value.
//!
//! Any key length is accepted, including zero and keys longer than the
//! SHA-512 block. Only a provider-imposed cap can reject a key.

use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

use crate::error::CryptoError;
use crate::output::HmacSha512Output;
use crate::provider::CryptoProvider;

const OPERATION: &str = "hmac_sha512";

/// Computes HMAC-SHA512 of `message` under `key` into `output`.
///
/// # Errors
///
/// - [`CryptoError::InvalidArgument`] if the provider rejects the key or
///   message.
/// - [`CryptoError::ProviderFailure`] for any other provider fault.
///
/// `output` is left untouched on error.
pub fn hmac_sha512<P: CryptoProvider + ?Sized>(
    provider: &P,
    message: &[u8],
    key: &[u8],
    output: &mut HmacSha512Output,
) -> Result<(), CryptoError> {
    debug!(message_len = message.len(), key_len = key.len(), "computing hmac-sha512");

    let mut scratch = Zeroizing::new([0u8; HmacSha512Output::LEN]);
    let status = provider.hmac_sha512(message, key, &mut scratch);
    if let Err(e) = status.into_result(OPERATION) {
        warn!(%status, "provider reported hmac failure");
        return Err(e);
    }

    *output.as_mut_array() = *scratch;
    Ok(())
}

/// Computes HMAC-SHA512 into a caller-sized buffer.
///
/// Writes exactly 64 bytes at the front of `output` and returns 64.
///
/// # Errors
///
/// [`CryptoError::BufferTooSmall`] if `output` holds fewer than 64 bytes;
/// otherwise as for [`hmac_sha512`].
pub fn hmac_sha512_into<P: CryptoProvider + ?Sized>(
    provider: &P,
    message: &[u8],
    key: &[u8],
    output: &mut [u8],
) -> Result<usize, CryptoError> {
    if output.len() < HmacSha512Output::LEN {
        return Err(CryptoError::BufferTooSmall {
            operation: OPERATION,
            expected: HmacSha512Output::LEN,
            actual: output.len(),
        });
    }

    let mut mac = HmacSha512Output::zeroed();
    hmac_sha512(provider, message, key, &mut mac)?;
    output[..HmacSha512Output::LEN].copy_from_slice(mac.as_bytes());
    mac.zeroize();

    Ok(HmacSha512Output::LEN)
}

/// Recomputes the MAC and compares it with `expected` in constant time.
///
/// A candidate of the wrong length is a mismatch, not an error.
pub fn verify_hmac_sha512<P: CryptoProvider + ?Sized>(
    provider: &P,
    message: &[u8],
    key: &[u8],
    expected: &[u8],
) -> Result<bool, CryptoError> {
    let mut mac = HmacSha512Output::zeroed();
    hmac_sha512(provider, message, key, &mut mac)?;
    let matches = mac.ct_eq(expected);
    mac.zeroize();

    if !matches {
        debug!("hmac-sha512 verification mismatch");
    }
    Ok(matches)
}
