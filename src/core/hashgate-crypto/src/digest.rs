//! Digest adapter.
//!
//! Forwards SHA-256, SHA-512 and RIPEMD-160 requests to a
//! [`CryptoProvider`] and folds its boolean outcome into
//! `Result<(), CryptoError>`.
//!
//! The provider writes into a scratch buffer; the caller's buffer is only
//! written once the provider has reported success. A failed call therefore
//! leaves the caller's buffer exactly as it was.

use tracing::{debug, warn};

use crate::algorithm::DigestAlgorithm;
use crate::error::CryptoError;
use crate::output::{Ripemd160Output, Sha256Output, Sha512Output};
use crate::provider::CryptoProvider;
use crate::status::check_flag;

fn run<const N: usize>(
    algo: DigestAlgorithm,
    input_len: usize,
    output: &mut [u8; N],
    call: impl FnOnce(&mut [u8; N]) -> bool,
) -> Result<(), CryptoError> {
    debug!(algorithm = %algo, input_len, "computing digest");

    let mut scratch = [0u8; N];
    let ok = call(&mut scratch);
    if let Err(e) = check_flag(ok, algo.name()) {
        warn!(algorithm = %algo, "provider reported digest failure");
        return Err(e);
    }

    *output = scratch;
    Ok(())
}

/// Computes SHA-256 of `input` into `output`.
///
/// # Errors
///
/// [`CryptoError::ProviderFailure`] if the provider cannot complete the
/// request. `output` is left untouched in that case.
pub fn sha256<P: CryptoProvider + ?Sized>(
    provider: &P,
    input: &[u8],
    output: &mut Sha256Output,
) -> Result<(), CryptoError> {
    run(DigestAlgorithm::Sha256, input.len(), output.as_mut_array(), |out| {
        provider.sha256(input, out)
    })
}

/// Computes SHA-512 of `input` into `output`.
///
/// # Errors
///
/// [`CryptoError::ProviderFailure`] if the provider cannot complete the
/// request. `output` is left untouched in that case.
pub fn sha512<P: CryptoProvider + ?Sized>(
    provider: &P,
    input: &[u8],
    output: &mut Sha512Output,
) -> Result<(), CryptoError> {
    run(DigestAlgorithm::Sha512, input.len(), output.as_mut_array(), |out| {
        provider.sha512(input, out)
    })
}

/// Computes RIPEMD-160 of `input` into `output`.
///
/// # Errors
///
/// [`CryptoError::ProviderFailure`] if the provider cannot complete the
/// request. `output` is left untouched in that case.
pub fn ripemd160<P: CryptoProvider + ?Sized>(
    provider: &P,
    input: &[u8],
    output: &mut Ripemd160Output,
) -> Result<(), CryptoError> {
    run(DigestAlgorithm::Ripemd160, input.len(), output.as_mut_array(), |out| {
        provider.ripemd160(input, out)
    })
}

/// Computes the digest selected by `algo` into a caller-sized buffer.
///
/// `output` must hold at least `algo.output_len()` bytes. Exactly that many
/// bytes are written at the front of `output`; the rest is not touched.
///
/// # Returns
///
/// The number of bytes written.
///
/// # Errors
///
/// [`CryptoError::BufferTooSmall`] before the provider is called if
/// `output` is undersized; otherwise as for the typed functions.
pub fn digest_into<P: CryptoProvider + ?Sized>(
    provider: &P,
    algo: DigestAlgorithm,
    input: &[u8],
    output: &mut [u8],
) -> Result<usize, CryptoError> {
    let len = algo.output_len();
    if output.len() < len {
        return Err(CryptoError::BufferTooSmall {
            operation: algo.name(),
            expected: len,
            actual: output.len(),
        });
    }

    let dst = &mut output[..len];
    match algo {
        DigestAlgorithm::Sha256 => {
            let mut out = Sha256Output::zeroed();
            sha256(provider, input, &mut out)?;
            dst.copy_from_slice(out.as_bytes());
        },
        DigestAlgorithm::Sha512 => {
            let mut out = Sha512Output::zeroed();
            sha512(provider, input, &mut out)?;
            dst.copy_from_slice(out.as_bytes());
        },
        DigestAlgorithm::Ripemd160 => {
            let mut out = Ripemd160Output::zeroed();
            ripemd160(provider, input, &mut out)?;
            dst.copy_from_slice(out.as_bytes());
        },
    }

    Ok(len)
}

/// Computes the digest selected by `algo` and returns it as a vector of
/// exactly `algo.output_len()` bytes.
pub fn digest<P: CryptoProvider + ?Sized>(
    provider: &P,
    algo: DigestAlgorithm,
    input: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let mut out = vec![0u8; algo.output_len()];
    digest_into(provider, algo, input, &mut out)?;
    Ok(out)
}

/// RIPEMD-160 of SHA-256 of `input` (Bitcoin's HASH160).
///
/// Used for BIP32 key fingerprints and address payloads.
pub fn hash160<P: CryptoProvider + ?Sized>(
    provider: &P,
    input: &[u8],
) -> Result<Ripemd160Output, CryptoError> {
    let mut inner = Sha256Output::zeroed();
    sha256(provider, input, &mut inner)?;

    let mut out = Ripemd160Output::zeroed();
    ripemd160(provider, inner.as_bytes(), &mut out)?;
    Ok(out)
}

/// SHA-256 applied twice, as used for Base58Check checksums.
pub fn sha256d<P: CryptoProvider + ?Sized>(
    provider: &P,
    input: &[u8],
) -> Result<Sha256Output, CryptoError> {
    let mut first = Sha256Output::zeroed();
    sha256(provider, input, &mut first)?;

    let mut out = Sha256Output::zeroed();
    sha256(provider, first.as_bytes(), &mut out)?;
    Ok(out)
}
