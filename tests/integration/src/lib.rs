//! Integration tests for Hashgate.
//!
//! These tests drive the public API the way an application would: a shared
//! provider, many threads, configuration loaded from disk, and scripted
//! provider failures.

// Allow unwrap() in tests - panics are acceptable for test assertions
#![allow(clippy::disallowed_methods)]

use std::sync::Arc;
use std::thread;

use anyhow::{bail, Result};
use hashgate_crypto::{digest, mac, CryptoProvider, DigestAlgorithm, HmacSha512Output};

// ============================================================================
// Known Vectors
// ============================================================================

/// A known-answer case for one digest algorithm.
pub struct DigestVector {
    pub algorithm: DigestAlgorithm,
    pub input: &'static [u8],
    pub hex: &'static str,
}

pub const DIGEST_VECTORS: &[DigestVector] = &[
    DigestVector {
        algorithm: DigestAlgorithm::Sha256,
        input: b"",
        hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    DigestVector {
        algorithm: DigestAlgorithm::Sha256,
        input: b"abc",
        hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    DigestVector {
        algorithm: DigestAlgorithm::Sha512,
        input: b"",
        hex: "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
              47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    },
    DigestVector {
        algorithm: DigestAlgorithm::Ripemd160,
        input: b"",
        hex: "9c1185a5c5e9fc54612808977ee8f548b2258d31",
    },
    DigestVector {
        algorithm: DigestAlgorithm::Ripemd160,
        input: b"abc",
        hex: "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc",
    },
];

/// RFC 4231 test case 1.
pub const RFC4231_CASE1_KEY: [u8; 20] = [0x0b; 20];
pub const RFC4231_CASE1_MSG: &[u8] = b"Hi There";
pub const RFC4231_CASE1_MAC: &str =
    "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
     daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854";

// ============================================================================
// Helpers
// ============================================================================

/// Checks every known digest vector against `provider`.
pub fn check_digest_vectors<P: CryptoProvider + ?Sized>(provider: &P) -> Result<()> {
    for vector in DIGEST_VECTORS {
        let out = digest::digest(provider, vector.algorithm, vector.input)?;
        if hex::encode(&out) != vector.hex {
            bail!(
                "{} mismatch for {:?}: got {}",
                vector.algorithm,
                vector.input,
                hex::encode(&out)
            );
        }
    }
    Ok(())
}

/// Computes RFC 4231 case 1 and returns the tag as hex.
pub fn rfc4231_case1<P: CryptoProvider + ?Sized>(provider: &P) -> Result<String> {
    let mut out = HmacSha512Output::zeroed();
    mac::hmac_sha512(provider, RFC4231_CASE1_MSG, &RFC4231_CASE1_KEY, &mut out)?;
    Ok(out.to_hex())
}

/// Runs `work` on `threads` threads sharing `provider`, collecting results.
pub fn run_concurrently<P, T, F>(provider: Arc<P>, threads: usize, work: F) -> Vec<T>
where
    P: CryptoProvider + ?Sized + 'static,
    T: Send + 'static,
    F: Fn(&P, usize) -> T + Send + Sync + 'static,
{
    let work = Arc::new(work);
    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let provider = Arc::clone(&provider);
            let work = Arc::clone(&work);
            thread::spawn(move || work(&*provider, i))
        })
        .collect();

    handles
        .into_iter()
        .map(|h| h.join().expect("worker thread panicked"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use hashgate_crypto::providers::mock::MockProvider;
    use hashgate_crypto::{
        CryptoError, ErrorKind, ProviderConfig, ProviderStatus, RustCryptoProvider, Sha256Output,
    };
    use tempfile::NamedTempFile;

    #[test]
    fn test_known_vectors_default_provider() {
        check_digest_vectors(&RustCryptoProvider::new()).unwrap();
        assert_eq!(
            rfc4231_case1(&RustCryptoProvider::new()).unwrap(),
            RFC4231_CASE1_MAC
        );
    }

    #[test]
    fn test_known_vectors_through_dyn_provider() {
        let provider: Arc<dyn CryptoProvider> = Arc::new(RustCryptoProvider::new());
        check_digest_vectors(&*provider).unwrap();
        check_digest_vectors(&provider).unwrap();
    }

    #[test]
    fn test_concurrent_calls_agree() {
        let provider = Arc::new(RustCryptoProvider::new());

        let results = run_concurrently(provider, 8, |p, i| {
            let input = format!("message-{}", i % 2);
            let mut tag = HmacSha512Output::zeroed();
            mac::hmac_sha512(p, input.as_bytes(), b"shared key", &mut tag).unwrap();
            let sha = digest::digest(p, DigestAlgorithm::Sha512, input.as_bytes()).unwrap();
            (i % 2, tag.to_hex(), hex::encode(sha))
        });

        for (parity, tag, sha) in &results {
            let (_, ref_tag, ref_sha) = results.iter().find(|(p, _, _)| p == parity).unwrap();
            assert_eq!(tag, ref_tag);
            assert_eq!(sha, ref_sha);
        }
    }

    #[test]
    fn test_concurrent_failure_isolation() {
        let mock = Arc::new(MockProvider::new());
        mock.fail_digest(DigestAlgorithm::Sha256);

        let results = run_concurrently(Arc::clone(&mock), 6, |p, i| {
            let algo = DigestAlgorithm::ALL[i % 3];
            (algo, digest::digest(p, algo, b"abc"))
        });

        for (algo, result) in results {
            match algo {
                DigestAlgorithm::Sha256 => {
                    assert_eq!(result.unwrap_err().kind(), ErrorKind::ProviderFailure)
                },
                _ => assert_eq!(result.unwrap().len(), algo.output_len()),
            }
        }
        assert_eq!(mock.digest_calls(), 6);
    }

    #[test]
    fn test_hmac_key_lengths_accepted() {
        let provider = RustCryptoProvider::new();
        for key_len in [0usize, 1, 64, 127, 128, 129, 1024] {
            let key = vec![0x5Au8; key_len];
            let mut out = HmacSha512Output::zeroed();
            mac::hmac_sha512(&provider, b"payload", &key, &mut out)
                .unwrap_or_else(|e| panic!("key_len {} rejected: {}", key_len, e));
        }
    }

    #[test]
    fn test_config_file_restricts_provider() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"enabled_digests": ["ripemd160"], "max_key_len": 32}}"#
        )
        .unwrap();

        let config = ProviderConfig::from_file(file.path()).unwrap();
        let provider = RustCryptoProvider::with_config(config);

        let mut out = Sha256Output::from([0x77; 32]);
        let err = digest::sha256(&provider, b"abc", &mut out).unwrap_err();
        assert_eq!(
            err,
            CryptoError::ProviderFailure {
                operation: "sha256",
                status: None,
            }
        );
        assert_eq!(out.as_bytes(), &[0x77; 32]);

        assert!(digest::hash160(&provider, b"abc").is_err());
        assert_eq!(
            digest::digest(&provider, DigestAlgorithm::Ripemd160, b"abc")
                .unwrap()
                .len(),
            20
        );

        let mut tag = HmacSha512Output::zeroed();
        let err = mac::hmac_sha512(&provider, b"m", &[0u8; 33], &mut tag).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(mac::hmac_sha512(&provider, b"m", &[0u8; 32], &mut tag).is_ok());
    }

    #[test]
    fn test_mock_status_codes_map_uniformly() {
        let mock = MockProvider::new();
        let cases = [
            (ProviderStatus::INVALID_ARGUMENT, ErrorKind::InvalidArgument),
            (ProviderStatus::BUFFER_TOO_SMALL, ErrorKind::InvalidArgument),
            (ProviderStatus::NOT_SUPPORTED, ErrorKind::ProviderFailure),
            (ProviderStatus::BAD_STATE, ErrorKind::ProviderFailure),
            (ProviderStatus::HARDWARE_FAILURE, ErrorKind::ProviderFailure),
            (ProviderStatus(-42), ErrorKind::ProviderFailure),
        ];

        for (status, kind) in cases {
            mock.hmac_status(Some(status));
            let err = rfc4231_case1(&mock).unwrap_err();
            let err = err.downcast::<CryptoError>().unwrap();
            assert_eq!(err.kind(), kind, "status {}", status);
        }

        mock.hmac_status(None);
        assert_eq!(rfc4231_case1(&mock).unwrap(), RFC4231_CASE1_MAC);
    }
}
