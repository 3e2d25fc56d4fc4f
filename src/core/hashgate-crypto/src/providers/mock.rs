//! Scriptable provider for tests.
//!
//! Wraps a real provider and lets a test force failures, return canned
//! outputs, and count calls per entry point, without touching the backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::algorithm::DigestAlgorithm;
use crate::provider::CryptoProvider;
use crate::providers::RustCryptoProvider;
use crate::status::ProviderStatus;

/// Byte pattern a failing provider scribbles into the output before
/// reporting failure.
pub const GARBAGE_BYTE: u8 = 0xEE;

#[derive(Debug, Default)]
struct Script {
    failing: Vec<DigestAlgorithm>,
    canned: HashMap<DigestAlgorithm, Vec<u8>>,
    hmac_status: Option<ProviderStatus>,
    canned_mac: Option<[u8; 64]>,
}

/// Test double for [`CryptoProvider`].
///
/// Without any scripting it behaves exactly like [`RustCryptoProvider`].
#[derive(Debug, Default)]
pub struct MockProvider {
    inner: RustCryptoProvider,
    script: Mutex<Script>,
    digest_calls: AtomicUsize,
    hmac_calls: AtomicUsize,
}

impl MockProvider {
    /// Creates a pass-through mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call for `algo` report failure.
    pub fn fail_digest(&self, algo: DigestAlgorithm) {
        let mut script = self.script();
        if !script.failing.contains(&algo) {
            script.failing.push(algo);
        }
    }

    /// Makes calls for `algo` succeed again.
    pub fn restore_digest(&self, algo: DigestAlgorithm) {
        self.script().failing.retain(|a| *a != algo);
    }

    /// Returns `bytes` for every successful call to `algo`.
    ///
    /// `bytes` is truncated or zero-padded to the algorithm's size.
    pub fn canned_digest(&self, algo: DigestAlgorithm, bytes: &[u8]) {
        let mut canned = vec![0u8; algo.output_len()];
        let n = bytes.len().min(canned.len());
        canned[..n].copy_from_slice(&bytes[..n]);
        self.script().canned.insert(algo, canned);
    }

    /// Forces the HMAC entry point to return `status`. `None` restores
    /// normal behavior.
    pub fn hmac_status(&self, status: Option<ProviderStatus>) {
        self.script().hmac_status = status;
    }

    /// Returns `mac` for every successful HMAC call.
    pub fn canned_mac(&self, mac: [u8; 64]) {
        self.script().canned_mac = Some(mac);
    }

    /// Number of digest entry point invocations so far.
    pub fn digest_calls(&self) -> usize {
        self.digest_calls.load(Ordering::SeqCst)
    }

    /// Number of HMAC entry point invocations so far.
    pub fn hmac_calls(&self) -> usize {
        self.hmac_calls.load(Ordering::SeqCst)
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        // A panicking test thread must not wedge the others.
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn run_digest<const N: usize>(
        &self,
        algo: DigestAlgorithm,
        out: &mut [u8; N],
        real: impl FnOnce(&mut [u8; N]) -> bool,
    ) -> bool {
        self.digest_calls.fetch_add(1, Ordering::SeqCst);
        let script = self.script();
        if script.failing.contains(&algo) {
            out.fill(GARBAGE_BYTE);
            return false;
        }
        if let Some(canned) = script.canned.get(&algo) {
            out.copy_from_slice(canned);
            return true;
        }
        drop(script);
        real(out)
    }
}

impl CryptoProvider for MockProvider {
    fn sha256(&self, input: &[u8], out: &mut [u8; 32]) -> bool {
        self.run_digest(DigestAlgorithm::Sha256, out, |o| self.inner.sha256(input, o))
    }

    fn sha512(&self, input: &[u8], out: &mut [u8; 64]) -> bool {
        self.run_digest(DigestAlgorithm::Sha512, out, |o| self.inner.sha512(input, o))
    }

    fn ripemd160(&self, input: &[u8], out: &mut [u8; 20]) -> bool {
        self.run_digest(DigestAlgorithm::Ripemd160, out, |o| {
            self.inner.ripemd160(input, o)
        })
    }

    fn hmac_sha512(&self, message: &[u8], key: &[u8], out: &mut [u8; 64]) -> ProviderStatus {
        self.hmac_calls.fetch_add(1, Ordering::SeqCst);
        let (forced, canned) = {
            let script = self.script();
            (script.hmac_status, script.canned_mac)
        };
        match (forced, canned) {
            (Some(status), _) if !status.is_success() => {
                out.fill(GARBAGE_BYTE);
                status
            },
            (_, Some(mac)) => {
                out.copy_from_slice(&mac);
                ProviderStatus::SUCCESS
            },
            _ => self.inner.hmac_sha512(message, key, out),
        }
    }
}
