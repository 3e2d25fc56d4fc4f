//! # Hashgate Crypto
//!
//! A narrow boundary between application code and a cryptographic provider.
//!
//! This crate exposes:
//! - Unkeyed digests: SHA-256, SHA-512, RIPEMD-160
//! - Keyed MAC: HMAC-SHA512
//! - Composed digests: HASH160 and double SHA-256
//!
//! The algorithms themselves live behind [`CryptoProvider`]. Providers report
//! digest outcomes as booleans and HMAC outcomes as PSA-style status codes;
//! every operation here returns `Result<_, CryptoError>` instead.
//!
//! ```
//! use hashgate_crypto::{digest, RustCryptoProvider, Sha256Output};
//!
//! let provider = RustCryptoProvider::new();
//! let mut out = Sha256Output::zeroed();
//! digest::sha256(&provider, b"abc", &mut out)?;
//! assert_eq!(&out.to_hex()[..8], "ba7816bf");
//! # Ok::<(), hashgate_crypto::CryptoError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod algorithm;
pub mod config;
pub mod digest;
pub mod error;
pub mod mac;
pub mod output;
pub mod provider;
pub mod providers;
pub mod status;

pub use algorithm::DigestAlgorithm;
pub use config::ProviderConfig;
pub use error::{CryptoError, ErrorKind};
pub use output::{HmacSha512Output, Ripemd160Output, Sha256Output, Sha512Output};
pub use provider::CryptoProvider;
pub use providers::RustCryptoProvider;
pub use status::ProviderStatus;
