//! Provider implementations.

mod rust_crypto;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use rust_crypto::RustCryptoProvider;
