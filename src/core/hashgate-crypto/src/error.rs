//! Cryptographic error types.
//!
//! Provider outcomes arrive in two shapes (a boolean for the digests, a
//! signed status code for HMAC). Both are folded into [`CryptoError`] so
//! callers only ever see `Ok(())` or one of the variants below.

use thiserror::Error;

/// Uniform failure classification shared by every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The provider could not complete the operation.
    ProviderFailure,
    /// An argument was rejected (bad length, undersized buffer).
    InvalidArgument,
}

/// Errors that can occur during digest and MAC operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The provider reported a failure.
    ///
    /// `status` is the raw provider status code when one exists; boolean
    /// providers carry `None`.
    #[error("{operation} failed in provider{}", status_suffix(.status))]
    ProviderFailure {
        /// Operation name (e.g. `sha256`).
        operation: &'static str,
        /// Raw provider status, if the provider reports one.
        status: Option<i32>,
    },

    /// The provider rejected an argument.
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        /// Operation name.
        operation: &'static str,
        /// Human readable reason.
        reason: String,
    },

    /// A caller-supplied output buffer cannot hold the result.
    #[error("{operation} output buffer too small: expected at least {expected} bytes, got {actual}")]
    BufferTooSmall {
        /// Operation name.
        operation: &'static str,
        /// Required capacity.
        expected: usize,
        /// Capacity actually supplied.
        actual: usize,
    },

    /// Unknown algorithm name.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Provider configuration could not be loaded or is inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl CryptoError {
    /// Classifies the error into one of the two failure kinds.
    ///
    /// Buffer and parsing errors are argument errors; only provider
    /// faults map to [`ErrorKind::ProviderFailure`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ProviderFailure { .. } => ErrorKind::ProviderFailure,
            Self::InvalidArgument { .. }
            | Self::BufferTooSmall { .. }
            | Self::UnsupportedAlgorithm(_)
            | Self::InvalidConfig(_) => ErrorKind::InvalidArgument,
        }
    }
}

fn status_suffix(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" (status {})", code),
        None => String::new(),
    }
}
