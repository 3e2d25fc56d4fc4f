//! Provider status codes and their normalization.
//!
//! The MAC entry point of a provider returns a signed status code using the
//! PSA Crypto numbering: zero is success, negative values are errors.
//! Digest entry points return a plain boolean. Both conventions are mapped
//! onto [`CryptoError`] here and nowhere else.

use std::fmt;

use crate::error::CryptoError;

/// Raw status code returned by a provider's MAC entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderStatus(pub i32);

impl ProviderStatus {
    /// Operation completed.
    pub const SUCCESS: Self = Self(0);
    /// Unspecified provider error.
    pub const GENERIC_ERROR: Self = Self(-132);
    /// The operation is not permitted by provider policy.
    pub const NOT_PERMITTED: Self = Self(-133);
    /// Algorithm or configuration not supported.
    pub const NOT_SUPPORTED: Self = Self(-134);
    /// An argument was rejected.
    pub const INVALID_ARGUMENT: Self = Self(-135);
    /// The provider is not initialized.
    pub const BAD_STATE: Self = Self(-137);
    /// The output buffer was too small.
    pub const BUFFER_TOO_SMALL: Self = Self(-138);
    /// Out of memory.
    pub const INSUFFICIENT_MEMORY: Self = Self(-141);
    /// Lost contact with a separate crypto processor.
    pub const COMMUNICATION_FAILURE: Self = Self(-145);
    /// Hardware fault.
    pub const HARDWARE_FAILURE: Self = Self(-147);
    /// Tampering or internal corruption detected.
    pub const CORRUPTION_DETECTED: Self = Self(-151);

    /// Returns `true` for the success code.
    #[inline]
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    /// Returns `true` for codes that blame the caller's arguments.
    pub fn is_invalid_argument(self) -> bool {
        matches!(self, Self::INVALID_ARGUMENT | Self::BUFFER_TOO_SMALL)
    }

    /// Symbolic name of known codes.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::SUCCESS => "success",
            Self::GENERIC_ERROR => "generic error",
            Self::NOT_PERMITTED => "not permitted",
            Self::NOT_SUPPORTED => "not supported",
            Self::INVALID_ARGUMENT => "invalid argument",
            Self::BAD_STATE => "bad state",
            Self::BUFFER_TOO_SMALL => "buffer too small",
            Self::INSUFFICIENT_MEMORY => "insufficient memory",
            Self::COMMUNICATION_FAILURE => "communication failure",
            Self::HARDWARE_FAILURE => "hardware failure",
            Self::CORRUPTION_DETECTED => "corruption detected",
            _ => return None,
        };
        Some(name)
    }

    /// Maps the status onto the uniform result.
    pub fn into_result(self, operation: &'static str) -> Result<(), CryptoError> {
        if self.is_success() {
            Ok(())
        } else if self.is_invalid_argument() {
            Err(CryptoError::InvalidArgument {
                operation,
                reason: self.to_string(),
            })
        } else {
            Err(CryptoError::ProviderFailure {
                operation,
                status: Some(self.0),
            })
        }
    }
}

impl fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "status {}", self.0),
        }
    }
}

impl From<i32> for ProviderStatus {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

/// Maps a boolean provider outcome onto the uniform result.
///
/// A boolean carries no detail, so `false` is always a provider failure.
#[inline]
pub fn check_flag(ok: bool, operation: &'static str) -> Result<(), CryptoError> {
    if ok {
        Ok(())
    } else {
        Err(CryptoError::ProviderFailure {
            operation,
            status: None,
        })
    }
}
