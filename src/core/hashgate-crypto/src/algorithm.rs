//! Digest algorithm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;
use crate::output::{Ripemd160Output, Sha256Output, Sha512Output};

/// Unkeyed digest algorithms exposed by the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlgorithm {
    /// SHA-256, 32-byte digest.
    Sha256,
    /// SHA-512, 64-byte digest.
    Sha512,
    /// RIPEMD-160, 20-byte digest.
    Ripemd160,
}

impl DigestAlgorithm {
    /// Every supported algorithm.
    pub const ALL: [Self; 3] = [Self::Sha256, Self::Sha512, Self::Ripemd160];

    /// Fixed digest size in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 => Sha256Output::LEN,
            Self::Sha512 => Sha512Output::LEN,
            Self::Ripemd160 => Ripemd160Output::LEN,
        }
    }

    /// Operation name used in errors and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Ripemd160 => "ripemd160",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            "ripemd160" | "ripemd-160" => Ok(Self::Ripemd160),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
