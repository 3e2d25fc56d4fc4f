//! Fixed-size output buffers, one type per algorithm.
//!
//! Each type wraps an array of exactly the algorithm's output size, so a
//! SHA-256 call cannot be handed a RIPEMD-160 buffer and no typed call can
//! receive an undersized one.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

macro_rules! fixed_output {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Output size in bytes.
            pub const LEN: usize = $len;

            /// Returns an all-zero buffer ready to be filled.
            pub const fn zeroed() -> Self {
                Self([0u8; $len])
            }

            /// Returns the output bytes.
            #[inline]
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Mutable access for the adapters.
            #[inline]
            pub(crate) fn as_mut_array(&mut self) -> &mut [u8; $len] {
                &mut self.0
            }

            /// Consumes the buffer, returning the array.
            #[inline]
            pub fn into_array(self) -> [u8; $len] {
                self.0
            }

            /// Lowercase hexadecimal encoding.
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zeroed()
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }
    };
}

fixed_output!(
    /// SHA-256 digest.
    Sha256Output,
    32
);

fixed_output!(
    /// SHA-512 digest.
    Sha512Output,
    64
);

fixed_output!(
    /// RIPEMD-160 digest.
    Ripemd160Output,
    20
);

/// HMAC-SHA512 tag.
///
/// Equality against untrusted input should go through [`HmacSha512Output::ct_eq`].
#[derive(Clone)]
pub struct HmacSha512Output([u8; 64]);

impl HmacSha512Output {
    /// Output size in bytes.
    pub const LEN: usize = 64;

    /// Returns an all-zero buffer ready to be filled.
    pub const fn zeroed() -> Self {
        Self([0u8; 64])
    }

    /// Returns the MAC bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    #[inline]
    pub(crate) fn as_mut_array(&mut self) -> &mut [u8; 64] {
        &mut self.0
    }

    /// Lowercase hexadecimal encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Constant-time comparison against a candidate tag of any length.
    pub fn ct_eq(&self, other: &[u8]) -> bool {
        other.len() == Self::LEN && bool::from(self.0.as_slice().ct_eq(other))
    }
}

impl Default for HmacSha512Output {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<[u8; 64]> for HmacSha512Output {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for HmacSha512Output {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for HmacSha512Output {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(&other.0)
    }
}

impl Eq for HmacSha512Output {}

impl Zeroize for HmacSha512Output {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for HmacSha512Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacSha512Output({})", self.to_hex())
    }
}
