// Path: crates/types/src/app/identity.rs

//! Defines the exact-length byte newtypes used for on-chain identities, the
//! network-binding genesis hash, and signatures.
//!
//! Identity fields are copied into signable payloads verbatim, without the padding
//! the integer codec applies. A wrong-length identity would silently shift every
//! field after it, so the only way to obtain one of these values is through a
//! constructor that checks the length.

use crate::error::CodecError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The length in bytes of an account identity.
pub const ACCOUNT_ID_LEN: usize = 32;
/// The length in bytes of a genesis hash.
pub const GENESIS_HASH_LEN: usize = 32;
/// The length in bytes of a signature.
pub const SIGNATURE_LEN: usize = 64;

/// A byte string of exactly `N` bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedBytes<const N: usize>([u8; N]);

/// A 32-byte public-key-derived account identity (referee, worker or employer).
pub type AccountId = FixedBytes<ACCOUNT_ID_LEN>;
/// The 32-byte genesis hash that binds a payload to a single network.
pub type GenesisHash = FixedBytes<GENESIS_HASH_LEN>;
/// A 64-byte signature.
pub type SignatureBytes = FixedBytes<SIGNATURE_LEN>;

impl<const N: usize> FixedBytes<N> {
    /// Wraps an array that already has the right length.
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Copies `bytes` into a new value, failing if the length is not exactly `N`.
    ///
    /// `field` names the field in the resulting error.
    pub fn from_slice(field: &'static str, bytes: &[u8]) -> Result<Self, CodecError> {
        <[u8; N]>::try_from(bytes)
            .map(Self)
            .map_err(|_| CodecError::FieldLengthMismatch {
                field,
                expected: N,
                got: bytes.len(),
            })
    }

    /// Decodes a hex string, with or without a `0x` prefix.
    pub fn from_hex(field: &'static str, s: &str) -> Result<Self, CodecError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
        Self::from_slice(field, &bytes)
    }

    /// Returns the underlying array.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Returns the bytes as lowercase hex with a `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> fmt::Debug for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBytes<{}>({})", N, hex::encode(self.0))
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> Serialize for FixedBytes<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedBytes<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let digits = s.strip_prefix("0x").unwrap_or(&s);
        let bytes = hex::decode(digits).map_err(serde::de::Error::custom)?;
        <[u8; N]>::try_from(bytes.as_slice())
            .map(Self)
            .map_err(|_| {
                serde::de::Error::custom(format!("expected {N} bytes, got {}", bytes.len()))
            })
    }
}
