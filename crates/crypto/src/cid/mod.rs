// Path: crates/crypto/src/cid/mod.rs
//! The CIDv1 content identifier codec.
//!
//! Letter text lives in an external content store and is referenced on-chain by the
//! raw SHA-256 digest inside its content identifier. This module converts between
//! the two. Every identifier this protocol produces or accepts shares the same
//! 4-byte binary prefix, `[version, codec, hash code, digest length]`. Anything else
//! is rejected rather than coerced, so that `build_identifier(extract_digest(x)) == x`
//! holds for every accepted `x`.

use crate::algorithms::hash::sha256;
use crate::error::{CidError, CryptoError};
use ::cid::Cid;
use std::fmt;
use std::str::FromStr;

/// The only CID version this protocol accepts.
pub const CID_VERSION: u64 = 1;
/// The multicodec code for dag-cbor content.
pub const DAG_CBOR_CODEC: u64 = 0x71;
/// The multihash code for SHA-256.
pub const SHA2_256_CODE: u64 = 0x12;
/// The length of a SHA-256 digest.
pub const SHA2_256_DIGEST_LEN: usize = 32;
/// The binary prefix shared by every identifier: version, codec, hash code and
/// digest length, each a single-byte varint.
pub const CID_PREFIX: [u8; 4] = [
    CID_VERSION as u8,
    DAG_CBOR_CODEC as u8,
    SHA2_256_CODE as u8,
    SHA2_256_DIGEST_LEN as u8,
];

/// Parses a content identifier string and returns the raw SHA-256 digest inside it.
pub fn extract_digest(identifier: &str) -> Result<[u8; SHA2_256_DIGEST_LEN], CidError> {
    let cid = Cid::try_from(identifier)
        .map_err(|e| CidError::MalformedIdentifier(format!("{identifier:?}: {e}")))?;

    let version = u64::from(cid.version());
    if version != CID_VERSION {
        return Err(CidError::UnsupportedVersion(version));
    }
    let multihash = cid.hash();
    if multihash.code() != SHA2_256_CODE {
        return Err(CidError::UnsupportedHashFunction(multihash.code()));
    }
    if cid.codec() != DAG_CBOR_CODEC {
        return Err(CidError::UnsupportedCodec(cid.codec()));
    }
    let raw = multihash.digest();
    let digest: [u8; SHA2_256_DIGEST_LEN] =
        raw.try_into().map_err(|_| CidError::InvalidDigestLength {
            expected: SHA2_256_DIGEST_LEN,
            got: raw.len(),
        })?;
    // Other multibase encodings of the same bytes parse fine but would not rebuild
    // to the same string.
    if cid.to_string() != identifier {
        return Err(CidError::NonCanonicalIdentifier(identifier.to_string()));
    }
    Ok(digest)
}

/// Builds the canonical content identifier string for a raw SHA-256 digest.
pub fn build_identifier(digest: &[u8]) -> Result<String, CidError> {
    if digest.len() != SHA2_256_DIGEST_LEN {
        return Err(CidError::InvalidDigestLength {
            expected: SHA2_256_DIGEST_LEN,
            got: digest.len(),
        });
    }
    let mut bytes = Vec::with_capacity(CID_PREFIX.len() + SHA2_256_DIGEST_LEN);
    bytes.extend_from_slice(&CID_PREFIX);
    bytes.extend_from_slice(digest);
    let cid = Cid::try_from(bytes.as_slice())
        .map_err(|e| CidError::MalformedIdentifier(e.to_string()))?;
    Ok(cid.to_string())
}

/// Hashes `content` with SHA-256 and builds its content identifier.
pub fn identifier_for_content(content: &[u8]) -> Result<String, CryptoError> {
    let digest = sha256(content)?;
    Ok(build_identifier(&digest)?)
}

/// A parsed content identifier, holding only the raw digest.
///
/// The version, codec and hash function are implied by the protocol's fixed profile.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentIdentifier([u8; SHA2_256_DIGEST_LEN]);

impl ContentIdentifier {
    /// Wraps a raw SHA-256 digest.
    pub const fn from_digest(digest: [u8; SHA2_256_DIGEST_LEN]) -> Self {
        Self(digest)
    }

    /// Hashes `content` and wraps the digest.
    pub fn for_content(content: &[u8]) -> Result<Self, CryptoError> {
        sha256(content).map(Self::from_digest)
    }

    /// The raw digest, as stored on-chain.
    pub fn digest(&self) -> &[u8; SHA2_256_DIGEST_LEN] {
        &self.0
    }

    fn try_to_string(&self) -> Result<String, CidError> {
        build_identifier(&self.0)
    }
}

impl FromStr for ContentIdentifier {
    type Err = CidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        extract_digest(s).map(Self)
    }
}

impl fmt::Display for ContentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.try_to_string().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl fmt::Debug for ContentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_to_string() {
            Ok(s) => write!(f, "ContentIdentifier({s})"),
            Err(_) => write!(f, "ContentIdentifier(<invalid>)"),
        }
    }
}
