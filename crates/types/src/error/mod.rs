// Path: crates/types/src/error/mod.rs
//! Core error types for the Letters protocol.

use crate::app::SchemaVersion;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised while laying out a signable payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A fixed-width field was requested with a width of zero bytes.
    #[error("Field width must be at least one byte")]
    ZeroWidth,
    /// An integer's minimal big-endian form does not fit the requested field width.
    #[error("Integer needs {needed} bytes but the field is only {width} bytes wide")]
    IntegerOverflowForWidth {
        /// The declared width of the field.
        width: usize,
        /// The number of bytes the value actually needs.
        needed: usize,
    },
    /// A fixed-length byte field was supplied with the wrong number of bytes.
    #[error("Field '{field}' must be exactly {expected} bytes, got {got}")]
    FieldLengthMismatch {
        /// The name of the field being constructed.
        field: &'static str,
        /// The declared length of the field.
        expected: usize,
        /// The length of the supplied bytes.
        got: usize,
    },
    /// A record is missing a field that its schema version lays out.
    #[error("Schema {schema} requires field '{field}'")]
    SchemaFieldMissing {
        /// The schema the record was assembled under.
        schema: SchemaVersion,
        /// The missing field.
        field: &'static str,
    },
    /// A record carries a field that its schema version does not lay out.
    #[error("Schema {schema} has no field '{field}'")]
    SchemaFieldUnexpected {
        /// The schema the record was assembled under.
        schema: SchemaVersion,
        /// The superfluous field.
        field: &'static str,
    },
    /// A schema version name could not be recognised.
    #[error("Unknown schema version: {0}")]
    UnknownSchema(String),
    /// A hex string could not be decoded.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
    /// A decimal integer string could not be parsed.
    #[error("Invalid unsigned integer: {0}")]
    InvalidInteger(String),
}

impl ErrorCode for CodecError {
    fn code(&self) -> &'static str {
        match self {
            Self::ZeroWidth => "CODEC_ZERO_WIDTH",
            Self::IntegerOverflowForWidth { .. } => "CODEC_INTEGER_OVERFLOW_FOR_WIDTH",
            Self::FieldLengthMismatch { .. } => "CODEC_FIELD_LENGTH_MISMATCH",
            Self::SchemaFieldMissing { .. } => "CODEC_SCHEMA_FIELD_MISSING",
            Self::SchemaFieldUnexpected { .. } => "CODEC_SCHEMA_FIELD_UNEXPECTED",
            Self::UnknownSchema(_) => "CODEC_UNKNOWN_SCHEMA",
            Self::InvalidHex(_) => "CODEC_INVALID_HEX",
            Self::InvalidInteger(_) => "CODEC_INVALID_INTEGER",
        }
    }
}

/// Errors raised while parsing or building content identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidError {
    /// The identifier's version is not CIDv1.
    #[error("Unsupported CID version: {0}")]
    UnsupportedVersion(u64),
    /// The identifier's multihash is not SHA-256.
    #[error("Unsupported multihash function code: {0:#x}")]
    UnsupportedHashFunction(u64),
    /// The identifier's content codec is not dag-cbor.
    #[error("Unsupported content codec: {0:#x}")]
    UnsupportedCodec(u64),
    /// A digest handed to the builder, or found in an identifier, has the wrong length.
    #[error("Invalid digest length. Expected {expected}, got {got}")]
    InvalidDigestLength {
        /// The digest length of SHA-256.
        expected: usize,
        /// The length that was supplied.
        got: usize,
    },
    /// The string is not a parseable content identifier.
    #[error("Malformed content identifier: {0}")]
    MalformedIdentifier(String),
    /// The identifier parsed, but is not in canonical base32-lower form.
    #[error("Content identifier is not in canonical form: {0}")]
    NonCanonicalIdentifier(String),
}

impl ErrorCode for CidError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion(_) => "CID_UNSUPPORTED_VERSION",
            Self::UnsupportedHashFunction(_) => "CID_UNSUPPORTED_HASH_FUNCTION",
            Self::UnsupportedCodec(_) => "CID_UNSUPPORTED_CODEC",
            Self::InvalidDigestLength { .. } => "CID_INVALID_DIGEST_LENGTH",
            Self::MalformedIdentifier(_) => "CID_MALFORMED",
            Self::NonCanonicalIdentifier(_) => "CID_NON_CANONICAL",
        }
    }
}

/// Errors from cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The signature failed cryptographic verification.
    #[error("Signature verification failed")]
    VerificationFailed,
    /// The provided key material is malformed or invalid for the specified algorithm.
    #[error("Invalid cryptographic key: {0}")]
    InvalidKey(String),
    /// The provided signature material is malformed or invalid for the specified algorithm.
    #[error("Invalid signature format: {0}")]
    InvalidSignature(String),
    /// A hash digest had an unexpected length.
    #[error("Invalid hash length: expected {expected}, got {got}")]
    InvalidHashLength {
        /// The expected length in bytes.
        expected: usize,
        /// The actual length in bytes.
        got: usize,
    },
    /// The record to be signed could not be laid out.
    #[error("Payload assembly failed: {0}")]
    Codec(#[from] CodecError),
    /// A content identifier could not be built or parsed.
    #[error("Content identifier error: {0}")]
    Cid(#[from] CidError),
}

impl ErrorCode for CryptoError {
    fn code(&self) -> &'static str {
        match self {
            Self::VerificationFailed => "CRYPTO_VERIFICATION_FAILED",
            Self::InvalidKey(_) => "CRYPTO_INVALID_KEY",
            Self::InvalidSignature(_) => "CRYPTO_INVALID_SIGNATURE",
            Self::InvalidHashLength { .. } => "CRYPTO_INVALID_HASH_LENGTH",
            Self::Codec(e) => e.code(),
            Self::Cid(e) => e.code(),
        }
    }
}

/// Errors raised by a content store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No content is stored under the identifier.
    #[error("Content not found: {0}")]
    NotFound(String),
    /// The identifier could not be parsed.
    #[error("Invalid content identifier: {0}")]
    InvalidIdentifier(#[from] CidError),
    /// Stored content could not be decoded into the requested form.
    #[error("Decode error: {0}")]
    Decode(String),
    /// A generic error originating from the store backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

impl ErrorCode for StoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "STORE_NOT_FOUND",
            Self::InvalidIdentifier(e) => e.code(),
            Self::Decode(_) => "STORE_DECODE_ERROR",
            Self::Backend(_) => "STORE_BACKEND_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let overflow = CodecError::IntegerOverflowForWidth {
            width: 4,
            needed: 5,
        };
        assert_eq!(overflow.code(), "CODEC_INTEGER_OVERFLOW_FOR_WIDTH");
        assert_eq!(
            overflow.to_string(),
            "Integer needs 5 bytes but the field is only 4 bytes wide"
        );

        let missing = CodecError::SchemaFieldMissing {
            schema: SchemaVersion::V3,
            field: "genesis",
        };
        assert_eq!(missing.to_string(), "Schema v3 requires field 'genesis'");

        assert_eq!(
            CidError::UnsupportedHashFunction(0x13).to_string(),
            "Unsupported multihash function code: 0x13"
        );
        assert_eq!(CidError::UnsupportedVersion(0).code(), "CID_UNSUPPORTED_VERSION");

        // Wrapped errors keep the code of their source.
        let wrapped = CryptoError::from(CodecError::ZeroWidth);
        assert_eq!(wrapped.code(), "CODEC_ZERO_WIDTH");
        let store = StoreError::from(CidError::UnsupportedCodec(0x55));
        assert_eq!(store.code(), "CID_UNSUPPORTED_CODEC");
    }
}
