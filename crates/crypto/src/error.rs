// Path: crates/crypto/src/error.rs
//! Local error types for the `letters-crypto` crate.

// Re-export the canonical error types from the API crate.
pub use letters_api::error::{CidError, CryptoError};
