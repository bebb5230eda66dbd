// Path: crates/api/src/lib.rs

//! # Letters API Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]
//! # Letters API
//!
//! Traits for the collaborators the payload core hands its output to: the signer
//! that signs an assembled payload, and the content store that holds letter text
//! under a content identifier.

/// Defines unified traits for signing keys and signatures.
pub mod crypto;
/// Re-exports all core error types from the central `letters-types` crate.
pub mod error;
/// The content store contract.
pub mod storage;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::crypto::{SerializableKey, Signature, SigningKey, SigningKeyPair, VerifyingKey};
    pub use crate::error::{CryptoError, ErrorCode, StoreError};
    pub use crate::storage::ContentStore;
}
