// Path: crates/crypto/src/lib.rs
//! # Letters Crypto Crate Lints
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
        clippy::indexing_slicing
    )
)]
//! # Letters Cryptography
//!
//! Hashing, the CIDv1 content identifier codec, and the Ed25519 signer that signs
//! assembled letter payloads.

pub mod algorithms;
pub mod cid;
pub mod error;
pub mod sign;
