// Path: crates/crypto/src/algorithms/mod.rs
//! Cryptographic algorithm implementations.

pub mod hash;
