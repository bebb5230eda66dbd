// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::indexing_slicing
    )
)]

//! # Letters Types
//!
//! This crate is the foundational library for the Letters protocol, containing the
//! signable letter records, the fixed-width integer codec that lays them out, and
//! the error types shared by every other crate in the workspace.
//!
//! ## Architectural Role
//!
//! As the base crate, `letters-types` has minimal dependencies and performs no I/O.
//! Everything here is a pure function of its inputs, so a given logical record maps
//! to exactly one byte sequence no matter which caller or thread produces it.

/// Letter records, fixed-length identities and schema versions.
pub mod app;
/// Big-endian fixed-width integer encoding.
pub mod codec;
/// Shared configuration structures.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// A prelude containing useful extension traits like `OptionExt`.
pub mod prelude;
