// Path: crates/cli/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Letters CLI Library
//!
//! The workflows behind the `letters` binary, exposed so they can be driven from
//! integration tests without spawning a process.
//!
//! `letters-cli` only composes the public APIs of the other `letters-*` crates. It
//! holds no protocol logic of its own: every byte it prints was produced by
//! `letters-types` or `letters-crypto`.

pub mod workflow;

pub use workflow::{
    assemble, explain, identifier_for_file, load_config, load_record, parse_record,
    sign_with_seed, verify_with_key, write_default_config, Settings, SignatureReport,
};
