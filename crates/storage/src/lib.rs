// Path: crates/storage/src/lib.rs
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

//! Content-addressed stores for letter text.
//!
//! Every store hands out identifiers from the CIDv1 codec in `letters-crypto`, so the
//! digest stored on-chain can always be recovered from what `put` returned.

pub mod memory;

pub use memory::MemoryContentStore;
