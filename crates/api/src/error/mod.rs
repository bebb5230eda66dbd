// Path: crates/api/src/error/mod.rs
// Re-export all core error types from the central types crate.
pub use letters_types::error::{CidError, CodecError, CryptoError, ErrorCode, StoreError};
