// Path: crates/types/src/app/mod.rs
//! Application-level data structures: identities and the signable letter records.

/// Fixed-length byte newtypes for identities, genesis hashes and signatures.
pub mod identity;
/// The signable letter records, their schema versions and payload assembly.
pub mod letters;

pub use identity::{AccountId, FixedBytes, GenesisHash, SignatureBytes};
pub use letters::{
    data_to_sign_by_worker, private_data_to_sign_by_referee, public_data_to_sign_by_referee,
    AssembledPayload, FieldSpan, PrivateRefereeRecord, PublicRefereeRecord, SchemaVersion,
    SignableRecord, WorkerPenaltyRecord,
};
