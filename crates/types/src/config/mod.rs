// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for payload assembly.

use crate::app::{GenesisHash, SchemaVersion};
use crate::codec::OverflowPolicy;
use serde::{Deserialize, Serialize};

/// Settings that select how records are laid out before signing.
///
/// Typically loaded from a `letters.toml` file. Every field has a default, so an
/// empty file yields the current schema with strict overflow checking.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LettersConfig {
    /// The layout records are assembled under.
    pub schema: SchemaVersion,
    /// What to do with integers that do not fit their field.
    pub overflow_policy: OverflowPolicy,
    /// The genesis hash applied to referee records that do not carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genesis_hash: Option<GenesisHash>,
}
