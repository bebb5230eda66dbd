// Path: crates/types/src/app/letters.rs

//! Defines the signable recommendation-letter records and the exact byte layout
//! each one is signed under.
//!
//! A record is laid out by concatenating its fields in a fixed order with no
//! delimiters. Integers go through the fixed-width codec, identities and signatures
//! are copied verbatim, and the letter text hash is written as its UTF-8 bytes.
//! Field boundaries are implied by the widths alone, so reordering any two fields
//! produces a different payload.
//!
//! The layout has changed across protocol versions, so every assembly takes an
//! explicit [`SchemaVersion`]. Signatures produced under an older layout remain
//! verifiable by re-assembling the record under the version it was signed with.

use crate::app::identity::{AccountId, GenesisHash, SignatureBytes};
use crate::codec::{encode_fixed_with_policy, FixedWidthInteger, OverflowPolicy, Uint};
use crate::error::CodecError;
use crate::prelude::OptionExt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// The on-chain width of a letter id.
pub const LETTER_ID_WIDTH: usize = 4;
/// The on-chain width of a block number.
pub const BLOCK_NUMBER_WIDTH: usize = 8;
/// The on-chain width of an amount.
pub const AMOUNT_WIDTH: usize = 16;

/// A versioned payload layout.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Referee records carry no genesis hash. Worker penalty records carry a
    /// `block_allowed` field directly after the block number.
    V1,
    /// Referee records are bound to a network by a leading genesis hash. Worker
    /// penalty records still carry `block_allowed`.
    V2,
    /// The current layout: genesis-bound referee records, and worker penalty records
    /// without `block_allowed`.
    #[default]
    V3,
}

impl SchemaVersion {
    /// The layout new payloads are produced under.
    pub const CURRENT: Self = Self::V3;

    /// Whether referee records start with a genesis hash under this layout.
    pub fn binds_genesis(self) -> bool {
        !matches!(self, Self::V1)
    }

    /// Whether worker penalty records carry `block_allowed` under this layout.
    pub fn has_block_allowance(self) -> bool {
        !matches!(self, Self::V3)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        };
        f.write_str(name)
    }
}

impl FromStr for SchemaVersion {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            "v3" | "3" => Ok(Self::V3),
            other => Err(CodecError::UnknownSchema(other.to_string())),
        }
    }
}

/// The public part of a recommendation letter, signed by the referee.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PublicRefereeRecord {
    /// The genesis hash of the target network. Required from [`SchemaVersion::V2`] on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis: Option<GenesisHash>,
    /// The letter id.
    pub letter_id: u32,
    /// The block number the letter was issued at.
    pub block_number: Uint,
    /// The referee who vouches for the worker.
    pub referee: AccountId,
    /// The worker the letter is written for.
    pub worker: AccountId,
    /// The amount the referee stakes on the letter.
    pub amount: Uint,
}

/// A letter whose text is kept off-chain, bound to the public fields by its hash.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PrivateRefereeRecord {
    /// The hash of the letter text, written as its UTF-8 bytes.
    pub text_hash: String,
    /// The public fields that follow the text hash.
    #[serde(flatten)]
    pub public: PublicRefereeRecord,
}

/// The record a worker signs so that an employer can penalize the referee.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WorkerPenaltyRecord {
    /// The letter id.
    pub letter_id: u32,
    /// The block number the letter was issued at.
    pub block_number: Uint,
    /// The last block at which a penalty is allowed. Only laid out before [`SchemaVersion::V3`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_allowed: Option<Uint>,
    /// The referee being penalized.
    pub referee: AccountId,
    /// The worker the letter was written for.
    pub worker: AccountId,
    /// The amount staked on the letter.
    pub amount: Uint,
    /// The referee's signature over the letter.
    pub referee_signature: SignatureBytes,
    /// The employer allowed to claim the penalty.
    pub employer: AccountId,
}

/// One of the closed set of records that may be signed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignableRecord {
    /// See [`PublicRefereeRecord`].
    PublicReferee(PublicRefereeRecord),
    /// See [`PrivateRefereeRecord`].
    PrivateReferee(PrivateRefereeRecord),
    /// See [`WorkerPenaltyRecord`].
    WorkerPenalty(WorkerPenaltyRecord),
}

/// The byte range a named field occupies inside an assembled payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpan {
    /// The field name.
    pub name: &'static str,
    /// The half-open byte range of the field.
    pub range: Range<usize>,
}

/// An assembled payload together with the position of each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPayload {
    /// The bytes to be signed.
    pub bytes: Vec<u8>,
    /// The fields in payload order.
    pub fields: Vec<FieldSpan>,
}

struct PayloadBuilder {
    schema: SchemaVersion,
    /// `None` lays fields out by width only, without encoding values.
    policy: Option<OverflowPolicy>,
    bytes: Vec<u8>,
    fields: Vec<FieldSpan>,
}

impl PayloadBuilder {
    fn new(schema: SchemaVersion, policy: Option<OverflowPolicy>) -> Self {
        Self {
            schema,
            policy,
            bytes: Vec::with_capacity(256),
            fields: Vec::new(),
        }
    }

    fn raw(&mut self, name: &'static str, bytes: &[u8]) {
        let start = self.bytes.len();
        self.bytes.extend_from_slice(bytes);
        self.fields.push(FieldSpan {
            name,
            range: start..self.bytes.len(),
        });
    }

    fn uint<T: FixedWidthInteger + ?Sized>(
        &mut self,
        name: &'static str,
        value: &T,
        width: usize,
    ) -> Result<(), CodecError> {
        match self.policy {
            Some(policy) => {
                let encoded = encode_fixed_with_policy(value, width, policy)?;
                self.raw(name, &encoded);
            }
            None if width == 0 => return Err(CodecError::ZeroWidth),
            None => self.raw(name, &vec![0u8; width]),
        }
        Ok(())
    }

    /// Checks an optional field against the schema and returns it if it must be laid out.
    fn optional<'a, T>(
        &self,
        name: &'static str,
        value: &'a Option<T>,
        laid_out: bool,
    ) -> Result<Option<&'a T>, CodecError> {
        let schema = self.schema;
        if laid_out {
            value
                .as_ref()
                .required(CodecError::SchemaFieldMissing {
                    schema,
                    field: name,
                })
                .map(Some)
        } else if value.is_some() {
            Err(CodecError::SchemaFieldUnexpected {
                schema,
                field: name,
            })
        } else {
            Ok(None)
        }
    }

    fn finish(self) -> AssembledPayload {
        AssembledPayload {
            bytes: self.bytes,
            fields: self.fields,
        }
    }
}

impl PublicRefereeRecord {
    fn write(&self, out: &mut PayloadBuilder) -> Result<(), CodecError> {
        let binds_genesis = out.schema.binds_genesis();
        if let Some(genesis) = out.optional("genesis", &self.genesis, binds_genesis)? {
            out.raw("genesis", genesis.as_ref());
        }
        out.uint("letter_id", &self.letter_id, LETTER_ID_WIDTH)?;
        out.uint("block_number", &self.block_number, BLOCK_NUMBER_WIDTH)?;
        out.raw("referee", self.referee.as_ref());
        out.raw("worker", self.worker.as_ref());
        out.uint("amount", &self.amount, AMOUNT_WIDTH)
    }
}

impl PrivateRefereeRecord {
    fn write(&self, out: &mut PayloadBuilder) -> Result<(), CodecError> {
        out.raw("text_hash", self.text_hash.as_bytes());
        self.public.write(out)
    }
}

impl WorkerPenaltyRecord {
    fn write(&self, out: &mut PayloadBuilder) -> Result<(), CodecError> {
        out.uint("letter_id", &self.letter_id, LETTER_ID_WIDTH)?;
        out.uint("block_number", &self.block_number, BLOCK_NUMBER_WIDTH)?;
        let has_allowance = out.schema.has_block_allowance();
        if let Some(allowed) = out.optional("block_allowed", &self.block_allowed, has_allowance)? {
            out.uint("block_allowed", allowed, BLOCK_NUMBER_WIDTH)?;
        }
        out.raw("referee", self.referee.as_ref());
        out.raw("worker", self.worker.as_ref());
        out.uint("amount", &self.amount, AMOUNT_WIDTH)?;
        out.raw("referee_signature", self.referee_signature.as_ref());
        out.raw("employer", self.employer.as_ref());
        Ok(())
    }
}

impl SignableRecord {
    /// A short, stable name for the record variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PublicReferee(_) => "public_referee",
            Self::PrivateReferee(_) => "private_referee",
            Self::WorkerPenalty(_) => "worker_penalty",
        }
    }

    fn build(
        &self,
        schema: SchemaVersion,
        policy: Option<OverflowPolicy>,
    ) -> Result<AssembledPayload, CodecError> {
        let mut out = PayloadBuilder::new(schema, policy);
        match self {
            Self::PublicReferee(r) => r.write(&mut out)?,
            Self::PrivateReferee(r) => r.write(&mut out)?,
            Self::WorkerPenalty(r) => r.write(&mut out)?,
        }
        Ok(out.finish())
    }

    /// Lays the record out under `schema` and reports where each field landed.
    pub fn assemble(
        &self,
        schema: SchemaVersion,
        policy: OverflowPolicy,
    ) -> Result<AssembledPayload, CodecError> {
        let payload = self.build(schema, Some(policy))?;
        log::debug!(
            "assembled {} payload under schema {}: {} bytes",
            self.kind(),
            schema,
            payload.bytes.len()
        );
        Ok(payload)
    }

    /// Returns the exact bytes an external signer signs for this record under `schema`.
    pub fn signing_payload(
        &self,
        schema: SchemaVersion,
        policy: OverflowPolicy,
    ) -> Result<Vec<u8>, CodecError> {
        self.assemble(schema, policy).map(|p| p.bytes)
    }

    /// Returns the named byte span of every field under `schema`.
    ///
    /// Integer values are not encoded, so a value too wide for its field does not
    /// change the layout. Optional fields are still checked against the schema.
    pub fn field_layout(&self, schema: SchemaVersion) -> Result<Vec<FieldSpan>, CodecError> {
        self.build(schema, None).map(|p| p.fields)
    }

    /// Fills in `genesis` on referee records that do not carry one yet.
    pub fn fill_genesis(&mut self, genesis: &GenesisHash) {
        let public = match self {
            Self::PublicReferee(r) => r,
            Self::PrivateReferee(r) => &mut r.public,
            Self::WorkerPenalty(_) => return,
        };
        if public.genesis.is_none() {
            public.genesis = Some(*genesis);
        }
    }
}

/// Builds the payload a referee signs over the public fields of a letter.
pub fn public_data_to_sign_by_referee(
    genesis: &GenesisHash,
    letter_id: u32,
    block_number: impl Into<Uint>,
    referee: &AccountId,
    worker: &AccountId,
    amount: impl Into<Uint>,
) -> Result<Vec<u8>, CodecError> {
    SignableRecord::PublicReferee(PublicRefereeRecord {
        genesis: Some(*genesis),
        letter_id,
        block_number: block_number.into(),
        referee: *referee,
        worker: *worker,
        amount: amount.into(),
    })
    .signing_payload(SchemaVersion::CURRENT, OverflowPolicy::Reject)
}

/// Builds the payload a referee signs over a letter whose text is stored off-chain.
pub fn private_data_to_sign_by_referee(
    text_hash: &str,
    genesis: &GenesisHash,
    letter_id: u32,
    block_number: impl Into<Uint>,
    referee: &AccountId,
    worker: &AccountId,
    amount: impl Into<Uint>,
) -> Result<Vec<u8>, CodecError> {
    SignableRecord::PrivateReferee(PrivateRefereeRecord {
        text_hash: text_hash.to_string(),
        public: PublicRefereeRecord {
            genesis: Some(*genesis),
            letter_id,
            block_number: block_number.into(),
            referee: *referee,
            worker: *worker,
            amount: amount.into(),
        },
    })
    .signing_payload(SchemaVersion::CURRENT, OverflowPolicy::Reject)
}

/// Builds the payload a worker signs to let an employer penalize the referee.
pub fn data_to_sign_by_worker(
    letter_id: u32,
    block_number: impl Into<Uint>,
    referee: &AccountId,
    worker: &AccountId,
    amount: impl Into<Uint>,
    referee_signature: &SignatureBytes,
    employer: &AccountId,
) -> Result<Vec<u8>, CodecError> {
    SignableRecord::WorkerPenalty(WorkerPenaltyRecord {
        letter_id,
        block_number: block_number.into(),
        block_allowed: None,
        referee: *referee,
        worker: *worker,
        amount: amount.into(),
        referee_signature: *referee_signature,
        employer: *employer,
    })
    .signing_payload(SchemaVersion::CURRENT, OverflowPolicy::Reject)
}
