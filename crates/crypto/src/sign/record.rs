// Path: crates/crypto/src/sign/record.rs
//! Signs and verifies letter records over their assembled payload.
//!
//! The signer never sees the record itself, only the bytes produced by the payload
//! codec, so a verifier must re-assemble under the same schema the signer used.

use crate::error::CryptoError;
use letters_api::crypto::{SigningKeyPair, VerifyingKey};
use letters_types::app::{SchemaVersion, SignableRecord};
use letters_types::codec::OverflowPolicy;

/// A signature together with the exact payload it covers.
pub struct SignedPayload<S> {
    /// The assembled bytes that were signed.
    pub payload: Vec<u8>,
    /// The signature over `payload`.
    pub signature: S,
}

/// Assembles `record` under `schema` and signs the result with `keypair`.
pub fn sign_record<K: SigningKeyPair>(
    keypair: &K,
    record: &SignableRecord,
    schema: SchemaVersion,
    policy: OverflowPolicy,
) -> Result<SignedPayload<K::Signature>, CryptoError> {
    let payload = record.signing_payload(schema, policy)?;
    let signature = keypair.sign(&payload)?;
    log::debug!(
        "signed {} record under schema {} ({} bytes)",
        record.kind(),
        schema,
        payload.len()
    );
    Ok(SignedPayload { payload, signature })
}

/// Re-assembles `record` under `schema` and checks `signature` against it.
pub fn verify_record<V: VerifyingKey>(
    key: &V,
    record: &SignableRecord,
    schema: SchemaVersion,
    policy: OverflowPolicy,
    signature: &V::Signature,
) -> Result<(), CryptoError> {
    let payload = record.signing_payload(schema, policy)?;
    key.verify(&payload, signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::eddsa::Ed25519KeyPair;
    use letters_types::app::{AccountId, GenesisHash, PublicRefereeRecord, WorkerPenaltyRecord};
    use letters_types::error::CodecError;

    fn referee_record(genesis: Option<GenesisHash>) -> SignableRecord {
        SignableRecord::PublicReferee(PublicRefereeRecord {
            genesis,
            letter_id: 1,
            block_number: 1u64.into(),
            referee: AccountId::new([0x11; 32]),
            worker: AccountId::new([0x22; 32]),
            amount: 1_000_000_000_000u128.into(),
        })
    }

    #[test]
    fn test_sign_then_verify_record() {
        let keypair = Ed25519KeyPair::generate().unwrap();
        let record = referee_record(Some(GenesisHash::new([0xaa; 32])));

        let signed =
            sign_record(&keypair, &record, SchemaVersion::V3, OverflowPolicy::Reject).unwrap();
        assert_eq!(signed.payload.len(), 124);
        verify_record(
            &keypair.public_key(),
            &record,
            SchemaVersion::V3,
            OverflowPolicy::Reject,
            &signed.signature,
        )
        .unwrap();
    }

    #[test]
    fn test_tampered_field_fails_verification() {
        let keypair = Ed25519KeyPair::generate().unwrap();
        let record = referee_record(Some(GenesisHash::new([0xaa; 32])));
        let signed =
            sign_record(&keypair, &record, SchemaVersion::V3, OverflowPolicy::Reject).unwrap();

        let mut tampered = record.clone();
        if let SignableRecord::PublicReferee(r) = &mut tampered {
            r.amount = 1_000_000_000_001u128.into();
        }
        assert!(matches!(
            verify_record(
                &keypair.public_key(),
                &tampered,
                SchemaVersion::V3,
                OverflowPolicy::Reject,
                &signed.signature,
            ),
            Err(CryptoError::VerificationFailed)
        ));
    }

    #[test]
    fn test_legacy_schema_signature_verifies_under_its_own_schema() {
        let keypair = Ed25519KeyPair::generate().unwrap();
        let record = SignableRecord::WorkerPenalty(WorkerPenaltyRecord {
            letter_id: 7,
            block_number: 100u64.into(),
            block_allowed: Some(200u64.into()),
            referee: AccountId::new([0x11; 32]),
            worker: AccountId::new([0x22; 32]),
            amount: 500u64.into(),
            referee_signature: keypair.sign(b"letter").unwrap().to_signature_bytes(),
            employer: AccountId::new([0x33; 32]),
        });

        let signed =
            sign_record(&keypair, &record, SchemaVersion::V2, OverflowPolicy::Reject).unwrap();
        verify_record(
            &keypair.public_key(),
            &record,
            SchemaVersion::V2,
            OverflowPolicy::Reject,
            &signed.signature,
        )
        .unwrap();

        // The current layout has no block allowance, so the record no longer assembles.
        assert!(matches!(
            verify_record(
                &keypair.public_key(),
                &record,
                SchemaVersion::V3,
                OverflowPolicy::Reject,
                &signed.signature,
            ),
            Err(CryptoError::Codec(CodecError::SchemaFieldUnexpected { .. }))
        ));
    }

    #[test]
    fn test_unassemblable_record_is_not_signed() {
        let keypair = Ed25519KeyPair::generate().unwrap();
        let record = referee_record(None);
        assert!(matches!(
            sign_record(&keypair, &record, SchemaVersion::V3, OverflowPolicy::Reject),
            Err(CryptoError::Codec(CodecError::SchemaFieldMissing { .. }))
        ));
    }
}
