// Path: crates/crypto/src/sign/eddsa/tests/mod.rs
use super::*;

// RFC 8032, section 7.1, TEST 1.
const RFC8032_SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
const RFC8032_PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
const RFC8032_SIGNATURE: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

#[test]
fn test_keypair_generation() {
    let keypair = Ed25519KeyPair::generate().unwrap();
    let message = b"Test message";

    let signature = keypair.sign(message).unwrap();
    assert!(keypair.public_key().verify(message, &signature).is_ok());
}

#[test]
fn test_known_vector() {
    let seed = hex::decode(RFC8032_SEED).unwrap();
    let keypair = Ed25519KeyPair::from_seed(&seed).unwrap();

    assert_eq!(hex::encode(keypair.public_key().to_bytes()), RFC8032_PUBLIC);
    let signature = keypair.sign(b"").unwrap();
    assert_eq!(hex::encode(signature.to_bytes()), RFC8032_SIGNATURE);
}

#[test]
fn test_serialization_roundtrip() {
    let keypair = Ed25519KeyPair::generate().unwrap();

    let public_bytes = keypair.public_key().to_bytes();
    let private_bytes = keypair.private_key().to_bytes();
    assert_eq!(public_bytes.len(), 32);
    assert_eq!(private_bytes.len(), 32); // Just the seed

    let public_key = Ed25519PublicKey::from_bytes(&public_bytes).unwrap();
    let private_key = Ed25519PrivateKey::from_bytes(&private_bytes).unwrap();
    assert_eq!(public_key.to_bytes(), private_key.public_key().to_bytes());
}

#[test]
fn test_sign_verify_with_loaded_keys() {
    let original = Ed25519KeyPair::generate().unwrap();
    let message = b"Test message for persistence";
    let original_sig = original.sign(message).unwrap();

    let loaded = Ed25519PrivateKey::from_bytes(&original.private_key().to_bytes()).unwrap();
    let reconstructed = Ed25519KeyPair::from_private_key(&loaded).unwrap();
    let new_sig = reconstructed.sign(message).unwrap();

    // Ed25519 signatures are deterministic.
    assert_eq!(original_sig.to_bytes(), new_sig.to_bytes());
    assert!(reconstructed.public_key().verify(message, &original_sig).is_ok());

    // The private key can sign on its own too.
    let direct = SigningKey::sign(&loaded, message).unwrap();
    assert_eq!(direct.to_bytes(), new_sig.to_bytes());
}

#[test]
fn test_wrong_signature_fails() {
    let keypair1 = Ed25519KeyPair::generate().unwrap();
    let keypair2 = Ed25519KeyPair::generate().unwrap();
    let message = b"Test message";

    let signature = keypair1.sign(message).unwrap();
    assert!(matches!(
        keypair2.public_key().verify(message, &signature),
        Err(CryptoError::VerificationFailed)
    ));
}

#[test]
fn test_tampered_message_fails() {
    let keypair = Ed25519KeyPair::generate().unwrap();
    let signature = keypair.sign(b"Original message").unwrap();
    assert!(keypair
        .public_key()
        .verify(b"Tampered message", &signature)
        .is_err());
}

#[test]
fn test_malformed_key_material_rejected() {
    assert!(matches!(
        Ed25519PrivateKey::from_bytes(&[0u8; 31]),
        Err(CryptoError::InvalidKey(_))
    ));
    assert!(matches!(
        Ed25519PublicKey::from_bytes(&[0u8; 33]),
        Err(CryptoError::InvalidKey(_))
    ));
    assert!(matches!(
        Ed25519Signature::from_bytes(&[0u8; 63]),
        Err(CryptoError::InvalidSignature(_))
    ));
}

#[test]
fn test_identity_and_signature_fields() {
    let keypair = Ed25519KeyPair::generate().unwrap();
    let public = keypair.public_key();
    assert_eq!(public.account_id().as_bytes().to_vec(), public.to_bytes());

    let signature = keypair.sign(b"payload").unwrap();
    assert_eq!(
        signature.to_signature_bytes().as_bytes().as_slice(),
        signature.to_bytes().as_slice()
    );
}
