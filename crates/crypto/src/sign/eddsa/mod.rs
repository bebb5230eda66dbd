// Path: crates/crypto/src/sign/eddsa/mod.rs
//! Implementation of Ed25519 signing using ed25519-dalek

use crate::error::CryptoError;
use ed25519_dalek as dalek;
use ed25519_dalek::{Signer, Verifier};
use letters_api::crypto::{SerializableKey, Signature, SigningKey, SigningKeyPair, VerifyingKey};
use letters_types::app::{AccountId, SignatureBytes};
use rand::rngs::OsRng;

/// Ed25519 key pair implementation
#[derive(Clone)]
pub struct Ed25519KeyPair {
    /// Public verification key
    public_key: dalek::VerifyingKey,
    /// Private signing key
    secret_key: dalek::SigningKey,
}

/// Ed25519 signature implementation
pub struct Ed25519Signature(dalek::Signature);

/// Ed25519 public key implementation
pub struct Ed25519PublicKey(dalek::VerifyingKey);

/// Ed25519 private key implementation
#[derive(Clone)]
pub struct Ed25519PrivateKey(dalek::SigningKey);

impl Ed25519KeyPair {
    /// Generate a new Ed25519 key pair
    pub fn generate() -> Result<Self, CryptoError> {
        let mut rng = OsRng;
        let secret_key = dalek::SigningKey::generate(&mut rng);

        Ok(Self {
            public_key: secret_key.verifying_key(),
            secret_key,
        })
    }

    /// Create from an existing private key
    pub fn from_private_key(private_key: &Ed25519PrivateKey) -> Result<Self, CryptoError> {
        let secret_key = private_key.0.clone();

        Ok(Self {
            public_key: secret_key.verifying_key(),
            secret_key,
        })
    }

    /// Create from a 32-byte seed
    pub fn from_seed(seed: &[u8]) -> Result<Self, CryptoError> {
        Self::from_private_key(&Ed25519PrivateKey::from_bytes(seed)?)
    }
}

impl SigningKeyPair for Ed25519KeyPair {
    type PublicKey = Ed25519PublicKey;
    type PrivateKey = Ed25519PrivateKey;
    type Signature = Ed25519Signature;

    fn public_key(&self) -> Self::PublicKey {
        Ed25519PublicKey(self.public_key)
    }

    fn private_key(&self) -> Self::PrivateKey {
        Ed25519PrivateKey(self.secret_key.clone())
    }

    fn sign(&self, message: &[u8]) -> Result<Self::Signature, CryptoError> {
        let signature = self
            .secret_key
            .try_sign(message)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        Ok(Ed25519Signature(signature))
    }
}

impl VerifyingKey for Ed25519PublicKey {
    type Signature = Ed25519Signature;

    fn verify(&self, message: &[u8], signature: &Self::Signature) -> Result<(), CryptoError> {
        self.0
            .verify(message, &signature.0)
            .map_err(|_| CryptoError::VerificationFailed)
    }
}

impl SerializableKey for Ed25519PublicKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let raw: [u8; 32] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidKey(format!(
                "Invalid public key length: expected 32 bytes, got {}",
                bytes.len()
            ))
        })?;
        dalek::VerifyingKey::from_bytes(&raw)
            .map(Ed25519PublicKey)
            .map_err(|e| CryptoError::InvalidKey(format!("Failed to parse public key: {:?}", e)))
    }
}

impl SigningKey for Ed25519PrivateKey {
    type Signature = Ed25519Signature;

    fn sign(&self, message: &[u8]) -> Result<Self::Signature, CryptoError> {
        let signature = self
            .0
            .try_sign(message)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        Ok(Ed25519Signature(signature))
    }
}

impl SerializableKey for Ed25519PrivateKey {
    fn to_bytes(&self) -> Vec<u8> {
        // Export just the seed (32 bytes)
        self.0.to_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let seed: [u8; 32] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidKey("Invalid private key length: expected 32 bytes".to_string())
        })?;
        Ok(Ed25519PrivateKey(dalek::SigningKey::from_bytes(&seed)))
    }
}

impl SerializableKey for Ed25519Signature {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        dalek::Signature::from_slice(bytes)
            .map(Ed25519Signature)
            .map_err(|e| {
                CryptoError::InvalidSignature(format!("Failed to parse signature: {:?}", e))
            })
    }
}

impl Signature for Ed25519Signature {}

// Additional Ed25519-specific functionality
impl Ed25519Signature {
    /// Get the signature as a fixed-length field, ready to embed in a penalty record
    pub fn to_signature_bytes(&self) -> SignatureBytes {
        SignatureBytes::new(self.0.to_bytes())
    }
}

impl Ed25519PublicKey {
    /// The account identity of this key. Accounts are addressed by the raw public key.
    pub fn account_id(&self) -> AccountId {
        AccountId::new(self.0.to_bytes())
    }
}

impl Ed25519PrivateKey {
    /// Get the public key corresponding to this private key
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.0.verifying_key())
    }
}

#[cfg(test)]
mod tests;
