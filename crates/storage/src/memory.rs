// Path: crates/storage/src/memory.rs
//! An in-process [`ContentStore`] keyed by SHA-256 digest.

use async_trait::async_trait;
use dashmap::DashMap;
use letters_api::error::StoreError;
use letters_api::storage::ContentStore;
use letters_crypto::cid::{extract_digest, ContentIdentifier, SHA2_256_DIGEST_LEN};

/// Holds content in memory, addressed by the digest inside its identifier.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    blobs: DashMap<[u8; SHA2_256_DIGEST_LEN], Vec<u8>>,
}

impl MemoryContentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct blobs held.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn put(&self, content: &[u8]) -> Result<String, StoreError> {
        let id = ContentIdentifier::for_content(content)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let cid = id.to_string();
        // Identical content maps to the same key, so a second put is a no-op.
        self.blobs
            .entry(*id.digest())
            .or_insert_with(|| content.to_vec());
        log::debug!("stored {} bytes under {}", content.len(), cid);
        Ok(cid)
    }

    async fn get(&self, cid: &str) -> Result<Vec<u8>, StoreError> {
        let digest = extract_digest(cid)?;
        let blob = self
            .blobs
            .get(&digest)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(cid.to_string()))?;
        log::trace!("fetched {} bytes from {}", blob.len(), cid);
        Ok(blob)
    }
}
