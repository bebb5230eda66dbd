// Path: crates/api/src/storage/mod.rs

//! API for an external, content-addressed store that holds letter text.
//!
//! The store owns connections, retries and the storage format. The payload core only
//! ever sees the identifier string it returns, and the raw digest inside it.

use crate::error::StoreError;
use async_trait::async_trait;

/// A content-addressed blob store.
///
/// Implementations must return identifiers that the content identifier codec accepts,
/// so that the digest can be extracted and stored on-chain.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Stores `content` and returns its content identifier.
    async fn put(&self, content: &[u8]) -> Result<String, StoreError>;

    /// Fetches the content stored under `cid`.
    async fn get(&self, cid: &str) -> Result<Vec<u8>, StoreError>;

    /// Fetches the content stored under `cid` and decodes it as UTF-8 text.
    async fn get_text(&self, cid: &str) -> Result<String, StoreError> {
        let bytes = self.get(cid).await?;
        log::trace!("decoding {} bytes stored under {} as text", bytes.len(), cid);
        String::from_utf8(bytes).map_err(|e| StoreError::Decode(e.to_string()))
    }
}
