//! Durable object storage for uploaded product images.

use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod s3;

pub use memory::MemoryObjectStore;
pub use s3::S3ObjectStore;

/// Canned access control applied to a stored object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectAcl {
    Private,
    PublicRead,
}

#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend rejected or failed the request.
    #[error("object store request failed: {0}")]
    Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Flat key namespace supporting single-shot writes.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `data` under `key`, replacing any previous object.
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        acl: ObjectAcl,
    ) -> StorageResult<()>;
}
