//! S3-compatible storage backend using AWS SDK.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;

use crate::storage::{ObjectAcl, ObjectStore, StorageError, StorageResult};

/// Object store writing into a single S3 bucket.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Build a client from the default AWS credential chain.
    ///
    /// `endpoint` targets S3-compatible services; `force_path_style` is
    /// required by MinIO and friends.
    pub async fn new(
        bucket: String,
        region: String,
        endpoint: Option<String>,
        force_path_style: bool,
    ) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(region))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = endpoint {
            builder = builder.endpoint_url(endpoint);
        }
        builder = builder.force_path_style(force_path_style);

        log::info!("S3 object store initialized for bucket {bucket}");

        Self {
            client: Client::from_conf(builder.build()),
            bucket,
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        acl: ObjectAcl,
    ) -> StorageResult<()> {
        let acl = match acl {
            ObjectAcl::Private => ObjectCannedAcl::Private,
            ObjectAcl::PublicRead => ObjectCannedAcl::PublicRead,
        };

        let size = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .acl(acl)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                log::error!(
                    "S3 PUT failed - Bucket: {}, Key: {}, Error: {:?}",
                    self.bucket,
                    key,
                    e
                );
                StorageError::Backend(DisplayErrorContext(&e).to_string())
            })?;

        log::debug!("Stored {size} bytes at s3://{}/{key}", self.bucket);
        Ok(())
    }
}
