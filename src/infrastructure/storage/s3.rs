use async_trait::async_trait;
use aws_sdk_s3::config::Builder;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::{Client, config::BehaviorVersion, config::Credentials, config::Region};
use bytes::Bytes;
use tracing::info;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct StorageError(pub String);

/// Key-addressed blob storage for finished videos.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes `body` at `key`, replacing any existing object.
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str)
        -> Result<(), StorageError>;

    async fn delete_object(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Clone)]
pub struct StorageService {
    pub client: Client,
    pub bucket: String,
}

impl StorageService {
    pub fn new(
        endpoint: &str,
        region: &str,
        bucket: &str,
        access_key: &str,
        secret_key: &str,
    ) -> Self {
        let credentials = Credentials::new(access_key, secret_key, None, None, "static");

        let config = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .endpoint_url(endpoint)
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        let client = Client::from_conf(config);

        info!("✅ Storage client ready ({} / bucket {})", endpoint, bucket);

        Self {
            client,
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for StorageService {
    async fn put_object(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        // S3 PutObject replaces an existing key, which gives the upsert semantics.
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StorageError(DisplayErrorContext(e).to_string()))?;

        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError(DisplayErrorContext(e).to_string()))?;

        Ok(())
    }
}
