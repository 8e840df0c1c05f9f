use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid download URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Failed to fetch video: {0}")]
    Request(#[from] reqwest::Error),
}

/// Retrieves the finished video from the generation service.
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn fetch(&self, download_url: &str) -> Result<Bytes, FetchError>;
}

#[derive(Clone, Default)]
pub struct HttpVideoSource {
    client: reqwest::Client,
}

impl HttpVideoSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VideoSource for HttpVideoSource {
    async fn fetch(&self, download_url: &str) -> Result<Bytes, FetchError> {
        let url = Url::parse(download_url)?;

        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        debug!("Fetched {} bytes from {}", bytes.len(), download_url);
        Ok(bytes)
    }
}
