//! Pure IndexNow URL submission client.
//!
//! Submits batches of changed URLs to an IndexNow endpoint so search
//! engines recrawl them sooner. One POST per batch, no retries; callers
//! own retry and dry-run policy.
//!
//! # Example
//!
//! ```rust,ignore
//! use indexnow_client::{IndexNowClient, IndexNowConfig};
//!
//! let client = IndexNowClient::new(IndexNowConfig::new(
//!     "saborlocal.es",
//!     "0123456789abcdef",
//!     "https://saborlocal.es/0123456789abcdef.txt",
//! ));
//! client.submit(&["https://saborlocal.es/madrid".to_string()]).await?;
//! ```

use serde::Serialize;
use thiserror::Error;

/// Shared submission endpoint; propagates to all participating engines.
pub const DEFAULT_ENDPOINT: &str = "https://api.indexnow.org/indexnow";

pub type Result<T> = std::result::Result<T, IndexNowError>;

#[derive(Debug, Error)]
pub enum IndexNowError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IndexNow API error ({status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone)]
pub struct IndexNowConfig {
    /// Host the submitted URLs belong to, e.g. "saborlocal.es".
    pub host: String,
    /// API key proving ownership of the host.
    pub key: String,
    /// Public URL where the key file is served.
    pub key_location: String,
    pub endpoint: String,
}

impl IndexNowConfig {
    pub fn new(
        host: impl Into<String>,
        key: impl Into<String>,
        key_location: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            key: key.into(),
            key_location: key_location.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitRequest<'a> {
    host: &'a str,
    key: &'a str,
    key_location: &'a str,
    url_list: &'a [String],
}

pub struct IndexNowClient {
    client: reqwest::Client,
    config: IndexNowConfig,
}

impl IndexNowClient {
    pub fn new(config: IndexNowConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Submit a batch of absolute URLs. Any 2xx status is success;
    /// anything else is returned as an error with the response body.
    pub async fn submit(&self, urls: &[String]) -> Result<()> {
        let request = SubmitRequest {
            host: &self.config.host,
            key: &self.config.key,
            key_location: &self.config.key_location,
            url_list: urls,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(IndexNowError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(count = urls.len(), "IndexNow batch accepted");
        Ok(())
    }
}
