//! HTTP purge client for the edge cache fronting the site.
//!
//! The cache groups responses by surrogate key (tag) and by exact path;
//! a purge request carries one or the other. Purges are idempotent on
//! the cache side.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;

use super::BaseCacheService;

#[derive(Debug, Serialize)]
struct PurgeRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<Vec<&'a str>>,
}

pub struct EdgeCacheClient {
    client: reqwest::Client,
    purge_url: String,
    token: Option<String>,
}

impl EdgeCacheClient {
    pub fn new(purge_url: String, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            purge_url,
            token,
        })
    }

    async fn purge(&self, request: &PurgeRequest<'_>) -> Result<()> {
        let mut builder = self.client.post(&self.purge_url).json(request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .context("Failed to send purge request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Cache purge error {}: {}", status, body);
        }

        Ok(())
    }
}

#[async_trait]
impl BaseCacheService for EdgeCacheClient {
    async fn invalidate_tag(&self, tag: &str) -> Result<()> {
        self.purge(&PurgeRequest {
            tags: Some(vec![tag]),
            paths: None,
        })
        .await
    }

    async fn invalidate_path(&self, path: &str) -> Result<()> {
        self.purge(&PurgeRequest {
            tags: None,
            paths: Some(vec![path]),
        })
        .await
    }
}

/// No-op cache service for environments without a purge endpoint.
pub struct NoopCacheService;

#[async_trait]
impl BaseCacheService for NoopCacheService {
    async fn invalidate_tag(&self, _tag: &str) -> Result<()> {
        Ok(())
    }

    async fn invalidate_path(&self, _path: &str) -> Result<()> {
        Ok(())
    }
}
