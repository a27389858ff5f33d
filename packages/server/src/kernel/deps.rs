//! Server dependencies (trait objects for testability)
//!
//! Central dependency container handed to route handlers and domain
//! functions. All external services sit behind trait abstractions so
//! tests can inject recording mocks.

use anyhow::Result;
use async_trait::async_trait;
use indexnow_client::{IndexNowClient, IndexNowConfig};
use sanity_client::{FetchOptions, SanityClient, SanityConfig};
use serde_json::Value;
use std::sync::Arc;

use crate::config::Config;
use crate::domains::revalidation::IndexNowMode;
use crate::kernel::edge_cache::{EdgeCacheClient, NoopCacheService};
use crate::kernel::{BaseCacheService, BaseContentStore, BaseIndexNotifier};

// =============================================================================
// SanityClient Adapter (implements BaseContentStore trait)
// =============================================================================

/// Wrapper around SanityClient that implements BaseContentStore
pub struct SanityContentStore(pub Arc<SanityClient>);

impl SanityContentStore {
    pub fn new(client: Arc<SanityClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseContentStore for SanityContentStore {
    async fn fetch(
        &self,
        query: &str,
        params: &[(&str, Value)],
        options: &FetchOptions,
    ) -> Result<Option<Value>> {
        self.0
            .fetch(query, params, options)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// IndexNowClient Adapter (implements BaseIndexNotifier trait)
// =============================================================================

/// Wrapper around IndexNowClient that implements BaseIndexNotifier
pub struct IndexNowAdapter(pub Arc<IndexNowClient>);

impl IndexNowAdapter {
    pub fn new(client: Arc<IndexNowClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseIndexNotifier for IndexNowAdapter {
    async fn submit(&self, urls: &[String]) -> Result<()> {
        self.0
            .submit(urls)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub content: Arc<dyn BaseContentStore>,
    pub cache: Arc<dyn BaseCacheService>,
    /// Absent when the IndexNow configuration is incomplete; the
    /// dispatcher short-circuits in that case.
    pub index_notifier: Option<Arc<dyn BaseIndexNotifier>>,
    pub index_mode: IndexNowMode,
}

impl ServerDeps {
    /// Build the production dependency set from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let sanity = SanityClient::new(SanityConfig {
            project_id: config.sanity_project_id.clone(),
            dataset: config.sanity_dataset.clone(),
            api_version: config.sanity_api_version.clone(),
            token: config.sanity_api_token.clone(),
        });
        let content: Arc<dyn BaseContentStore> =
            Arc::new(SanityContentStore::new(Arc::new(sanity)));

        let cache: Arc<dyn BaseCacheService> = match &config.cache_purge_url {
            Some(url) => Arc::new(EdgeCacheClient::new(
                url.clone(),
                config.cache_purge_token.clone(),
            )?),
            None => {
                tracing::warn!("CACHE_PURGE_URL not set, cache purges are no-ops");
                Arc::new(NoopCacheService)
            }
        };

        let index_notifier: Option<Arc<dyn BaseIndexNotifier>> = match (
            &config.indexnow_host,
            &config.indexnow_key,
            &config.indexnow_key_location,
        ) {
            (Some(host), Some(key), Some(key_location)) => {
                let client = IndexNowClient::new(IndexNowConfig::new(host, key, key_location));
                Some(Arc::new(IndexNowAdapter::new(Arc::new(client))))
            }
            _ => {
                tracing::warn!("IndexNow configuration incomplete, search notification disabled");
                None
            }
        };

        let index_mode = if config.environment.is_production() && !config.indexnow_dry_run {
            IndexNowMode::Live
        } else {
            IndexNowMode::DryRun
        };

        Ok(Self {
            content,
            cache,
            index_notifier,
            index_mode,
        })
    }
}
