// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "which paths does a change touch") lives in
// domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseCacheService)

use anyhow::Result;
use async_trait::async_trait;
use sanity_client::FetchOptions;
use serde_json::Value;

// =============================================================================
// Cache Service Trait (Infrastructure - edge cache purge)
// =============================================================================

/// Purge interface of the edge cache fronting the site.
///
/// Both operations are idempotent: purging a tag or path that holds no
/// cached responses is a no-op on the cache side, so concurrent or
/// repeated invalidations are safe without coordination.
#[async_trait]
pub trait BaseCacheService: Send + Sync {
    /// Invalidate every cached response annotated with the surrogate key.
    async fn invalidate_tag(&self, tag: &str) -> Result<()>;

    /// Invalidate the cached response for an exact path.
    async fn invalidate_path(&self, path: &str) -> Result<()>;
}

// =============================================================================
// Index Notifier Trait (Infrastructure - search engine ping)
// =============================================================================

#[async_trait]
pub trait BaseIndexNotifier: Send + Sync {
    /// Submit a batch of absolute URLs for recrawl.
    async fn submit(&self, urls: &[String]) -> Result<()>;
}

// =============================================================================
// Content Store Trait (Infrastructure - GROQ reads)
// =============================================================================

/// Untyped query access to the content store. Domain fetch helpers
/// deserialize the returned value into their document types.
#[async_trait]
pub trait BaseContentStore: Send + Sync {
    /// Run a GROQ query. `Ok(None)` means the query matched nothing.
    async fn fetch(
        &self,
        query: &str,
        params: &[(&str, Value)],
        options: &FetchOptions,
    ) -> Result<Option<Value>>;
}
