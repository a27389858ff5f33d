// TestDependencies - mock implementations for testing
//
// Provides recording mocks that can be injected as ServerDeps for unit
// and integration tests. Kept out of #[cfg(test)] so integration tests
// in tests/ can use them.

use anyhow::Result;
use async_trait::async_trait;
use sanity_client::FetchOptions;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use super::{BaseCacheService, BaseContentStore, BaseIndexNotifier, ServerDeps};
use crate::domains::revalidation::IndexNowMode;

// =============================================================================
// Mock Cache Service
// =============================================================================

pub struct MockCacheService {
    tags: Arc<Mutex<Vec<String>>>,
    paths: Arc<Mutex<Vec<String>>>,
    failing_paths: Vec<String>,
}

impl MockCacheService {
    pub fn new() -> Self {
        Self {
            tags: Arc::new(Mutex::new(Vec::new())),
            paths: Arc::new(Mutex::new(Vec::new())),
            failing_paths: Vec::new(),
        }
    }

    /// Make purges of the given path fail, leaving all others working.
    pub fn with_failing_path(mut self, path: &str) -> Self {
        self.failing_paths.push(path.to_string());
        self
    }

    /// Tags invalidated so far, in call order.
    pub fn tags(&self) -> Vec<String> {
        self.tags.lock().unwrap().clone()
    }

    /// Paths invalidated so far, in call order. Failed purges are not
    /// recorded.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    pub fn was_tag_invalidated(&self, tag: &str) -> bool {
        self.tags.lock().unwrap().iter().any(|t| t == tag)
    }

    pub fn was_path_invalidated(&self, path: &str) -> bool {
        self.paths.lock().unwrap().iter().any(|p| p == path)
    }
}

impl Default for MockCacheService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseCacheService for MockCacheService {
    async fn invalidate_tag(&self, tag: &str) -> Result<()> {
        self.tags.lock().unwrap().push(tag.to_string());
        Ok(())
    }

    async fn invalidate_path(&self, path: &str) -> Result<()> {
        if self.failing_paths.iter().any(|p| p == path) {
            anyhow::bail!("purge backend unavailable");
        }
        self.paths.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

// =============================================================================
// Mock Index Notifier
// =============================================================================

pub struct MockIndexNotifier {
    batches: Arc<Mutex<Vec<Vec<String>>>>,
    failing: bool,
}

impl MockIndexNotifier {
    pub fn new() -> Self {
        Self {
            batches: Arc::new(Mutex::new(Vec::new())),
            failing: false,
        }
    }

    /// Make every submission fail with a transport-style error.
    pub fn failing() -> Self {
        Self {
            batches: Arc::new(Mutex::new(Vec::new())),
            failing: true,
        }
    }

    /// URL batches submitted so far.
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }
}

impl Default for MockIndexNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseIndexNotifier for MockIndexNotifier {
    async fn submit(&self, urls: &[String]) -> Result<()> {
        if self.failing {
            anyhow::bail!("index API unreachable");
        }
        self.batches.lock().unwrap().push(urls.to_vec());
        Ok(())
    }
}

// =============================================================================
// Mock Content Store
// =============================================================================

/// Returns queued responses in FIFO order; an exhausted queue behaves
/// like a query that matched nothing.
pub struct MockContentStore {
    responses: Arc<Mutex<Vec<Value>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockContentStore {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, value: Value) -> Self {
        self.responses.lock().unwrap().push(value);
        self
    }

    /// GROQ queries issued so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Default for MockContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseContentStore for MockContentStore {
    async fn fetch(
        &self,
        query: &str,
        _params: &[(&str, Value)],
        _options: &FetchOptions,
    ) -> Result<Option<Value>> {
        self.queries.lock().unwrap().push(query.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(None)
        } else {
            Ok(Some(responses.remove(0)))
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder bundling the mocks into a ServerDeps while keeping handles
/// to them for assertions.
pub struct TestDependencies {
    pub content: Arc<MockContentStore>,
    pub cache: Arc<MockCacheService>,
    pub index_notifier: Arc<MockIndexNotifier>,
    pub index_mode: IndexNowMode,
    index_configured: bool,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            content: Arc::new(MockContentStore::new()),
            cache: Arc::new(MockCacheService::new()),
            index_notifier: Arc::new(MockIndexNotifier::new()),
            index_mode: IndexNowMode::DryRun,
            index_configured: true,
        }
    }

    pub fn with_content(mut self, content: MockContentStore) -> Self {
        self.content = Arc::new(content);
        self
    }

    pub fn with_cache(mut self, cache: MockCacheService) -> Self {
        self.cache = Arc::new(cache);
        self
    }

    pub fn with_index_notifier(mut self, notifier: MockIndexNotifier) -> Self {
        self.index_notifier = Arc::new(notifier);
        self
    }

    /// Submit over the (mocked) network instead of dry-running.
    pub fn live_indexing(mut self) -> Self {
        self.index_mode = IndexNowMode::Live;
        self
    }

    /// Simulate a deployment without IndexNow configuration.
    pub fn without_index_notifier(mut self) -> Self {
        self.index_configured = false;
        self
    }

    pub fn deps(&self) -> ServerDeps {
        ServerDeps {
            content: self.content.clone(),
            cache: self.cache.clone(),
            index_notifier: if self.index_configured {
                Some(self.index_notifier.clone())
            } else {
                None
            },
            index_mode: self.index_mode,
        }
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
