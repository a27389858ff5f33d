//! Cache invalidation fan-out.
//!
//! Tag purges run first, then path purges. Every call is isolated: one
//! failing purge is logged and recorded, never propagated, so the rest
//! of the set still goes through.

use serde::Serialize;

use super::event::ChangeEvent;
use super::paths::sitemap_paths;
use super::tags::tags_for_event;
use crate::kernel::BaseCacheService;

/// Outcome of one path invalidation, reported back to the webhook caller.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub path: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Invalidate the tag groups affected by the event.
///
/// Failures are logged and swallowed: tag purges are idempotent and a
/// missed purge only delays freshness until the next change.
pub async fn invalidate_tags(cache: &dyn BaseCacheService, event: &ChangeEvent) {
    for tag in tags_for_event(event) {
        match cache.invalidate_tag(&tag).await {
            Ok(()) => tracing::debug!(tag = %tag, "Tag invalidated"),
            Err(e) => tracing::error!(tag = %tag, error = %e, "Tag invalidation failed"),
        }
    }
}

/// Invalidate every resolved path plus the sitemap paths for the
/// event's type, collecting a per-path result list.
pub async fn invalidate_paths(
    cache: &dyn BaseCacheService,
    event: &ChangeEvent,
    paths: &[String],
) -> Vec<PathResult> {
    let sitemaps = sitemap_paths(&event.document_type);
    let all_paths = paths
        .iter()
        .map(String::as_str)
        .chain(sitemaps.iter().copied());

    let mut results = Vec::new();
    for path in all_paths {
        match cache.invalidate_path(path).await {
            Ok(()) => {
                tracing::debug!(path = %path, "Path invalidated");
                results.push(PathResult {
                    path: path.to_string(),
                    success: true,
                    error: None,
                });
            }
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Path invalidation failed");
                results.push(PathResult {
                    path: path.to_string(),
                    success: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }
    results
}
