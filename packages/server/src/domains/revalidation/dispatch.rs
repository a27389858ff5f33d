//! Search-engine notification dispatch (IndexNow).
//!
//! Runs after path invalidation. The live submission is detached from
//! the request so a slow or failing index API can never hold up or fail
//! the webhook response.

use crate::common::join_url;
use crate::kernel::ServerDeps;

/// How submissions are performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexNowMode {
    /// Submit over the network in a detached task.
    Live,
    /// Log the would-be payload and skip network I/O. Default outside
    /// production.
    DryRun,
}

/// Hand the invalidated paths to the IndexNow API.
///
/// Returns the number of URLs handed off, not the number confirmed
/// delivered; delivery happens (or fails) after the response is sent.
/// Returns 0 without I/O when the path set is empty or IndexNow is not
/// configured.
pub fn submit_to_indexnow(deps: &ServerDeps, base_url: &str, paths: &[String]) -> usize {
    if paths.is_empty() {
        return 0;
    }

    let Some(notifier) = deps.index_notifier.clone() else {
        tracing::info!("IndexNow not configured, skipping submission");
        return 0;
    };

    let urls: Vec<String> = paths.iter().map(|path| join_url(base_url, path)).collect();
    let count = urls.len();

    if deps.index_mode == IndexNowMode::DryRun {
        tracing::info!(count, urls = ?urls, "IndexNow dry run, skipping submission");
        return count;
    }

    tokio::spawn(async move {
        match notifier.submit(&urls).await {
            Ok(()) => tracing::info!(count, "IndexNow submission accepted"),
            Err(e) => tracing::error!(count, error = %e, "IndexNow submission failed"),
        }
    });

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::TestDependencies;
    use std::time::Duration;

    fn paths() -> Vec<String> {
        vec!["/madrid/pizzeria-x".to_string(), "/".to_string()]
    }

    #[tokio::test]
    async fn dry_run_counts_without_submitting() {
        let test_deps = TestDependencies::new();
        let deps = test_deps.deps();

        let count = submit_to_indexnow(&deps, "https://saborlocal.example", &paths());

        assert_eq!(count, 2);
        assert!(test_deps.index_notifier.batches().is_empty());
    }

    #[tokio::test]
    async fn empty_path_set_returns_zero() {
        let test_deps = TestDependencies::new().live_indexing();
        let deps = test_deps.deps();

        assert_eq!(submit_to_indexnow(&deps, "https://saborlocal.example", &[]), 0);
        assert!(test_deps.index_notifier.batches().is_empty());
    }

    #[tokio::test]
    async fn unconfigured_notifier_returns_zero() {
        let test_deps = TestDependencies::new().without_index_notifier();
        let deps = test_deps.deps();

        assert_eq!(
            submit_to_indexnow(&deps, "https://saborlocal.example", &paths()),
            0
        );
    }

    #[tokio::test]
    async fn live_submission_builds_absolute_urls() {
        let test_deps = TestDependencies::new().live_indexing();
        let deps = test_deps.deps();

        let count = submit_to_indexnow(&deps, "https://saborlocal.example/", &paths());
        assert_eq!(count, 2);

        // The submission runs in a detached task; give it a moment.
        let mut batches = test_deps.index_notifier.batches();
        for _ in 0..50 {
            if !batches.is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
            batches = test_deps.index_notifier.batches();
        }

        assert_eq!(batches.len(), 1);
        assert_eq!(
            batches[0],
            vec![
                "https://saborlocal.example/madrid/pizzeria-x",
                "https://saborlocal.example/"
            ]
        );
    }

    #[tokio::test]
    async fn failing_notifier_still_reports_attempted_count() {
        let test_deps = TestDependencies::new()
            .live_indexing()
            .with_index_notifier(crate::kernel::MockIndexNotifier::failing());
        let deps = test_deps.deps();

        let count = submit_to_indexnow(&deps, "https://saborlocal.example", &paths());
        assert_eq!(count, 2);
    }
}
