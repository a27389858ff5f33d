//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod edge_cache;
pub mod test_dependencies;
pub mod traits;

pub use deps::{IndexNowAdapter, SanityContentStore, ServerDeps};
pub use edge_cache::{EdgeCacheClient, NoopCacheService};
pub use test_dependencies::{
    MockCacheService, MockContentStore, MockIndexNotifier, TestDependencies,
};
pub use traits::*;
