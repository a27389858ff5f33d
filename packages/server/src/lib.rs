// SaborLocal revalidation service - API core
//
// Backend service for the SaborLocal review site: webhook-driven cache
// revalidation and search-index notification, plus the SEO read API
// (related venues, JSON-LD structured data) backed by the content store.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
