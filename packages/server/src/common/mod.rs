//! Shared helpers used across domains.

pub mod utils;

pub use utils::join_url;
