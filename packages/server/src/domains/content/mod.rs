//! Typed access to the content store.

pub mod models;
pub mod queries;

pub use models::{CategorySummary, CitySummary, Review, Venue};
