//! SEO surface: internal-linking scores and structured data.

pub mod related;
pub mod schema;

pub use related::related_venues;
