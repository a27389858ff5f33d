pub mod content;
pub mod health;

pub use content::{related_venues_handler, venue_schema_handler};
pub use health::health_handler;
