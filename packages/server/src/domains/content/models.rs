//! Typed content-store documents, matching the GROQ projections in
//! `queries.rs`.

use chrono::{DateTime, Utc};
use sanity_client::Slug;
use serde::{Deserialize, Serialize};

/// Projected city summary embedded in a venue (`city->{title, slug}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitySummary {
    pub title: String,
    pub slug: Slug,
}

/// Projected category summary (`categories[]->{title, slug}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub title: String,
    pub slug: Slug,
}

/// A venue detail document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub city: CitySummary,
    #[serde(default)]
    pub categories: Vec<CategorySummary>,
    /// Average rating on a 0-5 scale.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Price bucket, 1 (cheap) to 4 (expensive).
    #[serde(default, rename = "priceRange")]
    pub price_range: Option<u8>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A published review of a venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
}
