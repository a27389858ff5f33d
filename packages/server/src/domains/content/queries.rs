//! GROQ queries and typed fetch helpers.

use anyhow::{Context, Result};
use sanity_client::FetchOptions;
use serde_json::{json, Value};

use super::models::{Review, Venue};
use crate::kernel::BaseContentStore;

/// Projection shared by every venue query.
const VENUE_PROJECTION: &str = r#"{
  _id, title, slug, rating, priceRange, address, description,
  "city": city->{title, slug},
  "categories": categories[]->{title, slug}
}"#;

/// A single venue located by its own slug and its city's slug.
pub async fn venue_by_slug(
    content: &dyn BaseContentStore,
    city: &str,
    slug: &str,
    options: &FetchOptions,
) -> Result<Option<Venue>> {
    let query = format!(
        r#"*[_type == "venue" && slug.current == $slug && city->slug.current == $city][0]{VENUE_PROJECTION}"#
    );
    let value = content
        .fetch(&query, &[("city", json!(city)), ("slug", json!(slug))], options)
        .await?;
    decode(value).context("Failed to decode venue")
}

/// Every other venue in the same city, the candidate pool for
/// related-content scoring.
pub async fn venues_in_city(
    content: &dyn BaseContentStore,
    city: &str,
    exclude_slug: &str,
    options: &FetchOptions,
) -> Result<Vec<Venue>> {
    let query = format!(
        r#"*[_type == "venue" && city->slug.current == $city && slug.current != $slug]{VENUE_PROJECTION}"#
    );
    let value = content
        .fetch(
            &query,
            &[("city", json!(city)), ("slug", json!(exclude_slug))],
            options,
        )
        .await?;
    Ok(decode(value).context("Failed to decode venue list")?.unwrap_or_default())
}

/// Latest published reviews for a venue, newest first.
pub async fn reviews_for_venue(
    content: &dyn BaseContentStore,
    venue_slug: &str,
    options: &FetchOptions,
) -> Result<Vec<Review>> {
    let query = r#"*[_type == "review" && venue->slug.current == $slug]
        | order(publishedAt desc)[0...20]
        { _id, title, slug, rating, excerpt, author, publishedAt }"#;
    let value = content
        .fetch(query, &[("slug", json!(venue_slug))], options)
        .await?;
    Ok(decode(value).context("Failed to decode review list")?.unwrap_or_default())
}

/// Treat an absent result and a JSON null the same way: no match.
fn decode<T: serde::de::DeserializeOwned>(value: Option<Value>) -> Result<Option<T>> {
    match value {
        Some(Value::Null) | None => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}
