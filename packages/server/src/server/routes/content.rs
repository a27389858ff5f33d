//! Public SEO read routes.
//!
//! Responses are annotated with surrogate keys and a max-age derived
//! from the same FetchOptions used for the content fetch, so the
//! revalidation pipeline's tag purges hit exactly these responses.

use axum::extract::{Path, State};
use axum::http::header::{HeaderName, CACHE_CONTROL};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sanity_client::FetchOptions;
use serde_json::{json, Value};

use crate::domains::content::models::Venue;
use crate::domains::content::queries::{reviews_for_venue, venue_by_slug, venues_in_city};
use crate::domains::revalidation::{venue_tag, GLOBAL_TAGS};
use crate::domains::seo::related::related_venues;
use crate::domains::seo::schema::{breadcrumb_schema, restaurant_schema, review_schema};
use crate::server::app::AxumAppState;

/// Revalidation interval for venue-derived responses.
const VENUE_REVALIDATE_SECS: u64 = 3600;
/// Maximum related venues returned per page.
const RELATED_LIMIT: usize = 6;

/// GET /api/venues/:city/:venue/related
pub async fn related_venues_handler(
    State(state): State<AxumAppState>,
    Path((city, venue_slug)): Path<(String, String)>,
) -> Response {
    let options = FetchOptions::tagged(vec!["venues".to_string()], VENUE_REVALIDATE_SECS);

    match build_related(&state, &city, &venue_slug, &options).await {
        Ok(Some((venue, related))) => cached_json(
            &venue,
            &options,
            json!({"venue": venue, "related": related}),
        ),
        Ok(None) => venue_not_found(),
        Err(e) => {
            tracing::error!(city = %city, venue = %venue_slug, error = %e, "Related lookup failed");
            internal_error()
        }
    }
}

/// GET /api/venues/:city/:venue/schema
pub async fn venue_schema_handler(
    State(state): State<AxumAppState>,
    Path((city, venue_slug)): Path<(String, String)>,
) -> Response {
    let options = FetchOptions::tagged(
        vec!["venues".to_string(), "reviews".to_string()],
        VENUE_REVALIDATE_SECS,
    );

    match build_schemas(&state, &city, &venue_slug, &options).await {
        Ok(Some((venue, schemas))) => cached_json(&venue, &options, json!({"schemas": schemas})),
        Ok(None) => venue_not_found(),
        Err(e) => {
            tracing::error!(city = %city, venue = %venue_slug, error = %e, "Schema lookup failed");
            internal_error()
        }
    }
}

async fn build_related(
    state: &AxumAppState,
    city: &str,
    venue_slug: &str,
    options: &FetchOptions,
) -> anyhow::Result<Option<(Venue, Vec<Venue>)>> {
    let content = state.deps.content.as_ref();
    let Some(venue) = venue_by_slug(content, city, venue_slug, options).await? else {
        return Ok(None);
    };

    let candidates = venues_in_city(content, city, venue_slug, options).await?;
    let related = related_venues(&venue, candidates, RELATED_LIMIT);
    Ok(Some((venue, related)))
}

async fn build_schemas(
    state: &AxumAppState,
    city: &str,
    venue_slug: &str,
    options: &FetchOptions,
) -> anyhow::Result<Option<(Venue, Vec<Value>)>> {
    let content = state.deps.content.as_ref();
    let Some(venue) = venue_by_slug(content, city, venue_slug, options).await? else {
        return Ok(None);
    };

    let reviews = reviews_for_venue(content, venue_slug, options).await?;
    let base_url = &state.config.site_base_url;

    let mut schemas = vec![
        restaurant_schema(&venue, base_url),
        breadcrumb_schema(&venue, base_url),
    ];
    schemas.extend(
        reviews
            .iter()
            .map(|review| review_schema(review, &venue, base_url)),
    );
    Ok(Some((venue, schemas)))
}

/// 200 response annotated for the edge cache: the fetch tags plus the
/// global and instance tags the invalidator purges.
fn cached_json(venue: &Venue, options: &FetchOptions, body: Value) -> Response {
    let mut tags: Vec<String> = GLOBAL_TAGS.iter().map(|tag| tag.to_string()).collect();
    tags.extend(options.tags.iter().cloned());
    tags.push(venue_tag(&venue.id));

    let max_age = options.revalidate.unwrap_or(VENUE_REVALIDATE_SECS);
    let headers = [
        (
            CACHE_CONTROL,
            format!("public, s-maxage={max_age}, stale-while-revalidate=60"),
        ),
        (HeaderName::from_static("surrogate-key"), tags.join(" ")),
    ];

    (headers, Json(body)).into_response()
}

fn venue_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Venue not found"})),
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"message": "Internal Server Error"})),
    )
        .into_response()
}
