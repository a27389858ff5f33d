//! Content-store webhook endpoint.
//!
//! POST verifies the delivery signature, parses the change payload, and
//! sequences tag invalidation, path resolution, path invalidation and
//! IndexNow dispatch, then reports a per-path summary. GET is a
//! side-effect-free diagnostic listing the tag vocabulary.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use super::dispatch::submit_to_indexnow;
use super::event::ChangeEvent;
use super::invalidator::{invalidate_paths, invalidate_tags, PathResult};
use super::paths::resolve_paths;
use super::signature::{verify_signature, SIGNATURE_HEADER};
use super::tags::{known_tags, type_tag};
use crate::server::app::AxumAppState;

/// Summary returned to the content store on a successful revalidation.
#[derive(Debug, Serialize)]
pub struct RevalidateSummary {
    pub success: bool,
    pub revalidated: bool,
    #[serde(rename = "type")]
    pub document_type: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub paths: Vec<PathResult>,
    #[serde(rename = "indexnowSubmitted")]
    pub indexnow_submitted: usize,
    /// Epoch milliseconds of the response.
    pub now: i64,
    pub timestamp: String,
}

/// Build the axum router for the revalidation endpoints.
pub fn router() -> Router<AxumAppState> {
    Router::new().route("/api/revalidate", post(handle_revalidate).get(revalidate_info))
}

/// Handle a change delivery from the content store.
///
/// The raw body is needed for signature verification, so parsing
/// happens only after the delivery is authenticated.
async fn handle_revalidate(
    State(state): State<AxumAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let verified = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|header| verify_signature(&state.config.sanity_webhook_secret, header, &body))
        .unwrap_or(false);

    if !verified {
        tracing::warn!("Webhook delivery rejected: invalid signature");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid signature"})),
        )
            .into_response();
    }

    match process_change(&state, &body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "Revalidation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal Server Error",
                    "message": "Revalidation failed",
                    "timestamp": Utc::now().to_rfc3339(),
                })),
            )
                .into_response()
        }
    }
}

/// Steps 2-6: parse, invalidate tags, resolve paths, invalidate paths,
/// dispatch the index notification.
async fn process_change(state: &AxumAppState, body: &[u8]) -> anyhow::Result<Response> {
    let payload: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) => return Ok(bad_request()),
    };
    let Some(event) = ChangeEvent::from_body(&payload) else {
        return Ok(bad_request());
    };

    tracing::info!(
        document_type = %event.document_type.as_str(),
        id = %event.document_id,
        "Change event received"
    );

    invalidate_tags(state.deps.cache.as_ref(), &event).await;

    let paths = resolve_paths(&event);
    let results = invalidate_paths(state.deps.cache.as_ref(), &event, &paths).await;

    // Started here, completed (or not) after the response is sent.
    let submitted = submit_to_indexnow(&state.deps, &state.config.site_base_url, &paths);

    let now = Utc::now();
    let summary = RevalidateSummary {
        success: true,
        revalidated: true,
        document_type: event.document_type.as_str().to_string(),
        id: event.document_id.clone(),
        tag: type_tag(&event.document_type).map(str::to_string),
        paths: results,
        indexnow_submitted: submitted,
        now: now.timestamp_millis(),
        timestamp: now.to_rfc3339(),
    };

    Ok((StatusCode::OK, Json(summary)).into_response())
}

fn bad_request() -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({"message": "Bad Request"}))).into_response()
}

/// Liveness diagnostic: static tag vocabulary, no side effects.
async fn revalidate_info() -> Json<Value> {
    Json(json!({
        "message": "Revalidation webhook is live",
        "timestamp": Utc::now().to_rfc3339(),
        "tags": known_tags(),
    }))
}
