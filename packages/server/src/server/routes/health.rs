use axum::{extract::State, http::StatusCode, Json};
use sanity_client::FetchOptions;
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    content_store: ContentStoreHealth,
}

#[derive(Serialize)]
pub struct ContentStoreHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Probes the content store with a cheap id lookup under a 5 second
/// timeout. Returns 200 OK when healthy, 503 Service Unavailable
/// otherwise.
pub async fn health_handler(
    State(state): State<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let fetch_options = FetchOptions::fresh();
    let probe = state.deps.content.fetch(
        r#"*[_id == "health"][0]{_id}"#,
        &[],
        &fetch_options,
    );

    let content_store = match tokio::time::timeout(std::time::Duration::from_secs(5), probe).await
    {
        Ok(Ok(_)) => ContentStoreHealth {
            status: "ok".to_string(),
            error: None,
        },
        Ok(Err(e)) => ContentStoreHealth {
            status: "error".to_string(),
            error: Some(format!("Query failed: {e}")),
        },
        Err(_) => ContentStoreHealth {
            status: "error".to_string(),
            error: Some("Query timeout (>5s)".to_string()),
        },
    };

    let is_healthy = content_store.status == "ok";
    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            content_store,
        }),
    )
}
