//! Application setup and server configuration.

use std::sync::Arc;

use axum::http::{header::CONTENT_TYPE, Method};
use axum::routing::get;
use axum::Router;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::revalidation::webhook;
use crate::kernel::ServerDeps;
use crate::server::routes::{health_handler, related_venues_handler, venue_schema_handler};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
    pub config: Arc<Config>,
}

/// Build the Axum application router
///
/// The public read API is rate limited per client IP. The webhook is
/// authenticated by signature instead and stays outside the limiter so
/// a burst of content edits is never dropped.
pub fn build_app(config: &Config, deps: Arc<ServerDeps>) -> Router {
    let state = AxumAppState {
        deps,
        config: Arc::new(config.clone()),
    };

    // CORS configuration for the public read API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    // Rate limiting: 10 requests per second per IP with burst of 20
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .use_headers() // Extract IP from X-Forwarded-For header
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );
    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    Router::new()
        // Public read API with rate limiting
        .route(
            "/api/venues/:city/:venue/related",
            get(related_venues_handler),
        )
        .route("/api/venues/:city/:venue/schema", get(venue_schema_handler))
        .layer(rate_limit_layer)
        // Revalidation webhook (POST + GET diagnostic)
        .merge(webhook::router())
        // Health check (no rate limit)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
