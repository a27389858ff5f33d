//! Shared helpers for HTTP integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use server_core::config::{Config, Environment};
use server_core::kernel::ServerDeps;
use server_core::server::build_app;

/// Secret the test app verifies webhook deliveries with.
pub const WEBHOOK_SECRET: &str = "test-webhook-secret";

pub fn test_config() -> Config {
    Config {
        port: 0,
        environment: Environment::Development,
        site_base_url: "https://saborlocal.example".to_string(),
        sanity_project_id: "testproj".to_string(),
        sanity_dataset: "production".to_string(),
        sanity_api_version: "2024-01-01".to_string(),
        sanity_api_token: None,
        sanity_webhook_secret: WEBHOOK_SECRET.to_string(),
        cache_purge_url: None,
        cache_purge_token: None,
        indexnow_host: Some("saborlocal.example".to_string()),
        indexnow_key: Some("0123456789abcdef".to_string()),
        indexnow_key_location: Some(
            "https://saborlocal.example/0123456789abcdef.txt".to_string(),
        ),
        indexnow_dry_run: true,
    }
}

/// Serve the app on an ephemeral port and return its address.
pub async fn spawn_app(config: Config, deps: ServerDeps) -> SocketAddr {
    let app = build_app(&config, Arc::new(deps));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("serve app");
    });
    addr
}
