//! Integration tests for the public SEO read routes.

mod common;

use common::{spawn_app, test_config};
use serde_json::{json, Value};
use server_core::kernel::{MockContentStore, TestDependencies};

fn venue_doc(id: &str, slug: &str, categories: &[&str], rating: f64) -> Value {
    json!({
        "_id": id,
        "title": slug,
        "slug": {"current": slug},
        "city": {"title": "Madrid", "slug": {"current": "madrid"}},
        "categories": categories
            .iter()
            .map(|category| json!({"title": category, "slug": {"current": category}}))
            .collect::<Vec<Value>>(),
        "rating": rating,
        "priceRange": 2
    })
}

#[tokio::test]
async fn related_route_ranks_candidates_and_annotates_cache() {
    let content = MockContentStore::new()
        .with_response(venue_doc("v1", "pizzeria-x", &["pizza"], 4.5))
        .with_response(json!([
            venue_doc("v2", "sushi-z", &["sushi"], 4.6),
            venue_doc("v3", "pizzeria-y", &["pizza"], 4.4),
        ]));
    let test_deps = TestDependencies::new().with_content(content);
    let addr = spawn_app(test_config(), test_deps.deps()).await;

    let response = reqwest::get(format!("http://{addr}/api/venues/madrid/pizzeria-x/related"))
        .await
        .expect("request sends");
    assert_eq!(response.status().as_u16(), 200);

    let cache_control = response
        .headers()
        .get("cache-control")
        .expect("cache-control header")
        .to_str()
        .expect("header is ascii")
        .to_string();
    assert!(cache_control.contains("s-maxage=3600"));

    let surrogate = response
        .headers()
        .get("surrogate-key")
        .expect("surrogate-key header")
        .to_str()
        .expect("header is ascii")
        .to_string();
    assert!(surrogate.contains("venues"));
    assert!(surrogate.contains("venue-v1"));
    assert!(surrogate.contains("content"));

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["venue"]["_id"], "v1");

    let related = body["related"].as_array().expect("related array");
    assert_eq!(related.len(), 2);
    // Shared category ranks the other pizzeria first.
    assert_eq!(related[0]["_id"], "v3");
    assert_eq!(related[1]["_id"], "v2");
}

#[tokio::test]
async fn related_route_returns_404_for_unknown_venue() {
    let test_deps = TestDependencies::new();
    let addr = spawn_app(test_config(), test_deps.deps()).await;

    let response = reqwest::get(format!("http://{addr}/api/venues/madrid/nope/related"))
        .await
        .expect("request sends");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn schema_route_embeds_restaurant_breadcrumbs_and_reviews() {
    let content = MockContentStore::new()
        .with_response(venue_doc("v1", "pizzeria-x", &["pizza"], 4.5))
        .with_response(json!([
            {
                "_id": "r1",
                "title": "Great pizza",
                "slug": {"current": "great-pizza"},
                "rating": 5.0,
                "author": "Ana"
            }
        ]));
    let test_deps = TestDependencies::new().with_content(content);
    let addr = spawn_app(test_config(), test_deps.deps()).await;

    let response = reqwest::get(format!("http://{addr}/api/venues/madrid/pizzeria-x/schema"))
        .await
        .expect("request sends");
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("json body");
    let schemas = body["schemas"].as_array().expect("schemas array");
    assert_eq!(schemas.len(), 3);

    assert_eq!(schemas[0]["@type"], "Restaurant");
    assert_eq!(
        schemas[0]["url"],
        "https://saborlocal.example/madrid/pizzeria-x"
    );
    assert_eq!(schemas[1]["@type"], "BreadcrumbList");
    assert_eq!(schemas[2]["@type"], "Review");
    assert_eq!(
        schemas[2]["itemReviewed"]["@id"],
        "https://saborlocal.example/madrid/pizzeria-x"
    );
}

#[tokio::test]
async fn health_reports_content_store_status() {
    let test_deps = TestDependencies::new();
    let addr = spawn_app(test_config(), test_deps.deps()).await;

    let response = reqwest::get(format!("http://{addr}/health"))
        .await
        .expect("request sends");
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["content_store"]["status"], "ok");
}
