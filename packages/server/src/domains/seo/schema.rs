//! JSON-LD structured data builders for venue pages.
//!
//! Each builder emits a self-contained schema.org node with absolute
//! URLs so the objects can be embedded as-is.

use serde_json::{json, Value};

use crate::common::join_url;
use crate::domains::content::models::{Review, Venue};

/// Canonical absolute URL of a venue's detail page.
pub fn venue_url(venue: &Venue, base_url: &str) -> String {
    join_url(
        base_url,
        &format!("/{}/{}", venue.city.slug.current, venue.slug.current),
    )
}

/// schema.org `Restaurant` node for a venue page.
pub fn restaurant_schema(venue: &Venue, base_url: &str) -> Value {
    let url = venue_url(venue, base_url);
    let mut node = json!({
        "@context": "https://schema.org",
        "@type": "Restaurant",
        "@id": url,
        "name": venue.title,
        "url": url,
    });

    if let Some(description) = &venue.description {
        node["description"] = json!(description);
    }
    if let Some(address) = &venue.address {
        node["address"] = json!({
            "@type": "PostalAddress",
            "streetAddress": address,
            "addressLocality": venue.city.title,
        });
    }
    if !venue.categories.is_empty() {
        let cuisines: Vec<&str> = venue
            .categories
            .iter()
            .map(|category| category.title.as_str())
            .collect();
        node["servesCuisine"] = json!(cuisines);
    }
    if let Some(price_range) = venue.price_range {
        node["priceRange"] = json!("€".repeat(usize::from(price_range)));
    }
    if let Some(rating) = venue.rating {
        node["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": rating,
            "bestRating": 5,
        });
    }

    node
}

/// schema.org `Review` node linked to its venue.
pub fn review_schema(review: &Review, venue: &Venue, base_url: &str) -> Value {
    let review_path = format!(
        "/{}/{}/review/{}",
        venue.city.slug.current, venue.slug.current, review.slug.current
    );
    let mut node = json!({
        "@context": "https://schema.org",
        "@type": "Review",
        "@id": join_url(base_url, &review_path),
        "name": review.title,
        "itemReviewed": {
            "@type": "Restaurant",
            "@id": venue_url(venue, base_url),
            "name": venue.title,
        },
    });

    if let Some(rating) = review.rating {
        node["reviewRating"] = json!({
            "@type": "Rating",
            "ratingValue": rating,
            "bestRating": 5,
        });
    }
    if let Some(author) = &review.author {
        node["author"] = json!({"@type": "Person", "name": author});
    }
    if let Some(excerpt) = &review.excerpt {
        node["reviewBody"] = json!(excerpt);
    }
    if let Some(published_at) = review.published_at {
        node["datePublished"] = json!(published_at.to_rfc3339());
    }

    node
}

/// schema.org `BreadcrumbList` from the home page down to the venue.
pub fn breadcrumb_schema(venue: &Venue, base_url: &str) -> Value {
    let crumbs = [
        ("Inicio", join_url(base_url, "/")),
        (
            venue.city.title.as_str(),
            join_url(base_url, &format!("/{}", venue.city.slug.current)),
        ),
        (venue.title.as_str(), venue_url(venue, base_url)),
    ];

    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(index, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": url,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::content::models::{CategorySummary, CitySummary};
    use sanity_client::Slug;

    const BASE: &str = "https://saborlocal.example";

    fn venue() -> Venue {
        Venue {
            id: "v1".to_string(),
            title: "Pizzeria X".to_string(),
            slug: Slug::new("pizzeria-x"),
            city: CitySummary {
                title: "Madrid".to_string(),
                slug: Slug::new("madrid"),
            },
            categories: vec![CategorySummary {
                title: "Pizza".to_string(),
                slug: Slug::new("pizza"),
            }],
            rating: Some(4.5),
            price_range: Some(2),
            address: Some("Calle Mayor 1".to_string()),
            description: None,
        }
    }

    fn review() -> Review {
        Review {
            id: "r1".to_string(),
            title: "Great pizza".to_string(),
            slug: Slug::new("great-pizza"),
            rating: Some(5.0),
            excerpt: Some("The best margherita in town.".to_string()),
            author: Some("Ana".to_string()),
            published_at: None,
        }
    }

    #[test]
    fn restaurant_node_has_required_members_and_absolute_url() {
        let node = restaurant_schema(&venue(), BASE);

        assert_eq!(node["@context"], "https://schema.org");
        assert_eq!(node["@type"], "Restaurant");
        assert_eq!(node["url"], "https://saborlocal.example/madrid/pizzeria-x");
        assert_eq!(node["priceRange"], "€€");
        assert_eq!(node["aggregateRating"]["ratingValue"], 4.5);
        assert_eq!(node["servesCuisine"][0], "Pizza");
    }

    #[test]
    fn review_node_links_back_to_the_venue() {
        let node = review_schema(&review(), &venue(), BASE);

        assert_eq!(node["@type"], "Review");
        assert_eq!(
            node["@id"],
            "https://saborlocal.example/madrid/pizzeria-x/review/great-pizza"
        );
        assert_eq!(
            node["itemReviewed"]["@id"],
            "https://saborlocal.example/madrid/pizzeria-x"
        );
        assert_eq!(node["author"]["name"], "Ana");
    }

    #[test]
    fn breadcrumbs_descend_from_home_to_venue() {
        let node = breadcrumb_schema(&venue(), BASE);
        let items = node["itemListElement"].as_array().expect("items");

        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["item"], "https://saborlocal.example/");
        assert_eq!(items[1]["name"], "Madrid");
        assert_eq!(items[2]["position"], 3);
        assert_eq!(
            items[2]["item"],
            "https://saborlocal.example/madrid/pizzeria-x"
        );
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let mut bare = venue();
        bare.rating = None;
        bare.address = None;
        bare.categories.clear();
        bare.price_range = None;

        let node = restaurant_schema(&bare, BASE);
        assert!(node.get("aggregateRating").is_none());
        assert!(node.get("address").is_none());
        assert!(node.get("servesCuisine").is_none());
        assert!(node.get("priceRange").is_none());
    }
}
