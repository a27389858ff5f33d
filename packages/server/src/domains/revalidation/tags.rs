//! Invalidation tag vocabulary.
//!
//! Tags are stable, derived deterministically from document type and
//! id. The cache owns tag-to-response associations; this module only
//! decides which tags a change touches.

use super::event::{ChangeEvent, DocumentType};

/// Tags attached to every cached response built from content-store data.
pub const GLOBAL_TAGS: [&str; 2] = ["content", "sanity"];

/// Tag grouping all cached responses for a document type.
pub fn type_tag(document_type: &DocumentType) -> Option<&'static str> {
    match document_type {
        DocumentType::Venue => Some("venues"),
        DocumentType::Review => Some("reviews"),
        DocumentType::City => Some("cities"),
        DocumentType::Category => Some("categories"),
        DocumentType::Post => Some("posts"),
        DocumentType::Other(_) => None,
    }
}

/// Instance tag for a single venue's cached responses.
pub fn venue_tag(venue_id: &str) -> String {
    format!("venue-{venue_id}")
}

/// Tags to invalidate for one change event, in invalidation order:
/// global tags first, then the type tag, then (for reviews) the parent
/// venue's instance tag.
pub fn tags_for_event(event: &ChangeEvent) -> Vec<String> {
    let mut tags: Vec<String> = GLOBAL_TAGS.iter().map(|tag| tag.to_string()).collect();

    if let Some(tag) = type_tag(&event.document_type) {
        tags.push(tag.to_string());
    }

    if event.document_type == DocumentType::Review {
        if let Some(venue_id) = event.venue.as_ref().and_then(|venue| venue.id.as_deref()) {
            tags.push(venue_tag(venue_id));
        }
    }

    tags
}

/// Static tag vocabulary reported by the GET diagnostic. Instance tags
/// are unbounded and intentionally absent.
pub fn known_tags() -> Vec<&'static str> {
    vec![
        "content",
        "sanity",
        "venues",
        "reviews",
        "cities",
        "categories",
        "posts",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::revalidation::event::VenueRef;

    fn event(document_type: DocumentType) -> ChangeEvent {
        ChangeEvent {
            document_type,
            document_id: "doc".to_string(),
            slug: None,
            city_slug: None,
            venue: None,
        }
    }

    #[test]
    fn venue_event_hits_global_and_type_tags() {
        let tags = tags_for_event(&event(DocumentType::Venue));
        assert_eq!(tags, vec!["content", "sanity", "venues"]);
    }

    #[test]
    fn review_event_adds_parent_venue_instance_tag() {
        let mut review = event(DocumentType::Review);
        review.venue = Some(VenueRef {
            id: Some("v1".to_string()),
            slug: None,
            city_slug: None,
        });

        let tags = tags_for_event(&review);
        assert_eq!(tags, vec!["content", "sanity", "reviews", "venue-v1"]);
    }

    #[test]
    fn review_without_venue_ref_skips_instance_tag() {
        let tags = tags_for_event(&event(DocumentType::Review));
        assert_eq!(tags, vec!["content", "sanity", "reviews"]);
    }

    #[test]
    fn unknown_type_only_hits_global_tags() {
        let tags = tags_for_event(&event(DocumentType::Other("banner".to_string())));
        assert_eq!(tags, vec!["content", "sanity"]);
    }
}
