//! Parsed webhook change payload.
//!
//! The content store delivers the changed document's projection:
//! `_type`, `_id`, its slug, and for nested documents the parent
//! references needed to locate every page that embeds it.

use serde_json::Value;

/// Document types known to the path and tag rules.
///
/// `Other` carries the raw type string of anything unrecognized; such
/// events still trigger the global invalidations but no type-specific
/// rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentType {
    Venue,
    Review,
    City,
    Category,
    Post,
    Other(String),
}

impl DocumentType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "venue" => DocumentType::Venue,
            "review" => DocumentType::Review,
            "city" => DocumentType::City,
            "category" => DocumentType::Category,
            "post" => DocumentType::Post,
            other => DocumentType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DocumentType::Venue => "venue",
            DocumentType::Review => "review",
            DocumentType::City => "city",
            DocumentType::Category => "category",
            DocumentType::Post => "post",
            DocumentType::Other(raw) => raw.as_str(),
        }
    }
}

/// A review's parent venue as embedded in the payload.
#[derive(Debug, Clone)]
pub struct VenueRef {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub city_slug: Option<String>,
}

/// The inbound webhook payload, reduced to what invalidation needs.
/// Constructed fresh per request from the verified body; never persisted.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub document_type: DocumentType,
    pub document_id: String,
    pub slug: Option<String>,
    pub city_slug: Option<String>,
    pub venue: Option<VenueRef>,
}

impl ChangeEvent {
    /// Extract a ChangeEvent from the verified webhook body.
    ///
    /// Returns `None` when `_type` is missing, which the endpoint maps
    /// to 400. Every other field is optional; missing identifiers mean
    /// the corresponding path rules silently contribute nothing.
    pub fn from_body(body: &Value) -> Option<Self> {
        let raw_type = body.get("_type")?.as_str()?;

        let document_id = body
            .get("_id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let venue = body.get("venue").map(|venue| VenueRef {
            id: venue
                .get("_ref")
                .or_else(|| venue.get("_id"))
                .and_then(Value::as_str)
                .map(str::to_string),
            slug: slug_current(venue.get("slug")),
            city_slug: venue
                .get("city")
                .and_then(|city| slug_current(city.get("slug"))),
        });

        Some(Self {
            document_type: DocumentType::parse(raw_type),
            document_id,
            slug: slug_current(body.get("slug")),
            city_slug: body
                .get("city")
                .and_then(|city| slug_current(city.get("slug"))),
            venue,
        })
    }
}

/// Pull `current` out of a `{"current": "..."}` slug object.
fn slug_current(value: Option<&Value>) -> Option<String> {
    value?.get("current")?.as_str().map(str::to_string)
}
