//! Path resolution: which public pages embed a changed document.

use super::event::{ChangeEvent, DocumentType};

/// Root-relative paths to invalidate for a change event.
///
/// Rules fire in order and are unioned with first-occurrence
/// de-duplication. A rule missing a required identifier contributes
/// nothing rather than a partial path. The site root is always last
/// so detail pages come first in the summary.
pub fn resolve_paths(event: &ChangeEvent) -> Vec<String> {
    let mut paths: Vec<String> = Vec::new();

    match &event.document_type {
        DocumentType::Venue => {
            if let (Some(city), Some(venue)) = (&event.city_slug, &event.slug) {
                push_unique(&mut paths, format!("/{city}/{venue}"));
                push_unique(&mut paths, format!("/{city}"));
            }
        }
        DocumentType::Review => {
            if let Some(venue_ref) = &event.venue {
                if let (Some(city), Some(venue)) = (&venue_ref.city_slug, &venue_ref.slug) {
                    if let Some(review) = &event.slug {
                        push_unique(&mut paths, format!("/{city}/{venue}/review/{review}"));
                    }
                    push_unique(&mut paths, format!("/{city}/{venue}"));
                    push_unique(&mut paths, format!("/{city}"));
                }
            }
        }
        DocumentType::City => {
            if let Some(city) = &event.slug {
                push_unique(&mut paths, format!("/{city}"));
            }
        }
        DocumentType::Category => {
            if let Some(category) = &event.slug {
                push_unique(&mut paths, format!("/categorias/{category}"));
            }
        }
        DocumentType::Post => {
            push_unique(&mut paths, "/blog".to_string());
        }
        DocumentType::Other(_) => {}
    }

    push_unique(&mut paths, "/".to_string());
    paths
}

/// Sitemap paths invalidated alongside the resolved set: the
/// type-specific sitemap when one exists, then the global sitemap and
/// the sitemap API route.
pub fn sitemap_paths(document_type: &DocumentType) -> Vec<&'static str> {
    let mut paths = Vec::new();
    match document_type {
        DocumentType::Venue => paths.push("/sitemap-venues.xml"),
        DocumentType::Review => paths.push("/sitemap-reviews.xml"),
        _ => {}
    }
    paths.push("/sitemap.xml");
    paths.push("/api/sitemap");
    paths
}

fn push_unique(paths: &mut Vec<String>, path: String) {
    if !paths.iter().any(|existing| existing == &path) {
        paths.push(path);
    }
}
