//! Related-venue scoring for internal linking.
//!
//! Candidates sharing structure with the subject (its city, its
//! categories) are ranked first; rating and price proximity separate
//! near-ties. Candidates with no structural overlap are dropped so a
//! venue page never links to an unrelated one.

use std::cmp::Ordering;

use crate::domains::content::models::Venue;

const SAME_CITY_WEIGHT: f64 = 3.0;
const SHARED_CATEGORY_WEIGHT: f64 = 2.0;
const RATING_PROXIMITY_WEIGHT: f64 = 1.5;
const SAME_PRICE_WEIGHT: f64 = 0.5;

/// Rank the candidates most related to the subject, best first.
///
/// Deterministic: equal scores fall back to slug order. The subject
/// itself is never returned.
pub fn related_venues(subject: &Venue, candidates: Vec<Venue>, limit: usize) -> Vec<Venue> {
    let mut scored: Vec<(f64, Venue)> = candidates
        .into_iter()
        .filter(|candidate| candidate.id != subject.id)
        .map(|candidate| (score(subject, &candidate), candidate))
        .filter(|(score, _)| *score > 0.0)
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.slug.current.cmp(&b.1.slug.current))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, venue)| venue)
        .collect()
}

/// Internal-linking score between two venues.
///
/// Proximity terms only apply on top of a structural match; without a
/// shared city or category the score is zero.
pub fn score(subject: &Venue, candidate: &Venue) -> f64 {
    let mut score = 0.0;

    if subject.city.slug == candidate.city.slug {
        score += SAME_CITY_WEIGHT;
    }

    let shared_categories = candidate
        .categories
        .iter()
        .filter(|candidate_category| {
            subject
                .categories
                .iter()
                .any(|subject_category| subject_category.slug == candidate_category.slug)
        })
        .count();
    score += shared_categories as f64 * SHARED_CATEGORY_WEIGHT;

    if score == 0.0 {
        return 0.0;
    }

    if let (Some(a), Some(b)) = (subject.rating, candidate.rating) {
        let distance = ((a - b).abs() / 5.0).min(1.0);
        score += RATING_PROXIMITY_WEIGHT * (1.0 - distance);
    }

    if let (Some(a), Some(b)) = (subject.price_range, candidate.price_range) {
        if a == b {
            score += SAME_PRICE_WEIGHT;
        }
    }

    score
}
