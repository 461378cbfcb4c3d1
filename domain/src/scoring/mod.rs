//! The scoring engine
//!
//! Reduces a complete [`ResponseSet`] into per-domain and per-facet
//! averages. Pure function of its inputs, no side effects.

pub mod summary;

use crate::inventory::catalog::Catalog;
use crate::inventory::domain::Domain;
use crate::inventory::facet::Facet;
use crate::response::ResponseSet;
use summary::{DomainScore, FacetScore, ScoreSummary};
use thiserror::Error;

/// Scoring errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// The response set is missing a rating for a catalog item.
    ///
    /// The answering flow makes this unreachable by construction (it only
    /// reaches `result` after every item passed the selection guard), but
    /// silently skipping an unanswered item would bias the averaging
    /// denominators, so the engine rejects incomplete input outright.
    #[error("no rating recorded for item {number}")]
    MissingResponse { number: u8 },
}

/// Compute domain and facet averages for a complete response set.
///
/// Effective score per item = `6 - rating` for reverse-keyed items, else
/// the rating itself. Sums accumulate into fixed arrays indexed by the
/// category ordinals, then divide by the catalog's per-category counts.
/// A category with zero items averages 0 rather than failing on division.
///
/// Output is ordered by category definition order — a display-stability
/// guarantee, not a ranking.
pub fn score(catalog: &Catalog, responses: &ResponseSet) -> Result<ScoreSummary, ScoringError> {
    let mut domain_sums = [0u32; Domain::COUNT];
    let mut facet_sums = [0u32; Facet::COUNT];

    for item in catalog.items() {
        let rating = responses
            .rating(item.number)
            .ok_or(ScoringError::MissingResponse {
                number: item.number,
            })?;
        let effective = u32::from(item.effective_score(rating).value());
        domain_sums[item.domain.index()] += effective;
        facet_sums[item.facet.index()] += effective;
    }

    let domains = Domain::ALL
        .iter()
        .map(|&domain| DomainScore {
            domain,
            average: mean(domain_sums[domain.index()], catalog.domain_count(domain)),
        })
        .collect();
    let facets = Facet::ALL
        .iter()
        .map(|&facet| FacetScore {
            facet,
            average: mean(facet_sums[facet.index()], catalog.facet_count(facet)),
        })
        .collect();

    Ok(ScoreSummary::new(domains, facets))
}

fn mean(sum: u32, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        f64::from(sum) / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::item::RawItem;
    use crate::rating::Rating;

    fn raw(number: u8, domain: &str, facet: &str, reverse: bool) -> RawItem {
        RawItem {
            number,
            text: format!("Statement {number}."),
            domain: domain.to_string(),
            facet: facet.to_string(),
            reverse,
        }
    }

    fn rating(value: u8) -> Rating {
        Rating::try_new(value).unwrap()
    }

    #[test]
    fn test_reverse_keyed_pair_end_to_end() {
        // Item A plain, item B reverse-keyed, both extraversion/sociability.
        // A=4, B=2 → effective 4 and 6-2=4 → both averages 4.00.
        let catalog = Catalog::from_raw(vec![
            raw(1, "Extraversion", "Sociability", false),
            raw(2, "Extraversion", "Sociability", true),
        ])
        .unwrap();
        let mut responses = ResponseSet::new();
        responses.record(1, rating(4));
        responses.record(2, rating(2));

        let summary = score(&catalog, &responses).unwrap();
        assert_eq!(summary.domain_average(Domain::Extraversion), 4.0);
        assert_eq!(summary.facet_average(Facet::Sociability), 4.0);
    }

    #[test]
    fn test_zero_item_categories_score_zero() {
        let catalog = Catalog::from_raw(vec![raw(1, "Extraversion", "Sociability", false)])
            .unwrap();
        let mut responses = ResponseSet::new();
        responses.record(1, rating(5));

        let summary = score(&catalog, &responses).unwrap();
        assert_eq!(summary.domain_average(Domain::Agreeableness), 0.0);
        assert_eq!(summary.facet_average(Facet::Trust), 0.0);
    }

    #[test]
    fn test_averages_stay_in_scale_range() {
        let catalog = Catalog::from_raw(vec![
            raw(1, "Negative Emotionality", "Anxiety", false),
            raw(2, "Negative Emotionality", "Anxiety", true),
            raw(3, "Negative Emotionality", "Depression", false),
        ])
        .unwrap();
        let mut responses = ResponseSet::new();
        responses.record(1, rating(1));
        responses.record(2, rating(5));
        responses.record(3, rating(3));

        let summary = score(&catalog, &responses).unwrap();
        for entry in summary.domains() {
            if catalog.domain_count(entry.domain) > 0 {
                assert!((1.0..=5.0).contains(&entry.average));
            }
        }
        assert_eq!(summary.domain_average(Domain::NegativeEmotionality), 5.0 / 3.0);
    }

    #[test]
    fn test_missing_response_is_rejected() {
        let catalog = Catalog::from_raw(vec![
            raw(1, "Extraversion", "Sociability", false),
            raw(2, "Extraversion", "Sociability", false),
        ])
        .unwrap();
        let mut responses = ResponseSet::new();
        responses.record(1, rating(3));

        let err = score(&catalog, &responses).unwrap_err();
        assert_eq!(err, ScoringError::MissingResponse { number: 2 });
    }

    #[test]
    fn test_output_follows_definition_order() {
        let catalog = Catalog::from_raw(vec![
            raw(1, "Open-Mindedness", "Creative Imagination", false),
            raw(2, "Extraversion", "Sociability", false),
        ])
        .unwrap();
        let mut responses = ResponseSet::new();
        responses.record(1, rating(5));
        responses.record(2, rating(1));

        let summary = score(&catalog, &responses).unwrap();
        let order: Vec<Domain> = summary.domains().iter().map(|d| d.domain).collect();
        assert_eq!(order, Domain::ALL.to_vec());
        let facet_order: Vec<Facet> = summary.facets().iter().map(|f| f.facet).collect();
        assert_eq!(facet_order, Facet::ALL.to_vec());
    }
}
