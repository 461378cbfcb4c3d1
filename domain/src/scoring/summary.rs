//! Score summary value objects

use crate::inventory::domain::Domain;
use crate::inventory::facet::Facet;
use serde::Serialize;

/// Average effective score for one domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainScore {
    pub domain: Domain,
    /// Unrounded mean in `[1, 5]`, or 0 for a domain with no items
    pub average: f64,
}

/// Average effective score for one facet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FacetScore {
    pub facet: Facet,
    /// Unrounded mean in `[1, 5]`, or 0 for a facet with no items
    pub average: f64,
}

/// Per-category averages for a complete response set.
///
/// Derived, never persisted; entries are in category definition order.
/// Values are unrounded — 2-decimal formatting is a display concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    domains: Vec<DomainScore>,
    facets: Vec<FacetScore>,
}

impl ScoreSummary {
    pub fn new(domains: Vec<DomainScore>, facets: Vec<FacetScore>) -> ScoreSummary {
        ScoreSummary { domains, facets }
    }

    /// Domain scores in definition order
    pub fn domains(&self) -> &[DomainScore] {
        &self.domains
    }

    /// Facet scores in definition order
    pub fn facets(&self) -> &[FacetScore] {
        &self.facets
    }

    /// The average for one domain
    pub fn domain_average(&self, domain: Domain) -> f64 {
        self.domains[domain.index()].average
    }

    /// The average for one facet
    pub fn facet_average(&self, facet: Facet) -> f64 {
        self.facets[facet.index()].average
    }

    /// Facet scores belonging to `domain`, in definition order
    pub fn facets_of(&self, domain: Domain) -> impl Iterator<Item = &FacetScore> {
        self.facets.iter().filter(move |f| f.facet.domain() == domain)
    }
}
