//! The validated item catalog

use super::domain::Domain;
use super::facet::Facet;
use super::item::{Item, RawItem};
use std::collections::BTreeSet;
use thiserror::Error;

/// Catalog construction errors.
///
/// These are configuration defects, not runtime user errors: any of them
/// must abort initialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item {number}: unknown category label \"{label}\"")]
    UnknownCategory { number: u8, label: String },

    #[error("item {number}: facet \"{facet}\" does not belong to domain \"{domain}\"")]
    FacetDomainMismatch {
        number: u8,
        facet: Facet,
        domain: Domain,
    },

    #[error("duplicate item number {0}")]
    DuplicateItemNumber(u8),
}

/// The ordered, validated item list, immutable after load.
///
/// Item order is the input order; numbers are unique keys but are never
/// renumbered, so callers must not assume compactness. Per-category item
/// counts are computed once at construction and serve as the averaging
/// denominators in [`crate::scoring::score`].
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    domain_counts: [usize; Domain::COUNT],
    facet_counts: [usize; Facet::COUNT],
}

impl Catalog {
    /// Normalize raw records into a catalog.
    ///
    /// Fails with [`CatalogError::UnknownCategory`] if a domain or facet
    /// label resolves to no known variant, with
    /// [`CatalogError::FacetDomainMismatch`] if an item claims a facet
    /// outside its domain, and with [`CatalogError::DuplicateItemNumber`]
    /// if a sequence number repeats.
    pub fn from_raw(raw: Vec<RawItem>) -> Result<Catalog, CatalogError> {
        let mut items = Vec::with_capacity(raw.len());
        let mut seen = BTreeSet::new();
        let mut domain_counts = [0usize; Domain::COUNT];
        let mut facet_counts = [0usize; Facet::COUNT];

        for record in raw {
            let domain = Domain::from_label(&record.domain).ok_or_else(|| {
                CatalogError::UnknownCategory {
                    number: record.number,
                    label: record.domain.clone(),
                }
            })?;
            let facet = Facet::from_label(&record.facet).ok_or_else(|| {
                CatalogError::UnknownCategory {
                    number: record.number,
                    label: record.facet.clone(),
                }
            })?;
            if facet.domain() != domain {
                return Err(CatalogError::FacetDomainMismatch {
                    number: record.number,
                    facet,
                    domain,
                });
            }
            if !seen.insert(record.number) {
                return Err(CatalogError::DuplicateItemNumber(record.number));
            }

            domain_counts[domain.index()] += 1;
            facet_counts[facet.index()] += 1;
            items.push(Item {
                number: record.number,
                text: record.text,
                domain,
                facet,
                reverse: record.reverse,
            });
        }

        Ok(Catalog {
            items,
            domain_counts,
            facet_counts,
        })
    }

    /// Items in input order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items belonging to `domain`
    pub fn domain_count(&self, domain: Domain) -> usize {
        self.domain_counts[domain.index()]
    }

    /// Number of items belonging to `facet`
    pub fn facet_count(&self, facet: Facet) -> usize {
        self.facet_counts[facet.index()]
    }
}
