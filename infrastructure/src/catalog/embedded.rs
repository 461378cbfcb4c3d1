//! Embedded stock catalog

use super::document::CatalogDocument;
use bigfive_application::{CatalogSource, CatalogSourceError};
use bigfive_domain::RawItem;

/// The stock BFI-2 item set, compiled into the binary
const BFI2_TOML: &str = include_str!("../../data/bfi2.toml");

/// Catalog source backed by the embedded BFI-2 item set.
///
/// This is the default when no `--catalog` path is given.
#[derive(Debug, Default)]
pub struct EmbeddedCatalogSource;

impl CatalogSource for EmbeddedCatalogSource {
    fn load(&self) -> Result<Vec<RawItem>, CatalogSourceError> {
        CatalogDocument::parse(BFI2_TOML)
    }

    fn origin(&self) -> String {
        "embedded BFI-2 catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigfive_domain::{Catalog, Domain, Facet};
    use std::collections::BTreeSet;

    #[test]
    fn test_embedded_catalog_is_valid() {
        let raw = EmbeddedCatalogSource.load().unwrap();
        let catalog = Catalog::from_raw(raw).unwrap();
        assert_eq!(catalog.len(), 60);
    }

    #[test]
    fn test_embedded_numbers_are_one_to_sixty() {
        let raw = EmbeddedCatalogSource.load().unwrap();
        let numbers: BTreeSet<u8> = raw.iter().map(|item| item.number).collect();
        assert_eq!(numbers, (1..=60).collect());
    }

    #[test]
    fn test_embedded_category_counts() {
        let raw = EmbeddedCatalogSource.load().unwrap();
        let catalog = Catalog::from_raw(raw).unwrap();
        for domain in Domain::ALL {
            assert_eq!(catalog.domain_count(domain), 12, "{domain}");
        }
        for facet in Facet::ALL {
            assert_eq!(catalog.facet_count(facet), 4, "{facet}");
        }
    }

    #[test]
    fn test_embedded_reverse_keying() {
        let raw = EmbeddedCatalogSource.load().unwrap();
        let reversed: Vec<u8> = raw
            .iter()
            .filter(|item| item.reverse)
            .map(|item| item.number)
            .collect();
        // Published BFI-2 keying: 30 reverse-keyed items
        assert_eq!(
            reversed,
            vec![
                3, 4, 5, 8, 9, 11, 12, 16, 17, 22, 23, 24, 25, 26, 28, 29, 30, 31, 36, 37, 42,
                44, 45, 47, 48, 49, 50, 51, 55, 58
            ]
        );
    }
}
