//! Collected ratings, keyed by item number

use crate::inventory::catalog::Catalog;
use crate::rating::Rating;
use std::collections::BTreeMap;

/// The ratings collected so far, keyed by item number.
///
/// Partial while the answering flow is in progress; complete iff it holds
/// exactly one rating per catalog item number. Created empty, mutated one
/// entry at a time, discarded on restart. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    ratings: BTreeMap<u8, Rating>,
}

impl ResponseSet {
    pub fn new() -> ResponseSet {
        ResponseSet::default()
    }

    /// Record (or overwrite) the rating for an item number
    pub fn record(&mut self, number: u8, rating: Rating) {
        self.ratings.insert(number, rating);
    }

    /// The recorded rating for an item number, if any
    pub fn rating(&self, number: u8) -> Option<Rating> {
        self.ratings.get(&number).copied()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Discard every recorded rating
    pub fn clear(&mut self) {
        self.ratings.clear();
    }

    /// Whether this set holds exactly one rating per catalog item number.
    ///
    /// Entries for numbers outside the catalog count against completeness:
    /// complete means exactly one entry per existing item, no more.
    pub fn is_complete_for(&self, catalog: &Catalog) -> bool {
        self.ratings.len() == catalog.len()
            && catalog
                .items()
                .iter()
                .all(|item| self.ratings.contains_key(&item.number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::item::RawItem;

    fn rating(value: u8) -> Rating {
        Rating::try_new(value).unwrap()
    }

    fn two_item_catalog() -> Catalog {
        let raw = |number: u8| RawItem {
            number,
            text: format!("Statement {number}."),
            domain: "Extraversion".to_string(),
            facet: "Sociability".to_string(),
            reverse: false,
        };
        Catalog::from_raw(vec![raw(1), raw(2)]).unwrap()
    }

    #[test]
    fn test_record_overwrites() {
        let mut responses = ResponseSet::new();
        responses.record(1, rating(2));
        responses.record(1, rating(5));
        assert_eq!(responses.rating(1), Some(rating(5)));
        assert_eq!(responses.len(), 1);
    }

    #[test]
    fn test_completeness() {
        let catalog = two_item_catalog();
        let mut responses = ResponseSet::new();
        assert!(!responses.is_complete_for(&catalog));

        responses.record(1, rating(3));
        assert!(!responses.is_complete_for(&catalog));

        responses.record(2, rating(4));
        assert!(responses.is_complete_for(&catalog));
    }

    #[test]
    fn test_extraneous_entries_break_completeness() {
        let catalog = two_item_catalog();
        let mut responses = ResponseSet::new();
        responses.record(1, rating(3));
        responses.record(2, rating(4));
        // Number 9 is not in the catalog: no longer exactly one entry
        // per existing item
        responses.record(9, rating(5));
        assert!(!responses.is_complete_for(&catalog));
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut responses = ResponseSet::new();
        responses.record(1, rating(3));
        responses.record(2, rating(4));
        responses.clear();
        assert!(responses.is_empty());
        assert_eq!(responses.rating(1), None);
    }
}
