//! Questionnaire items

use super::domain::Domain;
use super::facet::Facet;
use crate::rating::Rating;
use serde::{Deserialize, Serialize};

/// A raw item record as supplied by an external catalog source.
///
/// `domain` and `facet` are free-form labels; they are resolved against
/// the fixed enumerations when the [`Catalog`](super::catalog::Catalog)
/// is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    /// Sequence number — a unique key, expected but not required to be 1..=60
    pub number: u8,
    /// Statement text, completing "I am someone who..."
    pub text: String,
    /// Domain label, matched case-sensitively
    pub domain: String,
    /// Facet label, matched case-sensitively
    pub facet: String,
    /// Whether the item is reverse-keyed
    #[serde(default)]
    pub reverse: bool,
}

/// A normalized questionnaire item with resolved category references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Sequence number — unique key within the catalog
    pub number: u8,
    /// Statement text, completing "I am someone who..."
    pub text: String,
    /// Owning domain
    pub domain: Domain,
    /// Owning facet
    pub facet: Facet,
    /// Whether the item is reverse-keyed
    pub reverse: bool,
}

impl Item {
    /// The rating that enters aggregation for this item.
    ///
    /// Reverse-keyed items flip the rating (`6 - r` on the 1–5 scale);
    /// all others pass it through unchanged.
    pub fn effective_score(&self, rating: Rating) -> Rating {
        if self.reverse { rating.reversed() } else { rating }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(reverse: bool) -> Item {
        Item {
            number: 1,
            text: "Is outgoing, sociable.".to_string(),
            domain: Domain::Extraversion,
            facet: Facet::Sociability,
            reverse,
        }
    }

    #[test]
    fn test_effective_score_passthrough() {
        let item = item(false);
        for value in 1..=5 {
            let rating = Rating::try_new(value).unwrap();
            assert_eq!(item.effective_score(rating), rating);
        }
    }

    #[test]
    fn test_effective_score_reversed() {
        let item = item(true);
        let rating = Rating::try_new(2).unwrap();
        assert_eq!(item.effective_score(rating).value(), 4);
    }
}
