//! Likert rating value object

use serde::{Deserialize, Deserializer, Serialize};

/// A single Likert rating on the fixed 1–5 scale (Value Object).
///
/// Construction is the only validation point: a `Rating` in hand is
/// always in range. Deserialization goes through [`Rating::try_new`],
/// so a rating cannot enter through serde out of range either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Rating, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Rating::try_new(value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "rating {value} outside the {}-{} scale",
                Rating::MIN,
                Rating::MAX
            ))
        })
    }
}

impl Rating {
    /// Lowest rating on the scale
    pub const MIN: u8 = 1;
    /// Highest rating on the scale
    pub const MAX: u8 = 5;

    /// Create a rating, returning `None` if out of range
    pub fn try_new(value: u8) -> Option<Rating> {
        (Rating::MIN..=Rating::MAX).contains(&value).then_some(Rating(value))
    }

    /// The raw rating value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The reverse-keyed transform: `6 - r` on the 1–5 scale.
    ///
    /// The constant is `MIN + MAX`; generalizing to another scale means
    /// recomputing it. The transform is an involution.
    pub fn reversed(&self) -> Rating {
        Rating(Rating::MIN + Rating::MAX - self.0)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_scale() {
        for value in 1..=5 {
            assert_eq!(Rating::try_new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(Rating::try_new(0).is_none());
        assert!(Rating::try_new(6).is_none());
        assert!(Rating::try_new(255).is_none());
    }

    #[test]
    fn test_reversed_is_six_minus_rating() {
        let expected = [(1, 5), (2, 4), (3, 3), (4, 2), (5, 1)];
        for (value, reversed) in expected {
            assert_eq!(Rating::try_new(value).unwrap().reversed().value(), reversed);
        }
    }

    #[test]
    fn test_reversed_is_involution() {
        for value in 1..=5 {
            let rating = Rating::try_new(value).unwrap();
            assert_eq!(rating.reversed().reversed(), rating);
        }
    }

    #[test]
    fn test_deserialize_enforces_scale() {
        let rating: Rating = serde_json::from_str("3").unwrap();
        assert_eq!(rating.value(), 3);

        assert!(serde_json::from_str::<Rating>("0").is_err());
        assert!(serde_json::from_str::<Rating>("6").is_err());
    }

    #[test]
    fn test_serialize_is_transparent() {
        let rating = Rating::try_new(4).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
    }
}
