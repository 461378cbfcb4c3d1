//! Personality domain enumeration

use serde::{Deserialize, Serialize};

/// One of the five top-level personality dimensions.
///
/// The set is closed: catalog records carry free-form labels, and
/// [`Domain::from_label`] is the only way a label becomes a `Domain`.
/// Variant order is the catalog definition order and is what score
/// output is emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Extraversion,
    Agreeableness,
    Conscientiousness,
    NegativeEmotionality,
    OpenMindedness,
}

impl Domain {
    /// Number of domains (array-accumulator width)
    pub const COUNT: usize = 5;

    /// All domains in definition order
    pub const ALL: [Domain; Domain::COUNT] = [
        Domain::Extraversion,
        Domain::Agreeableness,
        Domain::Conscientiousness,
        Domain::NegativeEmotionality,
        Domain::OpenMindedness,
    ];

    /// Display label — also the label catalog records must use (case-sensitive)
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Extraversion => "Extraversion",
            Domain::Agreeableness => "Agreeableness",
            Domain::Conscientiousness => "Conscientiousness",
            Domain::NegativeEmotionality => "Negative Emotionality",
            Domain::OpenMindedness => "Open-Mindedness",
        }
    }

    /// Resolve a raw catalog label to a domain, if it matches exactly
    pub fn from_label(label: &str) -> Option<Domain> {
        Domain::ALL.iter().copied().find(|d| d.label() == label)
    }

    /// Ordinal for fixed-size accumulator indexing
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
