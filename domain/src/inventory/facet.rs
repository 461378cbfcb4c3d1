//! Personality facet enumeration

use super::domain::Domain;
use serde::{Deserialize, Serialize};

/// One of the fifteen personality sub-dimensions.
///
/// Each facet belongs to exactly one [`Domain`], three facets per domain.
/// Variant order groups facets by owning domain, in domain definition
/// order — score output follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet {
    // Extraversion
    Sociability,
    Assertiveness,
    EnergyLevel,
    // Agreeableness
    Compassion,
    Respectfulness,
    Trust,
    // Conscientiousness
    Organization,
    Productiveness,
    Responsibility,
    // Negative Emotionality
    Anxiety,
    Depression,
    EmotionalVolatility,
    // Open-Mindedness
    IntellectualCuriosity,
    AestheticSensitivity,
    CreativeImagination,
}

impl Facet {
    /// Number of facets (array-accumulator width)
    pub const COUNT: usize = 15;

    /// All facets in definition order
    pub const ALL: [Facet; Facet::COUNT] = [
        Facet::Sociability,
        Facet::Assertiveness,
        Facet::EnergyLevel,
        Facet::Compassion,
        Facet::Respectfulness,
        Facet::Trust,
        Facet::Organization,
        Facet::Productiveness,
        Facet::Responsibility,
        Facet::Anxiety,
        Facet::Depression,
        Facet::EmotionalVolatility,
        Facet::IntellectualCuriosity,
        Facet::AestheticSensitivity,
        Facet::CreativeImagination,
    ];

    /// Display label — also the label catalog records must use (case-sensitive)
    pub fn label(&self) -> &'static str {
        match self {
            Facet::Sociability => "Sociability",
            Facet::Assertiveness => "Assertiveness",
            Facet::EnergyLevel => "Energy Level",
            Facet::Compassion => "Compassion",
            Facet::Respectfulness => "Respectfulness",
            Facet::Trust => "Trust",
            Facet::Organization => "Organization",
            Facet::Productiveness => "Productiveness",
            Facet::Responsibility => "Responsibility",
            Facet::Anxiety => "Anxiety",
            Facet::Depression => "Depression",
            Facet::EmotionalVolatility => "Emotional Volatility",
            Facet::IntellectualCuriosity => "Intellectual Curiosity",
            Facet::AestheticSensitivity => "Aesthetic Sensitivity",
            Facet::CreativeImagination => "Creative Imagination",
        }
    }

    /// Resolve a raw catalog label to a facet, if it matches exactly
    pub fn from_label(label: &str) -> Option<Facet> {
        Facet::ALL.iter().copied().find(|f| f.label() == label)
    }

    /// The domain this facet belongs to
    pub fn domain(&self) -> Domain {
        match self {
            Facet::Sociability | Facet::Assertiveness | Facet::EnergyLevel => {
                Domain::Extraversion
            }
            Facet::Compassion | Facet::Respectfulness | Facet::Trust => Domain::Agreeableness,
            Facet::Organization | Facet::Productiveness | Facet::Responsibility => {
                Domain::Conscientiousness
            }
            Facet::Anxiety | Facet::Depression | Facet::EmotionalVolatility => {
                Domain::NegativeEmotionality
            }
            Facet::IntellectualCuriosity
            | Facet::AestheticSensitivity
            | Facet::CreativeImagination => Domain::OpenMindedness,
        }
    }

    /// Ordinal for fixed-size accumulator indexing
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
