//! Domain layer for bigfive
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Inventory
//!
//! The questionnaire itself: a fixed catalog of 60 items, each belonging to
//! one of 5 personality [`Domain`]s and one of 15 [`Facet`]s (3 per domain).
//! Some items are reverse-keyed: their wording is negatively phrased
//! relative to the trait, so their rating is flipped before aggregation.
//!
//! ## Scoring
//!
//! Given a complete set of ratings, [`score`] reduces the responses into
//! per-domain and per-facet averages ([`ScoreSummary`]).
//!
//! ## Assessment
//!
//! The answering flow: a small state machine (`intro → question(i) →
//! result`) that collects one [`Rating`] per item and guarantees, by
//! construction, that scoring only runs on a complete response set.

pub mod assessment;
pub mod inventory;
pub mod rating;
pub mod response;
pub mod scoring;

// Re-export commonly used types
pub use assessment::{Assessment, Screen};
pub use inventory::{
    catalog::{Catalog, CatalogError},
    domain::Domain,
    facet::Facet,
    item::{Item, RawItem},
};
pub use rating::Rating;
pub use response::ResponseSet;
pub use scoring::{
    score,
    summary::{DomainScore, FacetScore, ScoreSummary},
    ScoringError,
};
