//! Application layer for bigfive
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer; catalog data arrives through the [`CatalogSource`]
//! port implemented in infrastructure.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::catalog_source::{CatalogSource, CatalogSourceError};
pub use use_cases::load_catalog::{LoadCatalogError, LoadCatalogUseCase};
pub use use_cases::score_assessment::ScoreAssessmentUseCase;
