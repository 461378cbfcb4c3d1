//! Application use cases

pub mod load_catalog;
pub mod score_assessment;
