//! The item inventory: fixed category enumerations and the item catalog.
//!
//! - [`domain::Domain`] — the 5 top-level personality dimensions
//! - [`facet::Facet`] — the 15 sub-dimensions, 3 per domain
//! - [`item::Item`] — a single questionnaire statement
//! - [`catalog::Catalog`] — the validated, ordered item list

pub mod catalog;
pub mod domain;
pub mod facet;
pub mod item;
