//! Catalog source adapters
//!
//! Both sources speak the same TOML shape ([`document::CatalogDocument`]);
//! one is compiled into the binary, the other reads a user-supplied path.

pub mod document;
pub mod embedded;
pub mod file;
