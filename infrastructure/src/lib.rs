//! Infrastructure layer for bigfive
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: catalog sources (embedded and file-based) and
//! configuration file loading.

pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use catalog::{
    document::CatalogDocument, embedded::EmbeddedCatalogSource, file::TomlCatalogSource,
};
pub use config::{
    file_config::{FileCatalogConfig, FileConfig, FileOutputConfig, FileOutputFormat},
    loader::ConfigLoader,
};
