//! Catalog source port

use bigfive_domain::RawItem;
use thiserror::Error;

/// Errors a catalog source can produce while fetching raw records.
///
/// Label resolution is not the source's job — unknown categories are
/// caught later, when the domain builds the catalog.
#[derive(Error, Debug)]
pub enum CatalogSourceError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(String),
}

/// Supplies the ordered raw item records the catalog is built from.
///
/// Implementations: the embedded stock item set, or a TOML file on disk.
pub trait CatalogSource {
    /// Fetch the raw records, in catalog order
    fn load(&self) -> Result<Vec<RawItem>, CatalogSourceError>;

    /// Human-readable origin, for logging
    fn origin(&self) -> String;
}
