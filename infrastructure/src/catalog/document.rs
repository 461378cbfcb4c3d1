//! TOML catalog document shape

use bigfive_application::CatalogSourceError;
use bigfive_domain::RawItem;
use serde::Deserialize;

/// The TOML shape shared by every catalog source:
///
/// ```toml
/// [[item]]
/// number = 1
/// text = "Is outgoing, sociable."
/// domain = "Extraversion"
/// facet = "Sociability"
/// reverse = false
/// ```
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub item: Vec<RawItem>,
}

impl CatalogDocument {
    /// Parse a TOML document into raw item records, preserving order
    pub fn parse(text: &str) -> Result<Vec<RawItem>, CatalogSourceError> {
        toml::from_str::<CatalogDocument>(text)
            .map(|document| document.item)
            .map_err(|e| CatalogSourceError::Parse(e.to_string()))
    }
}
