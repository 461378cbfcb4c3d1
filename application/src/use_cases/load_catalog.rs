//! Load Catalog use case
//!
//! Pulls raw item records from a [`CatalogSource`] and normalizes them
//! into a validated [`Catalog`]. Runs once at startup; any failure here
//! is a configuration defect and aborts initialization.

use crate::ports::catalog_source::{CatalogSource, CatalogSourceError};
use bigfive_domain::{Catalog, CatalogError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading the catalog
#[derive(Error, Debug)]
pub enum LoadCatalogError {
    /// The source could not produce raw records (I/O, parse)
    #[error(transparent)]
    Source(#[from] CatalogSourceError),

    /// The records themselves are defective (unknown label, duplicate number)
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Use case for loading and validating the item catalog
pub struct LoadCatalogUseCase<S: CatalogSource> {
    source: S,
}

impl<S: CatalogSource> LoadCatalogUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Execute the use case
    pub fn execute(&self) -> Result<Catalog, LoadCatalogError> {
        debug!("loading item catalog from {}", self.source.origin());
        let raw = self.source.load()?;
        let catalog = Catalog::from_raw(raw)?;
        info!(
            items = catalog.len(),
            source = %self.source.origin(),
            "item catalog loaded"
        );
        Ok(catalog)
    }
}
