//! File-based catalog source

use super::document::CatalogDocument;
use bigfive_application::{CatalogSource, CatalogSourceError};
use bigfive_domain::RawItem;
use std::fs;
use std::path::PathBuf;

/// Catalog source reading a TOML item file from disk.
///
/// Used for alternate item sets via `--catalog` or the config file.
#[derive(Debug)]
pub struct TomlCatalogSource {
    path: PathBuf,
}

impl TomlCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for TomlCatalogSource {
    fn load(&self) -> Result<Vec<RawItem>, CatalogSourceError> {
        let text = fs::read_to_string(&self.path)?;
        CatalogDocument::parse(&text)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}
