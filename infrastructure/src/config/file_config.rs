//! Configuration file schema

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration file shape (`bigfive.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// `[catalog]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileCatalogConfig {
    /// Path to an alternate item set; the embedded BFI-2 set when unset
    pub path: Option<PathBuf>,
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileOutputConfig {
    /// Score printout format used after the questionnaire finishes
    #[serde(default)]
    pub format: FileOutputFormat,
}

/// Score printout format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Domains with their facets
    #[default]
    Full,
    /// Domain averages only
    Domains,
    /// Machine-readable JSON
    Json,
}
