//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use std::path::PathBuf;
use tracing::debug;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./bigfive.toml` or `./.bigfive.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/bigfive/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!("merging global config from {}", global_path.display());
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &["bigfive.toml", ".bigfive.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                debug!("merging project config from {}", path.display());
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("bigfive").join("config.toml"))
    }
}
