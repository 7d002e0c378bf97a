//! Configuration management for triaged.
//!
//! Loads settings from /etc/triage/config.toml or uses defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use triage_common::{
    builtin_phrases, load_phrase_file, IntentCatalog, Language, PhraseEntry, CONFIG_PATH,
    DEFAULT_BIND_ADDR,
};

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Intent catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Language used to stem phrases and messages
    #[serde(default)]
    pub language: Language,

    /// TOML phrase file replacing the built-in symptom list
    #[serde(default)]
    pub phrases_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Phrase entries to build the catalog from
    pub fn phrases(&self) -> Result<Vec<PhraseEntry>> {
        match &self.phrases_path {
            Some(path) => Ok(load_phrase_file(path)?),
            None => Ok(builtin_phrases()),
        }
    }

    /// Build the catalog. Errors here must stop the daemon before it binds.
    pub fn build_catalog(&self) -> Result<IntentCatalog> {
        info!("Building intent catalog (language: {})", self.language);
        let phrases = self.phrases()?;
        Ok(IntentCatalog::load(phrases)?)
    }
}

/// Full daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load config from an explicit path, else CONFIG_PATH if present, else defaults.
    ///
    /// An explicit path that cannot be read or parsed is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None if Path::new(CONFIG_PATH).exists() => Self::load_from_path(Path::new(CONFIG_PATH)),
            None => {
                warn!("Config not found at {}, using defaults", CONFIG_PATH);
                Ok(Self::default())
            }
        }
    }

    /// Load config from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
