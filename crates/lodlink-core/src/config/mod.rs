//! Configuration management for lodlink.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `lodlink.toml` file
//! 3. User config `~/.config/lodlink/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External catalog endpoints and timeouts.
    pub catalog: CatalogConfig,

    /// Politeness delays between outbound requests.
    pub politeness: PolitenessConfig,

    /// Name-variant generation data.
    pub variants: VariantConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            politeness: PolitenessConfig::default(),
            variants: VariantConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./lodlink.toml` (project local)
    /// 2. `~/.config/lodlink/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        // Try project-local config first
        if Path::new("lodlink.toml").exists() {
            return Self::from_file("lodlink.toml");
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("lodlink").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Use defaults
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        // Catalog overrides
        if let Ok(url) = std::env::var("LODLINK_CATALOG_BASE_URL") {
            self.catalog.base_url = url;
        }
        if let Ok(url) = std::env::var("LODLINK_SPARQL_ENDPOINT") {
            self.catalog.sparql_endpoint = url;
        }

        // Politeness overrides
        if let Ok(ms) = std::env::var("LODLINK_ENTITY_DELAY_MS") {
            if let Ok(n) = ms.parse() {
                self.politeness.entity_delay_ms = n;
            }
        }
        if let Ok(ms) = std::env::var("LODLINK_LOOKUP_DELAY_MS") {
            if let Ok(n) = ms.parse() {
                self.politeness.lookup_delay_ms = n;
            }
        }
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// External catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the primary catalog (resource and data documents live
    /// under `/resource/` and `/data/`).
    pub base_url: String,

    /// SPARQL endpoint of the primary catalog.
    pub sparql_endpoint: String,

    /// Namespace prefix identifying secondary-store URIs.
    pub secondary_namespace: String,

    /// Timeout for existence probes (seconds).
    pub probe_timeout_secs: u64,

    /// Timeout for SPARQL queries (seconds).
    pub query_timeout_secs: u64,

    /// Timeout for data-document fetches (seconds).
    pub document_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            sparql_endpoint: DEFAULT_SPARQL_ENDPOINT.to_string(),
            secondary_namespace: DEFAULT_SECONDARY_NAMESPACE.to_string(),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
            document_timeout_secs: DEFAULT_DOCUMENT_TIMEOUT_SECS,
        }
    }
}

impl CatalogConfig {
    /// Namespace prefix under which primary-catalog resources live.
    pub fn primary_namespace(&self) -> String {
        format!("{}/resource/", self.base_url.trim_end_matches('/'))
    }
}

/// Politeness configuration.
///
/// The target services are shared, rate-limited public endpoints; these
/// delays keep the aggregate request rate low and predictable. Zero
/// disables a delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolitenessConfig {
    /// Delay after each processed entity (milliseconds).
    pub entity_delay_ms: u64,

    /// Delay after each secondary-store lookup (milliseconds).
    pub lookup_delay_ms: u64,
}

impl Default for PolitenessConfig {
    fn default() -> Self {
        Self {
            entity_delay_ms: DEFAULT_ENTITY_DELAY_MS,
            lookup_delay_ms: DEFAULT_LOOKUP_DELAY_MS,
        }
    }
}

/// Name-variant generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Institutional abbreviations mapped to full catalog resource names.
    /// Keys are organization names with all whitespace removed.
    pub abbreviations: BTreeMap<String, Vec<String>>,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            abbreviations: default_abbreviations(),
        }
    }
}
