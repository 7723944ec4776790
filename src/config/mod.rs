//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Registry-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Seconds a cached merchant view stays valid after its last write.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Categories a merchant may belong to, matched case-insensitively.
    #[serde(default = "default_allowed_categories")]
    pub allowed_categories: Vec<String>,
}

fn default_cache_ttl_secs() -> u64 {
    120
}

fn default_allowed_categories() -> Vec<String> {
    crate::core::merchant::ALLOWED_CATEGORIES
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl_secs(),
            allowed_categories: default_allowed_categories(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// The cache time-to-live as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
