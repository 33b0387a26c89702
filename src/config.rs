use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Contributor names skipped during dispatch
    #[serde(default)]
    pub disabled_contributors: Vec<String>,
    /// Base URL used when seeding feed item defaults
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disabled_contributors: Vec::new(),
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost".to_string()
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file is missing or unreadable
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config from {:?}: {}", path, e);
                log::warn!("Using default configuration");
                Self::default()
            }
        }
    }

    /// Whether a contributor name is disabled by configuration
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled_contributors.iter().any(|n| n == name)
    }
}
