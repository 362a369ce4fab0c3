//! Session configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tagraph_algebra::GraphName;

use crate::error::ConfigError;

// --- Constants for Default Configuration ---
pub const DEFAULT_BASE_GRAPH_NAME: &str = "base";
pub const DEFAULT_MEMBERSHIP_KEY: &str = "graph_membership";
pub const DEFAULT_GRAPH_NAME_PREFIX: &str = "graph_";

/// Configuration of one session.
///
/// Every field is optional in TOML; missing fields take the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name standing for every ingested element.
    pub base_graph_name: String,
    /// Edge property holding the membership list.
    pub membership_key: String,
    /// Prefix of allocated storage names. Sessions sharing a store should
    /// use distinct prefixes.
    pub graph_name_prefix: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_graph_name: DEFAULT_BASE_GRAPH_NAME.to_string(),
            membership_key: DEFAULT_MEMBERSHIP_KEY.to_string(),
            graph_name_prefix: DEFAULT_GRAPH_NAME_PREFIX.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_graph_name(mut self, name: impl Into<String>) -> Self {
        self.base_graph_name = name.into();
        self
    }

    pub fn with_membership_key(mut self, key: impl Into<String>) -> Self {
        self.membership_key = key.into();
        self
    }

    pub fn with_graph_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.graph_name_prefix = prefix.into();
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// Check that the names are usable as graph names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        GraphName::new(self.base_graph_name.as_str())
            .map_err(|err| ConfigError::invalid("base_graph_name", err.to_string()))?;
        GraphName::new(format!("{}1", self.graph_name_prefix))
            .map_err(|err| ConfigError::invalid("graph_name_prefix", err.to_string()))?;
        if self.membership_key.trim().is_empty() {
            return Err(ConfigError::invalid("membership_key", "key is empty"));
        }
        Ok(())
    }
}
