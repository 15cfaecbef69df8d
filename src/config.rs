//! Configuration for the assignment engine
//!
//! Loaded from a TOML file with serde defaults; the bearer token is resolved
//! from an environment variable at call time, never stored in the file.

use crate::workload::WorkloadPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use url::Url;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalConfig {
    pub backend: BackendSection,
    #[serde(default)]
    pub assignment: AssignmentSection,
}

/// Case-backend collaborator settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendSection {
    /// Base URL of the portal REST API (http or https)
    pub base_url: String,
    /// Per-request timeout; the engine itself never retries
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

/// Assignment policy knobs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentSection {
    /// Maximum concurrent active cases per agent
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u32,
    /// Utilization percentage at which an available agent is labeled Limited
    #[serde(default = "default_limited_utilization_pct")]
    pub limited_utilization_pct: f64,
}

impl Default for AssignmentSection {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            limited_utilization_pct: default_limited_utilization_pct(),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_token_env() -> String {
    "CASEROUTE_TOKEN".to_string()
}

fn default_max_capacity() -> u32 {
    20
}

fn default_limited_utilization_pct() -> f64 {
    80.0
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PortalConfig {
    /// Load and validate configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: PortalConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.backend.base_url).map_err(|e| {
            ConfigError::InvalidConfig(format!(
                "backend.base_url '{}' is not a valid URL: {e}",
                self.backend.base_url
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidConfig(format!(
                "backend.base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.assignment.max_capacity == 0 {
            return Err(ConfigError::InvalidConfig(
                "assignment.max_capacity must be at least 1".to_string(),
            ));
        }

        let pct = self.assignment.limited_utilization_pct;
        if !(pct > 0.0 && pct <= 200.0) {
            return Err(ConfigError::InvalidConfig(format!(
                "assignment.limited_utilization_pct must be in (0, 200], got {pct}"
            )));
        }

        Ok(())
    }

    /// Resolve the bearer token from the configured environment variable
    pub fn access_token(&self) -> Result<String, ConfigError> {
        std::env::var(&self.backend.token_env)
            .map_err(|_| ConfigError::EnvVarNotFound(self.backend.token_env.clone()))
    }

    /// Workload policy derived from the assignment section
    pub fn workload_policy(&self) -> WorkloadPolicy {
        WorkloadPolicy {
            max_capacity: self.assignment.max_capacity,
            limited_utilization_pct: self.assignment.limited_utilization_pct,
        }
    }

    /// Create a test configuration for unit testing
    #[cfg(test)]
    pub fn test_config() -> Self {
        let toml_content = r#"
[backend]
base_url = "http://localhost:8080/api"

[assignment]
max_capacity = 20
limited_utilization_pct = 80.0
"#;
        toml::from_str(toml_content).expect("Test config should parse")
    }
}
