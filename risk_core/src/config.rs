//! # Client Configuration
//!
//! Where the calculation service lives and how long to wait for it.
//!
//! Layering, lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. Optional JSON file (missing fields fall back to defaults)
//! 3. Environment: `HEREDITY_SERVICE_URL`, `HEREDITY_TIMEOUT_SECS`
//! 4. Front-end flags (applied by the caller)
//!
//! ## Example
//!
//! ```json
//! { "base_url": "http://risk.example.org", "timeout_secs": 8 }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{RiskError, RiskResult};

/// Environment variable overriding [`ClientConfig::base_url`]
pub const ENV_SERVICE_URL: &str = "HEREDITY_SERVICE_URL";
/// Environment variable overriding [`ClientConfig::timeout_secs`]
pub const ENV_TIMEOUT_SECS: &str = "HEREDITY_TIMEOUT_SECS";

/// Settings for talking to the calculation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service root; endpoint paths are appended to it
    pub base_url: String,

    /// Whole-request timeout; expiry is reported as a connection failure
    pub timeout_secs: u64,

    /// Label shown on a submit control while its call is in flight
    pub busy_label: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 5,
            busy_label: "Calculating...".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load from a JSON file
    pub fn from_file(path: &Path) -> RiskResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| RiskError::config(path.display().to_string(), e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| RiskError::config(path.display().to_string(), e.to_string()))
    }

    /// Defaults, then `path` if given, then the process environment
    pub fn load(path: Option<&Path>) -> RiskResult<Self> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// An unparsable timeout is ignored with a warning.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_SERVICE_URL).filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "ignoring invalid {}", ENV_TIMEOUT_SECS),
            }
        }
        self
    }

    /// Timeout as a Duration (never zero)
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Full URL for an endpoint path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
